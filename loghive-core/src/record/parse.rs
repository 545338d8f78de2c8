use crate::record::error::ParseError;
use crate::record::types::LogRecord;

/// Parse one raw log line into a [`LogRecord`].
///
/// The line is split on `delimiter` without any quoting rules, the same way
/// a plain delimited text table is read. Surrounding whitespace is trimmed
/// from every field.
pub fn parse_line(raw: &str, line: u64, delimiter: char) -> Result<LogRecord, ParseError> {
    let fields: Vec<&str> = raw.split(delimiter).map(str::trim).collect();

    let [ip, timestamp, url, status, user_agent] = fields.as_slice() else {
        return Err(ParseError::field_count(fields.len(), line, raw));
    };

    let Ok(status) = status.parse::<u16>() else {
        return Err(ParseError::bad_status(line, raw));
    };

    Ok(LogRecord {
        ip: ip.to_string(),
        timestamp: timestamp.to_string(),
        url: url.to_string(),
        status,
        user_agent: user_agent.to_string(),
    })
}
