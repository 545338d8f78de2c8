use std::borrow::Cow;

/// Quote a field if it contains the delimiter, a quote or a line break.
pub fn escape_field(field: &str, delimiter: char) -> Cow<'_, str> {
    let needs_quotes = field
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r');

    if needs_quotes {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Render an optional header and the rows as delimited text, one line each.
pub fn encode_table<S, R>(header: Option<&[&str]>, rows: &[R], delimiter: char) -> String
where
    S: AsRef<str>,
    R: AsRef<[S]>,
{
    let mut out = String::new();

    if let Some(columns) = header {
        push_line(&mut out, columns.iter().copied(), delimiter);
    }
    for row in rows {
        push_line(&mut out, row.as_ref().iter().map(as_str), delimiter);
    }

    out
}

fn as_str<S: AsRef<str>>(s: &S) -> &str {
    s.as_ref()
}

fn push_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>, delimiter: char) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(&escape_field(field, delimiter));
    }
    out.push('\n');
}
