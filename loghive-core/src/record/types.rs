use serde::Serialize;

/// Number of fields in a well-formed log line.
pub const FIELD_COUNT: usize = 5;

/// One web server log entry.
///
/// Field order matches the input layout: `ip, timestamp, url, status, user_agent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub ip: String,
    /// Fixed-width, lexically sortable date-time (e.g. `2024-03-01 10:15:32`).
    pub timestamp: String,
    pub url: String,
    pub status: u16,
    pub user_agent: String,
}

impl LogRecord {
    /// Fields in input order, as written back out by the exporter.
    pub fn fields(&self) -> [String; FIELD_COUNT] {
        [
            self.ip.clone(),
            self.timestamp.clone(),
            self.url.clone(),
            self.status.to_string(),
            self.user_agent.clone(),
        ]
    }
}

/// Line accounting for one input source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadStats {
    /// Physical lines consumed, including blank and header lines.
    pub lines_read: u64,
    pub blank_lines: u64,
    pub header_lines: u64,
}

impl ReadStats {
    pub fn merge(&mut self, other: ReadStats) {
        self.lines_read += other.lines_read;
        self.blank_lines += other.blank_lines;
        self.header_lines += other.header_lines;
    }
}
