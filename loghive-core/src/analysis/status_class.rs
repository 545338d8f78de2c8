use crate::record::LogRecord;
use serde::Serialize;
use std::fmt;

/// Requests bucketed by status class, as shown in the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusClassCounts {
    pub informational: u64,
    pub success: u64,
    pub redirect: u64,
    pub client_error: u64,
    pub server_error: u64,
    pub other: u64,
}

impl StatusClassCounts {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LogRecord>,
    {
        let mut counts = Self::default();
        for record in records {
            counts.push(record.status);
        }
        counts
    }

    pub fn push(&mut self, status: u16) {
        match status {
            100..=199 => self.informational += 1,
            200..=299 => self.success += 1,
            300..=399 => self.redirect += 1,
            400..=499 => self.client_error += 1,
            500..=599 => self.server_error += 1,
            _ => self.other += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.informational
            + self.success
            + self.redirect
            + self.client_error
            + self.server_error
            + self.other
    }
}

impl fmt::Display for StatusClassCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "1xx={} 2xx={} 3xx={} 4xx={} 5xx={}",
            self.informational, self.success, self.redirect, self.client_error, self.server_error
        )?;
        if self.other > 0 {
            write!(f, " other={}", self.other)?;
        }
        Ok(())
    }
}
