mod queries_tests;

use crate::record::LogRecord;

pub(crate) fn rec(ip: &str, ts: &str, url: &str, status: u16, ua: &str) -> LogRecord {
    LogRecord {
        ip: ip.to_string(),
        timestamp: ts.to_string(),
        url: url.to_string(),
        status,
        user_agent: ua.to_string(),
    }
}
