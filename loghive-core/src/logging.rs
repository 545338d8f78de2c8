use clap::ValueEnum;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Selects the log line format. Unset means compact text on a terminal and
/// JSON otherwise.
pub const LOG_FORMAT_ENV: &str = "LOGHIVE_LOG_FORMAT";

/// Initialize the logging system with environment-based filtering.
///
/// - Filtering comes from `RUST_LOG` (defaults to "info" if not set)
/// - Logs go to stderr so stdout stays free for job output
/// - JSON output flattens event fields for cleaner log lines
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match log_format() {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().with_target(false).init(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "compact" | "text" => Some(Self::Compact),
            _ => None,
        }
    }
}

fn log_format() -> LogFormat {
    std::env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|v| LogFormat::parse(&v))
        .unwrap_or_else(|| {
            if io::stderr().is_terminal() {
                LogFormat::Compact
            } else {
                LogFormat::Json
            }
        })
}

/// How the job summary is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Pretty,
    Plain,
    Json,
}

pub fn default_summary_format() -> SummaryFormat {
    if io::stdout().is_terminal() {
        SummaryFormat::Pretty
    } else {
        SummaryFormat::Plain
    }
}
