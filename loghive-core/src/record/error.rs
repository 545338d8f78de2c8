use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseErrorKind {
    FieldCountMismatch { found: usize },
    BadStatus,
    InvalidUtf8,
}

/// A malformed input line. Recovered by the pipeline: logged, counted and
/// excluded from every analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("line {line}: {}: {raw:?}", describe(.kind))]
pub struct ParseError {
    #[serde(flatten)]
    pub kind: ParseErrorKind,
    /// 1-based physical line number within the source file.
    pub line: u64,
    pub raw: String,
}

fn describe(kind: &ParseErrorKind) -> String {
    match kind {
        ParseErrorKind::FieldCountMismatch { found } => {
            format!("expected 5 fields, found {found}")
        }
        ParseErrorKind::BadStatus => "status is not a valid integer".to_string(),
        ParseErrorKind::InvalidUtf8 => "line is not valid UTF-8".to_string(),
    }
}

impl ParseError {
    pub fn field_count(found: usize, line: u64, raw: impl Into<String>) -> Self {
        Self {
            kind: ParseErrorKind::FieldCountMismatch { found },
            line,
            raw: raw.into(),
        }
    }

    pub fn bad_status(line: u64, raw: impl Into<String>) -> Self {
        Self {
            kind: ParseErrorKind::BadStatus,
            line,
            raw: raw.into(),
        }
    }
}
