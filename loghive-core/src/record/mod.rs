//! Record Parser
//!
//! Turns raw delimited log lines into [`LogRecord`]s. Every line is parsed
//! on its own; a malformed line becomes a [`ParseError`] value and never
//! interrupts the rest of the batch.
//!
//! ```text
//! input file
//! RecordReader (lazy, one line at a time)
//! parse_line
//! Result<LogRecord, ParseError>
//! ```

mod error;
mod parse;
mod reader;
mod types;


pub use error::{ParseError, ParseErrorKind};
pub use parse::parse_line;
pub use reader::{ReaderOptions, RecordReader};
pub use types::{FIELD_COUNT, LogRecord, ReadStats};
