use crate::record::error::{ParseError, ParseErrorKind};
use crate::record::parse::parse_line;
use crate::record::types::{LogRecord, ReadStats};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    pub delimiter: char,
    pub skip_header: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_header: false,
        }
    }
}

/// Lazy sequence of parsed lines over one input source.
///
/// Blank lines and the optional header are consumed silently and only show
/// up in [`ReadStats`]. Reading stops at the first I/O failure, which is kept
/// for the caller to collect with [`RecordReader::take_io_error`].
pub struct RecordReader<R> {
    source: R,
    options: ReaderOptions,
    stats: ReadStats,
    buf: Vec<u8>,
    io_error: Option<io::Error>,
    done: bool,
}

impl RecordReader<BufReader<File>> {
    /// Open a file for reading. Re-opening restarts the sequence.
    pub fn open(path: &Path, options: ReaderOptions) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), options))
    }
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(source: R, options: ReaderOptions) -> Self {
        Self {
            source,
            options,
            stats: ReadStats::default(),
            buf: Vec::new(),
            io_error: None,
            done: false,
        }
    }

    pub fn stats(&self) -> ReadStats {
        self.stats
    }

    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    fn next_line(&mut self) -> Option<Vec<u8>> {
        self.buf.clear();
        match self.source.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.stats.lines_read += 1;
                let mut line = std::mem::take(&mut self.buf);
                if line.last() == Some(&b'\n') {
                    line.pop();
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(e) => {
                self.io_error = Some(e);
                None
            }
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<LogRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let Some(bytes) = self.next_line() else {
                self.done = true;
                break;
            };
            let line_no = self.stats.lines_read;

            if line_no == 1 && self.options.skip_header {
                self.stats.header_lines += 1;
                continue;
            }

            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    return Some(Err(ParseError {
                        kind: ParseErrorKind::InvalidUtf8,
                        line: line_no,
                        raw: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                    }));
                }
            };

            if line.trim().is_empty() {
                self.stats.blank_lines += 1;
                continue;
            }

            return Some(parse_line(&line, line_no, self.options.delimiter));
        }

        None
    }
}
