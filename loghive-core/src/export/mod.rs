//! Exporter
//!
//! Writes each analysis result and each partition to its own delimited text
//! file under the output directory. File names derive from the query or
//! partition name (`status_histogram.csv`, `partition_404.csv`), and every
//! write replaces the previous artifact atomically.

mod error;
mod format;
mod writer;

#[cfg(test)]
mod tests;

pub use error::ExportError;
pub use format::{encode_table, escape_field};
pub use writer::write_atomic;

use crate::analysis::{AggregationResult, Query};
use crate::partition::Partition;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const RECORD_COLUMNS: [&str; 5] = ["ip", "timestamp", "url", "status", "user_agent"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub delimiter: char,
    /// Write a column header as the first line.
    pub header: bool,
    pub extension: String,
}

impl ExportOptions {
    /// Options with the extension picked from the delimiter.
    pub fn new(dir: impl Into<PathBuf>, delimiter: char) -> Self {
        Self {
            dir: dir.into(),
            delimiter,
            header: true,
            extension: default_extension(delimiter).to_string(),
        }
    }
}

pub fn default_extension(delimiter: char) -> &'static str {
    match delimiter {
        ',' => "csv",
        '\t' => "tsv",
        _ => "txt",
    }
}

/// A written output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub name: String,
    pub path: PathBuf,
    /// Data rows, excluding the header.
    pub rows: usize,
}

pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.options
            .dir
            .join(format!("{name}.{}", self.options.extension))
    }

    pub fn export_result(
        &self,
        query: Query,
        result: &AggregationResult,
    ) -> Result<Artifact, ExportError> {
        let rows = result.rows();
        self.write(query.name(), query.columns(), &rows)
    }

    pub fn export_partition(&self, partition: &Partition) -> Result<Artifact, ExportError> {
        let rows: Vec<_> = partition.records.iter().map(|r| r.fields()).collect();
        self.write(&partition.artifact_name(), &RECORD_COLUMNS, &rows)
    }

    fn write<S: AsRef<str>, R: AsRef<[S]>>(
        &self,
        name: &str,
        columns: &[&str],
        rows: &[R],
    ) -> Result<Artifact, ExportError> {
        let header = self.options.header.then_some(columns);
        let body = encode_table(header, rows, self.options.delimiter);

        writer::ensure_dir(&self.options.dir)?;
        let path = self.path_for(name);
        write_atomic(&path, body.as_bytes())?;

        debug!(artifact = name, path = %path.display(), rows = rows.len(), "artifact written");

        Ok(Artifact {
            name: name.to_string(),
            path,
            rows: rows.len(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.options.dir
    }
}
