use crate::analysis::{AggregationResult, Query, StatusClassCounts};
use crate::export::Artifact;
use crate::record::ParseError;
use serde::Serialize;
use std::path::PathBuf;

/// A parse error together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedParseError {
    pub file: PathBuf,
    #[serde(flatten)]
    pub error: ParseError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub query: Query,
    pub result: AggregationResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartitionReport {
    pub status: u16,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedArtifact {
    pub name: String,
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobOutcome {
    Success,
    /// At least one artifact could not be written.
    PartialFailure,
}

impl JobOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            JobOutcome::Success => 0,
            JobOutcome::PartialFailure => 2,
        }
    }
}

/// What a job read, computed and wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobSummary {
    pub inputs: Vec<PathBuf>,
    pub lines_read: u64,
    pub blank_lines: u64,
    pub header_lines: u64,
    pub valid_records: u64,
    pub parse_error_count: u64,
    /// The first parse errors, up to the configured limit.
    pub parse_errors: Vec<ReportedParseError>,
    pub status_classes: StatusClassCounts,
    pub results: Vec<QueryReport>,
    pub partitions: Vec<PartitionReport>,
    pub artifacts: Vec<Artifact>,
    pub failed_artifacts: Vec<FailedArtifact>,
}

impl JobSummary {
    pub fn outcome(&self) -> JobOutcome {
        if self.failed_artifacts.is_empty() {
            JobOutcome::Success
        } else {
            JobOutcome::PartialFailure
        }
    }

    pub fn result(&self, query: Query) -> Option<&AggregationResult> {
        self.results
            .iter()
            .find(|r| r.query == query)
            .map(|r| &r.result)
    }
}
