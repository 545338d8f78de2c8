//! Pipeline Driver
//!
//! The only component that knows about all the others:
//!
//! ```text
//! input file(s)
//! RecordReader            -> ParseError (logged, counted)
//! Vec<LogRecord>
//! run_all                 -> AggregationResult per query
//! partition_by_status     -> Partition per status
//! Exporter                -> one artifact each
//! JobSummary
//! ```
//!
//! Configuration errors and unreadable inputs abort the job. Anything that
//! goes wrong while exporting only affects that one artifact and is reported
//! in the summary.

mod error;
mod inputs;
mod render;
mod run;
mod summary;


pub use error::PipelineError;
pub use inputs::discover_inputs;
pub use render::{render_json, render_plain, render_pretty, table_with_delimiter};
pub use run::{Ingested, ingest, run_job, run_single_query};
pub use summary::{
    FailedArtifact, JobOutcome, JobSummary, PartitionReport, QueryReport, ReportedParseError,
};
