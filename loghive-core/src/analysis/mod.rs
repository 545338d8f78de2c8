//! Aggregation Engine
//!
//! One function per analysis. Each takes the valid records (borrowed, so the
//! same materialized batch can feed all of them) and returns the matching
//! [`AggregationResult`] variant.
//!
//! Empty input is not an error: it yields a zero total and empty tables.

mod error;
mod queries;
mod run;
mod status_class;
mod tally;
mod types;

#[cfg(test)]
mod tests;

pub use error::AnalysisError;
pub use queries::{
    minute_bucket, status_histogram, suspicious_ips, top_entities, top_urls, top_user_agents,
    total_requests, traffic_trend,
};
pub use run::{run_all, run_query};
pub use status_class::StatusClassCounts;
pub use tally::rank_by_count;
pub use types::{AggregationResult, AnalysisParams, Query, SuspiciousParams};
