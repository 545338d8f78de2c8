use crate::analysis::error::AnalysisError;
use crate::analysis::queries::{
    status_histogram, suspicious_ips, top_urls, top_user_agents, total_requests, traffic_trend,
};
use crate::analysis::types::{AggregationResult, AnalysisParams, Query};
use crate::record::LogRecord;
use std::thread;

/// Run a single analysis over the valid records.
pub fn run_query(
    query: Query,
    records: &[LogRecord],
    params: &AnalysisParams,
) -> Result<AggregationResult, AnalysisError> {
    match query {
        Query::TotalRequests => Ok(total_requests(records)),
        Query::StatusHistogram => Ok(status_histogram(records)),
        Query::TopUrls => top_urls(records, params.top_n),
        Query::TopUserAgents => top_user_agents(records, params.top_n),
        Query::SuspiciousIps => Ok(suspicious_ips(records, &params.suspicious)),
        Query::TrafficTrend => traffic_trend(records, params.timestamp_truncate_len),
    }
}

/// Run every analysis, in [`Query::ALL`] order.
///
/// With `parallel` set, each analysis runs on its own scoped thread. They
/// all borrow the same slice and none of them mutates shared state.
pub fn run_all(
    records: &[LogRecord],
    params: &AnalysisParams,
    parallel: bool,
) -> Result<Vec<(Query, AggregationResult)>, AnalysisError> {
    if !parallel {
        return Query::ALL
            .into_iter()
            .map(|q| run_query(q, records, params).map(|r| (q, r)))
            .collect();
    }

    thread::scope(|scope| {
        let handles: Vec<_> = Query::ALL
            .into_iter()
            .map(|q| scope.spawn(move || run_query(q, records, params).map(|r| (q, r))))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}
