use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// The six fixed analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Query {
    TotalRequests,
    StatusHistogram,
    TopUrls,
    TopUserAgents,
    SuspiciousIps,
    TrafficTrend,
}

impl Query {
    pub const ALL: [Query; 6] = [
        Query::TotalRequests,
        Query::StatusHistogram,
        Query::TopUrls,
        Query::TopUserAgents,
        Query::SuspiciousIps,
        Query::TrafficTrend,
    ];

    /// Stable artifact name, used as the export file stem.
    pub fn name(self) -> &'static str {
        match self {
            Query::TotalRequests => "total_requests",
            Query::StatusHistogram => "status_histogram",
            Query::TopUrls => "top_urls",
            Query::TopUserAgents => "top_user_agents",
            Query::SuspiciousIps => "suspicious_ips",
            Query::TrafficTrend => "traffic_trend",
        }
    }

    /// Column header written above the result rows.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Query::TotalRequests => &["total_requests"],
            Query::StatusHistogram => &["status", "count"],
            Query::TopUrls => &["url", "count"],
            Query::TopUserAgents => &["user_agent", "count"],
            Query::SuspiciousIps => &["ip", "failed_requests"],
            Query::TrafficTrend => &["minute", "requests"],
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one analysis. Counts are never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum AggregationResult {
    TotalCount(u64),
    /// status -> count, ascending by status.
    StatusHistogram(BTreeMap<u16, u64>),
    /// (key, count), descending by count, ties in first-seen order.
    TopEntities(Vec<(String, u64)>),
    /// (ip, failed_count), only entries above the threshold, ranked like top-N.
    SuspiciousIps(Vec<(String, u64)>),
    /// (minute_bucket, count), ascending by bucket.
    TrafficTrend(Vec<(String, u64)>),
}

impl AggregationResult {
    /// Result rows as text fields, in output order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        match self {
            AggregationResult::TotalCount(n) => vec![vec![n.to_string()]],
            AggregationResult::StatusHistogram(hist) => hist
                .iter()
                .map(|(status, count)| vec![status.to_string(), count.to_string()])
                .collect(),
            AggregationResult::TopEntities(pairs)
            | AggregationResult::SuspiciousIps(pairs)
            | AggregationResult::TrafficTrend(pairs) => pairs
                .iter()
                .map(|(key, count)| vec![key.clone(), count.to_string()])
                .collect(),
        }
    }

    /// Number of rows this result exports.
    pub fn len(&self) -> usize {
        match self {
            AggregationResult::TotalCount(_) => 1,
            AggregationResult::StatusHistogram(hist) => hist.len(),
            AggregationResult::TopEntities(pairs)
            | AggregationResult::SuspiciousIps(pairs)
            | AggregationResult::TrafficTrend(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parameters for suspicious-IP detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuspiciousParams {
    /// Statuses counted as failed requests.
    pub failure_statuses: Vec<u16>,
    /// An IP is reported when its failure count is strictly greater than this.
    pub threshold: u64,
}

impl Default for SuspiciousParams {
    fn default() -> Self {
        Self {
            failure_statuses: vec![404, 500],
            threshold: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisParams {
    pub top_n: usize,
    pub suspicious: SuspiciousParams,
    pub timestamp_truncate_len: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            top_n: 3,
            suspicious: SuspiciousParams::default(),
            timestamp_truncate_len: 16,
        }
    }
}
