use crate::analysis::error::AnalysisError;
use crate::analysis::tally::rank_by_count;
use crate::analysis::types::{AggregationResult, SuspiciousParams};
use crate::record::LogRecord;
use std::collections::BTreeMap;

/// Count of valid records.
pub fn total_requests<'a, I>(records: I) -> AggregationResult
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    AggregationResult::TotalCount(records.into_iter().count() as u64)
}

/// Requests per status code.
pub fn status_histogram<'a, I>(records: I) -> AggregationResult
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut hist = BTreeMap::new();
    for record in records {
        *hist.entry(record.status).or_insert(0) += 1;
    }
    AggregationResult::StatusHistogram(hist)
}

/// The `n` most requested URLs.
pub fn top_urls<'a, I>(records: I, n: usize) -> Result<AggregationResult, AnalysisError>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    top_entities(records, n, |r| r.url.as_str())
}

/// The `n` most common user agents.
pub fn top_user_agents<'a, I>(records: I, n: usize) -> Result<AggregationResult, AnalysisError>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    top_entities(records, n, |r| r.user_agent.as_str())
}

/// Group by `key`, count, rank descending and keep `n`.
///
/// Equal counts keep the order in which their keys first appeared.
pub fn top_entities<'a, I, F>(
    records: I,
    n: usize,
    key: F,
) -> Result<AggregationResult, AnalysisError>
where
    I: IntoIterator<Item = &'a LogRecord>,
    F: Fn(&'a LogRecord) -> &'a str,
{
    if n == 0 {
        return Err(AnalysisError::invalid("top_n", "must be greater than zero"));
    }
    let ranked = rank_by_count(records.into_iter().map(key), n);
    Ok(AggregationResult::TopEntities(ranked))
}

/// IPs whose failed-request count is strictly greater than the threshold.
pub fn suspicious_ips<'a, I>(records: I, params: &SuspiciousParams) -> AggregationResult
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let failed = records
        .into_iter()
        .filter(|r| params.failure_statuses.contains(&r.status))
        .map(|r| r.ip.as_str());

    let flagged = rank_by_count(failed, usize::MAX)
        .into_iter()
        .filter(|(_, count)| *count > params.threshold)
        .collect();

    AggregationResult::SuspiciousIps(flagged)
}

/// Requests per minute bucket.
///
/// The bucket is the first `truncate_len` characters of the timestamp, so
/// the input format must be fixed-width and lexically ordered for the
/// ascending bucket order to be chronological.
pub fn traffic_trend<'a, I>(
    records: I,
    truncate_len: usize,
) -> Result<AggregationResult, AnalysisError>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    if truncate_len == 0 {
        return Err(AnalysisError::invalid(
            "timestamp_truncate_len",
            "must be greater than zero",
        ));
    }

    let mut buckets: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        *buckets
            .entry(minute_bucket(&record.timestamp, truncate_len))
            .or_insert(0) += 1;
    }

    Ok(AggregationResult::TrafficTrend(
        buckets
            .into_iter()
            .map(|(bucket, count)| (bucket.to_string(), count))
            .collect(),
    ))
}

/// First `len` characters of `timestamp`, or all of it when shorter.
pub fn minute_bucket(timestamp: &str, len: usize) -> &str {
    match timestamp.char_indices().nth(len) {
        Some((end, _)) => &timestamp[..end],
        None => timestamp,
    }
}
