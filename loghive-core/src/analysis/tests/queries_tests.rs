use super::rec;
use crate::analysis::*;
use crate::record::LogRecord;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

/// The four sample rows from the walkthrough.
fn readme_records() -> Vec<LogRecord> {
    vec![
        rec("192.168.1.1", "2024-03-01 10:15:32", "/index.html", 200, "Mozilla/5.0"),
        rec("192.168.1.2", "2024-03-01 10:15:45", "/about.html", 200, "Chrome/90.0"),
        rec("192.168.1.3", "2024-03-01 10:16:01", "/contact.html", 500, "Edge/88.0"),
        rec("192.168.1.1", "2024-03-01 10:16:20", "/index.html", 200, "Mozilla/5.0"),
    ]
}

fn pairs(items: &[(&str, u64)]) -> Vec<(String, u64)> {
    items.iter().map(|(k, c)| (k.to_string(), *c)).collect()
}

#[test]
fn total_requests_counts_valid_records() {
    assert_eq!(total_requests(&readme_records()), AggregationResult::TotalCount(4));
}

#[test]
fn empty_input_yields_zero_valued_results() {
    // Arrange
    let records: Vec<LogRecord> = Vec::new();
    let params = AnalysisParams::default();

    // Act
    let results = run_all(&records, &params, false).unwrap();

    // Assert
    let expected = vec![
        (Query::TotalRequests, AggregationResult::TotalCount(0)),
        (Query::StatusHistogram, AggregationResult::StatusHistogram(BTreeMap::new())),
        (Query::TopUrls, AggregationResult::TopEntities(vec![])),
        (Query::TopUserAgents, AggregationResult::TopEntities(vec![])),
        (Query::SuspiciousIps, AggregationResult::SuspiciousIps(vec![])),
        (Query::TrafficTrend, AggregationResult::TrafficTrend(vec![])),
    ];
    assert_eq!(results, expected);
}

#[test]
fn status_histogram_groups_by_status() {
    let result = status_histogram(&readme_records());

    assert_eq!(
        result,
        AggregationResult::StatusHistogram(BTreeMap::from([(200, 3), (500, 1)]))
    );
}

#[test]
fn top_urls_ranks_by_count() {
    let result = top_urls(&readme_records(), 3).unwrap();

    assert_eq!(
        result,
        AggregationResult::TopEntities(pairs(&[
            ("/index.html", 2),
            ("/about.html", 1),
            ("/contact.html", 1),
        ]))
    );
}

#[test]
fn top_urls_truncates_to_n() {
    let result = top_urls(&readme_records(), 1).unwrap();

    assert_eq!(result, AggregationResult::TopEntities(pairs(&[("/index.html", 2)])));
}

#[test]
fn top_n_of_zero_is_invalid_argument() {
    let err = top_user_agents(&readme_records(), 0).unwrap_err();

    assert!(matches!(err, AnalysisError::InvalidArgument { name: "top_n", .. }));
}

#[test]
fn top_user_agents_breaks_ties_by_first_seen() {
    // Arrange: Opera first, then Chrome seen before Edge, both ending on 23.
    let mut records = Vec::new();
    for _ in 0..21 {
        records.push(rec("1.1.1.1", "t", "/", 200, "Opera/74.0"));
    }
    records.push(rec("1.1.1.1", "t", "/", 200, "Chrome/90.0"));
    records.push(rec("1.1.1.1", "t", "/", 200, "Edge/88.0"));
    for _ in 0..22 {
        records.push(rec("1.1.1.1", "t", "/", 200, "Edge/88.0"));
        records.push(rec("1.1.1.1", "t", "/", 200, "Chrome/90.0"));
    }

    // Act
    let result = top_user_agents(&records, 3).unwrap();

    // Assert
    assert_eq!(
        result,
        AggregationResult::TopEntities(pairs(&[
            ("Chrome/90.0", 23),
            ("Edge/88.0", 23),
            ("Opera/74.0", 21),
        ]))
    );
}

#[test]
fn suspicious_ips_empty_for_readme_sample() {
    let result = suspicious_ips(&readme_records(), &SuspiciousParams::default());

    assert_eq!(result, AggregationResult::SuspiciousIps(vec![]));
}

#[test]
fn suspicious_ips_uses_strict_greater_than() {
    // Arrange
    let mut records = Vec::new();
    for _ in 0..3 {
        records.push(rec("10.0.0.3", "t", "/x", 404, "ua"));
    }
    for _ in 0..2 {
        records.push(rec("10.0.0.4", "t", "/x", 404, "ua"));
        records.push(rec("10.0.0.4", "t", "/x", 500, "ua"));
    }
    // not a failure status
    for _ in 0..10 {
        records.push(rec("10.0.0.5", "t", "/x", 403, "ua"));
    }

    // Act
    let result = suspicious_ips(&records, &SuspiciousParams::default());

    // Assert
    assert_eq!(result, AggregationResult::SuspiciousIps(pairs(&[("10.0.0.4", 4)])));
}

#[test]
fn suspicious_ips_honours_custom_statuses_and_threshold() {
    let records = vec![
        rec("10.0.0.5", "t", "/x", 403, "ua"),
        rec("10.0.0.5", "t", "/x", 401, "ua"),
        rec("10.0.0.6", "t", "/x", 404, "ua"),
    ];
    let params = SuspiciousParams {
        failure_statuses: vec![401, 403],
        threshold: 1,
    };

    let result = suspicious_ips(&records, &params);

    assert_eq!(result, AggregationResult::SuspiciousIps(pairs(&[("10.0.0.5", 2)])));
}

#[test]
fn traffic_trend_buckets_by_minute_ascending() {
    // Arrange: out of order on purpose
    let records = vec![
        rec("a", "2024-03-01 10:16:20", "/", 200, "ua"),
        rec("a", "2024-03-01 10:15:32", "/", 200, "ua"),
        rec("a", "2024-03-01 10:15:45", "/", 200, "ua"),
        rec("a", "2024-03-01 09:59:59", "/", 200, "ua"),
    ];

    // Act
    let result = traffic_trend(&records, 16).unwrap();

    // Assert
    assert_eq!(
        result,
        AggregationResult::TrafficTrend(pairs(&[
            ("2024-03-01 09:59", 1),
            ("2024-03-01 10:15", 2),
            ("2024-03-01 10:16", 1),
        ]))
    );
}

#[test]
fn traffic_trend_rejects_zero_truncation() {
    let err = traffic_trend(&readme_records(), 0).unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::InvalidArgument { name: "timestamp_truncate_len", .. }
    ));
}

#[test]
fn minute_bucket_keeps_short_timestamps_whole() {
    assert_eq!(minute_bucket("2024-03-01", 16), "2024-03-01");
    assert_eq!(minute_bucket("2024-03-01 10:15:32", 13), "2024-03-01 10");
    assert_eq!(minute_bucket("ünïcödé-tïmé", 3), "ünï");
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let records = readme_records();
    let params = AnalysisParams::default();

    let sequential = run_all(&records, &params, false).unwrap();
    let parallel = run_all(&records, &params, true).unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn run_query_dispatches_by_query() {
    let records = readme_records();
    let params = AnalysisParams {
        top_n: 1,
        ..AnalysisParams::default()
    };

    let result = run_query(Query::TopUserAgents, &records, &params).unwrap();

    assert_eq!(result, AggregationResult::TopEntities(pairs(&[("Mozilla/5.0", 2)])));
}

#[test]
fn rows_render_in_output_order() {
    let hist = status_histogram(&readme_records());

    assert_eq!(
        hist.rows(),
        vec![
            vec!["200".to_string(), "3".to_string()],
            vec!["500".to_string(), "1".to_string()],
        ]
    );
    assert_eq!(AggregationResult::TotalCount(4).rows(), vec![vec!["4".to_string()]]);
}

#[test]
fn status_classes_tally_each_family() {
    let counts = StatusClassCounts::from_records(&readme_records());

    assert_eq!(counts.success, 3);
    assert_eq!(counts.server_error, 1);
    assert_eq!(counts.total(), 4);
    assert_eq!(counts.to_string(), "1xx=0 2xx=3 3xx=0 4xx=0 5xx=1");
}

#[test]
fn query_names_are_stable() {
    let names: Vec<_> = Query::ALL.iter().map(|q| q.name()).collect();

    assert_eq!(
        names,
        vec![
            "total_requests",
            "status_histogram",
            "top_urls",
            "top_user_agents",
            "suspicious_ips",
            "traffic_trend",
        ]
    );
}
