use crate::analysis::{AggregationResult, Query};
use crate::export::{ExportError, ExportOptions, Exporter};
use crate::partition::Partition;
use crate::record::LogRecord;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;
use tempfile::tempdir;

fn histogram() -> AggregationResult {
    AggregationResult::StatusHistogram(BTreeMap::from([(200, 3), (500, 1)]))
}

#[test]
fn export_result_writes_header_and_rows() {
    // Arrange
    let dir = tempdir().unwrap();
    let exporter = Exporter::new(ExportOptions::new(dir.path(), ','));

    // Act
    let artifact = exporter
        .export_result(Query::StatusHistogram, &histogram())
        .unwrap();

    // Assert
    assert_eq!(artifact.name, "status_histogram");
    assert_eq!(artifact.path, dir.path().join("status_histogram.csv"));
    assert_eq!(artifact.rows, 2);
    assert_eq!(
        fs::read_to_string(&artifact.path).unwrap(),
        "status,count\n200,3\n500,1\n"
    );
}

#[test]
fn export_without_header() {
    let dir = tempdir().unwrap();
    let mut options = ExportOptions::new(dir.path(), ',');
    options.header = false;
    let exporter = Exporter::new(options);

    let artifact = exporter
        .export_result(Query::TotalRequests, &AggregationResult::TotalCount(4))
        .unwrap();

    assert_eq!(fs::read_to_string(artifact.path).unwrap(), "4\n");
}

#[test]
fn tab_delimiter_uses_tsv_extension() {
    let dir = tempdir().unwrap();
    let exporter = Exporter::new(ExportOptions::new(dir.path(), '\t'));

    let artifact = exporter
        .export_result(Query::StatusHistogram, &histogram())
        .unwrap();

    assert_eq!(artifact.path, dir.path().join("status_histogram.tsv"));
    assert_eq!(
        fs::read_to_string(artifact.path).unwrap(),
        "status\tcount\n200\t3\n500\t1\n"
    );
}

#[test]
fn export_overwrites_previous_artifact() {
    // Arrange
    let dir = tempdir().unwrap();
    let exporter = Exporter::new(ExportOptions::new(dir.path(), ','));
    let path = exporter.path_for("total_requests");
    fs::write(&path, "stale contents that are much longer than the new ones\n").unwrap();

    // Act
    exporter
        .export_result(Query::TotalRequests, &AggregationResult::TotalCount(7))
        .unwrap();
    exporter
        .export_result(Query::TotalRequests, &AggregationResult::TotalCount(7))
        .unwrap();

    // Assert
    assert_eq!(fs::read_to_string(&path).unwrap(), "total_requests\n7\n");
    // no temp files left behind
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn export_partition_writes_records_in_order() {
    let dir = tempdir().unwrap();
    let exporter = Exporter::new(ExportOptions::new(dir.path(), ','));
    let partition = Partition {
        status: 404,
        records: vec![
            LogRecord {
                ip: "10.0.0.1".into(),
                timestamp: "2024-03-01 10:15:32".into(),
                url: "/missing".into(),
                status: 404,
                user_agent: "Mozilla/5.0 (X11, Linux)".into(),
            },
            LogRecord {
                ip: "10.0.0.2".into(),
                timestamp: "2024-03-01 10:15:33".into(),
                url: "/gone".into(),
                status: 404,
                user_agent: "curl/8.0".into(),
            },
        ],
    };

    let artifact = exporter.export_partition(&partition).unwrap();

    assert_eq!(artifact.path, dir.path().join("partition_404.csv"));
    assert_eq!(
        fs::read_to_string(artifact.path).unwrap(),
        "ip,timestamp,url,status,user_agent\n\
         10.0.0.1,2024-03-01 10:15:32,/missing,404,\"Mozilla/5.0 (X11, Linux)\"\n\
         10.0.0.2,2024-03-01 10:15:33,/gone,404,curl/8.0\n"
    );
}

#[test]
fn export_into_a_file_path_fails_per_artifact() {
    // Arrange
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("out");
    fs::write(&blocker, "not a directory").unwrap();
    let exporter = Exporter::new(ExportOptions::new(&blocker, ','));

    // Act
    let err = exporter
        .export_result(Query::TotalRequests, &AggregationResult::TotalCount(1))
        .unwrap_err();

    // Assert
    assert!(matches!(err, ExportError::CreateDir { .. }));
}
