use integration_tests::harness::{README_SAMPLE, Workspace};
use loghive_core::analysis::{AggregationResult, Query};
use loghive_core::conf::Overrides;
use loghive_core::pipeline::{JobOutcome, PipelineError, run_job};
use pretty_assertions::assert_eq;
use std::fs;

/// The documented four-line sample produces every result file.
#[test]
fn readme_sample_end_to_end() {
    // Arrange
    let ws = Workspace::new();
    let input = ws.write_input("access_log.csv", README_SAMPLE);
    let cfg = ws.config(&input);

    // Act
    let summary = run_job(&cfg).unwrap();

    // Assert
    assert_eq!(summary.outcome(), JobOutcome::Success);
    assert_eq!(summary.outcome().exit_code(), 0);
    assert_eq!(ws.read_output("total_requests.csv"), "total_requests\n4\n");
    assert_eq!(
        ws.read_output("status_histogram.csv"),
        "status,count\n200,3\n500,1\n"
    );
    assert_eq!(
        ws.read_output("top_urls.csv"),
        "url,count\n/index.html,2\n/about.html,1\n/contact.html,1\n"
    );
    assert_eq!(
        ws.read_output("top_user_agents.csv"),
        "user_agent,count\nMozilla/5.0,2\nChrome/90.0,1\nEdge/88.0,1\n"
    );
    assert_eq!(ws.read_output("suspicious_ips.csv"), "ip,failed_requests\n");
    assert_eq!(
        ws.read_output("traffic_trend.csv"),
        "minute,requests\n2024-03-01 10:15,2\n2024-03-01 10:16,2\n"
    );
    assert_eq!(
        ws.read_output("partition_500.csv"),
        "ip,timestamp,url,status,user_agent\n\
         192.168.1.3,2024-03-01 10:16:01,/contact.html,500,Edge/88.0\n"
    );
    assert_eq!(
        ws.read_output("partition_200.csv").lines().count(),
        1 + 3
    );
}

#[test]
fn rerun_is_byte_identical() {
    // Arrange
    let ws = Workspace::new();
    let input = ws.write_input("access_log.csv", README_SAMPLE);

    // Act
    run_job(&ws.config(&input)).unwrap();
    let first = ws.output_files();

    run_job(&ws.config_with(
        &input,
        Overrides {
            sequential: true,
            ..Overrides::default()
        },
    ))
    .unwrap();
    let second = ws.output_files();

    // Assert
    assert_eq!(first.len(), 8);
    assert_eq!(first, second);
}

#[test]
fn repeated_failures_mark_an_ip_as_suspicious() {
    // Arrange
    let mut log = String::from(README_SAMPLE);
    for i in 0..4 {
        log.push_str(&format!("10.0.0.66,2024-03-01 10:2{i}:00,/admin,404,curl/8.0\n"));
    }
    for i in 0..3 {
        log.push_str(&format!("10.0.0.77,2024-03-01 10:3{i}:00,/login,500,curl/8.0\n"));
    }
    let ws = Workspace::new();
    let input = ws.write_input("access_log.csv", &log);

    // Act
    let summary = run_job(&ws.config(&input)).unwrap();

    // Assert
    assert_eq!(
        summary.result(Query::SuspiciousIps),
        Some(&AggregationResult::SuspiciousIps(vec![(
            "10.0.0.66".to_string(),
            4
        )]))
    );
    assert_eq!(
        ws.read_output("suspicious_ips.csv"),
        "ip,failed_requests\n10.0.0.66,4\n"
    );
    assert!(ws.out_dir().join("partition_404.csv").is_file());
}

#[test]
fn one_unwritable_artifact_is_a_partial_failure() {
    // Arrange
    let ws = Workspace::new();
    let input = ws.write_input("access_log.csv", README_SAMPLE);
    fs::create_dir_all(ws.out_dir().join("top_urls.csv")).unwrap();

    // Act
    let summary = run_job(&ws.config(&input)).unwrap();

    // Assert
    assert_eq!(summary.outcome(), JobOutcome::PartialFailure);
    assert_eq!(summary.outcome().exit_code(), 2);
    assert_eq!(summary.failed_artifacts.len(), 1);
    assert_eq!(summary.failed_artifacts[0].name, "top_urls");
    assert_eq!(summary.artifacts.len(), 7);
    assert_eq!(ws.read_output("total_requests.csv"), "total_requests\n4\n");
}

#[test]
fn output_dir_blocked_by_a_file_fails_every_artifact() {
    let ws = Workspace::new();
    let input = ws.write_input("access_log.csv", README_SAMPLE);
    fs::write(ws.out_dir(), "not a directory").unwrap();

    let summary = run_job(&ws.config(&input)).unwrap();

    assert_eq!(summary.outcome(), JobOutcome::PartialFailure);
    assert!(summary.artifacts.is_empty());
    assert_eq!(summary.failed_artifacts.len(), 8);
}

#[test]
fn directory_input_reads_matching_files_in_order() {
    // Arrange
    let ws = Workspace::new();
    let lines: Vec<&str> = README_SAMPLE.lines().collect();
    ws.write_input("logs/b.log", &format!("{}\n{}\n", lines[2], lines[3]));
    ws.write_input("logs/a.log", &format!("{}\n{}\n", lines[0], lines[1]));
    ws.write_input("logs/notes.txt", "not a log line\n");

    let mut spec = ws.spec(&ws.path().join("logs"));
    spec.input.pattern = "*.log".to_string();
    let cfg = spec.validate().unwrap();

    // Act
    let summary = run_job(&cfg).unwrap();

    // Assert
    let names: Vec<_> = summary
        .inputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.log", "b.log"]);
    assert_eq!(summary.valid_records, 4);
    assert_eq!(summary.parse_error_count, 0);
    assert_eq!(
        ws.read_output("partition_200.csv"),
        format!(
            "ip,timestamp,url,status,user_agent\n{}\n{}\n{}\n",
            lines[0], lines[1], lines[3]
        )
    );
}

#[test]
fn tab_separated_input_with_header() {
    // Arrange
    let tsv = format!(
        "ip\ttimestamp\turl\tstatus\tuser_agent\n{}",
        README_SAMPLE.replace(',', "\t")
    );
    let ws = Workspace::new();
    let input = ws.write_input("access_log.tsv", &tsv);
    let cfg = ws.config_with(
        &input,
        Overrides {
            delimiter: Some("tab".to_string()),
            skip_header: true,
            ..Overrides::default()
        },
    );

    // Act
    let summary = run_job(&cfg).unwrap();

    // Assert
    assert_eq!(summary.header_lines, 1);
    assert_eq!(summary.valid_records, 4);
    assert_eq!(
        ws.read_output("status_histogram.tsv"),
        "status\tcount\n200\t3\n500\t1\n"
    );
}

#[test]
fn empty_input_still_writes_every_result() {
    let ws = Workspace::new();
    let input = ws.write_input("access_log.csv", "\n\n");

    let summary = run_job(&ws.config(&input)).unwrap();

    assert_eq!(summary.valid_records, 0);
    assert_eq!(summary.blank_lines, 2);
    assert_eq!(summary.artifacts.len(), Query::ALL.len());
    assert_eq!(ws.read_output("total_requests.csv"), "total_requests\n0\n");
    assert_eq!(ws.read_output("top_urls.csv"), "url,count\n");
}

#[test]
fn unreadable_input_aborts_before_writing() {
    let ws = Workspace::new();
    let cfg = ws.config(&ws.path().join("missing.csv"));

    let err = run_job(&cfg).unwrap_err();

    assert!(matches!(err, PipelineError::OpenInput { .. }));
    assert!(!ws.out_dir().exists());
}
