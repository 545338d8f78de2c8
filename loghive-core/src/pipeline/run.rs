use crate::analysis::{AggregationResult, Query, StatusClassCounts, run_all, run_query};
use crate::conf::JobConfig;
use crate::export::{Artifact, ExportError, Exporter};
use crate::partition::{Partition, partition_by_status};
use crate::pipeline::error::PipelineError;
use crate::pipeline::inputs::discover_inputs;
use crate::pipeline::summary::{
    FailedArtifact, JobSummary, PartitionReport, QueryReport, ReportedParseError,
};
use crate::record::{LogRecord, ReadStats, RecordReader};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::thread;
use tracing::{info, warn};

/// Everything read from the inputs: valid records plus the parse accounting.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub inputs: Vec<PathBuf>,
    pub stats: ReadStats,
    pub records: Vec<LogRecord>,
    pub parse_error_count: u64,
    pub parse_errors: Vec<ReportedParseError>,
}

/// Read and parse every input file.
///
/// All inputs are opened before the first line is read, so an unreadable
/// input fails the job without doing any work. Malformed lines are logged,
/// counted and left out.
pub fn ingest(config: &JobConfig) -> Result<Ingested, PipelineError> {
    let inputs = discover_inputs(&config.input.path, &config.input.pattern)?;

    let mut readers = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let reader = RecordReader::open(path, config.input.reader).map_err(|e| {
            PipelineError::OpenInput {
                path: path.clone(),
                source: e,
            }
        })?;
        readers.push((path, reader));
    }

    info!(inputs = inputs.len(), "reading input");

    let mut ingested = Ingested::default();
    for (path, mut reader) in readers {
        for item in reader.by_ref() {
            match item {
                Ok(record) => ingested.records.push(record),
                Err(error) => {
                    warn!(
                        file = %path.display(),
                        line = error.line,
                        error = %error,
                        "skipping malformed line"
                    );
                    ingested.parse_error_count += 1;
                    if ingested.parse_errors.len() < config.max_reported_errors {
                        ingested.parse_errors.push(ReportedParseError {
                            file: path.clone(),
                            error,
                        });
                    }
                }
            }
        }

        if let Some(e) = reader.take_io_error() {
            return Err(PipelineError::ReadInput {
                path: path.clone(),
                source: e,
            });
        }
        ingested.stats.merge(reader.stats());
    }

    info!(
        lines = ingested.stats.lines_read,
        valid_records = ingested.records.len(),
        parse_errors = ingested.parse_error_count,
        "input parsed"
    );

    ingested.inputs = inputs;
    Ok(ingested)
}

/// Run one analysis over the inputs without writing anything.
pub fn run_single_query(
    config: &JobConfig,
    query: Query,
) -> Result<(Ingested, AggregationResult), PipelineError> {
    let ingested = ingest(config)?;
    let result = run_query(query, &ingested.records, &config.analysis)?;
    Ok((ingested, result))
}

/// Run the whole job: ingest, analyze, partition, export, summarize.
///
/// Only configuration and input failures are returned as errors. Export
/// failures are per artifact and end up in [`JobSummary::failed_artifacts`].
pub fn run_job(config: &JobConfig) -> Result<JobSummary, PipelineError> {
    let Ingested {
        inputs,
        stats,
        records,
        parse_error_count,
        parse_errors,
    } = ingest(config)?;

    let results = run_all(&records, &config.analysis, config.parallel)?;
    let status_classes = StatusClassCounts::from_records(&records);
    let valid_records = records.len() as u64;

    let partitions = partition_by_status(records);
    info!(partitions = partitions.len(), "records partitioned by status");

    let exporter = Exporter::new(config.export.clone());
    let mut jobs: Vec<ExportJob<'_>> = results
        .iter()
        .map(|(query, result)| ExportJob::Result(*query, result))
        .collect();
    if config.partitions {
        jobs.extend(partitions.values().map(ExportJob::Partition));
    }

    let outcomes = export_all(&exporter, &jobs, config.parallel);

    let mut artifacts = Vec::new();
    let mut failed_artifacts = Vec::new();
    for (job, outcome) in jobs.iter().zip(outcomes) {
        match outcome {
            Ok(artifact) => artifacts.push(artifact),
            Err(e) => {
                let name = job.name();
                warn!(artifact = %name, error = %e, "failed to export artifact");
                failed_artifacts.push(FailedArtifact {
                    path: exporter.path_for(&name),
                    name,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        written = artifacts.len(),
        failed = failed_artifacts.len(),
        dir = %exporter.dir().display(),
        "export finished"
    );

    Ok(JobSummary {
        inputs,
        lines_read: stats.lines_read,
        blank_lines: stats.blank_lines,
        header_lines: stats.header_lines,
        valid_records,
        parse_error_count,
        parse_errors,
        status_classes,
        results: results
            .into_iter()
            .map(|(query, result)| QueryReport { query, result })
            .collect(),
        partitions: partitions
            .values()
            .map(|p| PartitionReport {
                status: p.status,
                records: p.len(),
            })
            .collect(),
        artifacts,
        failed_artifacts,
    })
}

enum ExportJob<'a> {
    Result(Query, &'a AggregationResult),
    Partition(&'a Partition),
}

impl ExportJob<'_> {
    fn name(&self) -> String {
        match self {
            ExportJob::Result(query, _) => query.name().to_string(),
            ExportJob::Partition(p) => p.artifact_name(),
        }
    }

    fn run(&self, exporter: &Exporter) -> Result<Artifact, ExportError> {
        match self {
            ExportJob::Result(query, result) => exporter.export_result(*query, result),
            ExportJob::Partition(p) => exporter.export_partition(p),
        }
    }
}

/// Write every artifact. Outcomes line up with `jobs`.
///
/// In parallel mode the jobs are split into contiguous chunks, one scoped
/// thread per chunk, with no more threads than the machine's available
/// parallelism.
fn export_all(
    exporter: &Exporter,
    jobs: &[ExportJob<'_>],
    parallel: bool,
) -> Vec<Result<Artifact, ExportError>> {
    if !parallel || jobs.len() < 2 {
        return jobs.iter().map(|job| job.run(exporter)).collect();
    }

    let chunk_len = jobs.len().div_ceil(export_workers(jobs.len()));

    thread::scope(|scope| {
        let handles: Vec<_> = jobs
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|job| job.run(exporter))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}

/// Worker threads used to export `jobs` artifacts.
pub(crate) fn export_workers(jobs: usize) -> usize {
    let cores = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    cores.min(jobs).max(1)
}
