use crate::analysis::AnalysisParams;
use crate::export::ExportOptions;
use crate::record::ReaderOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_VERSION: u32 = 1;

/// Job file as written by the operator.
///
/// Numeric settings are signed so that a negative value is reported as an
/// invalid argument instead of a parse failure.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JobSpec {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub input: InputSpec,

    #[serde(default)]
    pub analysis: AnalysisSpec,

    #[serde(default)]
    pub output: OutputSpec,
}

impl Default for JobSpec {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            input: InputSpec::default(),
            analysis: AnalysisSpec::default(),
            output: OutputSpec::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputSpec {
    /// A log file, or a directory of log files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Glob applied inside `path` when it is a directory.
    pub pattern: String,

    pub delimiter: String,

    pub skip_header: bool,
}

impl Default for InputSpec {
    fn default() -> Self {
        Self {
            path: None,
            pattern: "*".to_string(),
            delimiter: ",".to_string(),
            skip_header: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSpec {
    pub top_n: i64,
    pub suspicious_threshold: i64,
    pub suspicious_statuses: Vec<i64>,
    pub timestamp_truncate_len: i64,
    /// Run the analyses on separate threads.
    pub parallel: bool,
}

impl Default for AnalysisSpec {
    fn default() -> Self {
        Self {
            top_n: 3,
            suspicious_threshold: 3,
            suspicious_statuses: vec![404, 500],
            timestamp_truncate_len: 16,
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSpec {
    pub dir: PathBuf,

    /// Defaults to the input delimiter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    pub header: bool,

    /// Write one file per status partition.
    pub partitions: bool,

    /// How many parse errors the summary lists individually.
    pub max_reported_errors: usize,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            delimiter: None,
            header: true,
            partitions: true,
            max_reported_errors: 20,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Command-line values that take precedence over the job file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub delimiter: Option<String>,
    pub top_n: Option<i64>,
    pub threshold: Option<i64>,
    pub truncate_len: Option<i64>,
    pub skip_header: bool,
    pub sequential: bool,
}

/// Validated settings for one job run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub input: InputConfig,
    pub analysis: AnalysisParams,
    pub parallel: bool,
    pub export: ExportOptions,
    pub partitions: bool,
    pub max_reported_errors: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    pub path: PathBuf,
    pub pattern: String,
    pub reader: ReaderOptions,
}
