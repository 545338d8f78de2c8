use crate::analysis::AnalysisError;
use crate::conf::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a job before any artifact is written.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("failed to open input {path}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed while reading input {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no input files in {dir} match {pattern}")]
    NoInputFiles { dir: PathBuf, pattern: String },
}
