pub mod conf;
mod query;
mod run;

pub use query::query;
pub use run::run;

use crate::conf::{ConfigError, JobConfig, Overrides, load_config};
use clap::Args;
use std::path::PathBuf;

/// Flags shared by every command that resolves a job.
#[derive(Args, Debug, Clone, Default)]
pub struct JobArgs {
    /// Job file (defaults to ./loghive.hcl when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file or directory of log files
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory the result files are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Input field delimiter: a single character or "tab"
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// How many entries the top-N analyses keep
    #[arg(long, allow_negative_numbers = true)]
    pub top_n: Option<i64>,

    /// Failed requests an IP needs to exceed to count as suspicious
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Timestamp prefix length used as the traffic trend bucket
    #[arg(long, allow_negative_numbers = true)]
    pub truncate_len: Option<i64>,

    /// Treat the first line of each input file as a header
    #[arg(long)]
    pub skip_header: bool,

    /// Run analyses and exports on the calling thread
    #[arg(long)]
    pub sequential: bool,
}

impl JobArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            delimiter: self.delimiter.clone(),
            top_n: self.top_n,
            threshold: self.threshold,
            truncate_len: self.truncate_len,
            skip_header: self.skip_header,
            sequential: self.sequential,
        }
    }

    pub fn load(&self) -> Result<JobConfig, ConfigError> {
        load_config(self.config.as_deref(), &self.overrides())
    }
}
