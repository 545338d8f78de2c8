mod check;
mod dump;
mod init;

pub use check::*;
pub use dump::*;
pub use init::*;

use crate::cli::JobArgs;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate the job configuration and exit
    Check {
        #[command(flatten)]
        job: JobArgs,
    },

    /// Print the resolved job configuration
    Dump {
        #[command(flatten)]
        job: JobArgs,

        /// Output as JSON (the default)
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a starter job file
    Init {
        /// Where to write the job file
        #[arg(default_value = crate::conf::DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { job } => check(&job),
        ConfigCmd::Dump { job, yaml, .. } => dump(&job, yaml),
        ConfigCmd::Init { path } => init(&path),
    }
}
