use clap::{Parser, Subcommand};
use loghive_core::analysis::Query;
use loghive_core::cli::{self, JobArgs, conf::ConfigCmd};
use loghive_core::logging::{SummaryFormat, default_summary_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "loghive",
    version,
    about = "loghive: batch analytics over delimited web access logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every analysis and write the results
    Run {
        #[command(flatten)]
        job: JobArgs,

        /// Summary format (defaults to pretty on a terminal, plain otherwise)
        #[arg(long, value_enum)]
        format: Option<SummaryFormat>,
    },

    /// Run one analysis and print it to stdout
    Query {
        #[arg(value_enum)]
        query: Query,

        #[command(flatten)]
        job: JobArgs,
    },

    /// Job file tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let code = match cli.command {
        Command::Run { job, format } => {
            let format = format.unwrap_or_else(default_summary_format);
            cli::run(&job, format).unwrap_or_else(|e| {
                eprintln!("error: {e:#}");
                1
            })
        }

        Command::Query { query, job } => exit_code(cli::query(&job, query)),

        Command::Config { cmd } => exit_code(cli::conf::run(cmd)),
    };

    std::process::exit(code);
}

fn exit_code(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}
