use crate::cli::JobArgs;
use crate::logging::SummaryFormat;
use crate::pipeline::{render_json, render_plain, render_pretty, run_job};

/// Run the full job and print its summary. Returns the process exit code.
pub fn run(args: &JobArgs, format: SummaryFormat) -> anyhow::Result<i32> {
    let config = args.load()?;
    let summary = run_job(&config)?;

    match format {
        SummaryFormat::Pretty => print!("{}", render_pretty(&summary)),
        SummaryFormat::Plain => print!("{}", render_plain(&summary)),
        SummaryFormat::Json => println!("{}", render_json(&summary)?),
    }

    Ok(summary.outcome().exit_code())
}
