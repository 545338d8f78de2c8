use crate::analysis::Query;
use crate::cli::JobArgs;
use crate::pipeline::{run_single_query, table_with_delimiter};

/// Run one analysis and print its table to stdout. Nothing is written to disk.
pub fn query(args: &JobArgs, query: Query) -> anyhow::Result<()> {
    let config = args.load()?;
    let (_, result) = run_single_query(&config, query)?;

    print!(
        "{}",
        table_with_delimiter(
            query,
            &result,
            config.export.delimiter,
            config.export.header
        )
    );

    Ok(())
}
