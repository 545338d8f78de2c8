use crate::cli::JobArgs;

pub fn check(job: &JobArgs) -> anyhow::Result<()> {
    let cfg = job.load()?;

    println!("✔ Config loaded successfully");
    println!(
        "✔ input: {} (pattern {:?}, delimiter {:?})",
        cfg.input.path.display(),
        cfg.input.pattern,
        cfg.input.reader.delimiter
    );
    println!(
        "✔ analysis: top {}, suspicious above {} on {:?}, trend by {} chars",
        cfg.analysis.top_n,
        cfg.analysis.suspicious.threshold,
        cfg.analysis.suspicious.failure_statuses,
        cfg.analysis.timestamp_truncate_len
    );
    println!(
        "✔ output: {} (*.{}, partitions {})",
        cfg.export.dir.display(),
        cfg.export.extension,
        if cfg.partitions { "on" } else { "off" }
    );

    Ok(())
}
