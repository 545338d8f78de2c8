use crate::cli::JobArgs;
use crate::conf::resolve_spec;
use serde::Serialize;

/// Print the job spec after the job file and flags are merged. JSON unless
/// `yaml` is set.
pub fn dump(job: &JobArgs, yaml: bool) -> anyhow::Result<()> {
    let spec = resolve_spec(job.config.as_deref(), &job.overrides())?;
    println!("{}", render(&spec, yaml)?);
    Ok(())
}

fn render<T: Serialize>(value: &T, yaml: bool) -> anyhow::Result<String> {
    if yaml {
        Ok(serde_yaml::to_string(value)?)
    } else {
        Ok(serde_json::to_string_pretty(value)?)
    }
}
