use crate::conf::error::ConfigError;
use crate::conf::types::{JobConfig, JobSpec, Overrides};
use std::fs;
use std::path::Path;

/// Job file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "loghive.hcl";

/// Read and parse a job file without validating it.
pub fn load_spec(path: &Path) -> Result<JobSpec, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}

/// Resolve the effective job spec: defaults, then the job file, then overrides.
///
/// An explicit `path` must exist. Without one, `loghive.hcl` in the working
/// directory is used if present.
pub fn resolve_spec(path: Option<&Path>, overrides: &Overrides) -> Result<JobSpec, ConfigError> {
    let mut spec = match path {
        Some(path) => load_spec(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            load_spec(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => JobSpec::default(),
    };

    spec.apply(overrides);
    Ok(spec)
}

/// Resolve and validate in one step.
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<JobConfig, ConfigError> {
    resolve_spec(path, overrides)?.validate()
}
