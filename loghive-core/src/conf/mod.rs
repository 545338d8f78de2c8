//! Job configuration.
//!
//! A job is described by an HCL file (`loghive.hcl`) whose settings can be
//! overridden from the command line. The raw [`JobSpec`] is validated and
//! lowered into a [`JobConfig`] before any input is touched, so a bad
//! setting never costs a partial run.

mod error;
mod loader;
mod types;
mod validate;


pub use error::{ConfigError, InvalidArgument};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, load_spec, resolve_spec};
pub use types::{
    AnalysisSpec, CONFIG_VERSION, InputConfig, InputSpec, JobConfig, JobSpec, OutputSpec,
    Overrides,
};
pub use validate::parse_delimiter;
