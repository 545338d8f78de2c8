pub mod fixtures;
pub mod tracing;

pub use fixtures::{README_SAMPLE, Workspace};
pub use tracing::{CapturedEvent, capture_events};
