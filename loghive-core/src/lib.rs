pub mod analysis;
pub mod cli;
pub mod conf;
pub mod export;
pub mod logging;
pub mod partition;
pub mod pipeline;
pub mod record;
