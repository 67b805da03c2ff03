pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::MatchEngine, pipeline::SensorPipeline};
pub use utils::error::{MatchError, Result};
