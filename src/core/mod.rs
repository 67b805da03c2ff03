pub mod engine;
pub mod geo;
pub mod matcher;
pub mod pipeline;

pub use crate::domain::model::{ExtractResult, MatchMapping, MatchResult, SensorRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
