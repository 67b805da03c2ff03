pub mod cli;
pub mod toml_config;

use crate::core::matcher::DEFAULT_RADIUS_M;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_positive, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sensor-match")]
#[command(about = "Matches sensors across two datasets by geographic proximity")]
pub struct CliConfig {
    /// Base directory that input and output paths are resolved against
    #[arg(long, default_value = ".")]
    pub data_dir: String,

    #[arg(long, default_value = "SensorData1.csv")]
    pub csv_file: String,

    #[arg(long, default_value = "SensorData2.json")]
    pub json_file: String,

    #[arg(long, default_value = "MatchedSensorOutput.json")]
    pub output_file: String,

    /// Match radius in meters
    #[arg(long, default_value_t = DEFAULT_RADIUS_M)]
    pub radius_m: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn csv_file(&self) -> &str {
        &self.csv_file
    }

    fn json_file(&self) -> &str {
        &self.json_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn radius_m(&self) -> f64 {
        self.radius_m
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_non_empty_string("csv_file", &self.csv_file)?;
        validate_non_empty_string("json_file", &self.json_file)?;
        validate_non_empty_string("output_file", &self.output_file)?;
        validate_positive("radius_m", self.radius_m)?;
        Ok(())
    }
}
