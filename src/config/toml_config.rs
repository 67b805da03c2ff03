use crate::core::matcher::DEFAULT_RADIUS_M;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub matching: Option<MatchingConfig>,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub data_dir: Option<String>,
    pub csv_file: String,
    pub json_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub radius_m: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_file: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn data_dir(&self) -> &str {
        self.source.data_dir.as_deref().unwrap_or(".")
    }
}

impl ConfigProvider for TomlConfig {
    fn csv_file(&self) -> &str {
        &self.source.csv_file
    }

    fn json_file(&self) -> &str {
        &self.source.json_file
    }

    fn output_file(&self) -> &str {
        &self.load.output_file
    }

    fn radius_m(&self) -> f64 {
        self.matching
            .as_ref()
            .and_then(|m| m.radius_m)
            .unwrap_or(DEFAULT_RADIUS_M)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validate_path("source.data_dir", self.data_dir())?;
        validate_non_empty_string("source.csv_file", &self.source.csv_file)?;
        validate_non_empty_string("source.json_file", &self.source.json_file)?;
        validate_non_empty_string("load.output_file", &self.load.output_file)?;
        validate_positive("matching.radius_m", self.radius_m())?;
        Ok(())
    }
}
