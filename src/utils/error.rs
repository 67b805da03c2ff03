use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML config error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid sensor id '{value}' on CSV line {line}")]
    InvalidSensorId { value: String, line: usize },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, MatchError>;
