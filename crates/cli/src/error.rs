//! Error types for xhairctl CLI

use crosshair_codec::CodecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid crosshair code {code:?}")]
    InvalidCode {
        code: String,
        #[source]
        source: CodecError,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Variant name reported in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::InvalidCode { .. } => "InvalidCode",
            CliError::ValidationError(_) => "ValidationError",
            CliError::InvalidConfiguration(_) => "InvalidConfiguration",
            CliError::IoError(_) => "IoError",
            CliError::JsonError(_) => "JsonError",
            CliError::YamlError(_) => "YamlError",
        }
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidCode { .. } | CliError::ValidationError(_) | CliError::JsonError(_) => 4,
            CliError::InvalidConfiguration(_) | CliError::IoError(_) | CliError::YamlError(_) => 1,
        }
    }
}
