//! Optional YAML configuration for xhairctl
//!
//! ```yaml
//! randomizer:
//!   max_attempts: 5000
//! output:
//!   json: true
//! ```

use std::fs;
use std::path::Path;

use crosshair_codec::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub randomizer: RandomizerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomizerConfig {
    pub max_attempts: u32,
}

impl Default for RandomizerConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit JSON even without `--json`.
    pub json: bool,
}

impl CliConfig {
    /// Load the configuration file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            CliError::InvalidConfiguration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, CliError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        if config.randomizer.max_attempts == 0 {
            return Err(CliError::InvalidConfiguration(
                "randomizer.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}
