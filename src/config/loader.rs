use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::switch::{PortRole, SwitchConfiguration};

/// Errors that can occur when loading configuration.
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Invalid number of {role} ports ({count}): must be a multiple of {width}")]
    InvalidPortCount {
        role: PortRole,
        count: u32,
        width: u32,
    },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/portswitch/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("portswitch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The layout width is non-zero
    /// - Every seed pair is within the declared port ranges
    /// - No ingress or egress port is seeded twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.layout_width == 0 {
            return Err(ConfigError::ValidationError {
                message: "layout_width must be greater than zero".to_string(),
            });
        }

        let switch = &self.switch;
        let mut ingress_seen = HashSet::new();
        let mut egress_seen = HashSet::new();
        for pair in &switch.seed {
            if pair.ingress < 1 || pair.ingress > switch.num_ingress {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Seed pair {} uses ingress port outside 1-{}",
                        pair, switch.num_ingress
                    ),
                });
            }
            if pair.egress < 1 || pair.egress > switch.num_egress {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Seed pair {} uses egress port outside 1-{}",
                        pair, switch.num_egress
                    ),
                });
            }
            if !ingress_seen.insert(pair.ingress) || !egress_seen.insert(pair.egress) {
                return Err(ConfigError::ValidationError {
                    message: format!("Seed pair {} reuses an already seeded port", pair),
                });
            }
        }

        Ok(())
    }
}

/// Checks that both port counts of `config` fill whole grid rows.
pub fn validate_layout(config: &SwitchConfiguration, width: u32) -> Result<(), ConfigError> {
    if width == 0 {
        return Err(ConfigError::ValidationError {
            message: "layout_width must be greater than zero".to_string(),
        });
    }
    for role in [PortRole::Ingress, PortRole::Egress] {
        let count = config.port_count(role);
        if count % width != 0 {
            return Err(ConfigError::InvalidPortCount { role, count, width });
        }
    }
    Ok(())
}
