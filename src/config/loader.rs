use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const MAX_CLAMP_RATIO: f32 = 0.5;
const MAX_SETTLE_MS: u64 = 5_000;

/// Errors that can occur when loading configuration.
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
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/snap-carousel/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("snap-carousel").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`; a present one must parse
    /// and validate.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
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
    /// Spacing and peek width are not checked here: they are clamped per
    /// frame against the track width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let carousel = &self.carousel;

        for (name, ratio) in [
            ("spacing_ratio", carousel.spacing_ratio),
            ("peek_ratio", carousel.peek_ratio),
        ] {
            if !ratio.is_finite() || !(0.0..=MAX_CLAMP_RATIO).contains(&ratio) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "carousel.{name} must be between 0 and {MAX_CLAMP_RATIO}, got {ratio}"
                    ),
                });
            }
        }

        if !carousel.options().ratios.keeps_cards_visible() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "carousel.spacing_ratio + carousel.peek_ratio must be below 0.5, got {} + {}",
                    carousel.spacing_ratio, carousel.peek_ratio
                ),
            });
        }

        if !carousel.drag_threshold.is_finite() || carousel.drag_threshold <= 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "carousel.drag_threshold must be positive, got {}",
                    carousel.drag_threshold
                ),
            });
        }

        if carousel.settle_ms > MAX_SETTLE_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "carousel.settle_ms must be at most {MAX_SETTLE_MS}, got {}",
                    carousel.settle_ms
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        if self.ui.card_height == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "ui.card_height must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
