use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
}

/// Thresholds for the matching pipeline
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MatchingSettings {
    /// Maximum separation in pixels for a nearest-neighbor pairing
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f64,
    /// Maximum magnitude difference for a matched pair; `None` disables
    /// the magnitude filter
    #[serde(default)]
    pub magnitude_threshold: Option<f64>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            distance_threshold: default_distance_threshold(),
            magnitude_threshold: None,
        }
    }
}

fn default_distance_threshold() -> f64 {
    3.0
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with STARMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with STARMATCH_)
            // e.g., STARMATCH_MATCHING__DISTANCE_THRESHOLD -> matching.distance_threshold
            .add_source(
                Environment::with_prefix("STARMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("STARMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
