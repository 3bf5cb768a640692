//! Bot configuration loading from config.toml
//!
//! The file is optional: without it the bot runs on built-in defaults. Users can
//! override the display precision per account with `/settings`.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
/// Config file used when `CONFIG_PATH` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Bot-wide display and limit settings
    #[serde(default)]
    pub bot: BotConfig,
}

/// The `[bot]` table of config.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Decimal places on suffixed numbers for users without a preference
    pub default_precision: usize,
    /// Largest precision a user may choose
    pub max_precision: usize,
    /// Rows in a `/wavetable` when the user gives no step
    pub wave_table_rows: usize,
    /// Hard cap on `/wavetable` rows (Discord embeds are small)
    pub max_wave_table_rows: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            default_precision: 2,
            max_precision: 6,
            wave_table_rows: 10,
            max_wave_table_rows: 25,
        }
    }
}

impl AppConfig {
    /// Checks that the configured limits are consistent with each other.
    ///
    /// # Errors
    /// Returns [`Error::Config`] describing the first inconsistent value.
    pub fn validate(&self) -> Result<()> {
        let bot = &self.bot;
        if bot.default_precision > bot.max_precision {
            return Err(Error::Config {
                message: format!(
                    "default_precision ({}) exceeds max_precision ({})",
                    bot.default_precision, bot.max_precision
                ),
            });
        }
        if bot.wave_table_rows == 0 || bot.wave_table_rows > bot.max_wave_table_rows {
            return Err(Error::Config {
                message: format!(
                    "wave_table_rows ({}) must be between 1 and max_wave_table_rows ({})",
                    bot.wave_table_rows, bot.max_wave_table_rows
                ),
            });
        }
        Ok(())
    }
}

/// Loads and validates configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - The values fail [`AppConfig::validate`]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    let config = parse_config(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Parses configuration from TOML text without validating it.
///
/// # Errors
/// Returns [`Error::Config`] for malformed TOML.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from `CONFIG_PATH` (or ./config.toml).
///
/// A missing file is not an error; the defaults are used instead.
///
/// # Errors
/// Returns an error if the file exists but cannot be read, parsed or validated.
pub fn load_default_config() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    if !Path::new(&path).exists() {
        tracing::warn!("Config file {path} not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config(&path)
}
