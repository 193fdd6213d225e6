//! # Configuration State
//!
//! Front desk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SERENITY_*`)
//! 2. Config file (`serenity.toml`, explicit path or platform config dir)
//! 3. Defaults (this file)
//!
//! `RUST_LOG`, when set, still wins over `log_filter` (see `init_tracing`).
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serenity_core::money::PESO_SIGN;
use serenity_core::Money;
use tracing_subscriber::EnvFilter;

/// Config file name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "serenity.toml";

/// Front desk configuration.
///
/// ## Example `serenity.toml`
/// ```toml
/// hotel_name = "Serenity Suites Makati"
/// currency_symbol = "₱"
/// seed_defaults = true
/// log_filter = "info,serenity_store=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Shown in the shell banner.
    pub hotel_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Load the 50-room catalog and default accounts on startup.
    pub seed_defaults: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

impl Default for HotelConfig {
    fn default() -> Self {
        HotelConfig {
            hotel_name: "Serenity Suites".to_string(),
            currency_symbol: PESO_SIGN.to_string(),
            seed_defaults: true,
            log_filter: "info".to_string(),
        }
    }
}

impl HotelConfig {
    /// Loads configuration: defaults, then the TOML file, then `SERENITY_*`
    /// environment overrides, then validation.
    ///
    /// With `path == None` the platform config directory is searched; a
    /// missing file there is not an error. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => HotelConfig::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file. Keys left out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies environment-style overrides.
    ///
    /// ## Environment Variables
    /// - `SERENITY_HOTEL_NAME`: Override hotel name
    /// - `SERENITY_CURRENCY_SYMBOL`: Override currency symbol
    /// - `SERENITY_SEED`: `true`/`false` (or `1`/`0`)
    /// - `SERENITY_LOG`: Override log filter
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("SERENITY_HOTEL_NAME") {
            self.hotel_name = name;
        }

        if let Some(symbol) = lookup("SERENITY_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(seed) = lookup("SERENITY_SEED") {
            self.seed_defaults = match seed.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(ConfigError::InvalidValue("SERENITY_SEED".to_string())),
            };
        }

        if let Some(filter) = lookup("SERENITY_LOG") {
            self.log_filter = filter;
        }

        Ok(())
    }

    /// Rejects blank names and unparseable log filters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hotel_name.trim().is_empty() {
            return Err(ConfigError::MissingRequired("hotel_name".to_string()));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::MissingRequired("currency_symbol".to_string()));
        }
        if EnvFilter::try_new(&self.log_filter).is_err() {
            return Err(ConfigError::InvalidValue("log_filter".to_string()));
        }
        Ok(())
    }

    /// Formats an amount with the configured symbol and no digit grouping.
    ///
    /// ## Example
    /// ```rust
    /// use serenity_core::Money;
    /// use serenity_desk_lib::state::HotelConfig;
    ///
    /// let config = HotelConfig::default();
    /// assert_eq!(config.format_money(Money::from_pesos(41650)), "₱41650.00");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let centavos = amount.centavos();
        format!(
            "{}{}{}.{:02}",
            if centavos < 0 { "-" } else { "" },
            self.currency_symbol,
            (centavos / 100).abs(),
            (centavos % 100).abs()
        )
    }
}

/// `serenity.toml` in the platform config directory.
///
/// ## Platform-Specific Paths
/// - **Linux**: `~/.config/suites/serenity.toml`
/// - **macOS**: `~/Library/Application Support/com.serenity.suites/serenity.toml`
/// - **Windows**: `%APPDATA%\serenity\suites\config\serenity.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "serenity", "suites")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
