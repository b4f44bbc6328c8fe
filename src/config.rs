//! Application configuration.

use crate::consts::cli_consts::market::DEFAULT_VS_CURRENCY;
use crate::sort::SortState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Reference currency for prices and valuations.
    pub vs_currency: String,
    /// Initial sort column key, e.g. "market_cap".
    pub sort_column: String,
    /// Initial sort direction key, "asc" or "desc".
    pub sort_direction: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            sort_column: "market_cap".to_string(),
            sort_direction: "desc".to_string(),
        }
    }
}

impl Config {
    /// Create Config with the given reference currency.
    pub fn new(vs_currency: String) -> Self {
        Config {
            vs_currency,
            ..Config::default()
        }
    }

    /// The initial sort state. Unrecognized configured keys fall back to the
    /// default (market cap, descending), keeping the sort column invariant.
    pub fn initial_sort(&self) -> SortState {
        SortState::from_keys(&self.sort_column, &self.sort_direction)
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    #[allow(unused)]
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// The configuration file location, `~/.tokendash/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home.join(".tokendash").join("config.json"))
}
