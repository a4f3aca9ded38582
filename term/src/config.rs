//! Configuration management for user interface preferences.
//!
//! Only presentation settings are stored here. Tasks themselves are never
//! written to disk.

use color_eyre::eyre::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ui::colors::Theme;

pub const DEFAULT_TITLE: &str = "Task List";

/// Persisted user interface preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Blue.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Persists and retrieves the configuration from a YAML file.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path to the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    /// Builds the manager, loading the config file at the provided path.
    /// Defaults are written when the file does not exist yet.
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        match std::fs::File::open(&manager.path) {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults: {}",
                            e
                        );
                        Config::default()
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                manager.config = Config::default();
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Returns the currently loaded config.
    pub fn get(&self) -> Config {
        self.config.clone()
    }

    /// Returns the path of the backing config file.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replaces the config and persists it to disk.
    pub fn update(&mut self, config: Config) -> Result<()> {
        self.config = config;
        self.write()
    }

    fn write(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
