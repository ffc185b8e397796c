//! Configuration system for yamlpick.
//!
//! Settings live in a TOML file and fill in whatever the command line does
//! not specify. Missing fields take their defaults, and a missing or broken
//! file means all defaults.
//!
//! # Example
//!
//! ```
//! use yamlpick::config::{Config, OutputFormat};
//! use yamlpick::query::DuplicateKeyPolicy;
//!
//! let config = Config::default();
//! assert_eq!(config.duplicate_keys, DuplicateKeyPolicy::First);
//! assert_eq!(config.output, OutputFormat::Dump);
//!
//! let custom = Config {
//!     duplicate_keys: DuplicateKeyPolicy::Error,
//!     ..Config::default()
//! };
//! assert!(custom.show_diagnostics);
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::query::DuplicateKeyPolicy;

/// How the CLI prints a resolved node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The json-esque debug rendering.
    #[default]
    Dump,
    /// Pretty-printed JSON; duplicate keys are repeated.
    Json,
    /// Strings without quotes, collections as in `dump`.
    Raw,
}

/// Configuration for yamlpick.
///
/// * `duplicate_keys` - Which entry a repeated dict key resolves to (default: first)
/// * `output` - Output format for printed nodes (default: dump)
/// * `show_diagnostics` - Print warnings to stderr (default: true)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Duplicate-key resolution policy for queries
    #[serde(default)]
    pub duplicate_keys: DuplicateKeyPolicy,

    /// Output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Print warnings to stderr
    #[serde(default = "default_show_diagnostics")]
    pub show_diagnostics: bool,
}

fn default_show_diagnostics() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeyPolicy::default(),
            output: OutputFormat::default(),
            show_diagnostics: default_show_diagnostics(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlpick/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlpick");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!("ignoring malformed config {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
