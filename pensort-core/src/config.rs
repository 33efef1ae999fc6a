use crate::error::PensortError;
use crate::operations::DigitPolicy;
use crate::preview::Preview;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory (relative to the working directory) holding `config.toml`.
pub const CONFIG_DIR: &str = ".pensort";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub normalize: NormalizeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default preview format: "list", "table", "summary", or "json"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preview_format: default_preview(),
            use_color: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Require exactly 12 digits after `_PEN` when normalizing filenames
    #[serde(default = "default_true")]
    pub strict_digits: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            strict_digits: true,
        }
    }
}

fn default_preview() -> String {
    "list".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from .pensort/config.toml if it exists
    pub fn load() -> Result<Self, PensortError> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(CONFIG_DIR).join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, PensortError> {
        let content = fs::read_to_string(path).map_err(|source| PensortError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| PensortError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Configured preview format, falling back to the list view when the value
    /// is not recognised.
    pub fn preview(&self) -> Preview {
        self.defaults.preview_format.parse().unwrap_or_else(|err| {
            tracing::warn!("{}; using list", err);
            Preview::List
        })
    }

    pub fn digit_policy(&self) -> DigitPolicy {
        if self.normalize.strict_digits {
            DigitPolicy::Strict
        } else {
            DigitPolicy::Permissive
        }
    }
}
