//! Settings: the configurable category set and budget limits
//!
//! ## Configuration Resolution
//!
//! Settings are loaded with this precedence:
//! 1. An explicit path (e.g. `--config`); it must exist
//! 2. `PENNYWISE_CONFIG` environment variable
//! 3. The default location (`~/.config/pennywise/config.toml` on Linux)
//! 4. Built-in defaults
//!
//! Example file:
//!
//! ```toml
//! data_file = "family.json"
//! categories = ["Food", "Transport", "Housing"]
//!
//! [limits]
//! Food = 60000       # minor units
//! Transport = 15000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::CategoryLimits;

/// Environment variable naming a settings file
pub const CONFIG_ENV_VAR: &str = "PENNYWISE_CONFIG";

/// Categories available when nothing is configured
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Housing",
    "Utilities",
    "Health",
    "Entertainment",
    "Shopping",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The configurable set of categories, in display order
    pub categories: Vec<String>,
    /// Budget limit per category, in minor units
    pub limits: CategoryLimits,
    /// Transaction snapshot file
    pub data_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            limits: CategoryLimits::new(),
            data_file: None,
        }
    }
}

impl Settings {
    /// Load settings following the resolution order above
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::NotFound(format!(
                    "Config file {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::from_file(&path);
            }
            tracing::warn!(path = %path.display(), "{} points to a missing file, ignoring", CONFIG_ENV_VAR);
        }

        if let Some(path) = default_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        tracing::debug!("No settings file found, using defaults");
        Ok(Self::default())
    }

    /// Load settings from a specific TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let settings = parse_settings(&content)?;
        tracing::debug!(
            path = %path.display(),
            categories = settings.categories.len(),
            limits = settings.limits.len(),
            "Loaded settings"
        );
        Ok(settings)
    }

    /// True if `name` is one of the configured categories
    pub fn is_known_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Limit configured for a category
    pub fn limit_for(&self, category: &str) -> Option<i64> {
        self.limits.get(category).copied()
    }
}

/// Default settings file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pennywise").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawSettings {
    categories: Option<Vec<String>>,
    limits: Option<CategoryLimits>,
    data_file: Option<PathBuf>,
}

/// Parse settings from TOML content
pub fn parse_settings(content: &str) -> Result<Settings> {
    let raw: RawSettings = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid settings TOML: {}", e)))?;

    let mut settings = Settings::default();

    if let Some(categories) = raw.categories {
        let mut seen = Vec::with_capacity(categories.len());
        for name in categories {
            let name = name.trim().to_string();
            if name.is_empty() || seen.contains(&name) {
                continue;
            }
            seen.push(name);
        }
        settings.categories = seen;
    }

    if let Some(limits) = raw.limits {
        for (category, limit) in limits {
            // A limit implies the category exists
            if !settings.is_known_category(&category) {
                tracing::debug!(category = %category, "Limit for unlisted category, adding it");
                settings.categories.push(category.clone());
            }
            settings.limits.insert(category, limit);
        }
    }

    settings.data_file = raw.data_file;

    Ok(settings)
}
