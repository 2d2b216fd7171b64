//! Configuration management with layered hierarchy

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::error::{InventoryError, Result};

/// Default chrono format used when showing request dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Inventory configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engineer name offered when a requisition prompt is left empty
    pub engineer: Option<String>,

    /// chrono format string for request dates
    pub date_format: Option<String>,

    /// Colored output
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    ///
    /// An explicit `path` replaces the global config file and must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        match path {
            Some(path) => config.merge(Self::from_file(path)?),
            None => {
                if let Some(global_path) = Self::global_config_path() {
                    if global_path.exists() {
                        config.merge(Self::from_file(&global_path)?);
                    }
                }
            }
        }

        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        Ok(config)
    }

    /// Read a single YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| InventoryError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&contents).map_err(|message| InventoryError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    fn parse(contents: &str) -> std::result::Result<Self, String> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(contents).map_err(|e| e.to_string())?;
        if let Some(format) = &config.date_format {
            check_date_format(format)?;
        }
        Ok(config)
    }

    /// Build the environment layer using the given variable lookup
    fn from_env(var: impl Fn(&str) -> Option<String>) -> Self {
        let color = var("INVENTORY_COLOR").and_then(|value| {
            match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" => Some(false),
                other => {
                    tracing::warn!(value = other, "ignoring unrecognised INVENTORY_COLOR");
                    None
                }
            }
        });

        Self {
            engineer: var("INVENTORY_ENGINEER").filter(|v| !v.trim().is_empty()),
            date_format: var("INVENTORY_DATE_FORMAT")
                .filter(|v| !v.trim().is_empty())
                .filter(|v| match check_date_format(v) {
                    Ok(()) => true,
                    Err(message) => {
                        tracing::warn!(%message, "ignoring invalid INVENTORY_DATE_FORMAT");
                        false
                    }
                }),
            color,
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "inventory")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.engineer.is_some() {
            self.engineer = other.engineer;
        }
        if other.date_format.is_some() {
            self.date_format = other.date_format;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }

    /// Get the date format, falling back to the default
    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    /// Whether colored output is allowed (defaults to on)
    pub fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}

/// Reject chrono format strings with unknown or incomplete specifiers
fn check_date_format(format: &str) -> std::result::Result<(), String> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(format!("date_format '{format}' is not a valid chrono format"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.date_format(), DEFAULT_DATE_FORMAT);
        assert!(config.color());
        assert!(config.engineer.is_none());
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "engineer: Grace\ndate_format: \"%d/%m/%Y\"\ncolor: false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.engineer.as_deref(), Some("Grace"));
        assert_eq!(config.date_format(), "%d/%m/%Y");
        assert!(!config.color());
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "color: [not, a, bool]\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, InventoryError::Config { .. }));
    }

    #[test]
    fn test_invalid_date_format_in_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "date_format: \"%Q\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, InventoryError::Config { .. }));
        assert!(err.to_string().contains("not a valid chrono format"));
    }

    #[test]
    fn test_env_ignores_invalid_date_format() {
        let config = Config::from_env(env(&[("INVENTORY_DATE_FORMAT", "%Q")]));
        assert!(config.date_format.is_none());
        assert_eq!(config.date_format(), DEFAULT_DATE_FORMAT);

        let config = Config::from_env(env(&[("INVENTORY_DATE_FORMAT", "DAY %j")]));
        assert_eq!(config.date_format(), "DAY %j");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, InventoryError::Config { .. }));
    }

    #[test]
    fn test_env_layer() {
        let config = Config::from_env(env(&[
            ("INVENTORY_ENGINEER", "Ada"),
            ("INVENTORY_COLOR", "off"),
        ]));
        assert_eq!(config.engineer.as_deref(), Some("Ada"));
        assert_eq!(config.color, Some(false));
        assert!(config.date_format.is_none());
    }

    #[test]
    fn test_env_ignores_unknown_color() {
        let config = Config::from_env(env(&[("INVENTORY_COLOR", "maybe")]));
        assert!(config.color.is_none());
    }

    #[test]
    fn test_merge_prefers_later_layer() {
        let mut config = Config {
            engineer: Some("File".to_string()),
            date_format: Some("%Y".to_string()),
            color: None,
        };
        config.merge(Config {
            engineer: Some("Env".to_string()),
            date_format: None,
            color: Some(false),
        });

        assert_eq!(config.engineer.as_deref(), Some("Env"));
        assert_eq!(config.date_format(), "%Y");
        assert_eq!(config.color, Some(false));
    }
}
