//! Configuration loading.
//!
//! Reads an optional TOML file from the user's config directory (or an
//! explicit `--config` path). Every table and field has a default, so a
//! partial file or no file at all is fine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Which palette the frontend uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub behavior: BehaviorConfig,
    pub theme: ThemeConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Insert thousands separators into the readout.
    pub grouping: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { grouping: true }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Copy every evaluated result to the clipboard.
    pub copy_on_evaluate: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub variant: ThemeVariant,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, the default
    /// path is read if present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Default config location: `<config_dir>/tenkey/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tenkey").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.display.grouping);
        assert!(!config.behavior.copy_on_evaluate);
        assert_eq!(config.theme.variant, ThemeVariant::Dark);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [behavior]
            copy_on_evaluate = true
            "#,
        )
        .unwrap();
        assert!(config.behavior.copy_on_evaluate);
        assert!(config.display.grouping);
        assert_eq!(config.theme.variant, ThemeVariant::Dark);
    }

    #[test]
    fn test_theme_variant_parses() {
        let config: Config = toml::from_str(
            r#"
            [theme]
            variant = "light"

            [display]
            grouping = false
            "#,
        )
        .unwrap();
        assert_eq!(config.theme.variant, ThemeVariant::Light);
        assert!(!config.display.grouping);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [theme]
            variant = "sepia"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/tenkey/config.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_default_path_shape() {
        if let Some(path) = default_path() {
            assert!(path.ends_with("tenkey/config.toml"));
        }
    }
}
