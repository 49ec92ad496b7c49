//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/gentree/gentree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `GENTREE_*` prefix, `__` as section separator

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::domain::{PrintOptions, MAX_INDENT_WIDTH};
use crate::errors::{SettingsError, SettingsResult};

/// Unified configuration for gentree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default for sorted insertion when building trees from the CLI
    pub keep_sorted: bool,
    /// Text rendering
    pub print: PrintOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keep_sorted: true,
            print: PrintOptions::default(),
        }
    }
}

/// Raw print options; `None` means "not specified, inherit".
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPrintOptions {
    pub indent_width: Option<usize>,
    pub empty_marker: Option<String>,
    pub show_vacant: Option<bool>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub keep_sorted: Option<bool>,
    pub print: RawPrintOptions,
}

/// Get the XDG config directory for gentree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gentree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("gentree.toml"))
}

/// A present but unparsable value is logged and ignored.
fn env_value<V: DeserializeOwned>(config: &Config, key: &str) -> Option<V> {
    match config.get::<V>(key) {
        Ok(val) => Some(val),
        Err(ConfigError::NotFound(_)) => None,
        Err(e) => {
            warn!("ignoring environment override for {}: {}", key, e);
            None
        }
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> SettingsResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::InvalidFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            print: PrintOptions {
                indent_width: overlay
                    .print
                    .indent_width
                    .unwrap_or(self.print.indent_width),
                empty_marker: overlay
                    .print
                    .empty_marker
                    .clone()
                    .unwrap_or_else(|| self.print.empty_marker.clone()),
                show_vacant: overlay.print.show_vacant.unwrap_or(self.print.show_vacant),
            },
            keep_sorted: overlay.keep_sorted.unwrap_or(self.keep_sorted),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file, must exist when given
    pub fn load(config_file: Option<&Path>) -> SettingsResult<Self> {
        Self::load_with_global(global_config_path().as_deref(), config_file)
    }

    /// Like [`Settings::load`] with an explicit global config location.
    #[instrument(level = "debug")]
    pub fn load_with_global(
        global_file: Option<&Path>,
        config_file: Option<&Path>,
    ) -> SettingsResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, optional
        if let Some(global_path) = global_file {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file, required
        if let Some(path) = config_file {
            debug!("loading config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        let settings = Self::apply_env_overrides(current)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> SettingsResult<()> {
        if self.print.indent_width > MAX_INDENT_WIDTH {
            return Err(SettingsError::InvalidValue {
                key: "print.indent_width",
                reason: format!(
                    "{} exceeds the maximum of {}",
                    self.print.indent_width, MAX_INDENT_WIDTH
                ),
            });
        }
        Ok(())
    }

    /// Apply GENTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> SettingsResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("GENTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        if let Some(val) = env_value::<usize>(&config, "print.indent_width") {
            settings.print.indent_width = val;
        }
        if let Some(val) = env_value::<String>(&config, "print.empty_marker") {
            settings.print.empty_marker = val;
        }
        if let Some(val) = env_value::<bool>(&config, "print.show_vacant") {
            settings.print.show_vacant = val;
        }
        if let Some(val) = env_value::<bool>(&config, "keep_sorted") {
            settings.keep_sorted = val;
        }

        Ok(settings)
    }

    /// Effective settings as TOML.
    pub fn to_toml(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.print.indent_width, 3);
        assert_eq!(settings.print.empty_marker, "null");
        assert!(settings.print.show_vacant);
        assert!(settings.keep_sorted);
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let overlay: RawSettings = toml::from_str("[print]\nindent_width = 4\n").unwrap();
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.print.indent_width, 4);
        assert_eq!(merged.print.empty_marker, "null");
        assert!(merged.keep_sorted);
    }

    #[test]
    fn test_validate_rejects_wide_indent() {
        let mut settings = Settings::default();
        settings.print.indent_width = MAX_INDENT_WIDTH;
        assert!(settings.validate().is_ok());

        settings.print.indent_width = MAX_INDENT_WIDTH + 1;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidValue { key: "print.indent_width", .. })
        ));
    }

    #[test]
    fn test_env_value_ignores_unparsable_value() {
        let config = Config::builder()
            .set_override("print.indent_width", "abc")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(env_value::<usize>(&config, "print.indent_width"), None);
        assert_eq!(env_value::<String>(&config, "print.indent_width"), Some("abc".to_string()));
        assert_eq!(env_value::<bool>(&config, "keep_sorted"), None);
    }

    #[test]
    fn test_to_toml_round_trips_through_raw() {
        let rendered = Settings::default().to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&rendered).unwrap();
        assert_eq!(raw.print.indent_width, Some(3));
        assert_eq!(raw.keep_sorted, Some(true));
    }
}
