//! # Host Configuration
//!
//! TOML settings for the host shell. Every key is optional:
//!
//! ```toml
//! density = 2.0
//! event_capacity = 128
//! disabled_alpha = 0.4
//! screens_dir = "screens"
//! initial_screen = "login_screen"
//! ```
//!
//! A relative `screens_dir` in a file is resolved against the file's
//! directory.

use crate::error::ConfigError;
use layer_shared::constants::{DEFAULT_EVENT_CAPACITY, DEFAULT_INITIAL_SCREEN, DISABLED_ALPHA};
use layer_ui::{Density, EngineConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Host settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayerConfig {
    /// Pixels per dp.
    pub density: f32,
    /// Queue length of each event subscriber.
    pub event_capacity: usize,
    /// Opacity of disabled elements.
    pub disabled_alpha: f32,
    /// Directory holding `<key>.json` screen files.
    pub screens_dir: Option<PathBuf>,
    /// Screen shown first.
    pub initial_screen: String,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            disabled_alpha: DISABLED_ALPHA,
            screens_dir: None,
            initial_screen: DEFAULT_INITIAL_SCREEN.to_owned(),
        }
    }
}

impl LayerConfig {
    /// Parses and checks a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML or unknown keys,
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`LayerConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(dir), Some(base)) = (&config.screens_dir, path.parent()) {
            if dir.is_relative() {
                config.screens_dir = Some(base.join(dir));
            }
        }
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::Invalid {
                field: "density",
                reason: format!("must be positive, got {}", self.density),
            });
        }
        if !(0.0..=1.0).contains(&self.disabled_alpha) {
            return Err(ConfigError::Invalid {
                field: "disabled_alpha",
                reason: format!("must be within 0..=1, got {}", self.disabled_alpha),
            });
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "event_capacity",
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.initial_screen.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "initial_screen",
                reason: "must not be blank".to_owned(),
            });
        }
        Ok(())
    }

    /// Screens directory: `explicit` if given, otherwise `screens_dir`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Missing`] when neither names a directory.
    pub fn resolve_screens_dir(&self, explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
        explicit
            .or_else(|| self.screens_dir.clone())
            .ok_or(ConfigError::Missing("screens_dir"))
    }

    /// Screen key: `explicit` if given, otherwise `initial_screen`.
    #[must_use]
    pub fn resolve_screen_key(&self, explicit: Option<String>) -> String {
        explicit.unwrap_or_else(|| self.initial_screen.clone())
    }

    /// Engine settings derived from this config.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            density: Density(self.density),
            event_capacity: self.event_capacity,
            disabled_alpha: self.disabled_alpha,
        }
    }
}
