//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (EXSCRIPT_*)
//! 2. TOML config file (if EXSCRIPT_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Public URL path prefix under which the hosting environment serves the
/// persisted script files. Emitted `src` references are
/// `<INTERNAL_PREFIX>/<id>.js`; this crate never serves the files itself.
///
/// Process-wide by convention, not per-call configurable.
pub const INTERNAL_PREFIX: &str = "/_scripts";

/// Rendering mode gating the extraction transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Inline scripts are left in place so they stay visible and editable.
    Development,
    /// Inline scripts are externalized to content-addressed files.
    #[default]
    Production,
}

/// Per-call options consumed by [`crate::extract::rewrite`].
///
/// The mode is an explicit value here rather than ambient process state, so
/// the rewrite stays a pure function of its inputs plus the script store.
/// [`AppConfig::load`] defaults it from the environment at the process
/// boundary.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory where persisted script files are written.
    pub output: PathBuf,
    /// Development disables the transform entirely; production enables it.
    pub mode: Mode,
}

impl ExtractOptions {
    /// Production-mode options writing to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self { output: output.into(), mode: Mode::Production }
    }
}

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (EXSCRIPT_*)
/// 2. TOML config file (if EXSCRIPT_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory where persisted script files are written.
    ///
    /// Set via EXSCRIPT_OUTPUT environment variable.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Rendering mode; extraction only runs in production.
    ///
    /// Set via EXSCRIPT_MODE environment variable
    /// (`development` or `production`).
    #[serde(default)]
    pub mode: Mode,
}

fn default_output() -> PathBuf {
    PathBuf::from("./dist/_scripts")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { output: default_output(), mode: Mode::Production }
    }
}

impl AppConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `EXSCRIPT_`
    /// 2. TOML file from `EXSCRIPT_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("EXSCRIPT_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed("EXSCRIPT_").map(|key| key.as_str().to_lowercase().into()));

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// The per-call options this configuration resolves to.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions { output: self.output.clone(), mode: self.mode }
    }
}
