//! Shared configuration loader for the scribe toolchain.
//!
//! `defaults/scribe.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer project files and
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`ScribeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use scribe_babel::ExportOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/scribe.default.toml");

/// Top-level configuration consumed by scribe applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ScribeConfig {
    pub export: ExportConfig,
    pub convert: ConvertConfig,
}

/// Mirrors [`ExportOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub body_only: bool,
    pub visible_only: bool,
    #[serde(default)]
    pub asynchronous: bool,
    #[serde(default)]
    pub extension: Option<String>,
}

impl From<ExportConfig> for ExportOptions {
    fn from(config: ExportConfig) -> Self {
        ExportOptions {
            body_only: config.body_only,
            visible_only: config.visible_only,
            extension: config.extension,
            asynchronous: config.asynchronous,
        }
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        config.clone().into()
    }
}

/// Conversion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ScribeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ScribeConfig, ConfigError> {
    Loader::new().build()
}
