//! Shared configuration loader for the calc-parser toolchain.
//!
//! `defaults/calc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`CalcConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/calc.default.toml");

/// Hard upper bound for `parser.max_depth`. Configuration cannot raise it.
pub const MAX_DEPTH_CEILING: usize = 1024;

/// Top-level configuration consumed by calc-parser applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcConfig {
    pub messages: MessageTable,
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Human-readable text for each validity error kind.
///
/// The checker only reports kinds; rendering them goes through this table so that
/// wording (and language) can be swapped without touching the core.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageTable {
    pub left_paren_shortage: String,
    pub right_paren_shortage: String,
    pub operator_invalid: String,
    pub dot_invalid: String,
}

/// Parser limits.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub max_depth: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default `<stage>-<format>` string used when none is given.
    pub format: String,
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
    pub fn build(self) -> Result<CalcConfig, ConfigError> {
        let config: CalcConfig = self.builder.build()?.try_deserialize()?;
        if config.parser.max_depth > MAX_DEPTH_CEILING {
            return Err(ConfigError::Message(format!(
                "parser.max_depth {} exceeds the ceiling of {}",
                config.parser.max_depth, MAX_DEPTH_CEILING
            )));
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CalcConfig, ConfigError> {
    Loader::new().build()
}
