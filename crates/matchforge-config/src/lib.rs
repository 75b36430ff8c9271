//! Configuration system for MatchForge.
//!
//! Load diagnostics configuration from TOML or YAML files to decide what
//! happens to failed matches without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use matchforge_config::{DiagnosticMode, MatchConfig};
//!
//! let config = MatchConfig::from_toml_str(r#"
//!     [diagnostics]
//!     mode = "log"
//!     capture_backtrace = true
//! "#).unwrap();
//!
//! assert_eq!(config.diagnostics.mode, DiagnosticMode::Log);
//! assert!(config.diagnostics.capture_backtrace);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use matchforge_config::MatchConfig;
//!
//! let config = MatchConfig::load("matchforge.toml").unwrap_or_default();
//! // Failures stay silent if the file doesn't exist
//! ```

use std::path::Path;

use matchforge_core::diagnostics::{self, BacktraceProvider, PanicSink, TracingSink};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main MatchForge configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchConfig {
    /// Failure reporting.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl MatchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the diagnostic mode.
    pub fn with_mode(mut self, mode: DiagnosticMode) -> Self {
        self.diagnostics.mode = mode;
        self
    }

    /// Enables or disables call stacks in failure messages.
    pub fn with_backtrace(mut self, capture: bool) -> Self {
        self.diagnostics.capture_backtrace = capture;
        self
    }

    /// Rejects combinations that cannot take effect.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.diagnostics.capture_backtrace && self.diagnostics.mode == DiagnosticMode::Silent {
            return Err(ConfigError::Invalid(
                "capture_backtrace requires a diagnostics mode other than silent".to_string(),
            ));
        }
        Ok(())
    }

    /// Installs the process-wide sink and trace provider described by this
    /// configuration, replacing whatever was installed before.
    ///
    /// Nothing is installed if the configuration fails [`validate`](Self::validate).
    pub fn install(&self) -> Result<(), ConfigError> {
        self.validate()?;

        match self.diagnostics.mode {
            DiagnosticMode::Silent => diagnostics::clear_sink(),
            DiagnosticMode::Log => diagnostics::set_sink(TracingSink),
            DiagnosticMode::Panic => diagnostics::set_sink(PanicSink),
        }

        if self.diagnostics.capture_backtrace {
            diagnostics::set_trace_provider(BacktraceProvider);
        } else {
            diagnostics::clear_trace_provider();
        }

        info!(
            event = "diagnostics_installed",
            mode = ?self.diagnostics.mode,
            capture_backtrace = self.diagnostics.capture_backtrace,
        );
        Ok(())
    }
}

/// Failure reporting configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DiagnosticsConfig {
    /// What happens to a failure message.
    #[serde(default)]
    pub mode: DiagnosticMode,

    /// Append a captured call stack to every failure message.
    #[serde(default)]
    pub capture_backtrace: bool,
}

/// Where failure messages go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticMode {
    /// No sink; failures only show up as `false`.
    #[default]
    Silent,

    /// Failures are logged through `tracing` at warn level.
    Log,

    /// The first failure panics.
    Panic,
}
