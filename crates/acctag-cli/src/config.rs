//! Command configuration parsed from environment variables.
//!
//! Every setting can be supplied through an environment variable prefixed
//! with `ACCTAG_`; command-line flags take precedence.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

const LOG_LEVEL_VAR: &str = "ACCTAG_LOG_LEVEL";
const FORMAT_VAR: &str = "ACCTAG_FORMAT";
const CACHE_VAR: &str = "ACCTAG_CACHE";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so diagnostics stay quiet unless asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every rule firing and every swap.
    Trace,
    /// One line per standardization and per conflict.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub const fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown output format '{s}', expected one of: text, json"
            ))),
        }
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, CliError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CliError::InvalidConfig(format!(
            "invalid value '{value}' for {name}, expected true or false"
        ))),
    }
}

/// Configuration for the `acctag` command.
///
/// # Environment Variables
///
/// - `ACCTAG_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `ACCTAG_FORMAT`: output format (text, json)
/// - `ACCTAG_CACHE`: memoize standardization results (true, false)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level for diagnostics on stderr.
    pub log_level: LogLevel,
    /// Rendering of results on stdout.
    pub format: OutputFormat,
    /// Whether repeated tags are standardized once.
    pub cache: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
            cache: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing keys.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => defaults.log_level,
        };
        let format = match lookup(FORMAT_VAR) {
            Some(val) => val.parse()?,
            None => defaults.format,
        };
        let cache = match lookup(CACHE_VAR) {
            Some(val) => parse_flag(CACHE_VAR, &val)?,
            None => defaults.cache,
        };
        Ok(Self {
            log_level,
            format,
            cache,
        })
    }

    /// Apply command-line overrides on top of environment settings.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, json: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if json {
            self.format = OutputFormat::Json;
        }
        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub const fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
