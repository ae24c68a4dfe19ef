//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Source discovery and env
//! overrides live in sibling modules so precedence stays in one place.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{DEFAULT_LOG_FILTER, DEFAULT_PROMPT, MAX_RESPONDER_DELAY_MS};
use crate::editor::{EditorOptions, UnknownKeyPolicy};
use crate::error::ConfigError;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub display: DisplayConfig,
    pub responder: ResponderConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Reject values that parse but make no sense at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.responder.delay_ms > MAX_RESPONDER_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "responder.delay_ms {} exceeds the {MAX_RESPONDER_DELAY_MS} ms limit",
                self.responder.delay_ms
            )));
        }
        if self.editor.prompt.contains(['\r', '\n']) {
            return Err(ConfigError::Invalid(
                "editor.prompt must fit on one line".to_string(),
            ));
        }
        Ok(())
    }
}

/// Line-editor settings under `[editor]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Prompt marker drawn at startup and after every response.
    pub prompt: String,
    pub unknown_keys: UnknownKeyPolicy,
    /// Enable left/right cursor movement inside the line.
    pub cursor: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            unknown_keys: UnknownKeyPolicy::Ignore,
            cursor: false,
        }
    }
}

impl EditorConfig {
    pub fn to_options(&self) -> EditorOptions {
        EditorOptions {
            prompt: self.prompt.clone(),
            unknown_keys: self.unknown_keys,
            cursor: self.cursor,
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Built-in response strategies for the demo REPL.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponderMode {
    /// Respond with the submitted line unchanged.
    #[default]
    Echo,
    Upper,
    Reverse,
    /// Respond with the number of chars in the line.
    Count,
}

impl std::str::FromStr for ResponderMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "echo" => Ok(Self::Echo),
            "upper" => Ok(Self::Upper),
            "reverse" => Ok(Self::Reverse),
            "count" => Ok(Self::Count),
            other => Err(format!(
                "unknown responder `{other}`: expected one of echo, upper, reverse, count"
            )),
        }
    }
}

/// Responder settings under `[responder]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    pub mode: ResponderMode,
    /// Artificial delay before each response, in milliseconds.
    pub delay_ms: u64,
}

/// Log output settings under `[logging]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, e.g. `warn` or `replshim=debug`.
    pub filter: String,
    /// Optional log file. Interactive sessions log nowhere without one.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            file: None,
        }
    }
}

/// Where the loaded config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// `./replshim.toml` in the working directory.
    Local,
    /// Global config under the user config root.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

/// Configuration payload plus where it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
