//! Environment variable overrides.
//!
//! `REPLSHIM_*` variables win over anything read from a config file.

use std::path::PathBuf;

use crate::editor::UnknownKeyPolicy;
use crate::error::ConfigError;

use super::{Config, ResponderMode};

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(prompt) = env_lookup("REPLSHIM_PROMPT") {
        config.editor.prompt = prompt;
    }
    if let Some(policy) = env_lookup("REPLSHIM_UNKNOWN_KEYS") {
        config.editor.unknown_keys = policy
            .parse::<UnknownKeyPolicy>()
            .map_err(|msg| ConfigError::Invalid(format!("REPLSHIM_UNKNOWN_KEYS: {msg}")))?;
    }
    if let Some(mode) = env_lookup("REPLSHIM_RESPONDER") {
        config.responder.mode = mode
            .parse::<ResponderMode>()
            .map_err(|msg| ConfigError::Invalid(format!("REPLSHIM_RESPONDER: {msg}")))?;
    }
    if let Some(delay) = env_lookup("REPLSHIM_DELAY_MS") {
        config.responder.delay_ms = delay.trim().parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid REPLSHIM_DELAY_MS value `{delay}`: expected integer milliseconds"
            ))
        })?;
    }
    if let Some(filter) = env_lookup("REPLSHIM_LOG") {
        config.logging.filter = filter;
    }
    if let Some(file) = env_lookup("REPLSHIM_LOG_FILE") {
        let trimmed = file.trim();
        config.logging.file = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
    }
    Ok(())
}
