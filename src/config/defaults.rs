//! Default configuration constants.

/// File name looked up locally and under the global config directory.
pub(super) const CONFIG_FILE_NAME: &str = "replshim.toml";
/// Directory name under the user config root.
pub(super) const CONFIG_DIR_NAME: &str = "replshim";
pub(super) const DEFAULT_PROMPT: &str = crate::editor::DEFAULT_PROMPT;
pub(super) const DEFAULT_LOG_FILTER: &str = "warn";
/// Upper bound for the responder delay; larger values are rejected.
pub(super) const MAX_RESPONDER_DELAY_MS: u64 = 60_000;
