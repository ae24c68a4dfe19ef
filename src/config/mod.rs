//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`REPLSHIM_PROMPT`, `REPLSHIM_RESPONDER`, ...)
//! 2. TOML file specified via the `--config` CLI flag
//! 3. `./replshim.toml` in the current directory
//! 4. `$XDG_CONFIG_HOME/replshim/replshim.toml` (or `~/.config/...`)
//! 5. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use loader::load_config_with_source;
pub use sources::config_root_dir;
pub use types::{
    Config, ConfigSource, DisplayConfig, EditorConfig, LoadedConfig, LoggingConfig,
    ResponderConfig, ResponderMode,
};

#[cfg(test)]
mod tests {
    use super::loader::load_config_from_sources;
    use super::*;
    use crate::editor::UnknownKeyPolicy;
    use crate::testsupport::TestTempDir;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn no_root() -> Option<PathBuf> {
        None
    }

    fn missing(_: &Path) -> Result<String, std::io::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
    }

    #[test]
    fn defaults_apply_without_any_file() {
        let loaded = load_config_from_sources(None, missing, no_env, no_root).unwrap();
        assert_eq!(loaded.source, ConfigSource::BuiltInDefaults);
        assert_eq!(loaded.config.editor.prompt, "$ ");
        assert_eq!(loaded.config.editor.unknown_keys, UnknownKeyPolicy::Ignore);
        assert!(!loaded.config.editor.cursor);
        assert!(loaded.config.display.color);
        assert_eq!(loaded.config.responder.mode, ResponderMode::Echo);
        assert_eq!(loaded.config.logging.filter, "warn");
    }

    #[test]
    fn explicit_file_is_parsed() {
        let dir = TestTempDir::new("config");
        let path = dir.write_text(
            "custom.toml",
            r#"
[editor]
prompt = "> "
unknown_keys = "echo"
cursor = true

[display]
color = false

[responder]
mode = "reverse"
delay_ms = 25
"#,
        );
        let loaded = load_config_with_source(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(loaded.source, ConfigSource::Explicit(path.clone()));
        let config = loaded.config;
        assert_eq!(config.editor.prompt, "> ");
        assert_eq!(config.editor.unknown_keys, UnknownKeyPolicy::Echo);
        assert!(config.editor.cursor);
        assert!(!config.display.color);
        assert_eq!(config.responder.mode, ResponderMode::Reverse);
        assert_eq!(config.responder.delay_ms, 25);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_config_from_sources(Some("nope.toml"), missing, no_env, no_root)
            .unwrap_err();
        assert!(err.to_string().starts_with("io:"), "got: {err}");
    }

    #[test]
    fn global_file_used_when_no_local_file() {
        let read = |path: &Path| {
            if path == Path::new("/cfg/replshim/replshim.toml") {
                Ok("[editor]\nprompt = \"g> \"\n".to_string())
            } else {
                missing(path)
            }
        };
        let loaded =
            load_config_from_sources(None, read, no_env, || Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(
            loaded.source,
            ConfigSource::Global(PathBuf::from("/cfg/replshim/replshim.toml"))
        );
        assert_eq!(loaded.config.editor.prompt, "g> ");
    }

    #[test]
    fn local_file_beats_global_file() {
        let read = |path: &Path| {
            if path == Path::new("replshim.toml") {
                Ok("[editor]\nprompt = \"local> \"\n".to_string())
            } else {
                Ok("[editor]\nprompt = \"global> \"\n".to_string())
            }
        };
        let loaded =
            load_config_from_sources(None, read, no_env, || Some(PathBuf::from("/cfg"))).unwrap();
        assert_eq!(loaded.source, ConfigSource::Local);
        assert_eq!(loaded.config.editor.prompt, "local> ");
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("REPLSHIM_PROMPT", ">> "),
            ("REPLSHIM_UNKNOWN_KEYS", "echo"),
            ("REPLSHIM_RESPONDER", "count"),
            ("REPLSHIM_DELAY_MS", "10"),
            ("REPLSHIM_LOG", "replshim=debug"),
            ("REPLSHIM_LOG_FILE", "/tmp/replshim.log"),
        ]);
        let read = |_: &Path| Ok("[responder]\nmode = \"upper\"\n".to_string());
        let loaded = load_config_from_sources(
            None,
            read,
            |name| env.get(name).map(|v| v.to_string()),
            no_root,
        )
        .unwrap();
        let config = loaded.config;
        assert_eq!(config.editor.prompt, ">> ");
        assert_eq!(config.editor.unknown_keys, UnknownKeyPolicy::Echo);
        assert_eq!(config.responder.mode, ResponderMode::Count);
        assert_eq!(config.responder.delay_ms, 10);
        assert_eq!(config.logging.filter, "replshim=debug");
        assert_eq!(
            config.logging.file,
            Some(PathBuf::from("/tmp/replshim.log"))
        );
    }

    #[test]
    fn invalid_env_values_are_rejected() {
        for (name, value) in [
            ("REPLSHIM_DELAY_MS", "soon"),
            ("REPLSHIM_RESPONDER", "shout"),
            ("REPLSHIM_UNKNOWN_KEYS", "beep"),
        ] {
            let err = load_config_from_sources(
                None,
                missing,
                |key| (key == name).then(|| value.to_string()),
                no_root,
            )
            .unwrap_err();
            assert!(
                err.to_string().starts_with("invalid config:"),
                "{name}: {err}"
            );
        }
    }

    #[test]
    fn oversized_delay_and_multiline_prompt_are_rejected() {
        let read = |_: &Path| Ok("[responder]\ndelay_ms = 600000\n".to_string());
        assert!(load_config_from_sources(None, read, no_env, no_root).is_err());

        let read = |_: &Path| Ok("[editor]\nprompt = \"a\\nb\"\n".to_string());
        assert!(load_config_from_sources(None, read, no_env, no_root).is_err());
    }

    #[test]
    fn malformed_toml_is_reported() {
        let read = |_: &Path| Ok("[editor\nprompt = 1".to_string());
        let err = load_config_from_sources(None, read, no_env, no_root).unwrap_err();
        assert!(err.to_string().starts_with("toml:"), "got: {err}");
    }

    #[test]
    fn editor_config_maps_to_editor_options() {
        let options = EditorConfig {
            prompt: "% ".into(),
            unknown_keys: UnknownKeyPolicy::Echo,
            cursor: true,
        }
        .to_options();
        assert_eq!(options.prompt, "% ");
        assert_eq!(options.unknown_keys, UnknownKeyPolicy::Echo);
        assert!(options.cursor);
    }
}
