//! Apply command-line flags on top of the loaded configuration.

use crate::cli::Args;
use replshim::config::Config;
use replshim::editor::UnknownKeyPolicy;
use replshim::error::ConfigError;

/// Flags win over config files and environment variables.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &Args) -> Result<(), ConfigError> {
    if let Some(prompt) = &args.prompt {
        config.editor.prompt = prompt.clone();
    }
    if let Some(mode) = args.responder {
        config.responder.mode = mode;
    }
    if let Some(delay) = args.delay_ms {
        config.responder.delay_ms = delay;
    }
    if args.echo_unknown {
        config.editor.unknown_keys = UnknownKeyPolicy::Echo;
    }
    if args.cursor {
        config.editor.cursor = true;
    }
    if let Some(path) = &args.log_file {
        config.logging.file = Some(path.clone());
    }
    if args.no_color {
        config.display.color = false;
    }
    config.validate()
}
