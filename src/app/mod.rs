//! Binary-local application orchestration.
//!
//! `main.rs` only parses arguments; this module loads config, installs
//! logging and picks the interactive or piped session.

pub(crate) mod interactive;
pub(crate) mod piped;
pub(crate) mod startup;

use crate::cli::Args;
use replshim::config::load_config_with_source;
use replshim::error::ReplError;
use replshim::logging::init_logging;
use replshim::responder::BuiltinResponder;
use std::io::{self, IsTerminal};
use tracing::info;

/// Run one replshim session to completion.
pub(crate) async fn run(args: Args) -> Result<(), ReplError> {
    let loaded = load_config_with_source(args.config.as_deref())?;
    let mut config = loaded.config;
    startup::apply_cli_overrides(&mut config, &args)?;

    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    let target = init_logging(&config.logging, interactive)?;
    info!(source = ?loaded.source, log = ?target, interactive, "replshim starting");

    let responder = BuiltinResponder::from_config(&config.responder);
    if interactive {
        interactive::run(&config, responder).await
    } else {
        piped::run(&config, responder).await
    }
}
