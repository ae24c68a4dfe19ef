//! CLI argument parsing via clap.

use clap::Parser;
use replshim::build_info::LONG_VERSION;
use replshim::config::ResponderMode;
use std::path::PathBuf;

/// A line-editing REPL shim. Type a line, press Enter, get a response.
#[derive(Debug, Parser)]
#[command(name = "replshim", version, long_version = LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./replshim.toml or ~/.config/replshim/replshim.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the prompt marker.
    #[arg(short = 'p', long = "prompt")]
    pub prompt: Option<String>,

    /// Response strategy: echo, upper, reverse or count.
    #[arg(short = 'r', long = "responder")]
    pub responder: Option<ResponderMode>,

    /// Artificial delay before each response, in milliseconds.
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,

    /// Echo unrecognized keys verbatim instead of dropping them.
    #[arg(long = "echo-unknown")]
    pub echo_unknown: bool,

    /// Enable left/right cursor movement within the line.
    #[arg(long = "cursor")]
    pub cursor: bool,

    /// Write logs to this file.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
