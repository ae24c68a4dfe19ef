//! CLI entry point for replshim.

mod app;
mod cli;

use clap::Parser;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    if let Err(e) = app::run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
