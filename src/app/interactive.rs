//! Raw-mode terminal session.

use crossterm::style::Stylize;
use replshim::build_info::banner_line;
use replshim::config::Config;
use replshim::editor::{Display, LineEditor, LINE_BREAK};
use replshim::error::ReplError;
use replshim::responder::{BuiltinResponder, Responder};
use replshim::session::{run_interactive, SessionEnd};
use replshim::terminal::settings::{CHANNEL_CAPACITY, COLOR_BANNER};
use replshim::terminal::{spawn_key_reader, RawModeGuard, TerminalDisplay};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

pub(crate) async fn run(config: &Config, responder: BuiltinResponder) -> Result<(), ReplError> {
    let banner = banner_line(responder.name());
    if config.display.color {
        println!("{}", banner.as_str().with(COLOR_BANNER));
    } else {
        println!("{banner}");
    }

    let _guard = RawModeGuard::acquire()?;
    let display = TerminalDisplay::new(io::stdout(), config.display.color);
    let mut editor = LineEditor::new(display, config.editor.to_options());

    let (key_tx, key_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let shutdown = Arc::new(AtomicBool::new(false));
    let reader = spawn_key_reader(key_tx, Arc::clone(&shutdown));

    let responder: Arc<dyn Responder> = Arc::new(responder);
    let (end, _stats) = run_interactive(&mut editor, key_rx, responder).await;

    shutdown.store(true, Ordering::Relaxed);
    match reader.await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => warn!(error = %err, "key reader failed"),
        Err(err) => warn!(error = %err, "key reader task panicked"),
    }

    editor.display_mut().write(LINE_BREAK);
    if let Some(err) = editor.display_mut().take_error() {
        return Err(ReplError::Io(err));
    }
    if end == SessionEnd::DisplayFailed {
        return Err(ReplError::Io(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "terminal stopped accepting output",
        )));
    }
    Ok(())
}
