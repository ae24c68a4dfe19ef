//! Crossterm-backed display and key source for the line editor.

pub mod keys;
pub mod settings;

use crate::editor::Display;
use crossterm::event::{self, Event};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal;
use crossterm::QueueableCommand;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub use keys::{key_input, KeyInput};

/// Display that writes raw text to any `Write` sink through crossterm.
///
/// The editor treats writes as infallible, so the first I/O error is latched
/// here and later writes are skipped until the owner calls
/// [`TerminalDisplay::take_error`].
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            error: None,
        }
    }

    /// Return and clear the latched write error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, queue: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        let result = queue(&mut self.out).and_then(|_| self.out.flush());
        if let Err(err) = result {
            warn!(error = %err, "display write failed");
            self.error = Some(err);
        }
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn write(&mut self, text: &str) {
        self.emit(|out| out.queue(Print(text)).map(|_| ()));
    }

    fn write_prompt(&mut self, marker: &str) {
        if !self.color {
            self.write(marker);
            return;
        }
        self.emit(|out| {
            out.queue(PrintStyledContent(
                marker.with(settings::COLOR_PROMPT).bold(),
            ))
            .map(|_| ())
        });
    }

    fn healthy(&self) -> bool {
        self.error.is_none()
    }
}

/// Read terminal keys on a blocking thread and forward them to `tx`.
///
/// The thread exits after forwarding [`KeyInput::Quit`], when the receiver
/// is dropped, or once `shutdown` is set (checked every poll interval).
pub fn spawn_key_reader(
    tx: mpsc::Sender<KeyInput>,
    shutdown: Arc<AtomicBool>,
) -> JoinHandle<io::Result<()>> {
    tokio::task::spawn_blocking(move || {
        while !shutdown.load(Ordering::Relaxed) {
            if !event::poll(Duration::from_millis(settings::KEY_POLL_MS))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(input) = key_input(&key) else {
                continue;
            };
            let quit = input == KeyInput::Quit;
            if tx.blocking_send(input).is_err() || quit {
                break;
            }
        }
        debug!("key reader stopped");
        Ok(())
    })
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
pub struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn plain_writes_pass_through_unchanged() {
        let mut display = TerminalDisplay::new(Vec::new(), false);
        display.write("hi");
        display.write("\x08 \x08");
        display.write_prompt("$ ");
        assert_eq!(display.get_ref().as_slice(), b"hi\x08 \x08$ ");
        assert!(display.take_error().is_none());
    }

    #[test]
    fn colored_prompt_wraps_marker_in_escape_codes() {
        let mut display = TerminalDisplay::new(Vec::new(), true);
        display.write_prompt("$ ");
        let out = String::from_utf8(display.into_inner()).unwrap();
        assert!(out.contains("$ "));
        assert!(out.contains('\x1b'), "got: {out:?}");
    }

    #[test]
    fn first_error_is_latched_and_later_writes_skipped() {
        let mut display = TerminalDisplay::new(FailingWriter, false);
        display.write("a");
        display.write("b");
        assert!(!display.healthy());
        let err = display.take_error().expect("latched error");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(display.take_error().is_none());
    }
}
