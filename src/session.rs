//! Session loops that connect a key source, the line editor and a responder.
//!
//! Two drivers share the editor:
//! - [`run_interactive`] consumes decoded terminal keys from a channel and
//!   computes responses on spawned tasks, so typing continues while a
//!   response is outstanding.
//! - [`run_piped`] reads lines from a non-terminal input and replays them key
//!   by key, completing each submission before feeding the next key.

use crate::editor::{Display, Key, KeyEvent, KeyOutcome, LineEditor, PendingResponse, LINE_BREAK};
use crate::responder::Responder;
use crate::terminal::settings::CHANNEL_CAPACITY;
use crate::terminal::KeyInput;
use std::borrow::Cow;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub submitted: u64,
    pub completed: u64,
    /// Submit keys dropped because a response was still outstanding.
    pub dropped_submits: u64,
}

/// Why an interactive session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user pressed `Ctrl-C` / `Ctrl-D`.
    Quit,
    /// The key source closed; outstanding responses were drained first.
    InputClosed,
    /// The display reported a failed write.
    DisplayFailed,
}

/// Drive the editor from a stream of decoded terminal keys.
///
/// Submissions are answered on spawned tasks. Only one response may be
/// outstanding at a time; submit keys pressed meanwhile are dropped so two
/// response blocks never interleave.
pub async fn run_interactive<D: Display>(
    editor: &mut LineEditor<D>,
    mut keys: mpsc::Receiver<KeyInput>,
    responder: Arc<dyn Responder>,
) -> (SessionEnd, SessionStats) {
    let (done_tx, mut done_rx) = mpsc::channel::<(PendingResponse, String)>(CHANNEL_CAPACITY);
    let mut stats = SessionStats::default();
    info!(responder = responder.name(), "interactive session started");
    editor.initialize();

    let end = loop {
        if !editor.display().healthy() {
            break SessionEnd::DisplayFailed;
        }
        tokio::select! {
            Some((pending, response)) = done_rx.recv() => {
                editor.complete(pending, &response);
                stats.completed += 1;
            }
            input = keys.recv() => {
                let event = match input {
                    Some(KeyInput::Key(event)) => event,
                    Some(KeyInput::Quit) => break SessionEnd::Quit,
                    None => break SessionEnd::InputClosed,
                };
                if editor.awaiting_response() && event.classify() == Key::Submit {
                    debug!("dropping submit while a response is outstanding");
                    stats.dropped_submits += 1;
                    continue;
                }
                if let KeyOutcome::Submitted(pending) = editor.handle_key(&event) {
                    stats.submitted += 1;
                    let responder = Arc::clone(&responder);
                    let done_tx = done_tx.clone();
                    tokio::spawn(async move {
                        let response = responder.respond(pending.line()).await;
                        if done_tx.send((pending, response)).await.is_err() {
                            warn!("session ended before the response was delivered");
                        }
                    });
                }
            }
        }
    };

    if end == SessionEnd::InputClosed {
        while editor.awaiting_response() && editor.display().healthy() {
            let Some((pending, response)) = done_rx.recv().await else {
                break;
            };
            editor.complete(pending, &response);
            stats.completed += 1;
        }
    }

    info!(?end, ?stats, "interactive session ended");
    (end, stats)
}

/// Drive the editor from line-oriented input such as a pipe or file.
///
/// Each input line is replayed key by key, followed by a carriage return.
/// Every submission is answered and completed before the next key is fed,
/// so a line with an embedded `\r` produces two separate exchanges. Bytes
/// that are not valid UTF-8 are replaced rather than ending the session.
pub async fn run_piped<D, R>(
    editor: &mut LineEditor<D>,
    mut input: R,
    responder: &dyn Responder,
) -> io::Result<SessionStats>
where
    D: Display,
    R: AsyncBufRead + Unpin,
{
    let mut stats = SessionStats::default();
    let mut buf = Vec::new();
    info!(responder = responder.name(), "piped session started");
    editor.initialize();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = decode_line(&buf);
        let events = line
            .chars()
            .map(KeyEvent::char)
            .chain(std::iter::once(KeyEvent::submit()));
        for event in events {
            if let KeyOutcome::Submitted(pending) = editor.handle_key(&event) {
                stats.submitted += 1;
                let response = responder.respond(pending.line()).await;
                editor.complete(pending, &response);
                stats.completed += 1;
            }
        }
        if !editor.display().healthy() {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "display stopped accepting output",
            ));
        }
    }

    editor.display_mut().write(LINE_BREAK);
    info!(?stats, "piped session ended");
    Ok(stats)
}

/// Strip a trailing `\n` or `\r\n` and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = line {
        warn!(
            bytes = raw.len(),
            "input line is not valid UTF-8; replacing invalid bytes"
        );
    }
    line
}
