//! Single-line editor that turns raw key events into submitted lines.
//!
//! The editor owns the in-progress [`InputLine`] and a [`Display`] it echoes
//! into. Submission is a two-step protocol: [`LineEditor::handle_key`] returns
//! [`KeyOutcome::Submitted`] carrying a one-shot [`PendingResponse`], and the
//! embedding application later hands that token back to
//! [`LineEditor::complete`] together with the response text.
//!
//! Completing a response after a newer line has been submitted is the
//! caller's responsibility to avoid: the two response sequences would
//! interleave on the display.

mod input_line;
mod key;

pub use input_line::InputLine;
pub use key::{Key, KeyEvent, KEY_BACKSPACE, KEY_LEFT, KEY_RIGHT, KEY_SUBMIT};

use serde::Deserialize;
use tracing::{debug, trace, warn};

/// Prompt marker written when no other prompt is configured.
pub const DEFAULT_PROMPT: &str = "$ ";
/// Line break emitted around responses (raw-mode terminals need the `\r`).
pub const LINE_BREAK: &str = "\r\n";
/// Erase the char before the cursor: back, blank, back.
pub const ERASE_BACKWARD: &str = "\x08 \x08";

/// Output surface the editor echoes into.
///
/// Writes are infallible from the editor's point of view. Implementations
/// that can fail keep the error for their owner to inspect.
pub trait Display {
    /// Append raw text or escape sequences.
    fn write(&mut self, text: &str);

    /// Draw the prompt marker. Implementations may style it.
    fn write_prompt(&mut self, marker: &str) {
        self.write(marker);
    }

    /// False once the underlying output has failed; the owner should stop
    /// feeding keys.
    fn healthy(&self) -> bool {
        true
    }
}

impl<D: Display + ?Sized> Display for &mut D {
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }

    fn write_prompt(&mut self, marker: &str) {
        (**self).write_prompt(marker);
    }

    fn healthy(&self) -> bool {
        (**self).healthy()
    }
}

/// What to do with keys the editor has no binding for.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyPolicy {
    /// Drop the key silently.
    #[default]
    Ignore,
    /// Write the raw key to the display without touching the line.
    Echo,
}

impl std::str::FromStr for UnknownKeyPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "echo" => Ok(Self::Echo),
            other => Err(format!(
                "unknown key policy `{other}`: expected `ignore` or `echo`"
            )),
        }
    }
}

/// Editor behavior knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    pub prompt: String,
    pub unknown_keys: UnknownKeyPolicy,
    /// Track a cursor moved by left/right arrows. When off, arrows are
    /// treated as unrecognized keys and edits always happen at the end.
    pub cursor: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            unknown_keys: UnknownKeyPolicy::default(),
            cursor: false,
        }
    }
}

/// One-shot token for a submitted line awaiting its response.
///
/// Deliberately not `Clone`: handing it to [`LineEditor::complete`]
/// consumes it, so a submission can be resumed at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a submitted line must be completed to redraw the prompt"]
pub struct PendingResponse {
    line: String,
    seq: u64,
}

impl PendingResponse {
    /// The submitted line.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Submission sequence number, starting at 1 per editor.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Result of handling one key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The line or cursor changed.
    Edited,
    /// Unrecognized key written verbatim.
    Echoed,
    /// Nothing changed and nothing was written.
    Ignored,
    /// Enter was pressed; the line has been handed off.
    Submitted(PendingResponse),
}

/// Line editor bound to one display.
#[derive(Debug)]
pub struct LineEditor<D> {
    display: D,
    options: EditorOptions,
    line: InputLine,
    next_seq: u64,
    outstanding: usize,
}

impl<D: Display> LineEditor<D> {
    pub fn new(display: D, options: EditorOptions) -> Self {
        Self {
            display,
            options,
            line: InputLine::default(),
            next_seq: 1,
            outstanding: 0,
        }
    }

    /// Write the initial prompt marker.
    pub fn initialize(&mut self) {
        self.display.write_prompt(&self.options.prompt);
    }

    /// Apply one key event to the line and the display.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        match event.classify() {
            Key::Char(ch) => {
                self.insert(ch);
                KeyOutcome::Edited
            }
            Key::Backspace => self.backspace(),
            Key::Submit => KeyOutcome::Submitted(self.submit()),
            Key::Left if self.options.cursor => {
                if !self.line.move_left() {
                    return KeyOutcome::Ignored;
                }
                self.display.write(KEY_LEFT);
                KeyOutcome::Edited
            }
            Key::Right if self.options.cursor => {
                if !self.line.move_right() {
                    return KeyOutcome::Ignored;
                }
                self.display.write(KEY_RIGHT);
                KeyOutcome::Edited
            }
            Key::Left | Key::Right | Key::Unrecognized(_) => self.unrecognized(&event.key),
        }
    }

    /// Deliver the response for a submitted line.
    ///
    /// Writes a line break, the response, another line break and a fresh
    /// prompt, then clears anything typed while the response was pending.
    pub fn complete(&mut self, pending: PendingResponse, response: &str) {
        if pending.seq + 1 != self.next_seq {
            warn!(
                seq = pending.seq,
                latest = self.next_seq - 1,
                "completing a response after a newer submission"
            );
        }
        self.outstanding = self.outstanding.saturating_sub(1);
        debug!(seq = pending.seq, bytes = response.len(), "response completed");

        self.display.write(LINE_BREAK);
        self.display.write(response);
        self.display.write(LINE_BREAK);
        self.display.write_prompt(&self.options.prompt);
        self.line.clear();
    }

    /// Text typed since the last submission.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.line.cursor()
    }

    /// True while at least one submitted line has not been completed.
    pub fn awaiting_response(&self) -> bool {
        self.outstanding > 0
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn insert(&mut self, ch: char) {
        self.line.insert(ch);
        let mut buf = [0u8; 4];
        self.display.write(ch.encode_utf8(&mut buf));
        if !self.line.cursor_at_end() {
            // Redraw the shifted tail, then return to the edit point.
            let tail = self.line.tail().to_string();
            self.display.write(&tail);
            self.display.write(&cursor_back(tail.chars().count()));
        }
    }

    fn backspace(&mut self) -> KeyOutcome {
        if !self.line.delete_before_cursor() {
            return KeyOutcome::Ignored;
        }
        if self.line.cursor_at_end() {
            self.display.write(ERASE_BACKWARD);
        } else {
            let tail = self.line.tail().to_string();
            self.display.write("\x08");
            self.display.write(&tail);
            self.display.write(" ");
            self.display.write(&cursor_back(tail.chars().count() + 1));
        }
        KeyOutcome::Edited
    }

    fn submit(&mut self) -> PendingResponse {
        let pending = PendingResponse {
            line: self.line.as_str().to_string(),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.outstanding += 1;
        debug!(seq = pending.seq, chars = self.line.len(), "line submitted");
        self.line.clear();
        pending
    }

    fn unrecognized(&mut self, raw: &str) -> KeyOutcome {
        match self.options.unknown_keys {
            UnknownKeyPolicy::Echo => {
                self.display.write(raw);
                KeyOutcome::Echoed
            }
            UnknownKeyPolicy::Ignore => {
                trace!(key = ?raw, "ignoring unrecognized key");
                KeyOutcome::Ignored
            }
        }
    }
}

/// CSI sequence moving the cursor `n` columns left.
fn cursor_back(n: usize) -> String {
    format!("\x1b[{n}D")
}
