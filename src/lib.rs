//! replshim: a line-editing REPL shim for raw terminals.
//!
//! The core is [`editor::LineEditor`]: it consumes raw key events, keeps a
//! single-line buffer, echoes edits to a [`editor::Display`], and hands each
//! submitted line to the embedding application as a one-shot
//! [`editor::PendingResponse`] that is later completed with response text.
//!
//! # Quick start
//!
//! ```
//! use replshim::editor::{Display, EditorOptions, KeyEvent, KeyOutcome, LineEditor};
//!
//! #[derive(Default)]
//! struct Buffer(String);
//!
//! impl Display for Buffer {
//!     fn write(&mut self, text: &str) {
//!         self.0.push_str(text);
//!     }
//! }
//!
//! let mut editor = LineEditor::new(Buffer::default(), EditorOptions::default());
//! editor.initialize();
//! for ch in "hi".chars() {
//!     editor.handle_key(&KeyEvent::char(ch));
//! }
//! if let KeyOutcome::Submitted(pending) = editor.handle_key(&KeyEvent::submit()) {
//!     let reply = pending.line().to_uppercase();
//!     editor.complete(pending, &reply);
//! }
//! assert_eq!(editor.display().0, "$ hi\r\nHI\r\n$ ");
//! ```

pub mod build_info;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod responder;
pub mod session;
pub mod terminal;
#[cfg(test)]
pub mod testsupport;
