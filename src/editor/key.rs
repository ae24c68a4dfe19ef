//! Raw key events and their classification.

/// Carriage return; submits the current line.
pub const KEY_SUBMIT: &str = "\r";
/// DEL (character code 127), sent by most terminals for backspace.
pub const KEY_BACKSPACE: &str = "\x7f";
pub const KEY_LEFT: &str = "\x1b[D";
pub const KEY_RIGHT: &str = "\x1b[C";

/// One keystroke as delivered by the display collaborator.
///
/// `key` is a single printable character, a carriage return, or an escape
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
}

/// Editor-level meaning of a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A single printable character.
    Char(char),
    Backspace,
    Submit,
    Left,
    Right,
    /// Anything the editor has no binding for.
    Unrecognized(String),
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn char(ch: char) -> Self {
        Self {
            key: ch.to_string(),
        }
    }

    pub fn submit() -> Self {
        Self::new(KEY_SUBMIT)
    }

    pub fn backspace() -> Self {
        Self::new(KEY_BACKSPACE)
    }

    pub fn left() -> Self {
        Self::new(KEY_LEFT)
    }

    pub fn right() -> Self {
        Self::new(KEY_RIGHT)
    }

    /// Classify the raw key string.
    pub fn classify(&self) -> Key {
        match self.key.as_str() {
            KEY_SUBMIT => return Key::Submit,
            KEY_BACKSPACE => return Key::Backspace,
            KEY_LEFT => return Key::Left,
            KEY_RIGHT => return Key::Right,
            _ => {}
        }

        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_control() => Key::Char(ch),
            _ => Key::Unrecognized(self.key.clone()),
        }
    }
}

impl From<char> for KeyEvent {
    fn from(ch: char) -> Self {
        Self::char(ch)
    }
}

impl From<&str> for KeyEvent {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
