//! Translate crossterm key events into the raw key strings the editor reads.
//!
//! Crossterm decodes escape sequences for us; this module re-encodes them
//! so the editor sees the same strings a raw terminal stream would carry.

use crate::editor::{KeyEvent, KEY_BACKSPACE, KEY_LEFT, KEY_RIGHT, KEY_SUBMIT};
use crossterm::event::{self, KeyCode, KeyEventKind, KeyModifiers};

/// One decoded terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    /// A keystroke for the editor.
    Key(KeyEvent),
    /// `Ctrl-C` or `Ctrl-D`: end the session.
    Quit,
}

/// Map one crossterm key event. Returns `None` for releases and keys that
/// have no raw encoding.
pub fn key_input(key: &event::KeyEvent) -> Option<KeyInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let raw = match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => return Some(KeyInput::Quit),
        KeyCode::Char(ch) if ctrl => {
            // Ctrl-letter maps to the C0 control code, e.g. Ctrl-A -> 0x01.
            let lower = ch.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return None;
            }
            char::from(lower as u8 - b'a' + 1).to_string()
        }
        // Meta-prefixed, as a raw terminal sends Alt-x.
        KeyCode::Char(ch) if alt => format!("\x1b{ch}"),
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => KEY_SUBMIT.to_string(),
        KeyCode::Backspace => KEY_BACKSPACE.to_string(),
        KeyCode::Left => KEY_LEFT.to_string(),
        KeyCode::Right => KEY_RIGHT.to_string(),
        KeyCode::Up => "\x1b[A".to_string(),
        KeyCode::Down => "\x1b[B".to_string(),
        KeyCode::Home => "\x1b[H".to_string(),
        KeyCode::End => "\x1b[F".to_string(),
        KeyCode::Delete => "\x1b[3~".to_string(),
        KeyCode::Tab => "\t".to_string(),
        KeyCode::Esc => "\x1b".to_string(),
        _ => return None,
    };
    Some(KeyInput::Key(KeyEvent::new(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{EditorOptions, Key, KeyOutcome, LineEditor};
    use crate::testsupport::RecordingDisplay;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> event::KeyEvent {
        event::KeyEvent::new(code, modifiers)
    }

    fn editor_key(code: KeyCode) -> Key {
        match key_input(&press(code, KeyModifiers::NONE)) {
            Some(KeyInput::Key(event)) => event.classify(),
            other => panic!("unexpected input {other:?}"),
        }
    }

    #[test]
    fn editing_keys_map_to_editor_bindings() {
        assert_eq!(editor_key(KeyCode::Char('h')), Key::Char('h'));
        assert_eq!(editor_key(KeyCode::Enter), Key::Submit);
        assert_eq!(editor_key(KeyCode::Backspace), Key::Backspace);
        assert_eq!(editor_key(KeyCode::Left), Key::Left);
        assert_eq!(editor_key(KeyCode::Right), Key::Right);
    }

    #[test]
    fn other_keys_become_unrecognized_sequences() {
        assert_eq!(
            editor_key(KeyCode::Up),
            Key::Unrecognized("\x1b[A".to_string())
        );
        assert_eq!(editor_key(KeyCode::Tab), Key::Unrecognized("\t".to_string()));
    }

    #[test]
    fn ctrl_c_and_ctrl_d_quit() {
        for ch in ['c', 'd'] {
            assert_eq!(
                key_input(&press(KeyCode::Char(ch), KeyModifiers::CONTROL)),
                Some(KeyInput::Quit)
            );
        }
    }

    #[test]
    fn ctrl_letters_encode_as_control_codes() {
        assert_eq!(
            key_input(&press(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Some(KeyInput::Key(KeyEvent::new("\x01")))
        );
    }

    #[test]
    fn alt_chars_are_meta_prefixed_and_unrecognized() {
        let Some(KeyInput::Key(event)) = key_input(&press(KeyCode::Char('x'), KeyModifiers::ALT))
        else {
            panic!("alt-x should produce a key");
        };
        assert_eq!(event, KeyEvent::new("\x1bx"));
        assert_eq!(event.classify(), Key::Unrecognized("\x1bx".to_string()));
    }

    #[test]
    fn alt_chars_are_never_echoed_as_plain_text() {
        let mut editor = LineEditor::new(RecordingDisplay::default(), EditorOptions::default());
        let Some(KeyInput::Key(event)) = key_input(&press(KeyCode::Char('x'), KeyModifiers::ALT))
        else {
            panic!("alt-x should produce a key");
        };
        assert_eq!(editor.handle_key(&event), KeyOutcome::Ignored);
        assert_eq!(editor.line(), "");
        assert!(editor.display().writes().is_empty());
    }

    #[test]
    fn releases_are_skipped() {
        let mut key = press(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_input(&key), None);
    }
}
