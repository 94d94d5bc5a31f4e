use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_ROTATE};

/// Source of key bytes, read without blocking.
pub trait InputSource {
    /// Drains everything pending and returns only the last key, if any.
    fn drain_last(&mut self) -> io::Result<Option<u8>>;
}

/// Reads key events from the crossterm event queue.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn drain_last(&mut self) -> io::Result<Option<u8>> {
        let mut last = None;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                // an unmapped key still replaces whatever came before it
                last = key_byte(key);
            }
        }
        Ok(last)
    }
}

/// The byte a key press would produce on a raw tty. Arrow keys stand in for
/// their letter bindings.
pub fn key_byte(key: KeyEvent) -> Option<u8> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii() => {
            let byte = c as u8;
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                Some(byte & 0x1f)
            } else {
                Some(byte)
            }
        }
        KeyCode::Up => Some(KEY_ROTATE),
        KeyCode::Down => Some(KEY_DOWN),
        KeyCode::Left => Some(KEY_LEFT),
        KeyCode::Right => Some(KEY_RIGHT),
        KeyCode::Enter => Some(b'\r'),
        KeyCode::Tab => Some(b'\t'),
        KeyCode::Backspace => Some(0x7f),
        KeyCode::Esc => Some(0x1b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Intent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_map_to_their_bytes() {
        assert_eq!(key_byte(press(KeyCode::Char('w'))), Some(b'w'));
        assert_eq!(key_byte(press(KeyCode::Char('q'))), Some(b'q'));
        assert_eq!(key_byte(press(KeyCode::Char('Q'))), Some(b'Q'));
    }

    #[test]
    fn arrows_follow_letter_bindings() {
        let intent = |code| key_byte(press(code)).and_then(Intent::from_byte);
        assert_eq!(intent(KeyCode::Up), Some(Intent::Rotate));
        assert_eq!(intent(KeyCode::Down), Some(Intent::Down));
        assert_eq!(intent(KeyCode::Left), Some(Intent::Left));
        assert_eq!(intent(KeyCode::Right), Some(Intent::Right));
    }

    #[test]
    fn control_chords_are_control_bytes() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_byte(ctrl_c), Some(0x03));
        assert_eq!(Intent::from_byte(0x03), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key_byte(press(KeyCode::F(1))), None);
        assert_eq!(key_byte(press(KeyCode::Char('é'))), None);
        assert_eq!(key_byte(press(KeyCode::Esc)), Some(0x1b));
    }
}
