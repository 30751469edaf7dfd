// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyModifiers};

/// Code units below this value are C0 control characters, which are never inserted into
/// the line buffer.
pub const FIRST_PRINTABLE_CODE: u32 = 32;

/// A single key press, as reported by a [`TerminalPort`].
///
/// `code` and `modifiers` are what the [`KeyBindingTable`] matches on. `character` is the
/// text the key would produce, which is what gets inserted when no binding matches. Keys
/// that don't produce text (arrows, function keys, etc) carry `'\0'`.
///
/// [`TerminalPort`]: crate::TerminalPort
/// [`KeyBindingTable`]: crate::KeyBindingTable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub character: char,
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a key event, deriving `character` from the key code and modifiers.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            character: character_for(code, modifiers),
            code,
            modifiers,
        }
    }

    /// Create a key event with an explicit `character`, for ports that already know the
    /// text a key press produces.
    #[must_use]
    pub fn with_character(character: char, code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            character,
            code,
            modifiers,
        }
    }

    /// Returns `true` if `character` is a printable code (code ≥ 32).
    #[must_use]
    pub fn is_printable(&self) -> bool { u32::from(self.character) >= FIRST_PRINTABLE_CODE }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self { Self::new(code, KeyModifiers::NONE) }
}

impl From<char> for KeyEvent {
    fn from(character: char) -> Self { Self::new(KeyCode::Char(character), KeyModifiers::NONE) }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(key_event: crossterm::event::KeyEvent) -> Self {
        Self::new(key_event.code, key_event.modifiers)
    }
}

/// The text a key press produces, the way a console key info reports it. Ctrl + an ASCII
/// key yields the matching C0 control code. Ctrl + Alt is how AltGr arrives on Windows,
/// so it keeps the character.
fn character_for(code: KeyCode, modifiers: KeyModifiers) -> char {
    let is_ctrl_only =
        modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT);
    match code {
        KeyCode::Char(ch) if is_ctrl_only => {
            u8::try_from(ch).map_or('\0', |byte| char::from(byte & 0x1f))
        }
        KeyCode::Char(ch) => ch,
        KeyCode::Enter => '\r',
        KeyCode::Tab | KeyCode::BackTab => '\t',
        KeyCode::Backspace => '\x08',
        KeyCode::Esc => '\x1b',
        _ => '\0',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_char_is_printable() {
        let key_event = KeyEvent::from('a');
        assert_eq!(key_event.character, 'a');
        assert!(key_event.is_printable());
    }

    #[test]
    fn test_shifted_char_keeps_character() {
        let key_event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_event.character, 'A');
        assert!(key_event.is_printable());
    }

    #[test]
    fn test_ctrl_char_is_control_code() {
        let key_event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(key_event.character, '\x01');
        assert!(!key_event.is_printable());
    }

    #[test]
    fn test_altgr_char_keeps_character() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for ch in ['@', '{', '[', '\\', '€'] {
            let key_event = KeyEvent::new(KeyCode::Char(ch), altgr);
            assert_eq!(key_event.character, ch);
            assert!(key_event.is_printable());
        }
    }

    #[test]
    fn test_explicit_character() {
        let key_event = KeyEvent::with_character('é', KeyCode::Char('e'), KeyModifiers::ALT);
        assert_eq!(key_event.character, 'é');
        assert_eq!(key_event.code, KeyCode::Char('e'));
        assert!(key_event.is_printable());
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(KeyEvent::from(KeyCode::Enter).character, '\r');
        assert_eq!(KeyEvent::from(KeyCode::Tab).character, '\t');
        assert_eq!(KeyEvent::from(KeyCode::Left).character, '\0');
        assert!(!KeyEvent::from(KeyCode::F(1)).is_printable());
    }

    #[test]
    fn test_from_crossterm_key_event() {
        let crossterm_event =
            crossterm::event::KeyEvent::new(KeyCode::Char('z'), KeyModifiers::ALT);
        let key_event = KeyEvent::from(crossterm_event);
        assert_eq!(key_event.code, KeyCode::Char('z'));
        assert_eq!(key_event.modifiers, KeyModifiers::ALT);
        assert_eq!(key_event.character, 'z');
    }
}
