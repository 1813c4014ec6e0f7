//! Key normalization and configurable key bindings.

use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::Error;

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Letters are always lowercase; case is carried by `shift`.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Other,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// A normalized key press.
///
/// Terminals disagree on whether an uppercase letter carries SHIFT and
/// whether a symbol like `?` does. Letters are folded to lowercase with
/// `shift` set; shift is dropped for every other character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        let mut modifiers = Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        };

        let key = match event.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                modifiers.shift |= c.is_ascii_uppercase();
                Key::Char(c.to_ascii_lowercase())
            }
            KeyCode::Char(c) => {
                modifiers.shift = false;
                Key::Char(c)
            }
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        };

        Self { key, modifiers }
    }
}

impl InputEvent {
    /// Check if this press matches `binding`.
    pub fn matches(&self, binding: &KeyBinding) -> bool {
        self.key == binding.0.key && self.modifiers == binding.0.modifiers
    }

    /// The character, if this is a plain (unmodified) character press.
    pub fn plain_char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }
}

/// A parsed binding such as `q`, `Shift+t`, `Ctrl+c` or `F5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding(InputEvent);

impl FromStr for KeyBinding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::config(format!("invalid key binding: {s:?}"));

        // A lone "+" is a key, not a separator.
        let (mods, key) = match s.rsplit_once('+') {
            Some((mods, "")) if mods.is_empty() || mods.ends_with('+') => {
                (mods.trim_end_matches('+'), "+")
            }
            Some((mods, key)) => (mods, key),
            None => ("", s),
        };

        let mut modifiers = Modifiers::default();
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ => return Err(invalid()),
            }
        }

        let code = match key.to_lowercase().as_str() {
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "tab" => KeyCode::Tab,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            f if f.len() > 1 && f.starts_with('f') => {
                KeyCode::F(f[1..].parse().map_err(|_| invalid())?)
            }
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(invalid()),
                }
            }
        };

        let mut crossterm_mods = KeyModifiers::NONE;
        if modifiers.ctrl {
            crossterm_mods |= KeyModifiers::CONTROL;
        }
        if modifiers.alt {
            crossterm_mods |= KeyModifiers::ALT;
        }
        if modifiers.shift {
            crossterm_mods |= KeyModifiers::SHIFT;
        }

        Ok(Self(InputEvent::from(KeyEvent::new(code, crossterm_mods))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
        InputEvent::from(KeyEvent::new(code, modifiers))
    }

    fn binding(s: &str) -> KeyBinding {
        s.parse().unwrap()
    }

    #[test]
    fn test_plain_char_binding() {
        assert!(press(KeyCode::Char('t'), KeyModifiers::NONE).matches(&binding("t")));
        assert!(!press(KeyCode::Char('T'), KeyModifiers::SHIFT).matches(&binding("t")));
    }

    #[test]
    fn test_shifted_letter_with_or_without_shift_flag() {
        let shifted = binding("Shift+t");
        assert!(press(KeyCode::Char('T'), KeyModifiers::SHIFT).matches(&shifted));
        assert!(press(KeyCode::Char('T'), KeyModifiers::NONE).matches(&shifted));
        assert_eq!(binding("T"), shifted);
    }

    #[test]
    fn test_symbols_ignore_shift() {
        assert!(press(KeyCode::Char('?'), KeyModifiers::SHIFT).matches(&binding("?")));
        assert!(press(KeyCode::Char('+'), KeyModifiers::SHIFT).matches(&binding("+")));
        assert!(press(KeyCode::Char('+'), KeyModifiers::CONTROL).matches(&binding("Ctrl++")));
    }

    #[test]
    fn test_ctrl_binding() {
        assert!(press(KeyCode::Char('c'), KeyModifiers::CONTROL).matches(&binding("Ctrl+c")));
        assert!(!press(KeyCode::Char('c'), KeyModifiers::NONE).matches(&binding("Ctrl+c")));
    }

    #[test]
    fn test_named_keys() {
        assert!(press(KeyCode::Esc, KeyModifiers::NONE).matches(&binding("Esc")));
        assert!(press(KeyCode::F(5), KeyModifiers::NONE).matches(&binding("F5")));
        assert!(!press(KeyCode::Enter, KeyModifiers::NONE).matches(&binding("Tab")));
    }

    #[test]
    fn test_invalid_bindings() {
        assert!("Hyper+x".parse::<KeyBinding>().is_err());
        assert!("xyz".parse::<KeyBinding>().is_err());
        assert!("Fx".parse::<KeyBinding>().is_err());
    }

    #[test]
    fn test_plain_char() {
        assert_eq!(press(KeyCode::Char(']'), KeyModifiers::NONE).plain_char(), Some(']'));
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL).plain_char(), None);
    }
}
