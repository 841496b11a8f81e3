//! Key events as seen by the capture loops.

use crossterm::event::{self, Event, KeyEventKind};

/// Key codes for keyboard input.
///
/// A subset of crossterm's `KeyCode`: what menus, text boxes and cursor
/// capture react to, plus the keys callers commonly use as terminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// Escape key.
    Esc,
}

impl KeyCode {
    /// Whether this is one of the four arrow keys.
    pub const fn is_arrow(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Up | Self::Down)
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers held during the press.
    pub modifiers: KeyModifiers,
}

impl Key {
    /// A key press without modifiers.
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Shorthand for an unmodified character key.
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Convert a crossterm event, keeping key presses only.
    pub fn from_event(event: &Event) -> Option<Self> {
        let Event::Key(key_event) = event else {
            return None;
        };
        // Only process key press events (not release or repeat)
        if key_event.kind != KeyEventKind::Press {
            return None;
        }
        Some(Self {
            code: convert_key_code(key_event.code)?,
            modifiers: convert_modifiers(key_event.modifiers),
        })
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::F(n) => KeyCode::F(n),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(event::KeyModifiers::SHIFT),
        control: mods.contains(event::KeyModifiers::CONTROL),
        alt: mods.contains(event::KeyModifiers::ALT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn press(code: event::KeyCode, modifiers: event::KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn converts_press() {
        let key = Key::from_event(&press(event::KeyCode::Up, event::KeyModifiers::NONE)).unwrap();
        assert_eq!(key, Key::new(KeyCode::Up));
    }

    #[test]
    fn keeps_modifiers() {
        let key = Key::from_event(&press(
            event::KeyCode::Char('c'),
            event::KeyModifiers::CONTROL,
        ))
        .unwrap();
        assert_eq!(key.code, KeyCode::Char('c'));
        assert!(key.modifiers.control);
        assert!(!key.modifiers.shift);
    }

    #[test]
    fn ignores_release_and_non_key_events() {
        let release = Event::Key(KeyEvent {
            code: event::KeyCode::Enter,
            modifiers: event::KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(Key::from_event(&release), None);
        assert_eq!(Key::from_event(&Event::Resize(80, 24)), None);
        assert_eq!(Key::from_event(&Event::FocusGained), None);
    }

    #[test]
    fn arrows() {
        assert!(KeyCode::Left.is_arrow());
        assert!(!KeyCode::Enter.is_arrow());
    }
}
