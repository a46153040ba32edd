//! Keypad input abstraction layer.

pub mod mock;

pub use mock::{MockInput, MockInputError};

use crate::engine::Key;

/// Keypad scan codes delivered by the key-matrix driver.
pub mod code {
    pub const ESC: u8 = 27;
    pub const BACKSPACE: u8 = 8;
    pub const TAB: u8 = 9;
    pub const ENTER: u8 = 13;
    pub const SHIFT: u8 = 14;
    pub const ALT: u8 = 15;
    pub const UP: u8 = 16;
    pub const DOWN: u8 = 17;
    pub const LEFT: u8 = 18;
    pub const RIGHT: u8 = 19;
}

/// Physical keys of the 4x5 keypad.
///
/// ```text
/// ESC    1     2   3      BKSP
/// TAB    4     5   6      ENTER
/// SHIFT  7     8   9      UP
/// ALT    LEFT  0   RIGHT  DOWN
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyEvent {
    Digit(u8),
    Escape,
    Backspace,
    Tab,
    Enter,
    Shift,
    Alt,
    Up,
    Down,
    Left,
    Right,
}

impl KeyEvent {
    /// Decodes a scan code; `None` for codes the keypad never emits.
    pub const fn from_code(value: u8) -> Option<Self> {
        Some(match value {
            b'0'..=b'9' => Self::Digit(value - b'0'),
            code::ESC => Self::Escape,
            code::BACKSPACE => Self::Backspace,
            code::TAB => Self::Tab,
            code::ENTER => Self::Enter,
            code::SHIFT => Self::Shift,
            code::ALT => Self::Alt,
            code::UP => Self::Up,
            code::DOWN => Self::Down,
            code::LEFT => Self::Left,
            code::RIGHT => Self::Right,
            _ => return None,
        })
    }

    /// Engine key for text-entry keys; `None` for navigation and exit, which
    /// the editor handles itself.
    pub const fn engine_key(self) -> Option<Key> {
        match self {
            Self::Digit(digit) => Some(Key::Digit(digit)),
            Self::Shift => Some(Key::Shift),
            Self::Backspace => Some(Key::Backspace),
            Self::Enter => Some(Key::Newline),
            Self::Tab => Some(Key::Space),
            Self::Alt => Some(Key::Other),
            Self::Escape | Self::Up | Self::Down | Self::Left | Self::Right => None,
        }
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<KeyEvent>, Self::Error>;
}
