// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Virtual key codes.
//!
//! Hosts report keys as Windows-style virtual key codes; this module gives
//! the ones the widgets care about a name.

/// A decoded virtual key.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum KeyCode {
    Backspace,
    Tab,
    Return,
    Shift,
    Control,
    Alt,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Insert,
    Delete,
    /// A digit in the top row, `0..=9`.
    Digit(u8),
    /// A letter key; always upper case.
    Letter(char),
    F(u8),
    Unknown(u32),
}

macro_rules! map_keys {
    ($( $vk:literal => $code:ident ),* $(,)?) => {
        impl KeyCode {
            /// Decode a virtual key code.
            pub fn from_raw(vk: u32) -> KeyCode {
                match vk {
                    $( $vk => KeyCode::$code, )*
                    0x30..=0x39 => KeyCode::Digit((vk - 0x30) as u8),
                    0x41..=0x5A => KeyCode::Letter(char::from(vk as u8)),
                    0x70..=0x7B => KeyCode::F((vk - 0x6F) as u8),
                    other => KeyCode::Unknown(other),
                }
            }

            /// The virtual key code for this key.
            pub fn to_raw(self) -> u32 {
                match self {
                    $( KeyCode::$code => $vk, )*
                    KeyCode::Digit(d) => 0x30 + u32::from(d.min(9)),
                    KeyCode::Letter(c) => u32::from(c.to_ascii_uppercase()),
                    KeyCode::F(n) => 0x6F + u32::from(n),
                    KeyCode::Unknown(raw) => raw,
                }
            }
        }
    };
}

map_keys! {
    0x08 => Backspace,
    0x09 => Tab,
    0x0D => Return,
    0x10 => Shift,
    0x11 => Control,
    0x12 => Alt,
    0x1B => Escape,
    0x20 => Space,
    0x21 => PageUp,
    0x22 => PageDown,
    0x23 => End,
    0x24 => Home,
    0x25 => ArrowLeft,
    0x26 => ArrowUp,
    0x27 => ArrowRight,
    0x28 => ArrowDown,
    0x2D => Insert,
    0x2E => Delete,
}

impl From<u32> for KeyCode {
    fn from(vk: u32) -> KeyCode {
        KeyCode::from_raw(vk)
    }
}

impl From<KeyCode> for u32 {
    fn from(code: KeyCode) -> u32 {
        code.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode() {
        assert_eq!(KeyCode::from_raw(0x25), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from_raw(0x41), KeyCode::Letter('A'));
        assert_eq!(KeyCode::from_raw(0x37), KeyCode::Digit(7));
        assert_eq!(KeyCode::from_raw(0x70), KeyCode::F(1));
        assert_eq!(KeyCode::from_raw(0xE5), KeyCode::Unknown(0xE5));
    }

    #[test]
    fn encode() {
        assert_eq!(KeyCode::Backspace.to_raw(), 0x08);
        assert_eq!(KeyCode::Letter('a').to_raw(), 0x41);
        assert_eq!(KeyCode::F(12).to_raw(), 0x7B);
        for vk in 0..0x100 {
            assert_eq!(KeyCode::from_raw(vk).to_raw(), vk);
        }
    }
}
