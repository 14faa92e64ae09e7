// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Events.
//!
//! The host translates native input into [`Event`] values; the tree only
//! ever reads them.

use std::time::Duration;

use crate::keycodes::KeyCode;
use crate::{Point, Size};

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    MouseMove,
    MouseDown,
    MouseUp,
    MouseWheel,
    KeyDown,
    KeyUp,
    CharInput,
    Paint,
    Resize,
    Close,
}

/// The data attached to an event.
///
/// The shape is expected to match the event type (mouse events carry
/// [`Payload::Mouse`], key and character events carry [`Payload::Key`]).
/// Handlers treat a mismatched payload as an event they did not consume.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    None,
    Mouse(MouseEvent),
    Key(KeyEvent),
    Size(Size),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub kind: EventType,
    /// Time since an arbitrary host-chosen epoch.
    pub timestamp: Duration,
    pub payload: Payload,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouseButton {
    #[default]
    None,
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseEvent {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
    /// Wheel rotation; positive is away from the user.
    pub delta: i32,
}

/// Keyboard modifier state, provided for events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The raw virtual key code; zero for character input.
    pub key_code: u32,
    /// The character produced, for character input.
    pub ch: Option<char>,
    pub mods: KeyModifiers,
}

impl MouseButton {
    /// Decode the host's button number (1 left, 2 right, 3 middle).
    pub fn from_raw(button: u32) -> MouseButton {
        match button {
            1 => MouseButton::Left,
            2 => MouseButton::Right,
            3 => MouseButton::Middle,
            _ => MouseButton::None,
        }
    }
}

impl MouseEvent {
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl KeyModifiers {
    pub const SHIFT: u32 = 1;
    pub const CTRL: u32 = 2;
    pub const ALT: u32 = 4;

    pub const NONE: KeyModifiers = KeyModifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const fn shift() -> KeyModifiers {
        KeyModifiers {
            shift: true,
            ..KeyModifiers::NONE
        }
    }

    pub const fn ctrl() -> KeyModifiers {
        KeyModifiers {
            ctrl: true,
            ..KeyModifiers::NONE
        }
    }

    /// Decode the host bitmask. Unknown bits are ignored.
    pub fn from_bits(bits: u32) -> KeyModifiers {
        KeyModifiers {
            shift: bits & Self::SHIFT != 0,
            ctrl: bits & Self::CTRL != 0,
            alt: bits & Self::ALT != 0,
        }
    }

    pub fn bits(self) -> u32 {
        let mut bits = 0;
        if self.shift {
            bits |= Self::SHIFT;
        }
        if self.ctrl {
            bits |= Self::CTRL;
        }
        if self.alt {
            bits |= Self::ALT;
        }
        bits
    }
}

impl KeyEvent {
    pub fn key(&self) -> KeyCode {
        KeyCode::from_raw(self.key_code)
    }
}

impl Event {
    /// Create an event with an arbitrary payload and a zero timestamp.
    pub fn new(kind: EventType, payload: Payload) -> Event {
        Event {
            kind,
            timestamp: Duration::ZERO,
            payload,
        }
    }

    #[must_use]
    pub fn at(mut self, timestamp: Duration) -> Event {
        self.timestamp = timestamp;
        self
    }

    fn pointer(kind: EventType, x: i32, y: i32, button: MouseButton) -> Event {
        Event::new(
            kind,
            Payload::Mouse(MouseEvent {
                x,
                y,
                button,
                delta: 0,
            }),
        )
    }

    pub fn mouse_move(x: i32, y: i32) -> Event {
        Event::pointer(EventType::MouseMove, x, y, MouseButton::None)
    }

    /// A left button press.
    pub fn mouse_down(x: i32, y: i32) -> Event {
        Event::pointer(EventType::MouseDown, x, y, MouseButton::Left)
    }

    /// A left button release.
    pub fn mouse_up(x: i32, y: i32) -> Event {
        Event::pointer(EventType::MouseUp, x, y, MouseButton::Left)
    }

    pub fn wheel(delta: i32) -> Event {
        Event::new(
            EventType::MouseWheel,
            Payload::Mouse(MouseEvent {
                delta,
                ..MouseEvent::default()
            }),
        )
    }

    pub fn key_down(key: impl Into<u32>, mods: KeyModifiers) -> Event {
        Event::new(
            EventType::KeyDown,
            Payload::Key(KeyEvent {
                key_code: key.into(),
                ch: None,
                mods,
            }),
        )
    }

    pub fn key_up(key: impl Into<u32>, mods: KeyModifiers) -> Event {
        Event::new(
            EventType::KeyUp,
            Payload::Key(KeyEvent {
                key_code: key.into(),
                ch: None,
                mods,
            }),
        )
    }

    pub fn char_input(ch: char) -> Event {
        Event::new(
            EventType::CharInput,
            Payload::Key(KeyEvent {
                key_code: 0,
                ch: Some(ch),
                mods: KeyModifiers::NONE,
            }),
        )
    }

    pub fn resize(width: i32, height: i32) -> Event {
        Event::new(EventType::Resize, Payload::Size(Size::new(width, height)))
    }

    pub fn paint() -> Event {
        Event::new(EventType::Paint, Payload::None)
    }

    pub fn close() -> Event {
        Event::new(EventType::Close, Payload::None)
    }

    /// The pointer payload, if this is a well-formed pointer event.
    pub fn mouse(&self) -> Option<&MouseEvent> {
        match (self.kind, &self.payload) {
            (
                EventType::MouseMove
                | EventType::MouseDown
                | EventType::MouseUp
                | EventType::MouseWheel,
                Payload::Mouse(mouse),
            ) => Some(mouse),
            _ => None,
        }
    }

    /// The key payload, if this is a well-formed keyboard or character event.
    pub fn key(&self) -> Option<&KeyEvent> {
        match (self.kind, &self.payload) {
            (EventType::KeyDown | EventType::KeyUp | EventType::CharInput, Payload::Key(key)) => {
                Some(key)
            }
            _ => None,
        }
    }

    /// Whether this event goes only to the focused widget.
    pub fn is_focus_routed(&self) -> bool {
        matches!(
            self.kind,
            EventType::KeyDown | EventType::KeyUp | EventType::CharInput | EventType::MouseWheel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_bits() {
        let mods = KeyModifiers::from_bits(KeyModifiers::SHIFT | KeyModifiers::ALT | 0x80);
        assert!(mods.shift && mods.alt && !mods.ctrl);
        assert_eq!(mods.bits(), 5);
        assert_eq!(KeyModifiers::ctrl().bits(), 2);
    }

    #[test]
    fn payload_accessors_reject_mismatched_shapes() {
        assert!(Event::mouse_down(1, 2).mouse().is_some());
        assert!(Event::mouse_down(1, 2).key().is_none());
        let bogus = Event::new(EventType::MouseDown, Payload::Size(Size::ZERO));
        assert!(bogus.mouse().is_none());
        let bogus = Event::new(EventType::CharInput, Payload::Mouse(MouseEvent::default()));
        assert!(bogus.key().is_none());
        assert_eq!(
            Event::key_down(KeyCode::ArrowLeft, KeyModifiers::NONE)
                .key()
                .map(KeyEvent::key),
            Some(KeyCode::ArrowLeft)
        );
    }

    #[test]
    fn routing_class() {
        assert!(Event::wheel(120).is_focus_routed());
        assert!(Event::char_input('x').is_focus_routed());
        assert!(!Event::mouse_up(0, 0).is_focus_routed());
        assert!(!Event::resize(1, 1).is_focus_routed());
        assert_eq!(MouseButton::from_raw(3), MouseButton::Middle);
    }
}
