// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Focus, caret blink, drag selection and key handling shared by the text
//! widgets.

use std::time::Duration;

use crate::text::{EditBuffer, Movement, Selection};
use crate::{Event, EventType, KeyCode, KeyEvent};

/// How long the caret stays on or off.
pub(super) const BLINK_INTERVAL: Duration = Duration::from_millis(500);

pub(super) struct Editor {
    pub buffer: EditBuffer,
    pub read_only: bool,
    pub focused: bool,
    pub dragging: bool,
    pub caret_on: bool,
    last_blink: Option<Duration>,
    /// The latest time seen from a tick or an event.
    clock: Option<Duration>,
    multiline: bool,
}

impl Editor {
    pub fn new(multiline: bool) -> Editor {
        Editor {
            buffer: EditBuffer::default(),
            read_only: false,
            focused: false,
            dragging: false,
            caret_on: false,
            last_blink: None,
            clock: None,
            multiline,
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.restart_blink();
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.dragging = false;
        self.caret_on = false;
    }

    /// Turn the caret on and start a full blink period from the latest
    /// known time.
    fn restart_blink(&mut self) {
        self.caret_on = true;
        self.last_blink = self.clock;
    }

    fn observe(&mut self, now: Duration) {
        self.clock = Some(self.clock.map_or(now, |clock| clock.max(now)));
    }

    /// Advance the caret blink. Returns `true` if the caret toggled.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.observe(now);
        if !self.focused {
            return false;
        }
        match self.last_blink {
            Some(last) if now.saturating_sub(last) < BLINK_INTERVAL => false,
            Some(_) => {
                self.caret_on = !self.caret_on;
                self.last_blink = Some(now);
                true
            }
            None => {
                self.last_blink = Some(now);
                false
            }
        }
    }

    /// Start a drag selection with the anchor at `offset`.
    pub fn press(&mut self, offset: usize, now: Duration) {
        self.observe(now);
        self.dragging = true;
        self.buffer.move_to(offset, false);
        self.restart_blink();
    }

    /// Move the live end of a drag selection. Returns `false` if no drag is
    /// in progress.
    pub fn drag_to(&mut self, offset: usize) -> bool {
        if !self.dragging {
            return false;
        }
        self.buffer.move_to(offset, true);
        true
    }

    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    /// Handle a keyboard or character event. Returns `true` if it was
    /// consumed.
    pub fn key(&mut self, event: &Event) -> bool {
        if !self.focused {
            return false;
        }
        self.observe(event.timestamp);
        let key = match event.key() {
            Some(key) => key,
            None => return false,
        };
        let consumed = match event.kind {
            EventType::KeyDown => self.key_down(key),
            EventType::CharInput => self.char_input(key),
            _ => false,
        };
        if consumed {
            self.restart_blink();
        }
        consumed
    }

    fn key_down(&mut self, key: &KeyEvent) -> bool {
        let mods = key.mods;
        let code = key.key();
        let movement = match code {
            KeyCode::ArrowLeft if mods.ctrl => Some(Movement::WordLeft),
            KeyCode::ArrowLeft => Some(Movement::Left),
            KeyCode::ArrowRight if mods.ctrl => Some(Movement::WordRight),
            KeyCode::ArrowRight => Some(Movement::Right),
            KeyCode::Home => Some(Movement::LineStart),
            KeyCode::End => Some(Movement::LineEnd),
            KeyCode::ArrowUp if self.multiline => Some(Movement::Up),
            KeyCode::ArrowDown if self.multiline => Some(Movement::Down),
            _ => None,
        };
        if let Some(movement) = movement {
            return self.buffer.apply_movement(movement, mods.shift);
        }
        if code == KeyCode::Letter('A') && mods.ctrl {
            self.buffer.select_all();
            return true;
        }

        if self.read_only {
            return false;
        }
        match code {
            KeyCode::Backspace => {
                self.buffer.backspace();
                true
            }
            KeyCode::Delete => {
                self.buffer.delete_forward();
                true
            }
            KeyCode::Return if self.multiline => {
                self.buffer.insert("\n");
                true
            }
            _ => false,
        }
    }

    fn char_input(&mut self, key: &KeyEvent) -> bool {
        if self.read_only {
            return false;
        }
        match key.ch {
            Some(ch) if !ch.is_control() => {
                let mut utf8 = [0; 4];
                self.buffer.insert(ch.encode_utf8(&mut utf8));
                true
            }
            _ => false,
        }
    }

    /// The selection, if one should be highlighted.
    pub fn highlighted(&self) -> Option<Selection> {
        let selection = self.buffer.selection();
        if self.focused && !selection.is_caret() {
            Some(selection)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyModifiers;

    fn focused(text: &str, multiline: bool) -> Editor {
        let mut editor = Editor::new(multiline);
        editor.buffer.set_text(text);
        editor.focus();
        editor
    }

    #[test]
    fn blink_period() {
        let mut editor = focused("", false);
        assert!(editor.caret_on);
        assert!(!editor.tick(Duration::from_millis(1000)));
        assert!(!editor.tick(Duration::from_millis(1499)));
        assert!(editor.tick(Duration::from_millis(1500)));
        assert!(!editor.caret_on);
        assert!(editor.tick(Duration::from_millis(2000)));
        assert!(editor.caret_on);
        editor.blur();
        assert!(!editor.tick(Duration::from_millis(9000)));
        assert!(!editor.caret_on);
    }

    #[test]
    fn blink_counts_from_the_last_tick_before_focus() {
        let mut editor = Editor::new(false);
        editor.buffer.set_text("ab");
        assert!(!editor.tick(Duration::from_millis(1000)));
        editor.focus();
        assert!(!editor.tick(Duration::from_millis(1400)));
        assert!(editor.tick(Duration::from_millis(1500)));
        assert!(!editor.caret_on);

        // A keystroke relights the caret for a full period from its timestamp.
        let key = Event::key_down(KeyCode::End, crate::KeyModifiers::NONE)
            .at(Duration::from_millis(1700));
        assert!(editor.key(&key));
        assert!(editor.caret_on);
        assert!(!editor.tick(Duration::from_millis(2100)));
        assert!(editor.tick(Duration::from_millis(2200)));

        editor.press(0, Duration::from_millis(2300));
        assert!(editor.caret_on);
        assert!(!editor.tick(Duration::from_millis(2700)));
        assert!(editor.tick(Duration::from_millis(2800)));
    }

    #[test]
    fn unfocused_ignores_keys() {
        let mut editor = Editor::new(false);
        assert!(!editor.key(&Event::char_input('a')));
        assert!(editor.buffer.is_empty());
    }

    #[test]
    fn read_only_allows_navigation_only() {
        let mut editor = focused("abc", false);
        editor.read_only = true;
        assert!(editor.key(&Event::key_down(KeyCode::End, KeyModifiers::NONE)));
        assert_eq!(editor.buffer.selection(), Selection::caret(3));
        assert!(!editor.key(&Event::key_down(KeyCode::Backspace, KeyModifiers::NONE)));
        assert!(!editor.key(&Event::char_input('x')));
        assert!(editor.key(&Event::key_down(KeyCode::Letter('A'), KeyModifiers::ctrl())));
        assert_eq!(editor.buffer.text(), "abc");
        assert_eq!(editor.buffer.selected_text(), "abc");
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut editor = focused("", true);
        assert!(!editor.key(&Event::char_input('\r')));
        assert!(!editor.key(&Event::char_input('\u{8}')));
        assert!(editor.key(&Event::char_input('é')));
        assert!(editor.key(&Event::key_down(KeyCode::Return, KeyModifiers::NONE)));
        assert_eq!(editor.buffer.text(), "é\n");
    }

    #[test]
    fn stuck_movement_is_not_consumed() {
        let mut editor = focused("one\ntwo", true);
        assert!(!editor.key(&Event::key_down(KeyCode::ArrowUp, KeyModifiers::NONE)));
        assert!(!editor.key(&Event::key_down(KeyCode::ArrowLeft, KeyModifiers::NONE)));
        assert!(editor.key(&Event::key_down(KeyCode::ArrowDown, KeyModifiers::NONE)));
        assert!(!editor.key(&Event::key_down(KeyCode::ArrowDown, KeyModifiers::NONE)));
        assert_eq!(editor.buffer.selection().active, 4);
    }

    #[test]
    fn return_is_not_consumed_single_line() {
        let mut editor = focused("ab", false);
        assert!(!editor.key(&Event::key_down(KeyCode::Return, KeyModifiers::NONE)));
        assert!(!editor.key(&Event::key_down(KeyCode::ArrowUp, KeyModifiers::NONE)));
    }

    #[test]
    fn word_movement_with_shift() {
        let mut editor = focused("hello big world", false);
        editor.key(&Event::key_down(
            KeyCode::ArrowRight,
            KeyModifiers {
                ctrl: true,
                shift: true,
                alt: false,
            },
        ));
        assert_eq!(editor.buffer.selected_text(), "hello");
        editor.key(&Event::key_down(KeyCode::ArrowRight, KeyModifiers::ctrl()));
        assert_eq!(editor.buffer.selection(), Selection::caret(9));
    }

    #[test]
    fn drag_selects_from_press_point() {
        let mut editor = focused("hello world", false);
        editor.press(2, Duration::ZERO);
        assert!(editor.drag_to(7));
        assert!(editor.drag_to(5));
        assert_eq!(editor.buffer.selection(), Selection::new(2, 5));
        assert!(editor.release());
        assert!(!editor.release());
        assert!(!editor.drag_to(9));
        assert_eq!(editor.highlighted(), Some(Selection::new(2, 5)));
    }
}
