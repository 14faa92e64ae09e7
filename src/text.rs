// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing state shared by the text widgets.
//!
//! All offsets in this module are character offsets into the logical text,
//! never byte offsets.

use std::cmp::{max, min};
use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// A caret or a selection, in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// The inactive edge of a selection. When equal to `active`, the
    /// selection acts as a caret.
    pub anchor: usize,

    /// The active edge of a selection; this is where the caret is drawn.
    pub active: usize,

    /// The saved column, during vertical movement.
    pub h_pos: Option<usize>,
}

impl Selection {
    /// Create a selection that begins at `anchor` and goes to `active`.
    /// Like dragging a mouse from anchor to active.
    pub fn new(anchor: usize, active: usize) -> Self {
        Selection {
            anchor,
            active,
            h_pos: None,
        }
    }

    pub fn caret(pos: usize) -> Self {
        Selection::new(pos, pos)
    }

    #[must_use = "constrained constructs a new Selection"]
    pub fn constrained(mut self, len: usize) -> Self {
        self.anchor = min(self.anchor, len);
        self.active = min(self.active, len);
        self
    }

    pub fn with_h_pos(mut self, h_pos: Option<usize>) -> Self {
        self.h_pos = h_pos;
        self
    }

    pub fn is_caret(self) -> bool {
        self.anchor == self.active
    }

    pub fn min(self) -> usize {
        min(self.anchor, self.active)
    }

    pub fn max(self) -> usize {
        max(self.anchor, self.active)
    }

    pub fn range(self) -> Range<usize> {
        self.min()..self.max()
    }
}

/// A caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    WordLeft,
    WordRight,
    /// Start of the current line.
    LineStart,
    /// End of the current line.
    LineEnd,
    Up,
    Down,
}

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The byte index of character offset `offset`, clamped to the end.
pub fn byte_offset(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(ix, _)| ix)
        .unwrap_or_else(|| text.len())
}

/// The character offset of byte index `byte_ix`.
pub fn char_offset(text: &str, byte_ix: usize) -> usize {
    text.char_indices().take_while(|(ix, _)| *ix < byte_ix).count()
}

/// Slice `text` by a range of character offsets.
pub fn char_slice(text: &str, range: Range<usize>) -> &str {
    &text[byte_offset(text, range.start)..byte_offset(text, range.end)]
}

/// The start of the word at or before `offset`.
///
/// Word boundaries follow [UAX#29]; whitespace runs are skipped over.
///
/// [UAX#29]: http://www.unicode.org/reports/tr29/
pub fn prev_word_offset(text: &str, offset: usize) -> usize {
    let byte_ix = byte_offset(text, offset);
    text.split_word_bound_indices()
        .filter(|(ix, word)| *ix < byte_ix && !word.trim().is_empty())
        .map(|(ix, _)| char_offset(text, ix))
        .last()
        .unwrap_or(0)
}

/// The end of the word at or after `offset`.
pub fn next_word_offset(text: &str, offset: usize) -> usize {
    let byte_ix = byte_offset(text, offset);
    text.split_word_bound_indices()
        .map(|(ix, word)| (ix + word.len(), word))
        .find(|(end, word)| *end > byte_ix && !word.trim().is_empty())
        .map(|(end, _)| char_offset(text, end))
        .unwrap_or_else(|| char_len(text))
}

/// A line of a multi-line text, as character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    /// Offset just past the last character, excluding the newline.
    pub end: usize,
}

impl LineSpan {
    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Split `text` at `\n` into line spans. There is always at least one line.
pub fn line_spans(text: &str) -> Vec<LineSpan> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (ix, ch) in text.chars().enumerate() {
        if ch == '\n' {
            spans.push(LineSpan { start, end: ix });
            start = ix + 1;
        }
    }
    spans.push(LineSpan {
        start,
        end: char_len(text),
    });
    spans
}

/// Map a character offset to a `(line, column)` pair.
pub fn line_col(spans: &[LineSpan], offset: usize) -> (usize, usize) {
    for (line, span) in spans.iter().enumerate() {
        if offset <= span.end {
            return (line, offset.saturating_sub(span.start));
        }
    }
    match spans.last() {
        Some(span) => (spans.len() - 1, span.len()),
        None => (0, 0),
    }
}

/// A string with a selection, and the editing operations on it.
///
/// Every mutation leaves the selection inside the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    selection: Selection,
}

impl EditBuffer {
    pub fn new(text: impl Into<String>) -> EditBuffer {
        EditBuffer {
            text: text.into(),
            selection: Selection::caret(0),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, keeping the selection where it still fits.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = self.selection.constrained(self.len());
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.constrained(self.len());
    }

    pub fn selected_text(&self) -> &str {
        char_slice(&self.text, self.selection.range())
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.len());
    }

    /// Put the caret at `offset`. With `extend`, the anchor stays put.
    pub fn move_to(&mut self, offset: usize, extend: bool) {
        let offset = min(offset, self.len());
        let anchor = if extend {
            self.selection.anchor
        } else {
            offset
        };
        self.selection = Selection::new(anchor, offset);
    }

    /// Apply a movement. Returns `true` if the selection changed.
    pub fn apply_movement(&mut self, movement: Movement, extend: bool) -> bool {
        let old = self.selection;
        let active = old.active;
        let mut h_pos = None;
        let offset = match movement {
            Movement::Left => active.saturating_sub(1),
            Movement::Right => min(active + 1, self.len()),
            Movement::WordLeft => prev_word_offset(&self.text, active),
            Movement::WordRight => next_word_offset(&self.text, active),
            Movement::LineStart | Movement::LineEnd => {
                let spans = line_spans(&self.text);
                let (line, _) = line_col(&spans, active);
                if movement == Movement::LineStart {
                    spans[line].start
                } else {
                    spans[line].end
                }
            }
            Movement::Up | Movement::Down => {
                let spans = line_spans(&self.text);
                let (line, col) = line_col(&spans, active);
                let col = old.h_pos.unwrap_or(col);
                h_pos = Some(col);
                let target = match movement {
                    Movement::Up if line > 0 => Some(line - 1),
                    Movement::Down if line + 1 < spans.len() => Some(line + 1),
                    _ => None,
                };
                match target {
                    Some(target) => {
                        let span = spans[target];
                        span.start + min(col, span.len())
                    }
                    None => active,
                }
            }
        };
        self.move_to(offset, extend);
        self.selection.h_pos = h_pos;
        (self.selection.anchor, self.selection.active) != (old.anchor, old.active)
    }

    /// Insert `text` at the caret, replacing any selection.
    pub fn insert(&mut self, text: &str) {
        let range = self.selection.range();
        let start = byte_offset(&self.text, range.start);
        let end = byte_offset(&self.text, range.end);
        self.text.replace_range(start..end, text);
        self.selection = Selection::caret(range.start + char_len(text));
    }

    /// Delete the selection, or the character before the caret.
    /// Returns `true` if anything was removed.
    pub fn backspace(&mut self) -> bool {
        if !self.selection.is_caret() {
            return self.delete_selection();
        }
        let active = self.selection.active;
        if active == 0 {
            return false;
        }
        self.selection = Selection::new(active - 1, active);
        self.delete_selection()
    }

    /// Delete the selection, or the character after the caret.
    pub fn delete_forward(&mut self) -> bool {
        if !self.selection.is_caret() {
            return self.delete_selection();
        }
        let active = self.selection.active;
        if active >= self.len() {
            return false;
        }
        self.selection = Selection::new(active, active + 1);
        self.delete_selection()
    }

    fn delete_selection(&mut self) -> bool {
        let range = self.selection.range();
        if range.is_empty() {
            return false;
        }
        let start = byte_offset(&self.text, range.start);
        let end = byte_offset(&self.text, range.end);
        self.text.replace_range(start..end, "");
        self.selection = Selection::caret(range.start);
        true
    }
}
