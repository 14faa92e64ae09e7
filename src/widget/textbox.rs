// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A textbox widget.

use std::time::Duration;

use super::edit::Editor;
use crate::text::Selection;
use crate::widget::{pointer_pos, Widget};
use crate::{theme, BaseState, Canvas, Event, EventType, Font, Rect, Size, TextMeasurer};

const DEFAULT_HEIGHT: i32 = 24;
const TEXT_INSET: i32 = 10;
// Extra height over the font's line height.
const VERTICAL_PADDING: i32 = 10;

/// A single line of editable text.
///
/// Clicking places the caret, dragging selects, and the arrow keys move the
/// caret (extending the selection with Shift). A read-only textbox can
/// still be navigated and selected.
pub struct TextBox {
    base: BaseState,
    editor: Editor,
    placeholder: String,
    font: Option<Font>,
    measure: TextMeasurer,
}

impl TextBox {
    pub fn new(width: i32, measure: &TextMeasurer) -> TextBox {
        TextBox {
            base: BaseState::new(Rect::new(0, 0, width, DEFAULT_HEIGHT)),
            editor: Editor::new(false),
            placeholder: String::new(),
            font: None,
            measure: measure.clone(),
        }
    }

    /// Builder-style method to set the text shown while the textbox is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.editor.read_only = read_only;
        self
    }

    pub fn text(&self) -> &str {
        self.editor.buffer.text()
    }

    /// Replace the text. The caret and anchor are clamped into the new text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.editor.buffer.set_text(text);
        self.base.repaint_requested = true;
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.base.repaint_requested = true;
    }

    pub fn set_font(&mut self, font: Option<Font>) {
        self.font = font;
        self.base.repaint_requested = true;
    }

    pub fn selection(&self) -> Selection {
        self.editor.buffer.selection()
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.editor.buffer.set_selection(selection);
        self.base.repaint_requested = true;
    }

    pub fn selected_text(&self) -> &str {
        self.editor.buffer.selected_text()
    }

    pub fn is_read_only(&self) -> bool {
        self.editor.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.editor.read_only = read_only;
    }

    pub fn is_focused(&self) -> bool {
        self.editor.focused
    }

    fn text_x(&self) -> i32 {
        self.base.bounds.x + TEXT_INSET
    }

    /// The caret offset nearest to window x coordinate `x`.
    fn offset_at(&self, x: i32) -> usize {
        self.measure
            .offset_for_x(self.text(), x - self.text_x(), self.font.as_ref())
    }
}

impl Widget for TextBox {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn preferred_size(&self) -> Size {
        let line = self.measure.measure("Tg", self.font.as_ref());
        Size::new(self.base.bounds.width, line.height + VERTICAL_PADDING)
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        let r = self.base.bounds;
        let focused = self.editor.focused;
        let (bg, border) = if focused {
            (theme::INPUT_BACKGROUND, theme::FOCUS_BORDER_COLOR)
        } else {
            (theme::INPUT_INACTIVE_BACKGROUND, theme::BORDER_COLOR)
        };
        canvas.fill_rect(r.x, r.y, r.width, r.height, bg);
        canvas.stroke_rect(r, border);

        let font = self.font.as_ref();
        canvas.set_font(font);
        let text_h = canvas.measure_text("Tg", font).height;
        let x = self.text_x();
        let y = r.y + (r.height - text_h) / 2;
        let text = self.editor.buffer.text();

        if let Some(selection) = self.editor.highlighted() {
            let start = self.measure.prefix_width(text, selection.min(), font);
            let end = self.measure.prefix_width(text, selection.max(), font);
            canvas.fill_rect(x + start, y, end - start, text_h, theme::SELECTION_COLOR);
        }

        if text.is_empty() && !self.placeholder.is_empty() {
            canvas.draw_text(x, y, &self.placeholder, theme::PLACEHOLDER_COLOR);
        } else {
            canvas.draw_text(x, y, text, theme::TEXT_COLOR);
        }

        if focused && self.editor.caret_on {
            let caret = self.editor.buffer.selection().active;
            let caret_x = x + self.measure.prefix_width(text, caret, font);
            canvas.fill_rect(caret_x, y, theme::CURSOR_WIDTH, text_h, theme::CURSOR_COLOR);
        }
    }

    fn event(&mut self, event: &Event) -> bool {
        if !self.base.visible {
            return false;
        }
        let consumed = match event.kind {
            EventType::MouseDown => match pointer_pos(event) {
                Some((x, y)) if self.base.bounds.contains(x, y) => {
                    let offset = self.offset_at(x);
                    self.editor.press(offset, event.timestamp);
                    true
                }
                _ => false,
            },
            EventType::MouseMove => match pointer_pos(event) {
                Some((x, _)) if self.editor.dragging => {
                    let offset = self.offset_at(x);
                    self.editor.drag_to(offset)
                }
                _ => false,
            },
            EventType::MouseUp => pointer_pos(event).is_some() && self.editor.release(),
            _ => self.editor.key(event),
        };
        if consumed {
            self.base.repaint_requested = true;
        }
        consumed
    }

    fn on_focus(&mut self) {
        self.editor.focus();
        self.base.repaint_requested = true;
    }

    fn on_blur(&mut self) {
        self.editor.blur();
        self.base.repaint_requested = true;
    }

    fn tick(&mut self, now: Duration) {
        if self.editor.tick(now) {
            self.base.repaint_requested = true;
        }
    }
}
