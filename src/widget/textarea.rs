// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A multi-line text editing widget.

use std::time::Duration;

use super::edit::Editor;
use crate::text::{char_slice, line_col, line_spans, LineSpan, Selection};
use crate::widget::{pointer_pos, Widget};
use crate::{theme, BaseState, Canvas, Event, EventType, Font, Rect, TextMeasurer};

const PADDING: i32 = 5;
const LINE_SPACING: i32 = 4;
/// Pixels scrolled per wheel notch.
const WHEEL_STEP: i32 = 40;

/// Editable text split into lines at `\n`, with vertical scrolling.
///
/// The scroll offset follows the caret: after any edit or caret movement
/// the caret's line is brought back into view. The mouse wheel scrolls
/// independently of the caret.
pub struct TextArea {
    base: BaseState,
    editor: Editor,
    scroll_y: i32,
    font: Option<Font>,
    measure: TextMeasurer,
}

impl TextArea {
    pub fn new(bounds: Rect, measure: &TextMeasurer) -> TextArea {
        TextArea {
            base: BaseState::new(bounds),
            editor: Editor::new(true),
            scroll_y: 0,
            font: None,
            measure: measure.clone(),
        }
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

    /// Replace the text, clamping the selection and the scroll offset.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.editor.buffer.set_text(text);
        self.scroll_y = self.scroll_y.min(self.max_scroll());
        self.base.repaint_requested = true;
    }

    pub fn selection(&self) -> Selection {
        self.editor.buffer.selection()
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.editor.buffer.set_selection(selection);
        self.scroll_to_caret();
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

    pub fn set_font(&mut self, font: Option<Font>) {
        self.font = font;
        self.scroll_y = self.scroll_y.min(self.max_scroll());
        self.base.repaint_requested = true;
    }

    pub fn is_focused(&self) -> bool {
        self.editor.focused
    }

    /// The vertical scroll offset, in pixels.
    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn line_height(&self) -> i32 {
        self.measure.measure("Tg", self.font.as_ref()).height + LINE_SPACING
    }

    /// Total height of the text including padding.
    pub fn content_height(&self) -> i32 {
        line_spans(self.text()).len() as i32 * self.line_height() + 2 * PADDING
    }

    fn max_scroll(&self) -> i32 {
        (self.content_height() - self.base.bounds.height).max(0)
    }

    fn scroll_to_caret(&mut self) {
        let spans = line_spans(self.text());
        let (line, _) = line_col(&spans, self.selection().active);
        let line_height = self.line_height();
        let top = line as i32 * line_height;
        let bottom = (line as i32 + 1) * line_height + 2 * PADDING;
        let view_height = self.base.bounds.height;
        if top < self.scroll_y {
            self.scroll_y = top;
        } else if bottom > self.scroll_y + view_height {
            self.scroll_y = bottom - view_height;
        }
        self.scroll_y = self.scroll_y.clamp(0, self.max_scroll());
    }

    /// Scroll by one wheel step. Positive deltas scroll towards the top.
    fn scroll_by_wheel(&mut self, delta: i32) -> bool {
        let step = if delta > 0 { -WHEEL_STEP } else { WHEEL_STEP };
        let scroll_y = (self.scroll_y + step).clamp(0, self.max_scroll());
        if scroll_y == self.scroll_y {
            return false;
        }
        self.scroll_y = scroll_y;
        true
    }

    /// The character offset under window point `(x, y)`.
    fn offset_at(&self, x: i32, y: i32) -> usize {
        let text = self.text();
        let spans = line_spans(text);
        let local_y = y - (self.base.bounds.y + PADDING) + self.scroll_y;
        let line = if local_y < 0 {
            0
        } else {
            ((local_y / self.line_height()) as usize).min(spans.len() - 1)
        };
        let span = spans[line];
        let line_text = char_slice(text, span.start..span.end);
        let local_x = x - (self.base.bounds.x + PADDING);
        span.start
            + self
                .measure
                .offset_for_x(line_text, local_x, self.font.as_ref())
    }

    fn paint_selection(
        &self,
        canvas: &mut dyn Canvas,
        spans: &[LineSpan],
        selection: Selection,
        origin: (i32, i32),
        line_height: i32,
    ) {
        let text = self.text();
        let font = self.font.as_ref();
        let (min, max) = (selection.min(), selection.max());
        for (ix, span) in spans.iter().enumerate() {
            if span.end < min || span.start > max {
                continue;
            }
            let line_text = char_slice(text, span.start..span.end);
            let start = min.max(span.start) - span.start;
            let end = max.min(span.end) - span.start;
            let x0 = self.measure.prefix_width(line_text, start, font);
            let mut x1 = self.measure.prefix_width(line_text, end, font);
            // A selected newline shows as a sliver past the end of the line.
            if max > span.end {
                x1 += theme::CURSOR_WIDTH * 2;
            }
            if x1 > x0 {
                let y = origin.1 + ix as i32 * line_height;
                canvas.fill_rect(origin.0 + x0, y, x1 - x0, line_height, theme::SELECTION_COLOR);
            }
        }
    }
}

impl Widget for TextArea {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        let r = self.base.bounds;
        let focused = self.editor.focused;
        canvas.fill_rect(r.x, r.y, r.width, r.height, theme::INPUT_BACKGROUND);
        let border = if focused {
            theme::FOCUS_BORDER_COLOR
        } else {
            theme::BORDER_COLOR
        };
        canvas.stroke_rect(r, border);

        canvas.set_font(self.font.as_ref());
        let line_height = self.line_height();
        let text = self.text();
        let spans = line_spans(text);
        let origin = (r.x + PADDING, r.y + PADDING - self.scroll_y);

        if let Some(selection) = self.editor.highlighted() {
            self.paint_selection(canvas, &spans, selection, origin, line_height);
        }

        for (ix, span) in spans.iter().enumerate() {
            let y = origin.1 + ix as i32 * line_height;
            if y + line_height < r.y || y > r.bottom() {
                continue;
            }
            let line_text = char_slice(text, span.start..span.end);
            canvas.draw_text(origin.0, y, line_text, theme::TEXT_COLOR);
        }

        if focused && self.editor.caret_on {
            let (line, col) = line_col(&spans, self.selection().active);
            let span = spans[line];
            let line_text = char_slice(text, span.start..span.end);
            let x = origin.0 + self.measure.prefix_width(line_text, col, self.font.as_ref());
            let y = origin.1 + line as i32 * line_height;
            if y >= r.y && y + line_height <= r.bottom() {
                canvas.fill_rect(x, y, theme::CURSOR_WIDTH, line_height, theme::CURSOR_COLOR);
            }
        }
    }

    fn event(&mut self, event: &Event) -> bool {
        if !self.base.visible {
            return false;
        }
        let consumed = match event.kind {
            EventType::MouseDown => match pointer_pos(event) {
                Some((x, y)) if self.base.bounds.contains(x, y) => {
                    let offset = self.offset_at(x, y);
                    self.editor.press(offset, event.timestamp);
                    self.scroll_to_caret();
                    true
                }
                _ => false,
            },
            EventType::MouseMove => match pointer_pos(event) {
                Some((x, y)) if self.editor.dragging => {
                    let offset = self.offset_at(x, y);
                    self.editor.drag_to(offset);
                    self.scroll_to_caret();
                    true
                }
                _ => false,
            },
            EventType::MouseUp => pointer_pos(event).is_some() && self.editor.release(),
            EventType::MouseWheel => match event.mouse() {
                Some(mouse) if mouse.delta != 0 => {
                    if self.scroll_by_wheel(mouse.delta) {
                        self.base.repaint_requested = true;
                    }
                    return true;
                }
                _ => false,
            },
            _ => {
                let consumed = self.editor.key(event);
                if consumed {
                    self.scroll_to_caret();
                }
                consumed
            }
        };
        if consumed {
            self.base.repaint_requested = true;
        }
        consumed
    }

    fn set_bounds(&mut self, rect: Rect) {
        let rect = rect.clamped();
        if self.base.bounds != rect {
            self.base.bounds = rect;
            self.scroll_y = self.scroll_y.min(self.max_scroll());
            self.base.repaint_requested = true;
        }
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
