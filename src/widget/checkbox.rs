// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A checkbox widget.

use crate::widget::{pointer_pos, Widget};
use crate::{theme, BaseState, Canvas, Event, EventType, Font, Rect, Size, TextMeasurer};

const BOX_SIZE: i32 = 16;
const MARK_SIZE: i32 = 10;
const LABEL_GAP: i32 = 8;

/// A checkbox with a text label.
///
/// Unlike [`Button`](crate::widget::Button), a checkbox toggles as soon as
/// it is pressed; it does not wait for the release.
pub struct CheckBox {
    base: BaseState,
    text: String,
    font: Option<Font>,
    measure: TextMeasurer,
    checked: bool,
    hovered: bool,
    on_check: Option<Box<dyn FnMut(bool)>>,
}

impl CheckBox {
    /// Create a new, unchecked checkbox, sized to fit its label.
    pub fn new(text: impl Into<String>, measure: &TextMeasurer) -> CheckBox {
        let mut checkbox = CheckBox {
            base: BaseState::new(Rect::ZERO),
            text: text.into(),
            font: None,
            measure: measure.clone(),
            checked: false,
            hovered: false,
            on_check: None,
        };
        checkbox.base.bounds = Rect::from_origin_size((0, 0), checkbox.preferred_size());
        checkbox
    }

    /// Builder-style method to set the handler, which receives the new state.
    pub fn with_on_check(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.set_on_check(f);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn set_on_check(&mut self, f: impl FnMut(bool) + 'static) {
        self.on_check = Some(Box::new(f));
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the state without running the handler.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.base.repaint_requested = true;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.repaint_requested = true;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl Widget for CheckBox {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn preferred_size(&self) -> Size {
        let text = self.measure.measure(&self.text, self.font.as_ref());
        Size::new(
            text.width + BOX_SIZE + LABEL_GAP,
            text.height.max(BOX_SIZE),
        )
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        let r = self.base.bounds;
        let box_rect = Rect::new(r.x, r.y + (r.height - BOX_SIZE) / 2, BOX_SIZE, BOX_SIZE);
        let bg = if self.hovered {
            theme::CHECKBOX_HOVER_COLOR
        } else {
            theme::CHECKBOX_COLOR
        };
        canvas.fill_rect(box_rect.x, box_rect.y, BOX_SIZE, BOX_SIZE, bg);
        canvas.stroke_rect(box_rect, theme::BORDER_COLOR);

        if self.checked {
            let inset = (BOX_SIZE - MARK_SIZE) / 2;
            canvas.fill_rect(
                box_rect.x + inset,
                box_rect.y + inset,
                MARK_SIZE,
                MARK_SIZE,
                theme::CHECKBOX_MARK_COLOR,
            );
        }

        canvas.set_font(self.font.as_ref());
        let text = canvas.measure_text(&self.text, self.font.as_ref());
        let x = box_rect.x + BOX_SIZE + LABEL_GAP;
        let y = r.y + (r.height - text.height) / 2;
        canvas.draw_text(x, y, &self.text, theme::TEXT_COLOR);
    }

    fn event(&mut self, event: &Event) -> bool {
        if !self.base.visible {
            return false;
        }
        let (x, y) = match pointer_pos(event) {
            Some(pos) => pos,
            None => return false,
        };
        let inside = self.base.bounds.contains(x, y);
        match event.kind {
            EventType::MouseMove if self.hovered != inside => {
                self.hovered = inside;
                self.base.repaint_requested = true;
                true
            }
            EventType::MouseDown if inside => {
                self.checked = !self.checked;
                self.base.repaint_requested = true;
                let checked = self.checked;
                if let Some(on_check) = self.on_check.as_mut() {
                    on_check(checked);
                }
                true
            }
            _ => false,
        }
    }
}
