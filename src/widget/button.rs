// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A button widget.

use crate::widget::{pointer_pos, Widget};
use crate::{theme, BaseState, Canvas, Event, EventType, Font, Rect, Size, TextMeasurer};

// the minimum padding added to a button.
const LABEL_INSETS: Size = Size::new(20, 10);

/// A button with a text label.
///
/// The click handler runs when the button is released over itself after
/// being pressed over itself.
pub struct Button {
    base: BaseState,
    text: String,
    font: Option<Font>,
    measure: TextMeasurer,
    on_click: Option<Box<dyn FnMut()>>,
    hovered: bool,
    pressed: bool,
}

impl Button {
    /// Create a new button, sized to fit its text.
    pub fn new(text: impl Into<String>, measure: &TextMeasurer) -> Button {
        let mut button = Button {
            base: BaseState::new(Rect::ZERO),
            text: text.into(),
            font: None,
            measure: measure.clone(),
            on_click: None,
            hovered: false,
            pressed: false,
        };
        button.base.bounds = Rect::from_origin_size((0, 0), button.preferred_size());
        button
    }

    /// Builder-style method to set the click handler.
    pub fn with_on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.set_on_click(f);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn set_on_click(&mut self, f: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(f));
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Change the label. The button is not resized.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.repaint_requested = true;
    }

    pub fn set_font(&mut self, font: Option<Font>) {
        self.font = font;
        self.base.repaint_requested = true;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn text_size(&self) -> Size {
        self.measure.measure(&self.text, self.font.as_ref())
    }
}

impl Widget for Button {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn preferred_size(&self) -> Size {
        let text = self.text_size();
        Size::new(
            text.width + LABEL_INSETS.width,
            text.height + LABEL_INSETS.height,
        )
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        let r = self.base.bounds;
        let bg = if self.pressed {
            theme::BUTTON_PRESSED_COLOR
        } else if self.hovered {
            theme::BUTTON_HOVER_COLOR
        } else {
            theme::BUTTON_COLOR
        };
        canvas.fill_rect(r.x, r.y, r.width, r.height, bg);

        canvas.set_font(self.font.as_ref());
        let text = canvas.measure_text(&self.text, self.font.as_ref());
        let x = r.x + (r.width - text.width) / 2;
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
            EventType::MouseMove => {
                if self.hovered == inside {
                    return false;
                }
                self.hovered = inside;
                self.base.repaint_requested = true;
                true
            }
            EventType::MouseDown if inside => {
                self.pressed = true;
                self.base.repaint_requested = true;
                true
            }
            EventType::MouseUp => {
                let was_pressed = self.pressed;
                self.pressed = false;
                if !was_pressed {
                    return false;
                }
                self.base.repaint_requested = true;
                if inside {
                    if let Some(on_click) = self.on_click.as_mut() {
                        on_click();
                    }
                }
                true
            }
            _ => false,
        }
    }
}
