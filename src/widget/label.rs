// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A label widget.

use crate::widget::Widget;
use crate::{theme, BaseState, Canvas, Color, Font, Rect, Size, TextMeasurer};

/// A single line of static text.
///
/// A label is sized to its text when it is created. Changing the text
/// later does not resize it; call [`Label::size_to_fit`] for that.
pub struct Label {
    base: BaseState,
    text: String,
    color: Color,
    font: Option<Font>,
    measure: TextMeasurer,
}

impl Label {
    pub fn new(text: impl Into<String>, measure: &TextMeasurer) -> Label {
        let mut label = Label {
            base: BaseState::new(Rect::ZERO),
            text: text.into(),
            color: theme::TEXT_COLOR,
            font: None,
            measure: measure.clone(),
        };
        label.size_to_fit();
        label
    }

    /// Builder-style method for setting the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder-style method for setting the font. The label is resized to
    /// fit.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self.size_to_fit();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.repaint_requested = true;
    }

    pub fn text_color(&self) -> Color {
        self.color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.color = color;
        self.base.repaint_requested = true;
    }

    pub fn set_font(&mut self, font: Option<Font>) {
        self.font = font;
        self.base.repaint_requested = true;
    }

    /// Resize to the measured size of the current text, keeping the origin.
    pub fn size_to_fit(&mut self) {
        let size = self.preferred_size();
        self.set_bounds(self.base.bounds.with_size(size));
    }
}

impl Widget for Label {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn preferred_size(&self) -> Size {
        self.measure.measure(&self.text, self.font.as_ref())
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        canvas.set_font(self.font.as_ref());
        let origin = self.base.bounds.origin();
        canvas.draw_text(origin.x, origin.y, &self.text, self.color);
    }
}
