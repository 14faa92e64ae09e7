// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! The drawing surface consumed by widgets.
//!
//! Larch never rasterizes anything itself. A host provides a [`Canvas`]
//! for painting, and a [`TextMeasure`] implementation (usually the same
//! backend) so widgets can size themselves from their text.

use std::fmt;
use std::rc::Rc;

use crate::{Color, Rect, Size};

/// A font request. The backend decides what to do with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Font {
    pub family: String,
    /// Size in points.
    pub size: u32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: u32) -> Font {
        Font {
            family: family.into(),
            size,
        }
    }
}

/// Text measurement.
///
/// `None` for the font means the backend default.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font: Option<&Font>) -> Size;
}

/// A 2-D drawing surface.
///
/// Coordinates are window pixels; colors are packed ARGB.
pub trait Canvas: TextMeasure {
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);

    /// Draw `text` with its top-left corner at `(x, y)`, in the current font.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color);

    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Select the font for subsequent `draw_text` calls.
    fn set_font(&mut self, font: Option<&Font>);

    /// Fill a one pixel frame just inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.fill_rect(rect.x, rect.y, rect.width, 1, color);
        self.fill_rect(rect.x, rect.bottom() - 1, rect.width, 1, color);
        self.fill_rect(rect.x, rect.y, 1, rect.height, color);
        self.fill_rect(rect.right() - 1, rect.y, 1, rect.height, color);
    }
}

/// A shared handle to the host's text measurement.
///
/// Widgets that size themselves from text keep one of these, so preferred
/// sizes and pointer-to-character mapping never need a canvas.
#[derive(Clone)]
pub struct TextMeasurer(Rc<dyn TextMeasure>);

impl TextMeasurer {
    pub fn new(measure: impl TextMeasure + 'static) -> TextMeasurer {
        TextMeasurer(Rc::new(measure))
    }

    pub fn from_rc(measure: Rc<dyn TextMeasure>) -> TextMeasurer {
        TextMeasurer(measure)
    }

    pub fn measure(&self, text: &str, font: Option<&Font>) -> Size {
        self.0.measure_text(text, font)
    }

    /// Width of the first `chars` characters of `text`.
    pub fn prefix_width(&self, text: &str, chars: usize, font: Option<&Font>) -> i32 {
        let end = text
            .char_indices()
            .nth(chars)
            .map(|(ix, _)| ix)
            .unwrap_or_else(|| text.len());
        self.measure(&text[..end], font).width
    }

    /// The character offset in `text` closest to `x` pixels from its start.
    pub fn offset_for_x(&self, text: &str, x: i32, font: Option<&Font>) -> usize {
        if x <= 0 {
            return 0;
        }
        let mut prev_width = 0;
        for (ix, (byte_ix, ch)) in text.char_indices().enumerate() {
            let width = self.measure(&text[..byte_ix + ch.len_utf8()], font).width;
            if width > x {
                return if x - prev_width < width - x { ix } else { ix + 1 };
            }
            prev_width = width;
        }
        text.chars().count()
    }
}

impl fmt::Debug for TextMeasurer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("TextMeasurer")
    }
}

/// Measurement with a fixed advance per character.
///
/// Useful for headless hosts and character-cell backends. The font size, if
/// given, scales both metrics relative to a 10 point base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedMetrics {
    pub advance: i32,
    pub line_height: i32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        FixedMetrics {
            advance: 8,
            line_height: 16,
        }
    }
}

impl TextMeasure for FixedMetrics {
    fn measure_text(&self, text: &str, font: Option<&Font>) -> Size {
        let (advance, line_height) = match font {
            Some(font) if font.size > 0 => {
                let scale = font.size as i32;
                (self.advance * scale / 10, self.line_height * scale / 10)
            }
            _ => (self.advance, self.line_height),
        };
        let chars = text.chars().count() as i32;
        Size::new(chars * advance, line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_metrics_count_chars_not_bytes() {
        let m = FixedMetrics::default();
        assert_eq!(m.measure_text("héllo", None), Size::new(40, 16));
        assert_eq!(m.measure_text("", None), Size::new(0, 16));
        let big = Font::new("sans", 20);
        assert_eq!(m.measure_text("ab", Some(&big)), Size::new(32, 32));
    }

    #[test]
    fn offset_for_x_picks_nearest_boundary() {
        let text = TextMeasurer::new(FixedMetrics::default());
        assert_eq!(text.offset_for_x("hello", -3, None), 0);
        assert_eq!(text.offset_for_x("hello", 3, None), 0);
        assert_eq!(text.offset_for_x("hello", 5, None), 1);
        assert_eq!(text.offset_for_x("hello", 17, None), 2);
        assert_eq!(text.offset_for_x("hello", 400, None), 5);
        assert_eq!(text.offset_for_x("żółw", 12, None), 2);
    }

    #[test]
    fn prefix_width_clamps() {
        let text = TextMeasurer::new(FixedMetrics::default());
        assert_eq!(text.prefix_width("añb", 2, None), 16);
        assert_eq!(text.prefix_width("añb", 10, None), 24);
    }
}
