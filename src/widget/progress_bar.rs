// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A progress bar widget.

use crate::widget::Widget;
use crate::{theme, BaseState, Canvas, Color, Rect};

/// A progress bar, displaying a value in the range `0.0..=1.0`.
pub struct ProgressBar {
    base: BaseState,
    value: f64,
    color: Color,
    background: Color,
}

impl ProgressBar {
    pub fn new(width: i32, height: i32) -> ProgressBar {
        ProgressBar {
            base: BaseState::new(Rect::new(0, 0, width, height)),
            value: 0.0,
            color: theme::ACCENT_COLOR,
            background: theme::TRACK_COLOR,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the progress. Values outside `0.0..=1.0` are clamped; NaN counts
    /// as zero.
    pub fn set_value(&mut self, value: f64) {
        self.value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        self.base.repaint_requested = true;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.base.repaint_requested = true;
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.base.repaint_requested = true;
    }

    fn fill_width(&self) -> i32 {
        (f64::from(self.base.bounds.width) * self.value) as i32
    }
}

impl Widget for ProgressBar {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        let r = self.base.bounds;
        canvas.fill_rect(r.x, r.y, r.width, r.height, self.background);
        let fill = self.fill_width();
        if fill > 0 {
            canvas.fill_rect(r.x, r.y, fill, r.height, self.color);
        }
        canvas.stroke_rect(r, theme::BORDER_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn value_is_clamped() {
        let mut bar = ProgressBar::new(200, 20);
        bar.set_value(1.5);
        assert_approx_eq!(f64, bar.value(), 1.0);
        bar.set_value(-0.25);
        assert_approx_eq!(f64, bar.value(), 0.0);
        bar.set_value(f64::NAN);
        assert_approx_eq!(f64, bar.value(), 0.0);
        bar.set_value(0.333);
        assert_approx_eq!(f64, bar.value(), 0.333, epsilon = 1e-12);
        assert_eq!(bar.fill_width(), 66);
    }
}
