// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A line chart over a sliding window of samples.

use std::collections::VecDeque;

use crate::widget::Widget;
use crate::{theme, BaseState, Canvas, Color, Rect};

const DEFAULT_MAX_POINTS: usize = 100;

/// Plots the most recent samples as connected line segments.
///
/// Samples are scaled into `min_y..=max_y`, with larger values drawn
/// higher. Once `max_points` samples are held, each new sample evicts the
/// oldest one.
pub struct LineChart {
    base: BaseState,
    points: VecDeque<f64>,
    max_points: usize,
    min_y: f64,
    max_y: f64,
    color: Color,
    background: Color,
}

impl LineChart {
    pub fn new(width: i32, height: i32) -> LineChart {
        LineChart {
            base: BaseState::new(Rect::new(0, 0, width, height)),
            points: VecDeque::with_capacity(DEFAULT_MAX_POINTS),
            max_points: DEFAULT_MAX_POINTS,
            min_y: 0.0,
            max_y: 100.0,
            color: theme::ACCENT_COLOR,
            background: Color::WHITE,
        }
    }

    /// Builder-style method to set the vertical range.
    pub fn with_range(mut self, min_y: f64, max_y: f64) -> Self {
        self.set_range(min_y, max_y);
        self
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.set_max_points(max_points);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Append a sample, evicting the oldest once the chart is full.
    pub fn add_point(&mut self, value: f64) {
        self.points.push_back(value);
        self.evict();
        self.base.repaint_requested = true;
    }

    /// The held samples, oldest first.
    pub fn points(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.points.iter().copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.base.repaint_requested = true;
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Change the capacity. Samples beyond the new capacity are dropped,
    /// oldest first. A capacity of zero is treated as one.
    pub fn set_max_points(&mut self, max_points: usize) {
        self.max_points = max_points.max(1);
        self.evict();
        self.base.repaint_requested = true;
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min_y, self.max_y)
    }

    pub fn set_range(&mut self, min_y: f64, max_y: f64) {
        self.min_y = min_y;
        self.max_y = max_y;
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

    fn evict(&mut self) {
        while self.points.len() > self.max_points {
            self.points.pop_front();
        }
    }

    /// The value scaled into `0.0..=1.0` over the chart's range.
    fn normalize(&self, value: f64) -> f64 {
        let mut span = self.max_y - self.min_y;
        if span <= 0.0 || span.is_nan() {
            span = 1.0;
        }
        let norm = (value - self.min_y) / span;
        if norm.is_nan() {
            0.0
        } else {
            norm.clamp(0.0, 1.0)
        }
    }
}

impl Widget for LineChart {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        let r = self.base.bounds;
        canvas.fill_rect(r.x, r.y, r.width, r.height, self.background);
        canvas.stroke_rect(r, theme::BORDER_COLOR);

        if self.points.len() < 2 {
            return;
        }
        let step = f64::from(r.width) / (self.max_points - 1).max(1) as f64;
        let height = f64::from(r.height);
        let to_screen = |ix: usize, value: f64| {
            let x = r.x + (ix as f64 * step) as i32;
            let y = r.y + r.height - (self.normalize(value) * height) as i32;
            (x, y)
        };
        let mut prev = None;
        for (ix, value) in self.points.iter().enumerate() {
            let (x1, y1) = to_screen(ix, *value);
            if let Some((x0, y0)) = prev {
                canvas.draw_line(x0, y0, x1, y1, self.color);
            }
            prev = Some((x1, y1));
        }
    }
}
