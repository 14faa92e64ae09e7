// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A titled card holding a panel of content.

use crate::layout::{Layout, VBox};
use crate::widget::{Panel, Widget};
use crate::{theme, BaseState, Canvas, Color, Event, Rect, WidgetId};

const CONTENT_SPACING: i32 = 5;

/// A bordered box with a title line, and an inner [`Panel`] for content.
///
/// The content panel is kept inset from the card: 10px on the sides and
/// bottom, and 35px from the top to leave room for the title.
pub struct Card {
    base: BaseState,
    title: String,
    background: Color,
    inner: Panel,
}

/// The bounds of the content panel for a card at `rect`.
fn content_rect(rect: Rect) -> Rect {
    Rect::new(rect.x + 10, rect.y + 35, rect.width - 20, rect.height - 45).clamped()
}

impl Card {
    pub fn new(width: i32, height: i32, title: impl Into<String>) -> Card {
        let bounds = Rect::new(0, 0, width, height);
        let inner = Panel::new(content_rect(bounds))
            .with_background(Color::WHITE)
            .with_layout(VBox::new(CONTENT_SPACING));
        Card {
            base: BaseState::new(bounds),
            title: title.into(),
            background: Color::WHITE,
            inner,
        }
    }

    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.add(child);
        self
    }

    /// Add a widget to the content panel.
    pub fn add(&mut self, child: impl Widget + 'static) -> WidgetId {
        self.inner.add(child)
    }

    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        self.inner.remove(id)
    }

    /// Replace the content panel's layout.
    pub fn set_layout(&mut self, layout: impl Layout + 'static) {
        self.inner.set_layout(layout);
    }

    pub fn inner(&self) -> &Panel {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut Panel {
        &mut self.inner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.base.repaint_requested = true;
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.base.repaint_requested = true;
    }

    fn sync_inner(&mut self) {
        let rect = content_rect(self.base.bounds);
        if self.inner.bounds() != rect {
            self.inner.set_bounds(rect);
        }
    }
}

impl Widget for Card {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        let r = self.base.bounds;
        canvas.fill_rect(r.x, r.y, r.width, r.height, self.background);
        canvas.stroke_rect(r, theme::CARD_BORDER_COLOR);
        if !self.title.is_empty() {
            canvas.set_font(None);
            canvas.draw_text(r.x + 10, r.y + 8, &self.title, theme::TITLE_COLOR);
            canvas.fill_rect(r.x, r.y + 30, r.width, 1, theme::SEPARATOR_COLOR);
        }
        // The bounds may have been changed through `base_mut`.
        self.sync_inner();
        self.inner.render(canvas);
    }

    fn event(&mut self, event: &Event) -> bool {
        self.base.visible && self.inner.event(event)
    }

    fn set_bounds(&mut self, rect: Rect) {
        let rect = rect.clamped();
        if self.base.bounds != rect {
            self.base.bounds = rect;
            self.base.repaint_requested = true;
        }
        self.sync_inner();
    }

    fn hit_test(&self, x: i32, y: i32) -> Option<WidgetId> {
        if !self.base.visible || !self.base.bounds.contains(x, y) {
            return None;
        }
        let inner_id = self.inner.id();
        self.inner
            .hit_test(x, y)
            .filter(|id| *id != inner_id)
            .or(Some(self.base.id))
    }

    fn find_descendant(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.inner.find(id)
    }

    fn find_descendant_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.inner.find_mut(id)
    }

    fn needs_repaint(&self) -> bool {
        self.base.repaint_requested || self.inner.needs_repaint()
    }

    fn discard_repaint(&mut self) {
        self.base.repaint_requested = false;
        self.inner.discard_repaint();
    }
}
