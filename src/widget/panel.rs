// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A container with an optional layout.

use log::trace;

use crate::layout::{Container, Layout};
use crate::widget::Widget;
use crate::{theme, BaseState, Canvas, Color, Event, Rect, WidgetId};

/// An ordered list of children over a background.
///
/// Insertion order is paint order: later children draw on top, and are
/// offered events and hit-tests first. Adding or removing a child, changing
/// the layout and resizing the panel all re-run the layout immediately.
pub struct Panel {
    base: BaseState,
    children: Vec<Box<dyn Widget>>,
    background: Color,
    layout: Option<Box<dyn Layout>>,
}

/// The [`Container`] view a layout sees of a panel.
struct PanelChildren<'a> {
    bounds: Rect,
    children: &'a mut Vec<Box<dyn Widget>>,
}

impl Container for PanelChildren<'_> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&mut self, index: usize) -> &mut dyn crate::layout::LayoutChild {
        &mut self.children[index]
    }
}

impl Panel {
    /// Create an empty panel with no layout.
    pub fn new(bounds: Rect) -> Panel {
        Panel {
            base: BaseState::new(bounds),
            children: Vec::new(),
            background: theme::PANEL_BACKGROUND,
            layout: None,
        }
    }

    /// Builder-style method to set the layout.
    pub fn with_layout(mut self, layout: impl Layout + 'static) -> Self {
        self.set_layout(layout);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Builder-style variant of [`Panel::add`].
    pub fn with_child(mut self, child: impl Widget + 'static) -> Self {
        self.add(child);
        self
    }

    /// Append a child, on top of the existing ones, and return its id.
    pub fn add(&mut self, child: impl Widget + 'static) -> WidgetId {
        self.add_boxed(Box::new(child))
    }

    pub fn add_boxed(&mut self, child: Box<dyn Widget>) -> WidgetId {
        let id = child.id();
        self.children.push(child);
        self.relayout();
        self.base.repaint_requested = true;
        id
    }

    /// Remove the direct child with this id, returning it.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let ix = self.children.iter().position(|c| c.id() == id)?;
        let child = self.children.remove(ix);
        if let Some(layout) = self.layout.as_mut() {
            layout.child_removed(id);
        }
        self.relayout();
        self.base.repaint_requested = true;
        Some(child)
    }

    pub fn set_layout(&mut self, layout: impl Layout + 'static) {
        self.layout = Some(Box::new(layout));
        self.relayout();
    }

    /// Remove the layout. Children keep their current bounds.
    pub fn clear_layout(&mut self) -> Option<Box<dyn Layout>> {
        self.layout.take()
    }

    pub fn layout(&self) -> Option<&dyn Layout> {
        self.layout.as_deref()
    }

    /// Modify the current layout, if it is an `L`, and re-layout.
    ///
    /// Returns `false` if there is no layout of that type.
    pub fn update_layout<L: Layout + 'static>(&mut self, f: impl FnOnce(&mut L)) -> bool {
        match self.layout.as_deref_mut().and_then(|l| l.downcast_mut::<L>()) {
            Some(layout) => {
                f(layout);
                self.relayout();
                true
            }
            None => false,
        }
    }

    /// Re-run the layout against the current bounds.
    pub fn relayout(&mut self) {
        if let Some(layout) = self.layout.as_deref() {
            trace!(
                "relayout {:?}: {} children in {:?}",
                self.base.id,
                self.children.len(),
                self.base.bounds
            );
            let mut view = PanelChildren {
                bounds: self.base.bounds,
                children: &mut self.children,
            };
            layout.arrange(&mut view);
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.base.repaint_requested = true;
    }

    pub fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Find a widget anywhere below this panel.
    pub fn child(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.find_descendant(id)
    }

    pub fn child_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.find_descendant_mut(id)
    }
}

impl Widget for Panel {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        let r = self.base.bounds;
        canvas.fill_rect(r.x, r.y, r.width, r.height, self.background);
        for child in &mut self.children {
            if child.is_visible() {
                child.render(canvas);
            } else {
                child.discard_repaint();
            }
        }
    }

    fn event(&mut self, event: &Event) -> bool {
        if !self.base.visible {
            return false;
        }
        self.children
            .iter_mut()
            .rev()
            .filter(|c| c.is_visible())
            .any(|c| c.event(event))
    }

    fn set_bounds(&mut self, rect: Rect) {
        let rect = rect.clamped();
        if self.base.bounds != rect {
            self.base.bounds = rect;
            self.base.repaint_requested = true;
        }
        self.relayout();
    }

    fn hit_test(&self, x: i32, y: i32) -> Option<WidgetId> {
        if !self.base.visible || !self.base.bounds.contains(x, y) {
            return None;
        }
        self.children
            .iter()
            .rev()
            .find_map(|c| c.hit_test(x, y))
            .or(Some(self.base.id))
    }

    fn find_descendant(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.children.iter().find_map(|c| c.find(id))
    }

    fn find_descendant_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    fn needs_repaint(&self) -> bool {
        self.base.repaint_requested || self.children.iter().any(|c| c.needs_repaint())
    }

    fn discard_repaint(&mut self) {
        self.base.repaint_requested = false;
        for child in &mut self.children {
            child.discard_repaint();
        }
    }
}
