// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! The widget contract, and the common widgets.

use std::any::Any;
use std::time::Duration;

use crate::{Canvas, Event, Rect, Size, WidgetId};

mod button;
mod card;
mod checkbox;
mod edit;
mod image;
mod label;
mod line_chart;
mod panel;
mod progress_bar;
mod textarea;
mod textbox;

pub use button::Button;
pub use card::Card;
pub use checkbox::CheckBox;
pub use image::Image;
pub use label::Label;
pub use line_chart::LineChart;
pub use panel::Panel;
pub use progress_bar::ProgressBar;
pub use textarea::TextArea;
pub use textbox::TextBox;

/// State shared by every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseState {
    pub id: WidgetId,
    /// Position and size in window coordinates.
    pub bounds: Rect,
    pub visible: bool,
    /// Set when the widget's appearance changed; cleared by [`Widget::render`].
    pub repaint_requested: bool,
}

impl BaseState {
    /// A fresh, visible widget state with a new id. New widgets start out
    /// needing a paint.
    pub fn new(bounds: Rect) -> BaseState {
        BaseState {
            id: WidgetId::next(),
            bounds: bounds.clamped(),
            visible: true,
            repaint_requested: true,
        }
    }
}

/// The trait implemented by all widgets.
///
/// A widget owns its [`BaseState`] and any children. There are no parent
/// pointers: containers reach children by walking down from the root.
///
/// Only [`base`], [`base_mut`] and [`paint`] are required. Containers
/// additionally override [`set_bounds`] (to re-layout), [`hit_test`],
/// [`find_descendant`] and friends, and [`needs_repaint`].
///
/// [`base`]: Widget::base
/// [`base_mut`]: Widget::base_mut
/// [`paint`]: Widget::paint
/// [`set_bounds`]: Widget::set_bounds
/// [`hit_test`]: Widget::hit_test
/// [`find_descendant`]: Widget::find_descendant
/// [`needs_repaint`]: Widget::needs_repaint
pub trait Widget: AnyWidget {
    fn base(&self) -> &BaseState;

    fn base_mut(&mut self) -> &mut BaseState;

    /// Draw the widget.
    ///
    /// This must not change logical state; it is called through
    /// [`Widget::render`], which takes care of the repaint flag.
    fn paint(&mut self, canvas: &mut dyn Canvas);

    /// Handle an event, returning `true` if it was consumed.
    ///
    /// A consumed event is not offered to siblings or ancestors.
    fn event(&mut self, _event: &Event) -> bool {
        false
    }

    /// The natural size of the widget's content.
    ///
    /// Zero in either extent means "whatever the container gives".
    fn preferred_size(&self) -> Size {
        self.bounds().size()
    }

    fn on_focus(&mut self) {}

    fn on_blur(&mut self) {}

    /// Periodic tick from the host, delivered to the focused widget.
    fn tick(&mut self, _now: Duration) {}

    /// Move and resize the widget. Negative extents are clamped to zero.
    fn set_bounds(&mut self, rect: Rect) {
        let rect = rect.clamped();
        let base = self.base_mut();
        if base.bounds != rect {
            base.bounds = rect;
            base.repaint_requested = true;
        }
    }

    /// The topmost visible widget at `(x, y)`, if any.
    fn hit_test(&self, x: i32, y: i32) -> Option<WidgetId> {
        if self.is_visible() && self.bounds().contains(x, y) {
            Some(self.id())
        } else {
            None
        }
    }

    /// Look up a widget among this widget's descendants.
    fn find_descendant(&self, _id: WidgetId) -> Option<&dyn Widget> {
        None
    }

    fn find_descendant_mut(&mut self, _id: WidgetId) -> Option<&mut dyn Widget> {
        None
    }

    /// Whether this widget, or anything below it, wants to be repainted.
    fn needs_repaint(&self) -> bool {
        self.base().repaint_requested
    }

    /// Drop any pending repaint request without painting, for this widget
    /// and everything below it.
    fn discard_repaint(&mut self) {
        self.base_mut().repaint_requested = false;
    }

    /// Paint the widget and clear its repaint flag.
    fn render(&mut self, canvas: &mut dyn Canvas) {
        self.paint(canvas);
        self.base_mut().repaint_requested = false;
    }

    fn find(&self, id: WidgetId) -> Option<&dyn Widget> {
        if self.id() == id {
            return Some(self.as_dyn());
        }
        self.find_descendant(id)
    }

    fn find_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        if self.id() == id {
            return Some(self.as_dyn_mut());
        }
        self.find_descendant_mut(id)
    }

    fn id(&self) -> WidgetId {
        self.base().id
    }

    fn bounds(&self) -> Rect {
        self.base().bounds
    }

    fn is_visible(&self) -> bool {
        self.base().visible
    }

    fn set_visible(&mut self, visible: bool) {
        let base = self.base_mut();
        if base.visible != visible {
            base.visible = visible;
            base.repaint_requested = true;
        }
    }

    fn request_repaint(&mut self) {
        self.base_mut().repaint_requested = true;
    }
}

/// Conversions every widget gets for free.
#[doc(hidden)]
pub trait AnyWidget {
    fn as_dyn(&self) -> &dyn Widget;
    fn as_dyn_mut(&mut self) -> &mut dyn Widget;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<W: Widget + 'static> AnyWidget for W {
    fn as_dyn(&self) -> &dyn Widget {
        self
    }

    fn as_dyn_mut(&mut self) -> &mut dyn Widget {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<'a> dyn Widget + 'a {
    /// Get a reference to the concrete widget type, if it matches.
    pub fn downcast_ref<W: Widget + 'static>(&self) -> Option<&W> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<W: Widget + 'static>(&mut self) -> Option<&mut W> {
        self.as_any_mut().downcast_mut()
    }
}

/// Helper for the `event` implementations: the pointer position of a
/// well-formed pointer event.
pub(crate) fn pointer_pos(event: &Event) -> Option<(i32, i32)> {
    event.mouse().map(|m| (m.x, m.y))
}
