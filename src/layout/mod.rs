// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Layout strategies.
//!
//! A layout reads a container's bounds and its children's preferred sizes,
//! and writes back each visible child's bounds. Layouts only ever see the
//! narrow [`Container`] view, never the widgets themselves.

mod flex;
mod grid;
mod stack;

use std::any::Any;

use crate::widget::Widget;
use crate::{Rect, Size, WidgetId};

pub use flex::{Column, CrossAxisAlignment, Flex, FlexParams, MainAxisAlignment, Row};
pub use grid::{Grid, GridParams};
pub use stack::{HBox, Stack, VBox};

/// A strategy for positioning the children of a container.
///
/// `arrange` must be deterministic: calling it twice with the same inputs
/// produces the same child bounds.
pub trait Layout: AnyLayout {
    fn arrange(&self, container: &mut dyn Container);

    /// Called when a child leaves the container, so per-child
    /// parameters can be dropped.
    fn child_removed(&mut self, _child: WidgetId) {}
}

#[doc(hidden)]
pub trait AnyLayout {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<L: Any> AnyLayout for L {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<'a> dyn Layout + 'a {
    pub fn downcast_ref<L: Layout + 'static>(&self) -> Option<&L> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<L: Layout + 'static>(&mut self) -> Option<&mut L> {
        self.as_any_mut().downcast_mut()
    }
}

/// The view of a container that a layout works with.
pub trait Container {
    fn bounds(&self) -> Rect;

    fn child_count(&self) -> usize;

    /// The child at `index`, in paint order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    fn child(&mut self, index: usize) -> &mut dyn LayoutChild;
}

/// The view of a single child that a layout works with.
pub trait LayoutChild {
    fn id(&self) -> WidgetId;

    fn bounds(&self) -> Rect;

    fn preferred_size(&self) -> Size;

    fn is_visible(&self) -> bool;

    fn set_bounds(&mut self, rect: Rect);

    /// The preferred size, with each non-positive extent replaced by the
    /// current bounds extent.
    fn measured_size(&self) -> Size {
        let preferred = self.preferred_size();
        let current = self.bounds();
        Size::new(
            if preferred.width > 0 {
                preferred.width
            } else {
                current.width
            },
            if preferred.height > 0 {
                preferred.height
            } else {
                current.height
            },
        )
    }
}

impl LayoutChild for Box<dyn Widget> {
    fn id(&self) -> WidgetId {
        Widget::id(&**self)
    }

    fn bounds(&self) -> Rect {
        Widget::bounds(&**self)
    }

    fn preferred_size(&self) -> Size {
        Widget::preferred_size(&**self)
    }

    fn is_visible(&self) -> bool {
        Widget::is_visible(&**self)
    }

    fn set_bounds(&mut self, rect: Rect) {
        Widget::set_bounds(&mut **self, rect);
    }
}

/// The indices of the visible children of `container`.
pub(crate) fn visible_children(container: &mut dyn Container) -> Vec<usize> {
    (0..container.child_count())
        .filter(|ix| container.child(*ix).is_visible())
        .collect()
}
