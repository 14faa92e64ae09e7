// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Sequential stacking along one axis.

use log::trace;

use super::{visible_children, Container, Layout};
use crate::Axis;

/// Stacks children one after another along an axis.
///
/// Each child gets its preferred extent along the axis and the container's
/// full extent (less padding) across it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stack {
    axis: Axis,
    spacing: i32,
    padding: i32,
}

/// Builder for a vertical [`Stack`].
pub struct VBox;

/// Builder for a horizontal [`Stack`].
pub struct HBox;

impl VBox {
    pub fn new(spacing: i32) -> Stack {
        Stack::new(Axis::Vertical, spacing)
    }
}

impl HBox {
    pub fn new(spacing: i32) -> Stack {
        Stack::new(Axis::Horizontal, spacing)
    }
}

impl Stack {
    pub fn new(axis: Axis, spacing: i32) -> Stack {
        Stack {
            axis,
            spacing,
            padding: 0,
        }
    }

    /// Builder-style method to set the padding around all children.
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn padding(&self) -> i32 {
        self.padding
    }
}

impl Layout for Stack {
    fn arrange(&self, container: &mut dyn Container) {
        let bounds = container.bounds();
        let axis = self.axis;
        let mut major = axis.major_pos(bounds) + self.padding;
        let minor = axis.minor_pos(bounds) + self.padding;
        let cross = axis.minor(bounds.size()) - 2 * self.padding;

        let children = visible_children(container);
        trace!("stack {:?}: {} visible children", axis, children.len());
        for ix in children {
            let child = container.child(ix);
            let extent = axis.major(child.measured_size());
            child.set_bounds(axis.pack(major, minor, extent, cross));
            major += extent + self.spacing;
        }
    }
}
