// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A layout that arranges its children in a one-dimensional array, with
//! grow factors.

use std::collections::BTreeMap;

use log::trace;

use super::{visible_children, Container, Layout};
use crate::{Axis, WidgetId};

/// Builder for a horizontal [`Flex`].
pub struct Row;
/// Builder for a vertical [`Flex`].
pub struct Column;

/// Placement of children along the main axis, used when no child grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MainAxisAlignment {
    /// Children are packed at the start; leftover space trails them.
    #[default]
    Start,
    /// Leftover space comes before the first child.
    End,
    /// Leftover space is split before the first and after the last child.
    Center,
    /// Leftover space is evenly divided between children, none at the ends.
    SpaceBetween,
    /// Each child gets an equal share of leftover space, half before and
    /// half after it.
    SpaceAround,
}

/// Placement of children across the main axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    #[default]
    Start,
    End,
    Center,
    /// Children fill the container's cross extent.
    Stretch,
}

/// Per-child flex parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FlexParams {
    /// Share of leftover main-axis space; zero means the child keeps its
    /// preferred size.
    pub grow: u32,
}

pub struct Flex {
    direction: Axis,
    main_alignment: MainAxisAlignment,
    cross_alignment: CrossAxisAlignment,
    spacing: i32,
    padding: i32,
    params: BTreeMap<WidgetId, FlexParams>,
}

impl Row {
    pub fn new() -> Flex {
        Flex::new(Axis::Horizontal)
    }
}

impl Column {
    pub fn new() -> Flex {
        Flex::new(Axis::Vertical)
    }
}

impl Flex {
    pub fn new(direction: Axis) -> Flex {
        Flex {
            direction,
            main_alignment: MainAxisAlignment::Start,
            cross_alignment: CrossAxisAlignment::Start,
            spacing: 0,
            padding: 0,
            params: BTreeMap::new(),
        }
    }

    /// Builder-style method for specifying the main axis alignment.
    pub fn main_axis_alignment(mut self, alignment: MainAxisAlignment) -> Self {
        self.main_alignment = alignment;
        self
    }

    /// Builder-style method for specifying the cross axis alignment.
    pub fn cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Builder-style variant of [`Flex::set_grow`].
    pub fn with_grow(mut self, child: WidgetId, grow: u32) -> Self {
        self.set_grow(child, grow);
        self
    }

    /// Set the grow factor for a child.
    ///
    /// This may be called before the child is added to its container.
    pub fn set_grow(&mut self, child: WidgetId, grow: u32) {
        self.params.entry(child).or_default().grow = grow;
    }

    pub fn set_main_axis_alignment(&mut self, alignment: MainAxisAlignment) {
        self.main_alignment = alignment;
    }

    pub fn set_cross_axis_alignment(&mut self, alignment: CrossAxisAlignment) {
        self.cross_alignment = alignment;
    }

    pub fn set_spacing(&mut self, spacing: i32) {
        self.spacing = spacing;
    }

    pub fn set_padding(&mut self, padding: i32) {
        self.padding = padding;
    }

    pub fn params(&self, child: WidgetId) -> FlexParams {
        self.params.get(&child).copied().unwrap_or_default()
    }

    pub fn direction(&self) -> Axis {
        self.direction
    }
}

/// Split `leftover` between grow factors, in proportion, with rounding
/// remainders going to the last growing child so the shares sum exactly.
fn distribute(leftover: i32, grows: &[u32]) -> Vec<i32> {
    let total: u64 = grows.iter().map(|g| u64::from(*g)).sum();
    let mut shares = vec![0; grows.len()];
    if total == 0 || leftover <= 0 {
        return shares;
    }
    let mut given = 0;
    for (share, grow) in shares.iter_mut().zip(grows) {
        *share = (i64::from(leftover) * i64::from(*grow) / total as i64) as i32;
        given += *share;
    }
    if let Some(last) = grows.iter().rposition(|g| *g > 0) {
        shares[last] += leftover - given;
    }
    shares
}

impl Layout for Flex {
    fn arrange(&self, container: &mut dyn Container) {
        let axis = self.direction;
        let bounds = container.bounds();
        let main_extent = axis.major(bounds.size()) - 2 * self.padding;
        let cross_extent = axis.minor(bounds.size()) - 2 * self.padding;
        let main_start = axis.major_pos(bounds) + self.padding;
        let cross_start = axis.minor_pos(bounds) + self.padding;

        // First pass: measure.
        let children = visible_children(container);
        if children.is_empty() {
            return;
        }
        let mut sizes = Vec::with_capacity(children.len());
        let mut grows = Vec::with_capacity(children.len());
        for &ix in &children {
            let child = container.child(ix);
            sizes.push(child.measured_size());
            grows.push(self.params(child.id()).grow);
        }

        let n = children.len() as i32;
        let used = sizes.iter().map(|s| axis.major(*s)).sum::<i32>() + self.spacing * (n - 1);
        let leftover = (main_extent - used).max(0);
        let extra = distribute(leftover, &grows);
        let growing = grows.iter().any(|g| *g > 0);
        trace!(
            "flex {:?}: {} children, leftover {}, growing {}",
            axis,
            n,
            leftover,
            growing
        );

        // Second pass: position.
        let mut major = main_start;
        let mut gap = 0;
        if !growing && leftover > 0 {
            match self.main_alignment {
                MainAxisAlignment::Start => (),
                MainAxisAlignment::End => major += leftover,
                MainAxisAlignment::Center => major += leftover / 2,
                MainAxisAlignment::SpaceBetween => {
                    if n > 1 {
                        gap = leftover / (n - 1);
                    }
                }
                MainAxisAlignment::SpaceAround => {
                    gap = leftover / n;
                    major += gap / 2;
                }
            }
        }

        for (i, &ix) in children.iter().enumerate() {
            let size = sizes[i];
            let main = axis.major(size) + extra[i];
            let natural_cross = axis.minor(size);
            let (minor, cross) = match self.cross_alignment {
                CrossAxisAlignment::Start => (cross_start, natural_cross),
                CrossAxisAlignment::End => {
                    (cross_start + cross_extent - natural_cross, natural_cross)
                }
                CrossAxisAlignment::Center => (
                    cross_start + (cross_extent - natural_cross) / 2,
                    natural_cross,
                ),
                CrossAxisAlignment::Stretch => (cross_start, cross_extent),
            };
            container
                .child(ix)
                .set_bounds(axis.pack(major, minor, main, cross));
            major += main + self.spacing + gap;
        }
    }

    fn child_removed(&mut self, child: WidgetId) {
        self.params.remove(&child);
    }
}
