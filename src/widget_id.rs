// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// A unique identifier for a single widget.
///
/// Ids are allocated when a widget is constructed and are never reused, so
/// they stay valid as keys after the widget moves between containers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(u32);

static WIDGET_ID_COUNTER: AtomicU32 = AtomicU32::new(1);

impl WidgetId {
    /// Allocate a new, unique widget id.
    ///
    /// Do note that if we create 4 billion widgets there may be a collision.
    pub fn next() -> WidgetId {
        let id = WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        WidgetId(id)
    }

    pub fn to_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WidgetId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
        assert!(a < b);
    }
}
