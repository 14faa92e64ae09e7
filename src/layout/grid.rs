// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A fixed grid of uniform cells.

use std::collections::BTreeMap;

use log::trace;

use super::{Container, Layout};
use crate::{Rect, WidgetId};

/// Placement of a single child in a [`Grid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridParams {
    pub row: usize,
    pub col: usize,
    /// Number of rows covered; zero is treated as one.
    pub row_span: usize,
    /// Number of columns covered; zero is treated as one.
    pub col_span: usize,
}

impl Default for GridParams {
    fn default() -> Self {
        GridParams {
            row: 0,
            col: 0,
            row_span: 1,
            col_span: 1,
        }
    }
}

/// Places children on a `rows` by `cols` grid of equally sized cells.
///
/// Children without an explicit position go to the top-left cell.
/// Overlapping placements are allowed; the later child paints on top.
pub struct Grid {
    rows: usize,
    cols: usize,
    spacing: i32,
    padding: i32,
    params: BTreeMap<WidgetId, GridParams>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            spacing: 0,
            padding: 0,
            params: BTreeMap::new(),
        }
    }

    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    pub fn set_position(&mut self, child: WidgetId, row: usize, col: usize) {
        let params = self.params.entry(child).or_default();
        params.row = row;
        params.col = col;
    }

    pub fn set_span(&mut self, child: WidgetId, row_span: usize, col_span: usize) {
        let params = self.params.entry(child).or_default();
        params.row_span = row_span;
        params.col_span = col_span;
    }

    pub fn params(&self, child: WidgetId) -> GridParams {
        self.params.get(&child).copied().unwrap_or_default()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn cell_extent(&self, extent: i32, cells: usize) -> i32 {
        let cells = cells as i32;
        ((extent - self.spacing * (cells - 1)) / cells).max(0)
    }
}

impl Layout for Grid {
    fn arrange(&self, container: &mut dyn Container) {
        if self.rows == 0 || self.cols == 0 {
            return;
        }
        let bounds = container.bounds();
        let inner = Rect::new(
            bounds.x + self.padding,
            bounds.y + self.padding,
            bounds.width - 2 * self.padding,
            bounds.height - 2 * self.padding,
        );
        let cell_w = self.cell_extent(inner.width, self.cols);
        let cell_h = self.cell_extent(inner.height, self.rows);
        trace!(
            "grid {}x{}: cells {}x{}",
            self.rows,
            self.cols,
            cell_w,
            cell_h
        );

        for ix in 0..container.child_count() {
            let child = container.child(ix);
            if !child.is_visible() {
                continue;
            }
            let params = self.params(child.id());
            let row_span = params.row_span.max(1) as i32;
            let col_span = params.col_span.max(1) as i32;
            let x = inner.x + params.col as i32 * (cell_w + self.spacing);
            let y = inner.y + params.row as i32 * (cell_h + self.spacing);
            let width = col_span * cell_w + (col_span - 1) * self.spacing;
            let height = row_span * cell_h + (row_span - 1) * self.spacing;
            child.set_bounds(Rect::new(x, y, width, height));
        }
    }

    fn child_removed(&mut self, child: WidgetId) {
        self.params.remove(&child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_util::Blocks;

    #[test]
    fn uniform_cells() {
        let mut blocks = Blocks::new(Rect::new(0, 0, 300, 300), &[(5, 5); 3]);
        let ids: Vec<_> = blocks.children.iter().map(|c| c.id).collect();
        let mut grid = Grid::new(3, 3);
        grid.set_position(ids[1], 1, 2);
        grid.set_position(ids[2], 2, 0);
        grid.set_span(ids[2], 1, 2);
        grid.arrange(&mut blocks);
        assert_eq!(
            blocks.rects(),
            vec![
                Rect::new(0, 0, 100, 100),
                Rect::new(200, 100, 100, 100),
                Rect::new(0, 200, 200, 100),
            ]
        );
    }

    #[test]
    fn span_includes_spacing() {
        let mut blocks = Blocks::new(Rect::new(0, 0, 320, 320), &[(5, 5)]);
        let id = blocks.children[0].id;
        let mut grid = Grid::new(3, 3).with_spacing(10);
        grid.set_span(id, 0, 2);
        grid.arrange(&mut blocks);
        assert_eq!(blocks.children[0].bounds, Rect::new(0, 0, 210, 100));
    }

    #[test]
    fn padding_and_floor_division() {
        let mut blocks = Blocks::new(Rect::new(10, 10, 107, 50), &[(5, 5)]);
        let id = blocks.children[0].id;
        let mut grid = Grid::new(1, 2).with_padding(5).with_spacing(3);
        grid.set_position(id, 0, 1);
        grid.arrange(&mut blocks);
        // (97 - 3) / 2 = 47
        assert_eq!(blocks.children[0].bounds, Rect::new(65, 15, 47, 40));
    }

    #[test]
    fn degenerate_grids() {
        let mut blocks = Blocks::new(Rect::new(0, 0, 10, 10), &[(5, 5)]);
        Grid::new(0, 3).arrange(&mut blocks);
        assert_eq!(blocks.children[0].bounds, Rect::ZERO);
        Grid::new(4, 4).with_spacing(10).arrange(&mut blocks);
        assert_eq!(blocks.children[0].bounds, Rect::new(0, 0, 0, 0));
    }

    #[test]
    fn invisible_children_are_left_alone() {
        let mut blocks = Blocks::new(Rect::new(0, 0, 100, 100), &[(5, 5)]);
        blocks.children[0].visible = false;
        blocks.children[0].bounds = Rect::new(1, 2, 3, 4);
        Grid::new(2, 2).arrange(&mut blocks);
        assert_eq!(blocks.children[0].bounds, Rect::new(1, 2, 3, 4));
    }
}
