//! Vertex-anchored scheme
//!
//! Strokes address the corners shared by cells rather than the cells
//! themselves. A map of `rows x cols` cells has `(rows + 1) x (cols + 1)`
//! vertices, and every vertex touches at most four cells, each of which
//! receives exactly one bit.

use log::debug;

use crate::algorithm::autotiler::{Action, Autotiler, apply_pattern};
use crate::algorithm::mask::{DOWN_LEFT, DOWN_RIGHT, PatternEntry, UP_LEFT, UP_RIGHT};
use crate::io::error::{Result, out_of_bounds};
use crate::spatial::grid::MaskGrid;

/// Bits written around a painted vertex, as cell offsets from the vertex
///
/// Vertex `(r, c)` is the top-left corner of cell `(r, c)`, so the four cells
/// touching it sit at offsets `-1..=0` on each axis.
pub const VERTEX_PATTERN: [PatternEntry; 4] = [
    PatternEntry::new(-1, -1, UP_LEFT),
    PatternEntry::new(-1, 0, UP_RIGHT),
    PatternEntry::new(0, -1, DOWN_LEFT),
    PatternEntry::new(0, 0, DOWN_RIGHT),
];

/// Paints grid vertices and blends the up to four cells around each
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexAutotiler;

impl VertexAutotiler {
    /// Create the vertex scheme
    pub const fn new() -> Self {
        Self
    }

    /// Check whether a vertex exists on a grid
    ///
    /// The last row and column of vertices lie on the bottom and right map
    /// borders, so the range is inclusive of `rows` and `cols`.
    pub fn contains_vertex(grid: &MaskGrid, row: usize, col: usize) -> bool {
        row <= grid.rows() && col <= grid.cols()
    }

    fn stroke(grid: &mut MaskGrid, row: usize, col: usize, action: Action) -> Result<()> {
        if !Self::contains_vertex(grid, row, col) {
            return Err(out_of_bounds(row, col, grid.rows() + 1, grid.cols() + 1));
        }

        debug!("vertex {} at vertex ({row}, {col})", action.keyword());
        apply_pattern(grid, &VERTEX_PATTERN, row, col, action);
        Ok(())
    }
}

impl Autotiler for VertexAutotiler {
    fn paint(&self, grid: &mut MaskGrid, row: usize, col: usize) -> Result<()> {
        Self::stroke(grid, row, col, Action::Paint)
    }

    fn erase(&self, grid: &mut MaskGrid, row: usize, col: usize) -> Result<()> {
        Self::stroke(grid, row, col, Action::Erase)
    }
}
