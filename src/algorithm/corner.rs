//! Sixteen-variant corner/edge scheme
//!
//! Painting a cell sets all four of its bits and contributes to each of its
//! eight neighbors: two bits for edge neighbors, one for diagonal neighbors.
//! The accumulated mask is used directly as the sprite index.

use log::debug;

use crate::algorithm::autotiler::{Action, Autotiler, apply_pattern};
use crate::algorithm::mask::{
    DOWN, DOWN_LEFT, DOWN_RIGHT, FULL, LEFT, PatternEntry, RIGHT, UP, UP_LEFT, UP_RIGHT,
};
use crate::io::error::{Result, out_of_bounds};
use crate::spatial::grid::MaskGrid;

/// Bits written around a painted cell, as offsets from the cell
///
/// Each neighbor receives the bits naming the direction in which it lies
/// from the painted cell; edge neighbors get two bits, diagonal ones one.
pub const CORNER_PATTERN: [PatternEntry; 9] = [
    PatternEntry::new(-1, -1, UP_LEFT),
    PatternEntry::new(-1, 0, UP),
    PatternEntry::new(-1, 1, UP_RIGHT),
    PatternEntry::new(0, -1, LEFT),
    PatternEntry::new(0, 0, FULL),
    PatternEntry::new(0, 1, RIGHT),
    PatternEntry::new(1, -1, DOWN_LEFT),
    PatternEntry::new(1, 0, DOWN),
    PatternEntry::new(1, 1, DOWN_RIGHT),
];

/// Paints whole cells and blends the surrounding 3x3 block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CornerAutotiler;

impl CornerAutotiler {
    /// Create the corner scheme
    pub const fn new() -> Self {
        Self
    }

    fn stroke(grid: &mut MaskGrid, row: usize, col: usize, action: Action) -> Result<()> {
        if !grid.contains(row, col) {
            return Err(out_of_bounds(row, col, grid.rows(), grid.cols()));
        }

        debug!("corner {} at cell ({row}, {col})", action.keyword());
        apply_pattern(grid, &CORNER_PATTERN, row, col, action);
        Ok(())
    }
}

impl Autotiler for CornerAutotiler {
    fn paint(&self, grid: &mut MaskGrid, row: usize, col: usize) -> Result<()> {
        Self::stroke(grid, row, col, Action::Paint)
    }

    fn erase(&self, grid: &mut MaskGrid, row: usize, col: usize) -> Result<()> {
        Self::stroke(grid, row, col, Action::Erase)
    }
}
