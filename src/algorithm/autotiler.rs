//! Common capability of the autotiling schemes
//!
//! Both schemes turn a stroke at an origin into fixed bit writes over a small
//! neighborhood. They differ in what the origin addresses (a cell or a
//! vertex) and in the shape of the neighborhood, so each keeps its own
//! pattern table behind the shared `Autotiler` trait.

use log::trace;

use crate::algorithm::mask::PatternEntry;
use crate::io::error::Result;
use crate::spatial::grid::MaskGrid;

/// What a stroke does to the masks it touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// OR the pattern bits into the neighborhood
    Paint,
    /// Clear the pattern bits from the neighborhood
    Erase,
}

impl Action {
    /// Lower-case keyword used in stroke scripts and logs
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Paint => "paint",
            Self::Erase => "erase",
        }
    }
}

/// A single paint or erase at a grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeEvent {
    /// What to do
    pub action: Action,
    /// Origin row (cell or vertex, depending on the scheme)
    pub row: usize,
    /// Origin column (cell or vertex, depending on the scheme)
    pub col: usize,
}

impl StrokeEvent {
    /// Create a paint stroke
    pub const fn paint(row: usize, col: usize) -> Self {
        Self {
            action: Action::Paint,
            row,
            col,
        }
    }

    /// Create an erase stroke
    pub const fn erase(row: usize, col: usize) -> Self {
        Self {
            action: Action::Erase,
            row,
            col,
        }
    }
}

/// Translates strokes into mask updates and masks into atlas indices
pub trait Autotiler {
    /// Paint at an origin
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the origin is outside the scheme's valid range;
    /// the grid is left untouched in that case
    fn paint(&self, grid: &mut MaskGrid, row: usize, col: usize) -> Result<()>;

    /// Erase at an origin, the bitwise mirror of `paint`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the origin is outside the scheme's valid range;
    /// the grid is left untouched in that case
    fn erase(&self, grid: &mut MaskGrid, row: usize, col: usize) -> Result<()>;

    /// Atlas index to draw for a cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the cell lies outside the grid
    fn tile_index_at(&self, grid: &MaskGrid, row: usize, col: usize) -> Result<u8> {
        grid.mask_at(row, col)
    }

    /// Dispatch a stroke event to `paint` or `erase`
    ///
    /// # Errors
    ///
    /// Propagates the origin validation error from the selected operation
    fn apply(&self, grid: &mut MaskGrid, event: StrokeEvent) -> Result<()> {
        match event.action {
            Action::Paint => self.paint(grid, event.row, event.col),
            Action::Erase => self.erase(grid, event.row, event.col),
        }
    }
}

/// Write every entry of a pattern table around an origin
///
/// Targets that fall off the grid are skipped; the caller is responsible for
/// validating the origin beforehand.
pub fn apply_pattern(
    grid: &mut MaskGrid,
    pattern: &[PatternEntry],
    row: usize,
    col: usize,
    action: Action,
) {
    for entry in pattern {
        let Some((target_row, target_col)) = entry.target(row, col) else {
            continue;
        };
        if !grid.contains(target_row, target_col) {
            continue;
        }

        trace!(
            "{} ({target_row}, {target_col}) bits {:04b}",
            action.keyword(),
            entry.bits
        );
        match action {
            Action::Paint => grid.set_bits(target_row, target_col, entry.bits),
            Action::Erase => grid.clear_bits(target_row, target_col, entry.bits),
        }
    }
}
