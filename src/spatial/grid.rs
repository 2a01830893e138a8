//! Per-cell mask storage for autotiled maps
//!
//! Every cell holds a 4-bit mask describing which of its quadrants belong to
//! the painted region. Queries are bounds-checked and fail loudly, while bit
//! writes that land off the map are silently dropped so that strokes near the
//! edge can address their whole neighborhood without special casing.

use std::fmt;

use ndarray::{Array2, ArrayView2};

use crate::algorithm::mask::EMPTY;
use crate::io::configuration::MASK_BITS;
use crate::io::error::{AutotileError, Result, out_of_bounds};

/// Rectangular grid of 4-bit cell masks
///
/// Dimensions are fixed at construction and every cell starts at mask 0
/// (the background variant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskGrid {
    masks: Array2<u8>,
}

impl MaskGrid {
    /// Create a zeroed grid with the given dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either axis is zero
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(AutotileError::InvalidDimension { rows, cols });
        }

        Ok(Self {
            masks: Array2::zeros((rows, cols)),
        })
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.masks.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.masks.ncols()
    }

    /// Check whether a cell lies inside the grid
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// Current mask of a cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the cell lies outside the grid
    pub fn mask_at(&self, row: usize, col: usize) -> Result<u8> {
        self.masks
            .get((row, col))
            .copied()
            .ok_or_else(|| out_of_bounds(row, col, self.rows(), self.cols()))
    }

    /// OR `bits` into a cell's mask, ignoring cells off the grid
    pub fn set_bits(&mut self, row: usize, col: usize, bits: u8) {
        if let Some(mask) = self.masks.get_mut((row, col)) {
            *mask |= bits & MASK_BITS;
        }
    }

    /// Clear `bits` from a cell's mask, ignoring cells off the grid
    pub fn clear_bits(&mut self, row: usize, col: usize, bits: u8) {
        if let Some(mask) = self.masks.get_mut((row, col)) {
            *mask &= !bits;
        }
    }

    /// Reset every cell to the background mask
    pub fn clear(&mut self) {
        self.masks.fill(EMPTY);
    }

    /// Read-only view of all masks in row-major order
    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.masks.view()
    }

    /// Iterate `((row, col), mask)` over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), u8)> + '_ {
        self.masks.indexed_iter().map(|(pos, &mask)| (pos, mask))
    }

    /// Number of cells with a non-zero mask
    pub fn filled_count(&self) -> usize {
        self.masks.iter().filter(|&&mask| mask != 0).count()
    }
}

/// Renders one line per row with a hex digit per cell
impl fmt::Display for MaskGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.masks.rows() {
            let mut first = true;
            for mask in row {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{mask:x}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
