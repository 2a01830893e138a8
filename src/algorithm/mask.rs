//! Direction bit layout shared by both encoding schemes
//!
//! The four bits of a mask are named after the diagonal directions, bit 3
//! for up-left down to bit 0 for down-right. A stroke hands each affected
//! cell the bits naming the direction in which that cell lies from the
//! stroke origin. The mask value doubles as the sprite index in a 16-slot
//! atlas, so slice `i` has to depict the union of the fills named by `i`.

/// Up-left direction, bit 3
pub const UP_LEFT: u8 = 0b1000;
/// Up-right direction, bit 2
pub const UP_RIGHT: u8 = 0b0100;
/// Down-left direction, bit 1
pub const DOWN_LEFT: u8 = 0b0010;
/// Down-right direction, bit 0
pub const DOWN_RIGHT: u8 = 0b0001;

/// Both upward bits
pub const UP: u8 = UP_LEFT | UP_RIGHT;
/// Both downward bits
pub const DOWN: u8 = DOWN_LEFT | DOWN_RIGHT;
/// Both leftward bits
pub const LEFT: u8 = UP_LEFT | DOWN_LEFT;
/// Both rightward bits
pub const RIGHT: u8 = UP_RIGHT | DOWN_RIGHT;

/// Background variant
pub const EMPTY: u8 = 0;
/// Fully painted variant
pub const FULL: u8 = UP | DOWN;

/// A single bit contribution to a cell relative to a stroke origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternEntry {
    /// Row offset from the origin
    pub row_offset: isize,
    /// Column offset from the origin
    pub col_offset: isize,
    /// Bits written to the target cell
    pub bits: u8,
}

impl PatternEntry {
    /// Create a pattern entry
    pub const fn new(row_offset: isize, col_offset: isize, bits: u8) -> Self {
        Self {
            row_offset,
            col_offset,
            bits,
        }
    }

    /// Target cell for an origin, `None` if it would sit above or left of the grid
    pub const fn target(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        match (
            row.checked_add_signed(self.row_offset),
            col.checked_add_signed(self.col_offset),
        ) {
            (Some(target_row), Some(target_col)) => Some((target_row, target_col)),
            _ => None,
        }
    }
}
