//! Tile atlas slicing for the sixteen mask variants
//!
//! Editors ship the variants as one horizontal strip, slice `i` drawn for
//! mask `i`. This module computes where each slice lives and which fills a
//! slice is expected to show; loading and drawing the image stays with the
//! shell.

use crate::algorithm::mask::{DOWN_LEFT, DOWN_RIGHT, EMPTY, FULL, UP_LEFT, UP_RIGHT};
use crate::io::configuration::{ATLAS_VARIANTS, DEFAULT_TILE_SIZE, MASK_BITS};
use crate::io::error::{Result, invalid_parameter};

/// Pixel rectangle of one variant inside the atlas image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// Left edge in pixels
    pub x: f32,
    /// Top edge in pixels
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

/// Horizontal strip of equally sized variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasLayout {
    /// Width of one variant
    pub tile_width: f32,
    /// Height of one variant
    pub tile_height: f32,
}

impl Default for AtlasLayout {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE, DEFAULT_TILE_SIZE)
    }
}

impl AtlasLayout {
    /// Create a layout for tiles of the given size
    pub const fn new(tile_width: f32, tile_height: f32) -> Self {
        Self {
            tile_width,
            tile_height,
        }
    }

    /// Size of the whole strip as `(width, height)`
    pub fn strip_size(&self) -> (f32, f32) {
        (self.tile_width * ATLAS_VARIANTS as f32, self.tile_height)
    }

    /// Source rectangle for a tile index
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the index is not below `ATLAS_VARIANTS`
    pub fn region(&self, index: u8) -> Result<AtlasRegion> {
        if usize::from(index) >= ATLAS_VARIANTS {
            return Err(invalid_parameter(
                "index",
                &index,
                &format!("atlas holds {ATLAS_VARIANTS} variants"),
            ));
        }

        Ok(AtlasRegion {
            x: f32::from(index) * self.tile_width,
            y: 0.0,
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    /// Source rectangles for every variant in index order
    pub fn regions(&self) -> Vec<AtlasRegion> {
        (0..ATLAS_VARIANTS as u8)
            .filter_map(|index| self.region(index).ok())
            .collect()
    }
}

/// Which of a variant's four fills are present
///
/// Stored as the mask itself; bits outside the low nibble are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadrantFill(u8);

impl QuadrantFill {
    /// Decode the fills named by a mask
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask & MASK_BITS)
    }

    /// Re-encode as a mask
    pub const fn to_mask(self) -> u8 {
        self.0
    }

    /// Bit 3 set
    pub const fn up_left(self) -> bool {
        self.0 & UP_LEFT != 0
    }

    /// Bit 2 set
    pub const fn up_right(self) -> bool {
        self.0 & UP_RIGHT != 0
    }

    /// Bit 1 set
    pub const fn down_left(self) -> bool {
        self.0 & DOWN_LEFT != 0
    }

    /// Bit 0 set
    pub const fn down_right(self) -> bool {
        self.0 & DOWN_RIGHT != 0
    }

    /// Number of filled quadrants
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// No quadrant filled (background variant)
    pub const fn is_empty(self) -> bool {
        self.0 == EMPTY
    }

    /// Every quadrant filled
    pub const fn is_full(self) -> bool {
        self.0 == FULL
    }
}
