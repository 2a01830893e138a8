//! Autotiling constants and runtime configuration defaults

use crate::algorithm::session::Scheme;
use crate::io::error::{Result, invalid_parameter};

// Mask layout shared by both schemes
/// Number of meaningful bits in a cell mask
pub const MASK_BIT_WIDTH: u32 = 4;
/// Bits that may be set in a cell mask
pub const MASK_BITS: u8 = (1 << MASK_BIT_WIDTH) - 1;
/// Number of tile variants in the atlas (one per mask value)
pub const ATLAS_VARIANTS: usize = 1 << MASK_BIT_WIDTH;

/// Default tile width and height in pixels
pub const DEFAULT_TILE_SIZE: f32 = 32.0;

/// Default grid rows for the corner scheme
pub const CORNER_DEFAULT_ROWS: usize = 16;
/// Default grid columns for the corner scheme
pub const CORNER_DEFAULT_COLS: usize = 16;

/// Default grid rows for the vertex scheme
pub const VERTEX_DEFAULT_ROWS: usize = 20;
/// Default grid columns for the vertex scheme
pub const VERTEX_DEFAULT_COLS: usize = 20;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Input settings
/// File extension of stroke scripts picked up from directories
pub const SCRIPT_EXTENSION: &str = "strokes";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Construction parameters for an editor session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Encoding scheme driving paint and erase
    pub scheme: Scheme,
    /// Number of cell rows
    pub rows: usize,
    /// Number of cell columns
    pub cols: usize,
    /// Tile width in pixels
    pub tile_width: f32,
    /// Tile height in pixels
    pub tile_height: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::for_scheme(Scheme::Corner)
    }
}

impl SessionConfig {
    /// Defaults used by the editor for the given scheme
    pub const fn for_scheme(scheme: Scheme) -> Self {
        let (rows, cols) = match scheme {
            Scheme::Corner => (CORNER_DEFAULT_ROWS, CORNER_DEFAULT_COLS),
            Scheme::Vertex => (VERTEX_DEFAULT_ROWS, VERTEX_DEFAULT_COLS),
        };
        Self {
            scheme,
            rows,
            cols,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
        }
    }

    /// Check dimension limits and tile size
    ///
    /// Zero-sized axes are left to grid construction, which reports
    /// them as `InvalidDimension`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if an axis exceeds `MAX_GRID_DIMENSION`
    /// or a tile size is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        if self.rows > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.cols > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "cols",
                &self.cols,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        for (parameter, size) in [
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &size,
                    &"must be a positive finite pixel size",
                ));
            }
        }
        Ok(())
    }
}
