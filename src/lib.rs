//! Bitmask autotiling for painted tile maps
//!
//! Every cell of a map carries a 4-bit mask recording which neighboring
//! directions belong to the painted region, and that mask selects one of
//! sixteen pre-sliced tile variants so painted areas get seamless edges and
//! corners. Two encodings are provided: the corner scheme, where strokes
//! paint whole cells, and the vertex scheme, where strokes paint the corners
//! shared by cells.
//!
//! ```
//! use autotile::algorithm::{Autotiler, CornerAutotiler};
//! use autotile::spatial::MaskGrid;
//!
//! let mut grid = MaskGrid::new(4, 4)?;
//! CornerAutotiler.paint(&mut grid, 0, 0)?;
//! assert_eq!(CornerAutotiler.tile_index_at(&grid, 0, 1)?, 0b0101);
//! # Ok::<(), autotile::AutotileError>(())
//! ```

#![forbid(unsafe_code)]

/// Autotiling schemes, stroke events and the editing session
pub mod algorithm;
/// Shell-facing input/output, configuration and error handling
pub mod io;
/// Mask grid storage and pointer mapping
pub mod spatial;

pub use io::error::{AutotileError, Result};
