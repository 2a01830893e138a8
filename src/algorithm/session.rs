//! Editing session owning the map state
//!
//! A session ties one mask grid to one encoding scheme and the screen layout
//! used to map pointer positions onto it. Shells feed it strokes and read
//! tile indices back for drawing.

use clap::ValueEnum;
use log::{debug, warn};
use ndarray::Array2;

use crate::algorithm::autotiler::{Action, Autotiler, StrokeEvent};
use crate::algorithm::corner::CornerAutotiler;
use crate::algorithm::vertex::VertexAutotiler;
use crate::io::configuration::SessionConfig;
use crate::io::error::Result;
use crate::spatial::grid::MaskGrid;
use crate::spatial::pointer::PointerMapper;

/// Encoding scheme selecting what a stroke origin addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Scheme {
    /// Strokes paint cells and blend the 3x3 block around them
    Corner,
    /// Strokes paint vertices and blend the four cells touching them
    Vertex,
}

static CORNER: CornerAutotiler = CornerAutotiler::new();
static VERTEX: VertexAutotiler = VertexAutotiler::new();

impl Scheme {
    /// Autotiler implementing this scheme
    pub fn autotiler(self) -> &'static dyn Autotiler {
        match self {
            Self::Corner => &CORNER,
            Self::Vertex => &VERTEX,
        }
    }

    /// Lower-case scheme name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Corner => "corner",
            Self::Vertex => "vertex",
        }
    }
}

/// Map state for one editing session
#[derive(Debug, Clone)]
pub struct EditorSession {
    grid: MaskGrid,
    scheme: Scheme,
    pointer: PointerMapper,
    strokes_applied: usize,
}

impl EditorSession {
    /// Create a session with an empty map
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation and
    /// `InvalidDimension` if either grid axis is zero
    pub fn new(config: &SessionConfig) -> Result<Self> {
        config.validate()?;
        let grid = MaskGrid::new(config.rows, config.cols)?;

        debug!(
            "new {} session with {}x{} grid",
            config.scheme.name(),
            config.rows,
            config.cols
        );

        Ok(Self {
            grid,
            scheme: config.scheme,
            pointer: PointerMapper::new(config.tile_width, config.tile_height),
            strokes_applied: 0,
        })
    }

    /// Replace the screen layout used for pointer mapping
    #[must_use]
    pub const fn with_pointer(mut self, pointer: PointerMapper) -> Self {
        self.pointer = pointer;
        self
    }

    /// Active encoding scheme
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Current mask state
    pub const fn grid(&self) -> &MaskGrid {
        &self.grid
    }

    /// Screen layout used for pointer mapping
    pub const fn pointer(&self) -> &PointerMapper {
        &self.pointer
    }

    /// Number of strokes successfully applied since creation or reset
    pub const fn strokes_applied(&self) -> usize {
        self.strokes_applied
    }

    /// Apply a stroke at grid coordinates
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the origin is outside the scheme's range;
    /// the map is unchanged in that case
    pub fn apply(&mut self, event: StrokeEvent) -> Result<()> {
        self.scheme.autotiler().apply(&mut self.grid, event)?;
        self.strokes_applied += 1;
        Ok(())
    }

    /// Map a pointer position with the scheme's rule and apply a stroke there
    ///
    /// Returns the grid coordinate that was stroked, or `None` when the
    /// pointer is off the map and nothing changed.
    ///
    /// # Errors
    ///
    /// Propagates stroke errors; none are expected for mapped coordinates
    pub fn apply_at_pointer(
        &mut self,
        action: Action,
        x: f32,
        y: f32,
    ) -> Result<Option<(usize, usize)>> {
        let Some((row, col)) = self.hover(x, y) else {
            warn!(
                "pointer ({x}, {y}) is off the {} map, {} ignored",
                self.scheme.name(),
                action.keyword()
            );
            return Ok(None);
        };

        self.apply(StrokeEvent { action, row, col })?;
        Ok(Some((row, col)))
    }

    /// Cell or vertex a pointer position highlights under this scheme
    pub fn hover(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        match self.scheme {
            Scheme::Corner => self.pointer.cell_at(x, y, rows, cols),
            Scheme::Vertex => self.pointer.vertex_at(x, y, rows, cols),
        }
    }

    /// Atlas index to draw for a cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the cell lies outside the map
    pub fn tile_index_at(&self, row: usize, col: usize) -> Result<u8> {
        self.scheme.autotiler().tile_index_at(&self.grid, row, col)
    }

    /// Snapshot of every cell's atlas index for a redraw pass
    pub fn tile_map(&self) -> Array2<u8> {
        self.grid.view().to_owned()
    }

    /// Clear the map back to the background variant
    pub fn reset(&mut self) {
        self.grid.clear();
        self.strokes_applied = 0;
    }
}
