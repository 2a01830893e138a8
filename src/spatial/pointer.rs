//! Pointer-to-grid coordinate mapping for editor shells
//!
//! Cells are hit by plain division by the tile size. Vertices sit on tile
//! corners, so the pointer is shifted by half a tile first and the nearest
//! corner wins.

/// Pixel-space layout of the map on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    /// Screen x of the map's top-left corner
    pub origin_x: f32,
    /// Screen y of the map's top-left corner
    pub origin_y: f32,
    /// Tile width in pixels
    pub tile_width: f32,
    /// Tile height in pixels
    pub tile_height: f32,
}

impl PointerMapper {
    /// Create a mapper for a map anchored at the screen origin
    pub const fn new(tile_width: f32, tile_height: f32) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            tile_width,
            tile_height,
        }
    }

    /// Move the map's top-left corner
    #[must_use]
    pub const fn with_origin(mut self, origin_x: f32, origin_y: f32) -> Self {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }

    /// Cell under the pointer, `None` when outside `[0,rows) x [0,cols)`
    pub fn cell_at(&self, x: f32, y: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let row = Self::axis_index((y - self.origin_y) / self.tile_height, rows)?;
        let col = Self::axis_index((x - self.origin_x) / self.tile_width, cols)?;
        Some((row, col))
    }

    /// Vertex nearest to the pointer, `None` when outside `[0,rows] x [0,cols]`
    pub fn vertex_at(&self, x: f32, y: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let row = Self::axis_index(
            (y - self.origin_y + self.tile_height / 2.0) / self.tile_height,
            rows + 1,
        )?;
        let col = Self::axis_index(
            (x - self.origin_x + self.tile_width / 2.0) / self.tile_width,
            cols + 1,
        )?;
        Some((row, col))
    }

    /// Screen position of a cell's top-left corner
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            (col as f32).mul_add(self.tile_width, self.origin_x),
            (row as f32).mul_add(self.tile_height, self.origin_y),
        )
    }

    /// Screen position of a vertex
    ///
    /// Identical to the corner of the cell sharing its indices; a highlight
    /// centred here marks the vertex.
    pub fn vertex_position(&self, row: usize, col: usize) -> (f32, f32) {
        self.cell_origin(row, col)
    }

    fn axis_index(scaled: f32, limit: usize) -> Option<usize> {
        if !scaled.is_finite() {
            return None;
        }
        let index = scaled.floor();
        if index < 0.0 {
            return None;
        }
        // Saturating cast keeps the comparison exact for any limit
        let index = index as usize;
        (index < limit).then_some(index)
    }
}
