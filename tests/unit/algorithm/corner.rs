//! Tests for the sixteen-variant corner scheme

#[cfg(test)]
mod tests {
    use autotile::AutotileError;
    use autotile::algorithm::corner::CORNER_PATTERN;
    use autotile::algorithm::{Autotiler, CornerAutotiler};
    use autotile::spatial::MaskGrid;

    fn masks(grid: &MaskGrid) -> Vec<Vec<u8>> {
        (0..grid.rows())
            .map(|row| {
                (0..grid.cols())
                    .map(|col| grid.mask_at(row, col).unwrap())
                    .collect()
            })
            .collect()
    }

    // Tests painting an interior cell writes the full 3x3 table
    // Verified by swapping the left and right neighbor bits
    #[test]
    fn test_paint_interior_cell() {
        let mut grid = MaskGrid::new(5, 5).unwrap();
        CornerAutotiler.paint(&mut grid, 2, 2).unwrap();

        assert_eq!(
            masks(&grid),
            vec![
                vec![0, 0, 0, 0, 0],
                vec![0, 0b1000, 0b1100, 0b0100, 0],
                vec![0, 0b1010, 0b1111, 0b0101, 0],
                vec![0, 0b0010, 0b0011, 0b0001, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );
    }

    // Tests the top-left corner case only touches the 2x2 block
    // Verified by wrapping neighbor coordinates around the grid
    #[test]
    fn test_paint_origin_corner() {
        let mut grid = MaskGrid::new(3, 3).unwrap();
        CornerAutotiler.paint(&mut grid, 0, 0).unwrap();

        assert_eq!(grid.mask_at(0, 0).unwrap(), 0b1111);
        assert_eq!(grid.mask_at(0, 1).unwrap(), 0b0101);
        assert_eq!(grid.mask_at(1, 0).unwrap(), 0b0011);
        assert_eq!(grid.mask_at(1, 1).unwrap(), 0b0001);
        assert_eq!(grid.filled_count(), 4);
    }

    // Tests the bottom-right corner skips neighbors past the far edges
    // Verified by removing the far-edge bounds check
    #[test]
    fn test_paint_far_corner() {
        let mut grid = MaskGrid::new(3, 4).unwrap();
        CornerAutotiler.paint(&mut grid, 2, 3).unwrap();

        assert_eq!(grid.mask_at(1, 2).unwrap(), 0b1000);
        assert_eq!(grid.mask_at(1, 3).unwrap(), 0b1100);
        assert_eq!(grid.mask_at(2, 2).unwrap(), 0b1010);
        assert_eq!(grid.mask_at(2, 3).unwrap(), 0b1111);
        assert_eq!(grid.filled_count(), 4);
    }

    // Tests a single-cell grid receives only the centre bits
    // Verified by skipping the centre entry of the pattern
    #[test]
    fn test_paint_single_cell_grid() {
        let mut grid = MaskGrid::new(1, 1).unwrap();
        CornerAutotiler.paint(&mut grid, 0, 0).unwrap();
        assert_eq!(CornerAutotiler.tile_index_at(&grid, 0, 0).unwrap(), 0b1111);
    }

    // Tests painting twice matches painting once
    // Verified by toggling bits with XOR instead of OR
    #[test]
    fn test_paint_is_idempotent() {
        let mut once = MaskGrid::new(4, 4).unwrap();
        CornerAutotiler.paint(&mut once, 1, 2).unwrap();

        let mut twice = once.clone();
        CornerAutotiler.paint(&mut twice, 1, 2).unwrap();

        assert_eq!(once, twice);
    }

    // Tests erase after paint restores an empty neighborhood
    // Verified by clearing a different bit pattern in erase
    #[test]
    fn test_erase_inverts_paint() {
        let mut grid = MaskGrid::new(5, 5).unwrap();
        let empty = grid.clone();

        CornerAutotiler.paint(&mut grid, 2, 2).unwrap();
        CornerAutotiler.erase(&mut grid, 2, 2).unwrap();

        assert_eq!(grid, empty);
    }

    // Tests adjacent paints merge into shared edge variants
    // Verified by assigning masks instead of OR-ing them
    #[test]
    fn test_adjacent_paints_merge() {
        let mut grid = MaskGrid::new(3, 4).unwrap();
        CornerAutotiler.paint(&mut grid, 1, 1).unwrap();
        CornerAutotiler.paint(&mut grid, 1, 2).unwrap();

        assert_eq!(grid.mask_at(0, 1).unwrap(), 0b1100 | 0b1000);
        assert_eq!(grid.mask_at(0, 2).unwrap(), 0b0100 | 0b1100);
        assert_eq!(grid.mask_at(1, 1).unwrap(), 0b1111);
        assert_eq!(grid.mask_at(1, 2).unwrap(), 0b1111);
        assert_eq!(grid.mask_at(1, 3).unwrap(), 0b0101);
    }

    // Tests erasing one of two strokes clears the shared bits as well
    // Verified by reference counting contributions in erase
    #[test]
    fn test_erase_clears_shared_bits() {
        let mut grid = MaskGrid::new(3, 4).unwrap();
        CornerAutotiler.paint(&mut grid, 1, 1).unwrap();
        CornerAutotiler.paint(&mut grid, 1, 2).unwrap();
        CornerAutotiler.erase(&mut grid, 1, 1).unwrap();

        assert_eq!(grid.mask_at(1, 1).unwrap(), 0);
        assert_eq!(grid.mask_at(1, 2).unwrap(), 0b1010);
        assert_eq!(grid.mask_at(0, 2).unwrap(), 0b1000);
    }

    // Tests an origin off the grid fails without mutation
    // Verified by validating the origin after applying the pattern
    #[test]
    fn test_out_of_bounds_origin() {
        let mut grid = MaskGrid::new(3, 3).unwrap();
        let before = grid.clone();

        assert!(matches!(
            CornerAutotiler.paint(&mut grid, 3, 1),
            Err(AutotileError::OutOfBounds { row: 3, col: 1, rows: 3, cols: 3 })
        ));
        assert!(CornerAutotiler.erase(&mut grid, 0, 3).is_err());
        assert_eq!(grid, before);
    }

    // Tests the pattern table covers each 3x3 offset exactly once
    // Verified by duplicating the centre entry
    #[test]
    fn test_pattern_table_shape() {
        let mut offsets: Vec<_> = CORNER_PATTERN
            .iter()
            .map(|entry| (entry.row_offset, entry.col_offset))
            .collect();
        offsets.sort_unstable();
        offsets.dedup();
        assert_eq!(offsets.len(), 9);

        let total_bits: u32 = CORNER_PATTERN.iter().map(|e| e.bits.count_ones()).sum();
        assert_eq!(total_bits, 16);
    }
}
