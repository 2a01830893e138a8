//! Tests for atlas slicing and variant fill decoding

#[cfg(test)]
mod tests {
    use autotile::AutotileError;
    use autotile::io::atlas::{AtlasLayout, AtlasRegion, QuadrantFill};

    // Tests variants are laid out left to right along the strip
    // Verified by stacking variants vertically
    #[test]
    fn test_region_offsets() {
        let layout = AtlasLayout::default();
        assert_eq!(
            layout.region(0).unwrap(),
            AtlasRegion {
                x: 0.0,
                y: 0.0,
                width: 32.0,
                height: 32.0
            }
        );
        assert_eq!(layout.region(15).unwrap().x, 480.0);
        assert_eq!(layout.strip_size(), (512.0, 32.0));
    }

    // Tests indices past the last variant are rejected
    // Verified by allowing index 16
    #[test]
    fn test_region_out_of_range() {
        let layout = AtlasLayout::new(16.0, 16.0);
        assert!(matches!(
            layout.region(16),
            Err(AutotileError::InvalidParameter { parameter: "index", .. })
        ));
        assert_eq!(layout.regions().len(), 16);
    }

    // Tests fills decode from the direction bits
    // Verified by reading bit 0 as up-left
    #[test]
    fn test_quadrant_fill_from_mask() {
        let fill = QuadrantFill::from_mask(0b1001);
        assert!(fill.up_left());
        assert!(!fill.up_right());
        assert!(!fill.down_left());
        assert!(fill.down_right());
        assert_eq!(fill.count(), 2);
    }

    // Tests every variant re-encodes to its own index
    // Verified by dropping the down-left bit in to_mask
    #[test]
    fn test_quadrant_fill_covers_all_variants() {
        for mask in 0..16u8 {
            assert_eq!(QuadrantFill::from_mask(mask).to_mask(), mask);
        }
        assert!(QuadrantFill::from_mask(0).is_empty());
        assert!(QuadrantFill::from_mask(0b1111).is_full());
        assert!(!QuadrantFill::from_mask(0b0111).is_full());
    }

    // Tests bits above the low nibble never reach the fill
    // Verified by storing the raw mask unmasked
    #[test]
    fn test_quadrant_fill_ignores_high_bits() {
        let fill = QuadrantFill::from_mask(0xF0 | 0b0110);
        assert_eq!(fill.to_mask(), 0b0110);
        assert!(fill.up_right());
        assert!(fill.down_left());
        assert!(QuadrantFill::from_mask(0xF0).is_empty());
        assert!(QuadrantFill::default().is_empty());
    }
}
