//! Tests for tile openings, rotation and kind matching

#[cfg(test)]
mod tests {
    use pipemaze::spatial::direction::{Direction, DirectionSet};
    use pipemaze::spatial::tiles::{ROTATIONS, Tile, TileKind};

    const ALL_KINDS: [TileKind; 6] = [
        TileKind::End,
        TileKind::Straight,
        TileKind::Corner,
        TileKind::Tee,
        TileKind::Cross,
        TileKind::Block,
    ];

    fn set(directions: &[Direction]) -> DirectionSet {
        DirectionSet::from_directions(directions)
    }

    // Tests canonical openings at rotation 0
    // Verified by giving the tee a south opening instead of west
    #[test]
    fn test_canonical_openings() {
        use Direction::{East, North, South, West};

        assert_eq!(TileKind::End.canonical_openings(), set(&[North]));
        assert_eq!(TileKind::Straight.canonical_openings(), set(&[North, South]));
        assert_eq!(TileKind::Corner.canonical_openings(), set(&[North, East]));
        assert_eq!(TileKind::Tee.canonical_openings(), set(&[North, East, West]));
        assert_eq!(
            TileKind::Cross.canonical_openings(),
            set(&[North, East, South, West])
        );
        assert!(TileKind::Block.canonical_openings().is_empty());
    }

    // Tests turning a tile turns each of its openings one step clockwise
    // Verified by rotating counter-clockwise in Tile::open_directions
    #[test]
    fn test_rotation_consistency_for_all_tiles() {
        for kind in ALL_KINDS {
            for rotation in 0..ROTATIONS {
                let tile = Tile::new(kind, rotation);
                let next = Tile::new(kind, rotation + 1);
                let expected: DirectionSet =
                    tile.open_directions().iter().map(|d| d.rotated(1)).collect();
                assert_eq!(next.open_directions(), expected, "{kind:?} rotation {rotation}");
            }
        }
    }

    // Tests blocks are closed at every rotation and never turn
    // Verified by letting rotated() increment block rotations
    #[test]
    fn test_block_is_closed_and_fixed() {
        for rotation in 0..ROTATIONS {
            let block = Tile::new(TileKind::Block, rotation);
            assert!(block.open_directions().is_empty());
            assert!(!block.is_rotatable());
        }
        assert_eq!(Tile::BLOCK.rotated(), Tile::BLOCK);
    }

    // Tests the rotation wraps modulo four
    // Verified by removing the modulo in Tile::new
    #[test]
    fn test_rotation_wraps() {
        let tile = Tile::new(TileKind::Corner, 3);
        assert_eq!(tile.rotated().rotation(), 0);
        assert_eq!(Tile::new(TileKind::Corner, 6).rotation(), 2);
    }

    // Tests the endpoint stubs used by the generator
    // Verified by swapping the end rotations
    #[test]
    fn test_end_stub_orientations() {
        assert!(Tile::new(TileKind::End, 2).opens(Direction::South));
        assert!(Tile::new(TileKind::End, 0).opens(Direction::North));
        assert!(!Tile::new(TileKind::End, 0).opens(Direction::South));
    }

    // Tests every non-empty opening set resolves to a tile with exactly those openings
    // Verified by restricting matching to rotation 0
    #[test]
    fn test_matching_covers_every_non_empty_set() {
        for bits in 1..16u8 {
            let openings = DirectionSet::from_bits(bits);
            let tile = Tile::matching(openings);
            assert!(tile.is_some(), "no tile for {openings}");
            assert_eq!(tile.map(Tile::open_directions), Some(openings));
        }
        assert_eq!(Tile::matching(DirectionSet::EMPTY), None);
    }

    // Tests matching picks the expected kind and lowest rotation
    // Verified by trying corners before straights
    #[test]
    fn test_matching_kind_selection() {
        use Direction::{East, North, South, West};

        assert_eq!(
            Tile::matching(set(&[East, West])),
            Some(Tile::new(TileKind::Straight, 1))
        );
        assert_eq!(
            Tile::matching(set(&[South, West])),
            Some(Tile::new(TileKind::Corner, 2))
        );
        assert_eq!(
            Tile::matching(set(&[North, South, West])),
            Some(Tile::new(TileKind::Tee, 3))
        );
        assert_eq!(
            Tile::matching(DirectionSet::ALL),
            Some(Tile::new(TileKind::Cross, 0))
        );
    }

    // Tests the persisted record form and rejection of bad rotations
    // Verified by wrapping out-of-range rotations instead of rejecting them
    #[test]
    fn test_tile_serde() {
        let tile = Tile::new(TileKind::Tee, 3);
        let json = serde_json::to_string(&tile).unwrap();
        assert_eq!(json, r#"{"kind":"tee","rotation":3}"#);
        assert_eq!(serde_json::from_str::<Tile>(&json).unwrap(), tile);

        assert!(serde_json::from_str::<Tile>(r#"{"kind":"tee","rotation":4}"#).is_err());
        assert!(serde_json::from_str::<Tile>(r#"{"kind":"pipe","rotation":0}"#).is_err());
        assert!(
            serde_json::from_str::<Tile>(r#"{"kind":"end","rotation":0,"extra":1}"#).is_err()
        );
    }
}
