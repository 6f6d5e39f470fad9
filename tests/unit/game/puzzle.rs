//! Tests for the puzzle session: moves, locks, cached analysis and new boards

#[cfg(test)]
mod tests {
    use pipemaze::PuzzleError;
    use pipemaze::algorithm::connectivity::reachable_from_start;
    use pipemaze::algorithm::generator::GeneratorConfig;
    use pipemaze::algorithm::solver::solved_path;
    use pipemaze::game::puzzle::Puzzle;
    use pipemaze::spatial::grid::{CellKey, Grid};
    use pipemaze::spatial::tiles::{Tile, TileKind};

    fn corner_puzzle() -> Puzzle {
        let grid = Grid::from_rows(vec![
            vec![Tile::new(TileKind::End, 2), Tile::BLOCK],
            vec![Tile::new(TileKind::Corner, 3), Tile::new(TileKind::End, 3)],
        ])
        .unwrap();
        Puzzle::from_grid(grid, GeneratorConfig::default(), None, 0)
    }

    // Tests an accepted move turns the tile, counts, and refreshes analysis
    // Verified by skipping refresh after rotating
    #[test]
    fn test_rotate_refreshes_analysis() {
        let mut puzzle = corner_puzzle();
        assert!(!puzzle.is_solved());
        assert_eq!(puzzle.reachable().len(), 2);

        assert!(puzzle.rotate(CellKey::new(1, 0)).unwrap());

        assert_eq!(puzzle.moves(), 1);
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.solved_path().len(), 3);
        assert_eq!(puzzle.reachable(), &reachable_from_start(puzzle.grid()));
        assert_eq!(puzzle.solved_path(), &solved_path(puzzle.grid()));
    }

    // Tests endpoints and blocks refuse to turn without counting a move
    // Verified by removing the endpoint lock
    #[test]
    fn test_locked_cells() {
        let mut puzzle = corner_puzzle();
        let before = puzzle.grid().clone();

        assert!(!puzzle.rotate(CellKey::new(0, 0)).unwrap());
        assert!(!puzzle.rotate(CellKey::new(1, 1)).unwrap());
        assert!(!puzzle.rotate(CellKey::new(0, 1)).unwrap());

        assert_eq!(puzzle.moves(), 0);
        assert_eq!(puzzle.grid(), &before);
        assert!(puzzle.is_locked(CellKey::new(0, 0)));
        assert!(!puzzle.is_locked(CellKey::new(1, 0)));
    }

    // Tests moves off the board are errors
    // Verified by clamping the key into range
    #[test]
    fn test_rotate_out_of_bounds() {
        let mut puzzle = corner_puzzle();
        assert!(matches!(
            puzzle.rotate(CellKey::new(2, 0)),
            Err(PuzzleError::CellOutOfBounds { .. })
        ));
        assert_eq!(puzzle.moves(), 0);
    }

    // Tests a generated session remembers its seed and shape
    // Verified by discarding the generation seed
    #[test]
    fn test_generate_records_seed() {
        let config = GeneratorConfig {
            rows: 4,
            cols: 6,
            block_fraction: 0.1,
            seed: Some(17),
        };
        let puzzle = Puzzle::generate(config).unwrap();

        assert_eq!(puzzle.seed(), Some(17));
        assert_eq!((puzzle.grid().rows(), puzzle.grid().cols()), (4, 6));
        assert_eq!(puzzle.moves(), 0);
    }

    // Tests a new board replaces the grid wholesale and resets moves
    // Verified by keeping the move counter across boards
    #[test]
    fn test_new_board_resets_session() {
        let config = GeneratorConfig {
            rows: 5,
            cols: 5,
            block_fraction: 0.0,
            seed: Some(1),
        };
        let mut puzzle = Puzzle::generate(config).unwrap();
        let middle = CellKey::new(2, 2);
        assert!(puzzle.rotate(middle).unwrap());

        puzzle.new_board(Some(2)).unwrap();

        assert_eq!(puzzle.moves(), 0);
        assert_eq!(puzzle.seed(), Some(2));
        assert_eq!(puzzle.config().rows, 5);
        assert_eq!(
            puzzle.grid(),
            Puzzle::generate(GeneratorConfig {
                seed: Some(2),
                ..config
            })
            .unwrap()
            .grid()
        );
    }
}
