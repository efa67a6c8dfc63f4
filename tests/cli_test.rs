#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use battleship_proba::{
        parse_coord, parse_placement, Board, CliPlayer, GameError, Orientation, Player,
        TOTAL_SHIP_CELLS,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn scripted(lines: &str) -> CliPlayer {
        CliPlayer::with_input("tester", Cursor::new(lines.to_string()))
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1", 10), Ok((0, 0)));
        assert_eq!(parse_coord("j10", 10), Ok((9, 9)));
        assert_eq!(parse_coord("C7", 10), Ok((6, 2)));
        assert!(parse_coord("", 10).is_err());
        assert!(parse_coord("A", 10).is_err());
        assert!(parse_coord("K1", 10).is_err());
        assert!(parse_coord("A0", 10).is_err());
        assert!(parse_coord("A11", 10).is_err());
        assert!(parse_coord("5A", 10).is_err());
    }

    #[test]
    fn test_parse_placement() {
        assert_eq!(
            parse_placement("B3 V", 10),
            Ok((2, 1, Orientation::Vertical))
        );
        assert_eq!(
            parse_placement("b3 0", 10),
            Ok((2, 1, Orientation::Horizontal))
        );
        assert!(parse_placement("B3", 10).is_err());
        assert!(parse_placement("B3 X", 10).is_err());
        assert!(parse_placement("", 10).is_err());
    }

    #[test]
    fn test_scripted_placement_with_retry() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut board = Board::new();
        // carrier on row 1, an overlapping battleship, help, then a legal one
        let mut player = scripted("A1 H\nA1 V\nhelp\nA2 V\n\n\n\n");
        player.place_fleet(&mut rng, &mut board).unwrap();

        assert!(board.fleet_complete());
        assert_eq!(board.occupied_indices().count_ones(), TOTAL_SHIP_CELLS);
        for c in 0..5 {
            assert_eq!(board.cell(0, c).unwrap().owner_label(), Some("Carrier"));
        }
        for r in 1..5 {
            assert_eq!(board.cell(r, 0).unwrap().owner_label(), Some("Battleship"));
        }
    }

    #[test]
    fn test_input_closed_during_placement() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = Board::new();
        let mut player = scripted("A1 H\n");
        assert_eq!(
            player.place_fleet(&mut rng, &mut board).unwrap_err(),
            GameError::InputClosed
        );
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn test_choose_target_skips_bad_and_repeated_input() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut target = Board::new();
        target.fire(0, 0).unwrap();
        let mut player = scripted("Z9\nA1\nC2\n");
        assert_eq!(player.choose_target(&mut rng, &mut target), Ok((1, 2)));
    }

    #[test]
    fn test_reproducible_rng() {
        // Same seed, same ENTER-only script: identical random fleets
        let mut boards = Vec::new();
        for _ in 0..2 {
            let mut rng = SmallRng::seed_from_u64(42);
            let mut board = Board::new();
            scripted("\n\n\n\n\n")
                .place_fleet(&mut rng, &mut board)
                .unwrap();
            boards.push(board);
        }
        assert_eq!(boards[0].ships(), boards[1].ships());
    }
}
