use battleship_proba::{Board, BoardError, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    let shots = rng.random_range(0..BOARD_SIZE as usize * 4);
    for _ in 0..shots {
        let r = rng.random_range(0..BOARD_SIZE as usize);
        let c = rng.random_range(0..BOARD_SIZE as usize);
        let _ = board.fire(r, c);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn occupancy_matches_cells(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.occupied_indices().count_ones(), board.config().total_ship_cells());
        prop_assert_eq!(board.config().total_ship_cells(), 17);
        for cell in board.cells() {
            prop_assert_eq!(cell.is_occupied(), board.occupied_indices().contains(cell.index()));
            prop_assert_eq!(cell.is_occupied(), cell.owner_label().is_some());
        }
        for ship in board.ships() {
            prop_assert!(ship.placement.fits(board.dim()));
        }
    }

    #[test]
    fn fire_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE as usize, col in 0..BOARD_SIZE as usize) {
        let mut board = random_board(seed);
        let _ = board.fire(row, col);
        let shots = board.shots_taken();
        let err = board.fire(row, col).unwrap_err();
        prop_assert_eq!(err, BoardError::AlreadyFired);
        prop_assert_eq!(board.shots_taken(), shots);
        prop_assert!(board.is_fired(row, col));
    }

    #[test]
    fn hits_are_monotonic(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(seed);
        let fired: Vec<_> = board.cells().iter().filter(|c| c.is_hit()).map(|c| c.index()).collect();
        for _ in 0..30 {
            let _ = board.fire(rng.random_range(0..10), rng.random_range(0..10));
        }
        for idx in fired {
            prop_assert!(board.cells()[idx].is_hit());
        }
    }
}
