use battleship_proba::{
    find_best_cell, random_edge_move, random_exploratory_move, select_move, Board, BoardConfig,
    BoardError, ConstantScorer, FeatureTuple, LogisticScorer, MoveMode, Orientation, PolicyConfig,
    SearchBudget,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn fire_interior(board: &mut Board) {
    for r in 1..9 {
        for c in 1..9 {
            board.fire(r, c).unwrap();
        }
    }
}

#[test]
fn test_ties_resolve_to_first_row_major_cell() {
    let mut board = Board::new();
    assert_eq!(find_best_cell(&mut board, &ConstantScorer(0.5)).unwrap(), (0, 0));
    board.fire(0, 0).unwrap();
    assert_eq!(find_best_cell(&mut board, &ConstantScorer(0.5)).unwrap(), (0, 1));
}

#[test]
fn test_uninformative_scores_pick_first_unfired() {
    let mut board = Board::new();
    let zero = |_: &FeatureTuple| 0.0;
    assert_eq!(find_best_cell(&mut board, &zero).unwrap(), (0, 0));

    board.fire(0, 0).unwrap();
    board.fire(0, 1).unwrap();
    assert_eq!(find_best_cell(&mut board, &zero).unwrap(), (0, 2));
    // 0.01 is still treated as noise
    assert_eq!(find_best_cell(&mut board, &ConstantScorer(0.01)).unwrap(), (0, 2));
}

#[test]
fn test_closure_scorer_prefers_marked_cell() {
    let mut board = Board::new();
    let scorer = |f: &FeatureTuple| if f.distance_to_center == 5.657 { 0.9 } else { 0.2 };
    // the four corners tie; (0, 0) comes first
    assert_eq!(find_best_cell(&mut board, &scorer).unwrap(), (0, 0));
    board.fire(0, 0).unwrap();
    assert_eq!(find_best_cell(&mut board, &scorer).unwrap(), (0, 9));
}

#[test]
fn test_logistic_scorer_follows_up_on_hit() {
    let mut board = Board::new();
    board
        .place_ship(5, 5, 3, Orientation::Horizontal, "Destroyer")
        .unwrap();
    board.fire(5, 5).unwrap();
    let best = find_best_cell(&mut board, &LogisticScorer::default()).unwrap();
    assert_eq!(best, (4, 5));
    assert!(board.score(4, 5).unwrap() > 0.25);
}

#[test]
fn test_non_finite_scores_count_as_zero() {
    let mut board = Board::new();
    let scorer = |f: &FeatureTuple| {
        if f.distance_to_center == 5.657 {
            f64::NAN
        } else {
            0.5
        }
    };
    // (0, 0) is a corner and scores NaN; the tie among the rest goes to (0, 1)
    assert_eq!(find_best_cell(&mut board, &scorer).unwrap(), (0, 1));
    assert_eq!(board.score(0, 0), Some(0.0));
}

#[test]
fn test_sweep_writes_scores_to_unfired_cells() {
    let mut board = Board::new();
    board.fire(3, 3).unwrap();
    find_best_cell(&mut board, &ConstantScorer(0.4)).unwrap();
    assert_eq!(board.score(0, 0), Some(0.4));
    assert_eq!(board.score(9, 9), Some(0.4));
    assert_eq!(board.score(3, 3), None);
}

#[test]
fn test_exhausted_board() {
    let mut board = Board::with_config(BoardConfig::new(2, &[])).unwrap();
    for r in 0..2 {
        for c in 0..2 {
            board.fire(r, c).unwrap();
        }
    }
    assert_eq!(
        find_best_cell(&mut board, &ConstantScorer(0.5)).unwrap_err(),
        BoardError::BoardExhausted
    );
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        select_move(
            &mut board,
            &ConstantScorer(0.5),
            &mut rng,
            10,
            &PolicyConfig::default()
        )
        .unwrap_err(),
        BoardError::BoardExhausted
    );
}

#[test]
fn test_exploratory_move_on_fresh_board() {
    let board = Board::new();
    let budget = SearchBudget::default();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (r, c) = random_exploratory_move(&board, &mut rng, &budget).unwrap();
        assert!((1..=8).contains(&r) && (1..=8).contains(&c));
    }
}

#[test]
fn test_exploratory_move_avoids_known_shots() {
    let mut board = Board::new();
    board.fire(4, 4).unwrap();
    // never relax, so every answer must keep clear of (4, 4)
    let budget = SearchBudget {
        max_attempts: 200,
        relax_after: 200,
    };
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Some((r, c)) = random_exploratory_move(&board, &mut rng, &budget) {
            assert!(r.abs_diff(4) > 1 || c.abs_diff(4) > 1, "({r}, {c})");
        }
    }
}

fn fire_interior_checkerboard(board: &mut Board) {
    for r in 1..9 {
        for c in 1..9 {
            if (r + c) % 2 == 0 {
                board.fire(r, c).unwrap();
            }
        }
    }
}

#[test]
fn test_exploratory_move_relaxes_when_every_cell_is_crowded() {
    // every unfired interior cell now has a fired orthogonal neighbor
    let mut board = Board::new();
    fire_interior_checkerboard(&mut board);
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (r, c) = random_exploratory_move(&board, &mut rng, &SearchBudget::default())
            .expect("relaxed search should find a cell");
        assert!((1..=8).contains(&r) && (1..=8).contains(&c));
        assert!(!board.is_fired(r, c));
    }

    let strict = SearchBudget {
        max_attempts: SearchBudget::MAX_ATTEMPTS,
        relax_after: SearchBudget::MAX_ATTEMPTS,
    };
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        assert_eq!(random_exploratory_move(&board, &mut rng, &strict), None);
    }
}

#[test]
fn test_select_move_explores_crowded_board() {
    let mut board = Board::new();
    fire_interior_checkerboard(&mut board);
    let mut rng = SmallRng::seed_from_u64(8);
    let mv = select_move(
        &mut board,
        &ConstantScorer(0.1),
        &mut rng,
        10,
        &PolicyConfig::default(),
    )
    .unwrap();
    assert_eq!(mv.mode, MoveMode::Exploratory);
    assert!((1..=8).contains(&mv.row) && (1..=8).contains(&mv.col));
    assert!(!board.is_fired(mv.row, mv.col));
}

#[test]
fn test_exploratory_move_gives_up() {
    let mut board = Board::new();
    fire_interior(&mut board);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        random_exploratory_move(&board, &mut rng, &SearchBudget::default()),
        None
    );

    let tiny = Board::with_config(BoardConfig::new(2, &[])).unwrap();
    assert_eq!(
        random_exploratory_move(&tiny, &mut rng, &SearchBudget::default()),
        None
    );
}

#[test]
fn test_edge_move_on_fresh_board() {
    let board = Board::new();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (r, c) = random_edge_move(&board, &mut rng, &SearchBudget::default()).unwrap();
        assert!(r == 0 || r == 9 || c == 0 || c == 9);
    }
}

#[test]
fn test_edge_move_gives_up_on_fired_ring() {
    let mut board = Board::new();
    for i in 0..10 {
        for (r, c) in [(0, i), (9, i), (i, 0), (i, 9)] {
            let _ = board.fire(r, c);
        }
    }
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(
        random_edge_move(&board, &mut rng, &SearchBudget::default()),
        None
    );
}

#[test]
fn test_select_move_modes_follow_policy() {
    let policy = PolicyConfig::default();
    let scorer = ConstantScorer(0.1);
    let cases = [
        (0, MoveMode::Best),
        (10, MoveMode::Exploratory),
        (17, MoveMode::Edge),
        (22, MoveMode::Best),
        (27, MoveMode::Edge),
        (31, MoveMode::Best),
    ];
    for (streak, mode) in cases {
        let mut board = Board::new();
        let mut rng = SmallRng::seed_from_u64(streak as u64);
        let mv = select_move(&mut board, &scorer, &mut rng, streak, &policy).unwrap();
        assert_eq!(mv.mode, mode, "streak {streak}");
        assert_eq!(mv.proba, 0.1);
        match mode {
            MoveMode::Best => assert_eq!((mv.row, mv.col), (0, 0)),
            MoveMode::Edge => assert!(mv.row == 0 || mv.row == 9 || mv.col == 0 || mv.col == 9),
            MoveMode::Exploratory => {
                assert!((1..=8).contains(&mv.row) && (1..=8).contains(&mv.col))
            }
        }
    }
}

#[test]
fn test_confident_score_always_plays_best() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(0);
    for streak in [0, 10, 17, 27] {
        let mv = select_move(
            &mut board,
            &ConstantScorer(0.3),
            &mut rng,
            streak,
            &PolicyConfig::default(),
        )
        .unwrap();
        assert_eq!(mv.mode, MoveMode::Best);
        assert_eq!((mv.row, mv.col), (0, 0));
    }
}

#[test]
fn test_proba_rounded_to_three_decimals() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(0);
    let mv = select_move(
        &mut board,
        &ConstantScorer(0.12345),
        &mut rng,
        0,
        &PolicyConfig::default(),
    )
    .unwrap();
    assert_eq!(mv.proba, 0.123);
}

#[test]
fn test_exhausted_search_falls_back_to_best() {
    let mut board = Board::new();
    fire_interior(&mut board);
    let mut rng = SmallRng::seed_from_u64(11);
    let mv = select_move(
        &mut board,
        &ConstantScorer(0.1),
        &mut rng,
        10,
        &PolicyConfig::default(),
    )
    .unwrap();
    assert_eq!(mv.mode, MoveMode::Best);
    assert_eq!((mv.row, mv.col), (0, 0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn selected_cell_is_never_fired(seed in any::<u64>(), streak in 0u32..40) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng).unwrap();
        for _ in 0..rng.random_range(0..90) {
            let _ = board.fire(rng.random_range(0..10), rng.random_range(0..10));
        }
        let mv = select_move(&mut board, &LogisticScorer::default(), &mut rng, streak, &PolicyConfig::default()).unwrap();
        prop_assert!(!board.is_fired(mv.row, mv.col));
        prop_assert!((0.0..=1.0).contains(&mv.proba));
    }

    #[test]
    fn edge_move_respects_neighbor_rule(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        for _ in 0..rng.random_range(0..40) {
            let _ = board.fire(rng.random_range(0..10), rng.random_range(0..10));
        }
        if let Some((r, c)) = random_edge_move(&board, &mut rng, &SearchBudget::default()) {
            prop_assert!(!board.is_fired(r, c));
            let corner = (r == 0 || r == 9) && (c == 0 || c == 9);
            let (r, c) = (r as isize, c as isize);
            let fired = |dr: isize, dc: isize| {
                let (nr, nc) = (r + dr, c + dc);
                (0..10).contains(&nr) && (0..10).contains(&nc) && board.is_fired(nr as usize, nc as usize)
            };
            if corner {
                prop_assert!(!fired(-1, 0) && !fired(1, 0) && !fired(0, -1) && !fired(0, 1));
            } else if r == 0 || r == 9 {
                prop_assert!(!fired(0, -1) && !fired(0, 1));
            } else {
                prop_assert!(!fired(-1, 0) && !fired(1, 0));
            }
        }
    }
}
