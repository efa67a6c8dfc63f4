// Score-driven target selection with randomized fallback searches.
// Uses no_std and avoids heap allocations; the only state left behind is the
// per-cell score written during a sweep.

use rand::Rng;

use crate::{
    board::Board,
    common::BoardError,
    features::{self, round_to},
    policy::{MoveMode, PolicyConfig, SearchBudget},
    scorer::Scorer,
};

/// A best score at or below this is treated as uninformative.
pub const NEAR_ZERO_SCORE: f64 = 0.01;

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A chosen shot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub mode: MoveMode,
    /// Score of the best cell at decision time, 3 decimals. For fallback
    /// moves this is the score that was judged too weak, not the score of
    /// the cell actually played.
    pub proba: f64,
}

/// Score every unfired cell and return the highest-scoring one.
///
/// Cells are visited in row-major order and only a strictly greater score
/// replaces the current best, so the first cell wins ties. When the best
/// score is at most [`NEAR_ZERO_SCORE`] the first unfired cell is returned
/// instead.
pub fn find_best_cell<S: Scorer + ?Sized>(
    board: &mut Board,
    scorer: &S,
) -> Result<(usize, usize), BoardError> {
    let dim = board.dim();
    let mut first = None;
    let mut best: Option<((usize, usize), f64)> = None;
    for index in 0..dim * dim {
        let (row, col) = (index / dim, index % dim);
        if board.is_fired(row, col) {
            continue;
        }
        let features = features::extract(board, row, col)?;
        let score = scorer.score(&features);
        // Non-finite scores count as 0.
        let score = if score.is_finite() {
            score
        } else {
            log::warn!("scorer returned {} at ({}, {}), using 0", score, row, col);
            0.0
        };
        debug_assert!(
            (0.0..=1.0).contains(&score),
            "scorer returned {} outside [0, 1]",
            score
        );
        board.set_score(row, col, score);
        first.get_or_insert((row, col));
        if best.map_or(true, |(_, max)| score > max) {
            best = Some(((row, col), score));
        }
    }
    let first = first.ok_or(BoardError::BoardExhausted)?;
    match best {
        Some((cell, max)) if max > NEAR_ZERO_SCORE => {
            log::trace!("best cell {:?} scored {:.3}", cell, max);
            Ok(cell)
        }
        _ => {
            log::debug!("scores uninformative, falling back to first unfired cell {:?}", first);
            Ok(first)
        }
    }
}

fn has_fired_neighbor(board: &Board, row: usize, col: usize) -> bool {
    NEIGHBORS
        .iter()
        .any(|&(dr, dc)| board.is_fired_at(row as isize + dr, col as isize + dc))
}

/// Random interior cell with no fired neighbor.
///
/// Samples `row, col` in `[1, dim-2]`. After `budget.relax_after` attempts any
/// unfired interior cell is accepted; after `budget.max_attempts` the search
/// gives up and returns `None`.
pub fn random_exploratory_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    budget: &SearchBudget,
) -> Option<(usize, usize)> {
    let dim = board.dim();
    if dim < 3 {
        return None;
    }
    for attempt in 1..=budget.max_attempts {
        let row = rng.random_range(1..=dim - 2);
        let col = rng.random_range(1..=dim - 2);
        if board.is_fired(row, col) {
            continue;
        }
        if attempt > budget.relax_after || !has_fired_neighbor(board, row, col) {
            return Some((row, col));
        }
    }
    log::debug!(
        "exploratory search found nothing in {} attempts",
        budget.max_attempts
    );
    None
}

// Corners check both orthogonal neighbors; other ring cells check the two
// neighbors running along their edge.
fn edge_neighbor_fired(board: &Board, row: usize, col: usize, horizontal_edge: bool) -> bool {
    let last = board.dim() - 1;
    let (r, c) = (row as isize, col as isize);
    let corner = (row == 0 || row == last) && (col == 0 || col == last);
    if corner {
        [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
            .iter()
            .any(|&(nr, nc)| board.is_fired_at(nr, nc))
    } else if horizontal_edge {
        board.is_fired_at(r, c - 1) || board.is_fired_at(r, c + 1)
    } else {
        board.is_fired_at(r - 1, c) || board.is_fired_at(r + 1, c)
    }
}

/// Random cell on the outer ring whose edge neighbors are unfired.
///
/// Each attempt first picks a horizontal (top/bottom) or vertical
/// (left/right) edge, then a position along it. Returns `None` after
/// `budget.max_attempts` attempts.
pub fn random_edge_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    budget: &SearchBudget,
) -> Option<(usize, usize)> {
    let dim = board.dim();
    if dim == 0 {
        return None;
    }
    let last = dim - 1;
    for _ in 0..budget.max_attempts {
        let horizontal_edge: bool = rng.random();
        let side = if rng.random() { 0 } else { last };
        let along = rng.random_range(0..dim);
        let (row, col) = if horizontal_edge {
            (side, along)
        } else {
            (along, side)
        };
        if board.is_fired(row, col) || edge_neighbor_fired(board, row, col, horizontal_edge) {
            continue;
        }
        return Some((row, col));
    }
    log::debug!("edge search found nothing in {} attempts", budget.max_attempts);
    None
}

/// Choose the next shot by blending best-score targeting with random search.
///
/// `miss_streak` is the caller's running count of misses. A fallback search
/// that finds nothing degrades to the best cell, so the result is always an
/// unfired cell.
pub fn select_move<S: Scorer + ?Sized, R: Rng + ?Sized>(
    board: &mut Board,
    scorer: &S,
    rng: &mut R,
    miss_streak: u32,
    policy: &PolicyConfig,
) -> Result<Move, BoardError> {
    let (best_row, best_col) = find_best_cell(board, scorer)?;
    let proba = round_to(board.score(best_row, best_col).unwrap_or(0.0), 3);
    let best = Move {
        row: best_row,
        col: best_col,
        mode: MoveMode::Best,
        proba,
    };

    let mode = policy.decide(miss_streak, proba);
    let fallback = match mode {
        MoveMode::Best => None,
        MoveMode::Edge => random_edge_move(board, rng, &policy.search),
        MoveMode::Exploratory => random_exploratory_move(board, rng, &policy.search),
    };
    let chosen = match (mode, fallback) {
        (MoveMode::Best, _) => best,
        (mode, Some((row, col))) => Move {
            row,
            col,
            mode,
            proba,
        },
        (mode, None) => {
            log::debug!("{:?} search exhausted, playing best cell", mode);
            best
        }
    };
    debug_assert!(
        !board.is_fired(chosen.row, chosen.col),
        "engine selected a fired cell"
    );
    log::debug!(
        "streak {} proba {:.3} -> {:?} at ({}, {})",
        miss_streak,
        proba,
        chosen.mode,
        chosen.row,
        chosen.col
    );
    Ok(chosen)
}
