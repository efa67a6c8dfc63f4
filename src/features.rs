//! Local, player-visible features of an unfired cell.
//!
//! Only information a real opponent could see is used: which neighbors have
//! been fired upon and whether those shots hit. Ratios are taken over the
//! neighbors that exist, so edge and corner cells are not penalised for the
//! board boundary.

use crate::board::Board;
use crate::common::BoardError;
use crate::grid::CellState;

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Scorer input for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureTuple {
    /// Distance to the nearest of the central cells, 3 decimals.
    pub distance_to_center: f64,
    /// Share of orthogonal neighbors that were fired and occupied.
    pub adjacent_hit_ratio: f64,
    /// Share of orthogonal neighbors that were fired and empty.
    pub adjacent_miss_ratio: f64,
    /// Share of diagonal neighbors that were fired and occupied.
    pub diagonal_hit_ratio: f64,
    /// Share of diagonal neighbors that were fired and empty.
    pub diagonal_miss_ratio: f64,
}

impl FeatureTuple {
    /// Values in scorer order.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.distance_to_center,
            self.adjacent_hit_ratio,
            self.adjacent_miss_ratio,
            self.diagonal_hit_ratio,
            self.diagonal_miss_ratio,
        ]
    }
}

#[derive(Default)]
struct NeighborCounts {
    present: usize,
    hits: usize,
    misses: usize,
}

impl NeighborCounts {
    fn ratios(&self) -> (f64, f64) {
        if self.present == 0 {
            return (0.0, 0.0);
        }
        let n = self.present as f64;
        (
            round_to(self.hits as f64 / n, 2),
            round_to(self.misses as f64 / n, 2),
        )
    }
}

/// Extract the feature tuple of the unfired cell at (row, col).
pub fn extract(board: &Board, row: usize, col: usize) -> Result<FeatureTuple, BoardError> {
    if board.cell(row, col)?.is_hit() {
        return Err(BoardError::AlreadyFired);
    }
    let adjacent = count_neighbors(board, row, col, &ORTHOGONAL);
    let diagonal = count_neighbors(board, row, col, &DIAGONAL);
    let (adjacent_hit_ratio, adjacent_miss_ratio) = adjacent.ratios();
    let (diagonal_hit_ratio, diagonal_miss_ratio) = diagonal.ratios();
    Ok(FeatureTuple {
        distance_to_center: distance_to_center(board.dim(), row, col),
        adjacent_hit_ratio,
        adjacent_miss_ratio,
        diagonal_hit_ratio,
        diagonal_miss_ratio,
    })
}

fn count_neighbors(
    board: &Board,
    row: usize,
    col: usize,
    offsets: &[(isize, isize)],
) -> NeighborCounts {
    let mut counts = NeighborCounts::default();
    for &(dr, dc) in offsets {
        let (r, c) = (row as isize + dr, col as isize + dc);
        if !board.in_bounds(r, c) {
            continue;
        }
        counts.present += 1;
        match board.state(r as usize, c as usize) {
            Ok(CellState::Hit) => counts.hits += 1,
            Ok(CellState::Miss) => counts.misses += 1,
            _ => {}
        }
    }
    counts
}

/// Euclidean distance from (row, col) to the nearest central cell of a
/// `dim`×`dim` board, rounded to 3 decimals.
pub fn distance_to_center(dim: usize, row: usize, col: usize) -> f64 {
    let fold = |x: usize| -> f64 {
        let low = dim.saturating_sub(1) / 2;
        let high = dim / 2;
        if x <= low {
            (low - x) as f64
        } else {
            x.saturating_sub(high) as f64
        }
    };
    let (dr, dc) = (fold(row), fold(col));
    round_to(libm::sqrt(dr * dr + dc * dc), 3)
}

/// Round half away from zero to `digits` decimal places.
pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let scale = libm::pow(10.0, digits as f64);
    libm::round(value * scale) / scale
}
