//! Game board state: a matrix of cells plus the occupied-index set.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, FireResult};
use crate::config::BoardConfig;
use crate::grid::{Cell, CellState};
use crate::ship::{Orientation, PlacedShip, Placement};

/// Attempts made by `random_placement` before giving up.
const PLACEMENT_ATTEMPTS: usize = 100;

/// Main board state: cells, occupied indices and ship placements.
#[derive(Clone)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Cell>,
    occupied: BitBoard,
    ships: Vec<PlacedShip>,
}

impl Board {
    /// Create an empty standard board (no ships placed).
    pub fn new() -> Self {
        let config = BoardConfig::standard();
        let dim = config.dim();
        Board {
            config,
            cells: (0..dim * dim).map(Cell::new).collect(),
            occupied: BitBoard::standard(),
            ships: Vec::new(),
        }
    }

    /// Create an empty board for the given geometry and fleet.
    pub fn with_config(config: BoardConfig) -> Result<Self, BoardError> {
        let cells = config.dim() * config.dim();
        let occupied = BitBoard::with_cells(cells)?;
        Ok(Board {
            config,
            cells: (0..cells).map(Cell::new).collect(),
            occupied,
            ships: Vec::new(),
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Side length of the board.
    pub fn dim(&self) -> usize {
        self.config.dim()
    }

    /// Flattened index of (row, col), if in bounds.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        let dim = self.dim();
        (row < dim && col < dim).then(|| row * dim + col)
    }

    /// (row, col) of a flattened index.
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index / self.dim(), index % self.dim())
    }

    /// Bounds check for signed coordinates, used for neighbor walks.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let dim = self.dim() as isize;
        (0..dim).contains(&row) && (0..dim).contains(&col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        let idx = self.index_of(row, col).ok_or(BoardError::OutOfBounds)?;
        Ok(&self.cells[idx])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Unfired cells in row-major order, as (row, col).
    pub fn unfired(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|cell| !cell.is_hit())
            .map(|cell| self.coords_of(cell.index()))
    }

    /// Whether (row, col) has been fired upon. Out-of-range cells report `false`.
    pub fn is_fired(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).map(Cell::is_hit).unwrap_or(false)
    }

    /// Signed variant of [`Board::is_fired`] for neighbor offsets.
    pub(crate) fn is_fired_at(&self, row: isize, col: isize) -> bool {
        self.in_bounds(row, col) && self.is_fired(row as usize, col as usize)
    }

    pub fn state(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        self.cell(row, col).map(Cell::state)
    }

    /// Last score computed for (row, col), if any.
    pub fn score(&self, row: usize, col: usize) -> Option<f64> {
        self.cell(row, col).ok().and_then(Cell::score)
    }

    pub(crate) fn set_score(&mut self, row: usize, col: usize, score: f64) {
        if let Some(idx) = self.index_of(row, col) {
            self.cells[idx].set_score(score);
        }
    }

    /// Occupied cell indices, filled at placement time.
    pub fn occupied_indices(&self) -> &BitBoard {
        &self.occupied
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Returns `true` once every fleet slot holds a ship.
    pub fn fleet_complete(&self) -> bool {
        self.ships.len() >= self.config.fleet().len()
    }

    /// Number of shots taken against this board.
    pub fn shots_taken(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hit()).count()
    }

    /// True iff the whole footprint is in bounds and unoccupied.
    pub fn check_placement_valid(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        let placement = Placement::new(row, col, orientation, length);
        placement.fits(self.dim())
            && placement
                .footprint()
                .all(|(r, c)| self.cell(r, c).map(|cell| !cell.is_occupied()).unwrap_or(false))
    }

    /// Place a ship labelled `label`. Fails without touching the board when
    /// the footprint is invalid or the fleet is already complete.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
        label: &'static str,
    ) -> Result<(), BoardError> {
        if self.fleet_complete() {
            return Err(BoardError::FleetComplete);
        }
        if !self.check_placement_valid(row, col, length, orientation) {
            return Err(BoardError::InvalidPlacement);
        }
        let placement = Placement::new(row, col, orientation, length);
        let dim = self.dim();
        for (r, c) in placement.footprint() {
            let idx = r * dim + c;
            self.cells[idx].occupy(label);
            self.occupied.insert(idx)?;
        }
        self.ships.push(PlacedShip { label, placement });
        log::trace!(
            "placed {} at ({}, {}) {} len {}",
            label,
            row,
            col,
            orientation,
            length
        );
        Ok(())
    }

    /// Returns a random non-overlapping (row, col, Orientation) for a ship of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let dim = self.dim();
        if length == 0 || length > dim {
            return Err(BoardError::UnableToPlaceShip);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let max_r = if orient == Orientation::Vertical {
                dim - length
            } else {
                dim - 1
            };
            let max_c = if orient == Orientation::Horizontal {
                dim - length
            } else {
                dim - 1
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            if self.check_placement_valid(r, c, length, orient) {
                return Ok((r, c, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place every remaining fleet ship at random.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let fleet = self.config.fleet();
        for def in &fleet[self.ships.len()..] {
            let (r, c, o) = self.random_placement(rng, def.length())?;
            self.place_ship(r, c, def.length(), o, def.name())?;
        }
        Ok(())
    }

    /// Fire at (row, col). The only operation that sets a cell's hit flag.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<FireResult, BoardError> {
        let idx = self.index_of(row, col).ok_or(BoardError::OutOfBounds)?;
        if !self.cells[idx].mark_hit() {
            return Err(BoardError::AlreadyFired);
        }
        let cell = self.cells[idx];
        let Some(label) = cell.owner_label() else {
            return Ok(FireResult::Miss);
        };
        if self.ship_sunk(label) {
            log::debug!("{} sunk at ({}, {})", label, row, col);
            Ok(FireResult::Sunk(label))
        } else {
            Ok(FireResult::Hit)
        }
    }

    /// Every cell owned by `label` has been hit.
    pub fn ship_sunk(&self, label: &str) -> bool {
        self.ships
            .iter()
            .filter(|ship| ship.label == label)
            .flat_map(|ship| ship.placement.footprint())
            .all(|(r, c)| self.is_fired(r, c))
    }

    /// True iff every occupied index has been hit.
    pub fn is_defeated(&self) -> bool {
        self.occupied.iter().all(|idx| self.cells[idx].is_hit())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  dim: {},\n  occupied: {:?},\n  shots: {},\n  ships: {:?}\n}}",
            self.dim(),
            self.occupied,
            self.shots_taken(),
            self.ships
        )
    }
}
