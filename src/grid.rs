//! A single square of the board.

/// Observable state of a cell from the shooter's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Not fired upon yet.
    Unknown,
    /// Fired upon and occupied.
    Hit,
    /// Fired upon and empty.
    Miss,
}

/// One cell: identity, occupancy, hit flag, owning ship and last score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    index: usize,
    occupied: bool,
    hit: bool,
    owner: Option<&'static str>,
    score: Option<f64>,
}

impl Cell {
    /// Empty, unfired cell with no score.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            occupied: false,
            hit: false,
            owner: None,
            score: None,
        }
    }

    /// Flattened `row * dim + col` index.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Whether the cell has been fired upon, occupied or not.
    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Label of the ship covering this cell.
    pub fn owner_label(&self) -> Option<&'static str> {
        self.owner
    }

    /// Last score written by a targeting sweep.
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    pub fn state(&self) -> CellState {
        match (self.hit, self.occupied) {
            (false, _) => CellState::Unknown,
            (true, true) => CellState::Hit,
            (true, false) => CellState::Miss,
        }
    }

    pub(crate) fn occupy(&mut self, label: &'static str) {
        self.occupied = true;
        self.owner = Some(label);
    }

    /// Marks the cell fired. Returns `false` if it already was.
    pub(crate) fn mark_hit(&mut self) -> bool {
        let fresh = !self.hit;
        self.hit = true;
        fresh
    }

    /// Scores freeze once the cell is fired.
    pub(crate) fn set_score(&mut self, score: f64) {
        if !self.hit {
            self.score = Some(score);
        }
    }
}
