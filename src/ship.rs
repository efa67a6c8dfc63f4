//! Ship definitions, orientations and placement footprints.

use core::fmt;

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends rightwards from the origin.
    Horizontal,
    /// Extends downwards from the origin.
    Vertical,
}

impl Orientation {
    /// Parse the UI form: `H`/`V` (any case) or the numeric codes `0`/`1`.
    pub fn parse(input: &str) -> Result<Self, BoardError> {
        match input.trim() {
            "H" | "h" => Ok(Orientation::Horizontal),
            "V" | "v" => Ok(Orientation::Vertical),
            other => other
                .parse::<u8>()
                .map_err(|_| BoardError::InvalidOrientation)
                .and_then(Orientation::try_from),
        }
    }

    /// Step applied to (row, col) for each successive footprint cell.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Orientation::Horizontal),
            1 => Ok(Orientation::Vertical),
            _ => Err(BoardError::InvalidOrientation),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Fleet entry: ship name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    /// Create a new ship definition.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name, used as the owner label of its cells.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Single-character symbol used when revealing a board.
    pub fn symbol(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// One ship's footprint: origin, orientation and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation, length: usize) -> Self {
        Self {
            row,
            col,
            orientation,
            length,
        }
    }

    /// Returns `true` when every footprint cell lies inside a `dim`×`dim` grid.
    pub fn fits(&self, dim: usize) -> bool {
        if self.length == 0 || self.row >= dim || self.col >= dim {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => self.length <= dim - self.col,
            Orientation::Vertical => self.length <= dim - self.row,
        }
    }

    /// Coordinates covered by this placement, origin first.
    pub fn footprint(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.orientation.step();
        let (row, col) = (self.row, self.col);
        (0..self.length).map(move |i| (row + i * dr, col + i * dc))
    }
}

/// A placed ship as recorded by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedShip {
    pub label: &'static str,
    pub placement: Placement,
}
