use crate::ship::ShipDef;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Destroyer", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Patrol Boat", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Immutable board geometry and fleet, handed to `Board` at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    dim: usize,
    fleet: &'static [ShipDef],
}

impl BoardConfig {
    /// The standard 10×10 board with the five-ship fleet.
    pub const fn standard() -> Self {
        Self {
            dim: BOARD_SIZE as usize,
            fleet: &SHIPS,
        }
    }

    /// Custom geometry, used by tests exercising unusual board shapes.
    pub const fn new(dim: usize, fleet: &'static [ShipDef]) -> Self {
        Self { dim, fleet }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn fleet(&self) -> &'static [ShipDef] {
        self.fleet
    }

    /// Sum of all fleet lengths.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().map(ShipDef::length).sum()
    }

    /// Look up a fleet entry by its label.
    pub fn ship(&self, label: &str) -> Option<&'static ShipDef> {
        self.fleet.iter().find(|def| def.name() == label)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}
