//! Common types for Battleship: board errors and shot results.

use crate::bitboard::BitBoardError;

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// Shot landed on a ship segment.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Shot hit the last intact segment of a ship, carrying its label.
    Sunk(&'static str),
}

impl FireResult {
    /// Returns `true` if the target cell was occupied.
    pub fn is_hit(&self) -> bool {
        !matches!(self, FireResult::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., board too large for the occupancy mask).
    BitBoardError(BitBoardError),
    /// Coordinates lie outside the board.
    OutOfBounds,
    /// Footprint leaves the board or overlaps another ship.
    InvalidPlacement,
    /// Orientation code is neither horizontal nor vertical.
    InvalidOrientation,
    /// Every fleet slot already holds a ship.
    FleetComplete,
    /// Cell has already been fired upon.
    AlreadyFired,
    /// No unfired cell remains to target.
    BoardExhausted,
    /// Random placement could not find a free footprint.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds => write!(f, "Coordinates are out of bounds"),
            BoardError::InvalidPlacement => {
                write!(f, "Ship placement is out of bounds or overlaps another ship")
            }
            BoardError::InvalidOrientation => {
                write!(f, "Orientation must be horizontal (0/H) or vertical (1/V)")
            }
            BoardError::FleetComplete => write!(f, "All ships are already placed"),
            BoardError::AlreadyFired => write!(f, "This cell has already been fired upon"),
            BoardError::BoardExhausted => write!(f, "No unfired cell left on the board"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned when validating a targeting policy.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A probability cutoff lies outside [0, 1].
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    /// Miss-streak thresholds are not in ascending order.
    ThresholdOrder { lower: &'static str, upper: &'static str },
    /// Search budget relaxes after it has already given up.
    SearchBudget { relax_after: u32, max_attempts: u32 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ProbabilityOutOfRange { name, value } => {
                write!(f, "{} must lie in [0, 1], got {}", name, value)
            }
            ConfigError::ThresholdOrder { lower, upper } => {
                write!(f, "{} must not exceed {}", lower, upper)
            }
            ConfigError::SearchBudget {
                relax_after,
                max_attempts,
            } => write!(
                f,
                "relax_after ({}) must be below max_attempts ({})",
                relax_after, max_attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Errors surfaced by the turn loop and its players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A board operation was rejected.
    Board(BoardError),
    /// The interactive player's input stream ended.
    InputClosed,
    /// A turn was requested after one side was defeated.
    GameOver,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::InputClosed => write!(f, "Input closed before the game finished"),
            GameError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
