//! Commonly used types and utilities for ease of import.

pub use crate::{
    autoplay, find_best_cell, random_edge_move, random_exploratory_move, select_move, AiPlayer,
    Board, BoardConfig, BoardError, FeatureTuple, FireResult, Game, GameStatus, LogisticScorer,
    MoveMode, Orientation, Player, PolicyConfig, Scorer,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
