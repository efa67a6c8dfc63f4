#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
pub mod features;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod policy;
pub mod prelude;
pub mod render;
pub mod scorer;
mod ship;
pub mod targeting;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use features::{distance_to_center, extract, FeatureTuple};
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use policy::{MoveMode, PolicyConfig, SearchBudget};
pub use scorer::{ConstantScorer, LogisticScorer, Scorer};
pub use ship::*;
pub use targeting::{
    find_best_cell, random_edge_move, random_exploratory_move, select_move, Move, NEAR_ZERO_SCORE,
};
