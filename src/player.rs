use crate::{
    board::Board,
    common::{FireResult, GameError},
    targeting::Move,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Display name used in turn reports.
    fn name(&self) -> &str;

    /// Place the whole fleet onto the player's own board.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError>;

    /// Choose an unfired cell on the opponent's board.
    ///
    /// The board is borrowed mutably so score-driven players can cache their
    /// per-cell scores on it; only `Board::fire`, called by the game loop,
    /// changes what has been fired.
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        target: &mut Board,
    ) -> Result<(usize, usize), GameError>;

    /// The decision behind the most recent target, for players that have one.
    fn last_move(&self) -> Option<Move> {
        None
    }

    /// Inform the player of the result of its last shot.
    fn handle_fire_result(&mut self, _coord: (usize, usize), _result: FireResult) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_fire(&mut self, _coord: (usize, usize), _result: FireResult) {}
}
