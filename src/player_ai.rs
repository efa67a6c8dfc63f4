use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{BoardError, FireResult, GameError},
    policy::PolicyConfig,
    scorer::Scorer,
    targeting::{self, Move},
};
use rand::{rngs::SmallRng, Rng};

use crate::player::Player;

/// AI player that targets by occupancy score and explores when stuck.
///
/// Owns the miss streak fed to the targeting policy. The streak counts every
/// miss of the game and is never reset.
pub struct AiPlayer<S> {
    scorer: S,
    policy: PolicyConfig,
    miss_streak: u32,
    last_move: Option<Move>,
    best_probas: Vec<f64>,
}

impl<S: Scorer> AiPlayer<S> {
    pub fn new(scorer: S) -> Self {
        Self::with_policy(scorer, PolicyConfig::default())
    }

    pub fn with_policy(scorer: S, policy: PolicyConfig) -> Self {
        Self {
            scorer,
            policy,
            miss_streak: 0,
            last_move: None,
            best_probas: Vec::new(),
        }
    }

    pub fn miss_streak(&self) -> u32 {
        self.miss_streak
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Best-cell probability seen at each decision, oldest first.
    pub fn best_probas(&self) -> &[f64] {
        &self.best_probas
    }

    /// Decide the next shot against `target` without firing it.
    pub fn next_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        target: &mut Board,
    ) -> Result<Move, BoardError> {
        let mv = targeting::select_move(target, &self.scorer, rng, self.miss_streak, &self.policy)?;
        self.best_probas.push(mv.proba);
        self.last_move = Some(mv);
        Ok(mv)
    }

    /// Update the miss streak from a shot outcome.
    pub fn record_result(&mut self, result: FireResult) {
        if !result.is_hit() {
            self.miss_streak += 1;
        }
    }
}

impl<S: Scorer> Player for AiPlayer<S> {
    fn name(&self) -> &str {
        "AI"
    }

    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        board.place_fleet_randomly(rng)?;
        Ok(())
    }

    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        target: &mut Board,
    ) -> Result<(usize, usize), GameError> {
        let mv = self.next_move(rng, target)?;
        Ok((mv.row, mv.col))
    }

    fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    fn handle_fire_result(&mut self, _coord: (usize, usize), result: FireResult) {
        self.record_result(result);
    }
}
