use alloc::boxed::Box;

use crate::{
    board::Board,
    common::{BoardError, FireResult, GameError},
    player::Player,
    player_ai::AiPlayer,
    policy::MoveMode,
    scorer::Scorer,
    targeting::Move,
};
use rand::{rngs::SmallRng, Rng};

/// Current status of a game, from the first player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Rule switches for a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameOptions {
    /// A hit grants the shooter another shot.
    pub chain_on_hit: bool,
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    /// Index of the shooting player (0 or 1).
    pub shooter: usize,
    pub row: usize,
    pub col: usize,
    pub result: FireResult,
    /// Targeting decision, when the shooter is score-driven.
    pub decision: Option<Move>,
    /// The shooter keeps the turn.
    pub extra_shot: bool,
}

/// Two players, two boards, alternating shots.
///
/// `boards[i]` holds player `i`'s own fleet and receives the other player's
/// shots.
pub struct Game {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    current: usize,
    shots: [usize; 2],
    options: GameOptions,
}

impl Game {
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>, options: GameOptions) -> Self {
        Self {
            players: [first, second],
            boards: [Board::new(), Board::new()],
            current: 0,
            shots: [0; 2],
            options,
        }
    }

    /// Let both players place their fleets. Must run before the first turn:
    /// a board without ships counts as defeated.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), GameError> {
        for (player, board) in self.players.iter_mut().zip(self.boards.iter_mut()) {
            player.place_fleet(rng, board)?;
        }
        Ok(())
    }

    pub fn board(&self, player: usize) -> &Board {
        &self.boards[player]
    }

    pub fn player(&self, player: usize) -> &dyn Player {
        &*self.players[player]
    }

    /// Index of the player due to shoot.
    pub fn current_player(&self) -> usize {
        self.current
    }

    /// Shots fired so far by `player`.
    pub fn shots(&self, player: usize) -> usize {
        self.shots[player]
    }

    pub fn status(&self) -> GameStatus {
        if self.boards[0].is_defeated() {
            GameStatus::Lost
        } else if self.boards[1].is_defeated() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Resolve one shot by the current player.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> Result<Turn, GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let shooter = self.current;
        let target = 1 - shooter;

        let (row, col) = self.players[shooter].choose_target(rng, &mut self.boards[target])?;
        let result = self.boards[target].fire(row, col)?;
        self.shots[shooter] += 1;
        self.players[shooter].handle_fire_result((row, col), result);
        self.players[target].handle_opponent_fire((row, col), result);

        let defeated = self.boards[target].is_defeated();
        let extra_shot = self.options.chain_on_hit && result.is_hit() && !defeated;
        if !extra_shot {
            self.current = target;
        }
        if defeated {
            log::info!(
                "{} sank the last ship after {} shots",
                self.players[shooter].name(),
                self.shots[shooter]
            );
        }
        Ok(Turn {
            shooter,
            row,
            col,
            result,
            decision: self.players[shooter].last_move(),
            extra_shot,
        })
    }

    /// Play until one fleet is destroyed, reporting every turn.
    pub fn run(
        &mut self,
        rng: &mut SmallRng,
        mut on_turn: impl FnMut(&Game, &Turn),
    ) -> Result<GameStatus, GameError> {
        while self.status() == GameStatus::InProgress {
            let turn = self.play_turn(rng)?;
            on_turn(&*self, &turn);
        }
        Ok(self.status())
    }
}

/// Outcome of an AI playing alone against a board.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct AutoplayReport {
    pub moves: usize,
    pub hits: usize,
    pub misses: usize,
    pub best_moves: usize,
    pub edge_moves: usize,
    pub exploratory_moves: usize,
    /// Mean best-cell probability over all decisions.
    pub mean_best_proba: f64,
}

/// Let `ai` fire at `board` until every ship is sunk.
pub fn autoplay<S: Scorer, R: Rng + ?Sized>(
    board: &mut Board,
    ai: &mut AiPlayer<S>,
    rng: &mut R,
) -> Result<AutoplayReport, BoardError> {
    let mut report = AutoplayReport::default();
    let mut proba_sum = 0.0;
    while !board.is_defeated() {
        let mv = ai.next_move(rng, board)?;
        let result = board.fire(mv.row, mv.col)?;
        ai.record_result(result);

        report.moves += 1;
        proba_sum += mv.proba;
        if result.is_hit() {
            report.hits += 1;
        } else {
            report.misses += 1;
        }
        match mv.mode {
            MoveMode::Best => report.best_moves += 1,
            MoveMode::Edge => report.edge_moves += 1,
            MoveMode::Exploratory => report.exploratory_moves += 1,
        }
    }
    if report.moves > 0 {
        report.mean_best_proba = proba_sum / report.moves as f64;
    }
    log::info!("Finished game in {} moves", report.moves);
    Ok(report)
}
