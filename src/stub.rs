//! Alternative move sources: scripted sequences and reserved strategy
//! slots. All of them sit behind the same [`Player`] interface as the
//! interactive source; they share no state with it or each other.

use std::collections::VecDeque;

use crate::board::Board;
use crate::common::Move;
use crate::player::Player;

/// Replays a fixed move sequence, then reports exhaustion. Lets the
/// engine run under test without any interactive input.
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new<I: IntoIterator<Item = Move>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn next_move(&mut self, _board: &Board) -> anyhow::Result<Option<Move>> {
        Ok(self.moves.pop_front())
    }
}

/// Slot for an algorithmic solver strategy. Produces no moves yet.
pub struct SolverPlayer;

impl SolverPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for SolverPlayer {
    fn next_move(&mut self, _board: &Board) -> anyhow::Result<Option<Move>> {
        log::warn!("solver strategy is not implemented, ending the game");
        Ok(None)
    }
}

/// Slot for a learned-policy strategy. Produces no moves yet.
pub struct LearnedPlayer;

impl LearnedPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for LearnedPlayer {
    fn next_move(&mut self, _board: &Board) -> anyhow::Result<Option<Move>> {
        log::warn!("learned strategy is not implemented, ending the game");
        Ok(None)
    }
}
