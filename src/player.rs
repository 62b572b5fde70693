use crate::board::Board;
use crate::common::Move;

/// Interface implemented by different move sources.
///
/// The engine calls `next_move` once per turn and blocks until the source
/// produces a move. The board reference is read-only context for
/// strategies that inspect the grid.
pub trait Player {
    /// Produce the next move, or `None` when the source is exhausted.
    fn next_move(&mut self, board: &Board) -> anyhow::Result<Option<Move>>;
}
