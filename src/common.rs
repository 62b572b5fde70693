//! Common types for Minesweeper: game errors and move values.

/// Errors returned by configuration and board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Board width must be at least one column.
    InvalidWidth,
    /// Board height must be at least one row.
    InvalidHeight,
    /// Mine count leaves no free interior cell; placement would never finish.
    TooManyMines,
    /// Explicit mine coordinate falls outside the playable interior.
    MineOutOfBoard,
    /// Explicit mine list disagrees with the configured mine count.
    MineCountMismatch,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidWidth => write!(f, "Board width must be positive"),
            GameError::InvalidHeight => write!(f, "Board height must be positive"),
            GameError::TooManyMines => write!(f, "Mine count must be below the cell count"),
            GameError::MineOutOfBoard => write!(f, "Mine coordinate is outside the board"),
            GameError::MineCountMismatch => {
                write!(f, "Mine list does not match the configured count")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Operation requested by a move source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Reveal the cell, flooding outward from a zero hint.
    Open,
    /// Toggle the flag marker on a closed cell.
    Flag,
    /// Show the answer view without changing any state.
    Answer,
    /// Unrecognized operation token; the turn is a no-op.
    Other,
}

/// One turn's worth of player input. Transient: applied once, not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub op: Op,
    pub x: i32,
    pub y: i32,
}

impl Move {
    pub fn new(op: Op, x: i32, y: i32) -> Self {
        Self { op, x, y }
    }

    /// Parse a whitespace-separated `op x y` triple. Returns `None` when a
    /// coordinate is missing or not an integer; unknown op tokens parse to
    /// [`Op::Other`]. Trailing tokens are ignored.
    pub fn parse(input: &str) -> Option<Move> {
        let mut parts = input.split_whitespace();
        let op = match parts.next()? {
            "o" | "open" => Op::Open,
            "f" | "flag" => Op::Flag,
            "a" | "answer" => Op::Answer,
            _ => Op::Other,
        };
        let x = parts.next()?.parse().ok()?;
        let y = parts.next()?.parse().ok()?;
        Some(Move { op, x, y })
    }
}
