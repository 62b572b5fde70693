//! Interactive move source reading from stdin.

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::common::Move;
use crate::player::Player;

/// Human move source: prompts on stdout, reads one line per turn.
/// Malformed input is reported and re-prompted, never passed on as a
/// garbage coordinate.
pub struct HumanPlayer;

impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for HumanPlayer {
    fn next_move(&mut self, _board: &Board) -> anyhow::Result<Option<Move>> {
        let stdin = io::stdin();
        loop {
            print!("next move (o/f/a x y): ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(None); // stdin closed
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Move::parse(line) {
                Some(mv) => return Ok(Some(mv)),
                None => println!("Invalid input, expected: op x y"),
            }
        }
    }
}
