//! Board state: banded cell codes in a sentinel-bordered flat grid.

use crate::common::GameError;
use crate::config::GameConfig;
use rand::Rng;

/// Signed cell-code type. One code per cell encodes terrain (mine or hint
/// 0-8), open/closed state, and the flag marker.
pub type Cell = i16;

/// Sentinel stored in the one-cell ring around the playable area.
pub const EDGE: Cell = -2;
/// First code of the closed band; a closed cell with hint `n` is `CLOSED + n`.
pub const CLOSED: Cell = 10;
/// Closed mine marker, just above the highest closed-hint code.
pub const MINE: Cell = 19;
/// Offset added to a closed cell's code while it carries a flag.
pub const FLAG: Cell = 100;

/// Playable grid plus its border ring. Allocated once per game; after
/// `init` it is mutated only through `reveal_from` and `toggle_flag`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    cells: Vec<Cell>,
}

impl Board {
    /// Allocate a board for `config`: all interior cells closed with a zero
    /// hint, border ring filled with [`EDGE`]. Mines arrive via [`init`] or
    /// [`with_mines`].
    ///
    /// [`init`]: Board::init
    /// [`with_mines`]: Board::with_mines
    pub fn new(config: GameConfig) -> Self {
        let cells = vec![CLOSED; config.grid_len()];
        let mut board = Self { config, cells };
        board.reset();
        board
    }

    /// Build a board with an explicit mine layout, hints included. Mostly
    /// for scripted games and tests; random play goes through [`Board::init`].
    pub fn with_mines(config: GameConfig, mines: &[(i32, i32)]) -> Result<Self, GameError> {
        let mut board = Self::new(config);
        let mut placed = 0;
        for &(x, y) in mines {
            if board.get(x, y) == EDGE {
                return Err(GameError::MineOutOfBoard);
            }
            if board.get(x, y) == MINE {
                continue;
            }
            board.set(x, y, MINE);
            placed += 1;
        }
        if placed != config.mines() {
            return Err(GameError::MineCountMismatch);
        }
        board.write_hints();
        Ok(board)
    }

    /// Fill the grid for a fresh game: reset, place the configured number
    /// of distinct mines by rejection sampling, then write every non-mine
    /// cell's hint. `GameConfig` guarantees at least one free cell, so the
    /// sampling loop terminates.
    pub fn init<R: Rng>(&mut self, rng: &mut R) {
        self.reset();

        let mut placed = 0;
        while placed < self.config.mines() {
            let x = rng.random_range(1..=self.config.width() as i32);
            let y = rng.random_range(1..=self.config.height() as i32);
            if self.get(x, y) == MINE {
                continue; // collision, redraw
            }
            self.set(x, y, MINE);
            placed += 1;
        }

        self.write_hints();
        log::debug!(
            "board initialized: {}x{}, {} mines",
            self.config.width(),
            self.config.height(),
            self.config.mines()
        );
    }

    /// Reset every cell to closed-zero and rewrite the sentinel ring.
    fn reset(&mut self) {
        let span = self.config.span();
        let rows = self.config.height() + 2;

        self.cells.fill(CLOSED);
        for x in 0..span {
            self.cells[x] = EDGE;
            self.cells[x + span * (rows - 1)] = EDGE;
        }
        for y in 0..rows {
            self.cells[y * span] = EDGE;
            self.cells[y * span + span - 1] = EDGE;
        }
    }

    /// Write every non-mine interior cell's closed hint from its 8
    /// neighbors. The border ring makes every lookup in-bounds.
    fn write_hints(&mut self) {
        for y in 1..=self.config.height() as i32 {
            for x in 1..=self.config.width() as i32 {
                if self.get(x, y) == MINE {
                    continue;
                }
                let hint = self
                    .neighbors(x, y)
                    .iter()
                    .filter(|&&code| code == MINE)
                    .count() as Cell;
                self.set(x, y, CLOSED + hint);
            }
        }
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        let span = self.config.span() as i32;
        let rows = self.config.height() as i32 + 2;
        if x < 0 || y < 0 || x >= span || y >= rows {
            return None;
        }
        Some((x + y * span) as usize)
    }

    /// Code at `(x, y)`; anything outside the bordered grid reads as
    /// [`EDGE`], so arbitrary player coordinates are safe to look up.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.idx(x, y).map_or(EDGE, |i| self.cells[i])
    }

    fn set(&mut self, x: i32, y: i32, code: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = code;
        }
    }

    /// The 3x3 block centered on `(x, y)` in row-major order, center
    /// included. Off-board positions read as [`EDGE`].
    pub fn neighbors(&self, x: i32, y: i32) -> [Cell; 9] {
        let mut block = [EDGE; 9];
        for dy in -1..=1 {
            for dx in -1..=1 {
                block[((dy + 1) * 3 + (dx + 1)) as usize] = self.get(x + dx, y + dy);
            }
        }
        block
    }

    /// True for both the bare and the flagged closed mine code.
    pub fn is_mine(&self, x: i32, y: i32) -> bool {
        let code = self.get(x, y);
        code == MINE || code == MINE + FLAG
    }

    pub fn is_out_of_board(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == EDGE
    }

    /// Open `(x, y)` and flood outward through its zero-hint region,
    /// opening the numbered cells on the region's rim.
    ///
    /// Explicit worklist instead of call recursion, so depth is bounded by
    /// the grid size. Edge, already-open, flagged, and mine cells stop the
    /// flood untouched; the already-open check doubles as the revisit
    /// guard, so every cell opens at most once.
    pub fn reveal_from(&mut self, x: i32, y: i32) {
        let mut pending = vec![(x, y)];
        while let Some((cx, cy)) = pending.pop() {
            let code = self.get(cx, cy);
            if code < CLOSED {
                continue; // edge or already open
            }
            if code >= FLAG || code == MINE {
                continue; // flags and mines stay closed
            }

            let opened = code - CLOSED;
            self.set(cx, cy, opened);

            if opened == 0 {
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        pending.push((cx + dx, cy + dy));
                    }
                }
            }
        }
    }

    /// Add or remove the flag offset on a closed cell; opened and edge
    /// cells are left alone.
    pub fn toggle_flag(&mut self, x: i32, y: i32) {
        let code = self.get(x, y);
        if code < CLOSED {
            return;
        }
        if code >= FLAG {
            self.set(x, y, code - FLAG);
        } else {
            self.set(x, y, code + FLAG);
        }
    }

    /// Closed cells, flagged or not.
    pub fn count_unopened(&self) -> usize {
        self.cells.iter().filter(|&&code| code >= CLOSED).count()
    }

    pub fn count_flagged(&self) -> usize {
        self.cells.iter().filter(|&&code| code >= FLAG).count()
    }

    /// Closed cells not carrying a flag.
    pub fn count_closed(&self) -> usize {
        self.count_unopened() - self.count_flagged()
    }

    pub fn count_opened(&self) -> usize {
        self.config.interior_cells() - self.count_unopened()
    }

    /// True when only the mines remain closed: every non-mine cell has
    /// been opened. Flags have no effect on this.
    pub fn is_fully_cleared(&self) -> bool {
        self.count_unopened() == self.config.mines()
    }

    /// Map every cell through `symbol`, one string per bordered row. Pure
    /// query; rendering never mutates the grid.
    pub fn render<F: Fn(Cell) -> char>(&self, symbol: F) -> Vec<String> {
        self.cells
            .chunks(self.config.span())
            .map(|row| row.iter().map(|&code| symbol(code)).collect())
            .collect()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn width(&self) -> usize {
        self.config.width()
    }

    pub fn height(&self) -> usize {
        self.config.height()
    }

    pub fn mines(&self) -> usize {
        self.config.mines()
    }
}
