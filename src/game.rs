use crate::board::{Board, FLAG};
use crate::common::{Move, Op};
use crate::config::GameConfig;
use crate::player::Player;
use crate::ui;
use rand::Rng;

/// Current status of a game. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Turn loop: obtains moves from a [`Player`], dispatches them to the
/// board, and decides continue/stop. The engine owns the board for the
/// whole game; nothing else mutates it.
pub struct GameEngine {
    board: Board,
    status: GameStatus,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config),
            status: GameStatus::Playing,
        }
    }

    /// Engine over a pre-built board, e.g. a [`Board::with_mines`] layout.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            status: GameStatus::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply one move. Returns `false` when the turn loop must stop
    /// because a mine was opened; the mine cell itself is not mutated.
    pub fn apply(&mut self, mv: Move) -> bool {
        match mv.op {
            Op::Open => self.open(mv.x, mv.y),
            Op::Flag => {
                self.board.toggle_flag(mv.x, mv.y);
                true
            }
            Op::Answer => {
                ui::draw_answer(&self.board);
                true
            }
            Op::Other => true,
        }
    }

    fn open(&mut self, x: i32, y: i32) -> bool {
        if self.board.get(x, y) >= FLAG {
            return true; // flagged cells are shielded from reveal
        }
        if self.board.is_mine(x, y) {
            log::info!("mine opened at ({}, {})", x, y);
            self.status = GameStatus::Lost;
            return false;
        }
        self.board.reveal_from(x, y);
        true
    }

    /// Initialize the board from `rng` and run the main loop until a win,
    /// a loss, or an exhausted move source.
    pub fn run<R: Rng, P: Player>(
        &mut self,
        rng: &mut R,
        player: &mut P,
    ) -> anyhow::Result<GameStatus> {
        self.board.init(rng);
        self.status = GameStatus::Playing;
        self.play(player)
    }

    /// Drive the turn loop over the current board contents.
    pub fn play<P: Player>(&mut self, player: &mut P) -> anyhow::Result<GameStatus> {
        ui::draw_play(&self.board);

        while let Some(mv) = player.next_move(&self.board)? {
            if !self.apply(mv) {
                break;
            }
            if self.board.is_fully_cleared() {
                self.status = GameStatus::Won;
                log::info!("board cleared");
                break;
            }
            ui::draw_play(&self.board);
        }
        Ok(self.status)
    }

    /// Show the answer view; the terminal "reveal all" action, valid after
    /// a win or a loss alike.
    pub fn end(&self) {
        ui::draw_answer(&self.board);
    }
}
