mod board;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod player_cli;
mod stub;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use player_cli::*;
pub use stub::*;
pub use ui::*;
