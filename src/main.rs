use clap::{Parser, ValueEnum};
use minesweeper::{
    init_logging, GameConfig, GameEngine, GameStatus, HumanPlayer, LearnedPlayer, SolverPlayer,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Playable board width.
    width: usize,
    /// Playable board height.
    height: usize,
    /// Number of mines to hide.
    mines: usize,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    player: PlayerType,
}

#[derive(ValueEnum, Clone, Debug)]
enum PlayerType {
    Human,
    Solver,
    Learned,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height, cli.mines)?;

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut engine = GameEngine::new(config);
    let status = match cli.player {
        PlayerType::Human => engine.run(&mut rng, &mut HumanPlayer::new())?,
        PlayerType::Solver => engine.run(&mut rng, &mut SolverPlayer::new())?,
        PlayerType::Learned => engine.run(&mut rng, &mut LearnedPlayer::new())?,
    };
    engine.end();

    match status {
        GameStatus::Won => println!("All clear, you win!"),
        GameStatus::Lost => println!("Boom! You lose."),
        GameStatus::Playing => println!("Game ended without a result."),
    }
    Ok(())
}
