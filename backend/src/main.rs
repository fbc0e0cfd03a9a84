use std::process;

use backend::{Backend, GameSession};
use board::{Board, Color};
use clap::Parser;
use monke::MonkePlayer;

/// Play a game of the Jester/Count/Oracle/Sentinel variant between two random players
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Stop after this many half-moves
    #[arg(long, default_value_t = 200)]
    half_moves: usize,
    /// Seed for the players, for a repeatable game
    #[arg(long)]
    seed: Option<u64>,
    /// Starting placement in layout notation, such as `rnbqkbnr/pppjcosp/8/8/8/8/PPPJCOSP/RNBQKBNR`
    #[arg(long)]
    layout: Option<String>,
    /// Let Black make the first move
    #[arg(long)]
    black_first: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> backend::Result<()> {
    let board = match &args.layout {
        Some(layout) => Board::from_layout(layout)?,
        None => Board::initial(),
    };
    let first = if args.black_first {
        Color::Black
    } else {
        Color::White
    };
    let (white, black) = match args.seed {
        Some(seed) => (
            MonkePlayer::with_seed(seed),
            MonkePlayer::with_seed(seed.wrapping_add(1)),
        ),
        None => (MonkePlayer::new(), MonkePlayer::new()),
    };
    let mut backend = Backend::from_session(GameSession::from_board(board, first), white, black);
    let outcome = backend.play_game(args.half_moves)?;

    let session = backend.session();
    for (idx, record) in session.history().iter().enumerate() {
        println!("{:>4}. {record}", idx + 1);
    }
    println!("{outcome}");
    println!("final layout: {}", session.board());
    for color in [Color::White, Color::Black] {
        let lost = session
            .captured(color)
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>();
        println!("{color:?} lost {}: {}", lost.len(), lost.join(", "));
    }
    Ok(())
}
