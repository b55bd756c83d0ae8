//! Tic-Tac-Toe With Time Travel
//!
//! Plays a short game, rewinds to an earlier move, and branches off in a
//! new direction, printing the board and the move list the way a UI would.
//!
//! Run with: cargo run --example tic_tac_toe
//! Set RUST_LOG=uikata=debug to see the tracker's own log lines.

use tracing::info;
use uikata::game::{GameStatus, GameTracker, PlayResult};

fn status_line(game: &GameTracker) -> String {
    match game.status() {
        GameStatus::InProgress { next } => format!("Next player: {next}"),
        GameStatus::Won(mark) => format!("Winner: {mark}"),
        GameStatus::Draw => "Draw".to_string(),
    }
}

fn show(game: &GameTracker) {
    println!("{}", game.current_board());
    println!("{}", status_line(game));
    for entry in game.entries() {
        let marker = if entry.index() == game.cursor() { ">" } else { " " };
        println!("  {marker} {entry}");
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting tic-tac-toe demo");
    let mut game = GameTracker::new();

    for cell in [4, 0, 2, 6] {
        game.play(cell);
    }
    show(&game);

    println!("Clicking an occupied square:");
    if let PlayResult::Rejected(reason) = game.play(4) {
        println!("  rejected: {reason}\n");
    }

    println!("Jumping back to move #2 and playing somewhere else:");
    game.jump_to(2);
    game.play(6);
    show(&game);

    for cell in [3, 8, 5] {
        game.play(cell);
    }
    show(&game);
    info!(moves = game.history().len() - 1, "Demo finished");
}
