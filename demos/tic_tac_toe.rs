extern crate ttt_minimax;

use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ttt_minimax::{Minimax, Outcome, apply_action, initial_state, is_terminal, outcome};

/// Plays the engine against itself and prints every position.
///
/// The first argument, if any, is the seed used for tie-breaking.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => rand::random(),
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            error!(%err, "seed must be an unsigned integer");
            return ExitCode::FAILURE;
        }
    };
    info!(seed, "starting self-play");

    let mut minimax = Minimax::builder().with_seed(seed).build();
    let mut board = initial_state();
    println!("{board}\n");

    while !is_terminal(&board) {
        let decision = match minimax.decide(&board) {
            Ok(Some(decision)) => decision,
            Ok(None) => break,
            Err(err) => {
                error!(%err, "search failed");
                return ExitCode::FAILURE;
            }
        };
        info!(
            action = ?decision.action,
            value = decision.value,
            ties = decision.candidates.len(),
            nodes = decision.nodes,
            "engine moved"
        );
        board = match apply_action(&board, decision.action) {
            Ok(next) => next,
            Err(err) => {
                error!(%err, "engine produced an illegal move");
                return ExitCode::FAILURE;
            }
        };
        println!("{board}\n");
    }

    match outcome(&board) {
        Outcome::Won(player) => println!("{player:?} wins"),
        Outcome::Drawn => println!("Draw"),
        Outcome::InProgress => unreachable!("loop exits only on a terminal board"),
    }

    // Optimal play on both sides never loses.
    if outcome(&board) == Outcome::Drawn {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
