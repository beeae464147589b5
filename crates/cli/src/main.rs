//! Console chess front-end: play a game move by move, resume an
//! interrupted session, review the last finished game, or read the
//! notation manual. The engine itself lives in `chess_rules`.

mod display;
mod manual;
mod session;
mod summary;

use anyhow::{anyhow, bail, Result};
use chess_rules::{Color, Game};
use session::SessionLog;
use std::io::{self, BufRead, Write};
use summary::GameSummary;

const SESSION_FILE: &str = "files/current_game.txt";
const SUMMARY_FILE: &str = "files/last_game.json";

fn print_usage() {
    println!("Console chess");
    println!();
    println!("Usage:");
    println!("  chess-cli play [--white NAME] [--black NAME]");
    println!("  chess-cli resume");
    println!("  chess-cli last");
    println!("  chess-cli rules");
    println!();
    println!("During a game, type a move in algebraic notation (see");
    println!("`chess-cli rules`) or `quit` to stop; a stopped game can be");
    println!("picked up later with `chess-cli resume`.");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_cli=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("play") => cmd_play(&args[1..]),
        Some("resume") => cmd_resume(),
        Some("last") => cmd_last(),
        Some("rules") => {
            manual::print_rules();
            Ok(())
        }
        _ => {
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn cmd_play(args: &[String]) -> Result<()> {
    let mut white = "White".to_string();
    let mut black = "Black".to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--white" => {
                white = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("--white needs a name"))?
                    .clone();
                i += 2;
            }
            "--black" => {
                black = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("--black needs a name"))?
                    .clone();
                i += 2;
            }
            other => bail!("unknown option: {other}"),
        }
    }

    let log = SessionLog::new(SESSION_FILE);
    log.start(&white, &black)?;
    tracing::info!(white, black, "starting a new game");

    let mut game = Game::new();
    run_loop(&mut game, &log, &white, &black, Vec::new())
}

fn cmd_resume() -> Result<()> {
    let log = SessionLog::new(SESSION_FILE);
    if !log.exists() {
        bail!("no stopped game to resume");
    }

    let saved = log.load()?;
    let mut game = Game::new();
    for (i, mv) in saved.moves.iter().enumerate() {
        let side = side_for_turn(i);
        game.handle_move(mv, side)
            .map_err(|e| anyhow!("could not replay move {} ({mv}): {e}", i + 1))?;
    }
    tracing::info!(
        white = saved.white,
        black = saved.black,
        moves = saved.moves.len(),
        "resumed session"
    );

    run_loop(&mut game, &log, &saved.white, &saved.black, saved.moves)
}

fn cmd_last() -> Result<()> {
    let summary = GameSummary::load(SUMMARY_FILE)?;
    match &summary.winner {
        Some(name) => println!("{} vs {}: {} won by checkmate", summary.white, summary.black, name),
        None => println!("{} vs {}: draw by stalemate", summary.white, summary.black),
    }
    println!("Final advantage (White's seat): {}", summary.advantage);
    display::print_move_list(&summary.moves);
    Ok(())
}

fn side_for_turn(turn: usize) -> Color {
    if turn % 2 == 0 {
        Color::White
    } else {
        Color::Black
    }
}

/// Drive the game until checkmate, stalemate, or `quit`.
fn run_loop(
    game: &mut Game,
    log: &SessionLog,
    white: &str,
    black: &str,
    mut moves: Vec<String>,
) -> Result<()> {
    let stdin = io::stdin();

    loop {
        let side = side_for_turn(moves.len());
        match side {
            Color::White => display::print_board(game, white, black),
            Color::Black => display::print_rotated_board(game, white, black),
        }
        print!("{side} to move: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input behaves like `quit`: keep the session file.
            println!();
            println!("Game stopped; resume it with `chess-cli resume`.");
            return Ok(());
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            println!("Game stopped; resume it with `chess-cli resume`.");
            return Ok(());
        }

        match game.handle_move(input, side) {
            Err(e) => println!("{e}"),
            Ok(()) => {
                log.append(input)?;
                moves.push(input.to_string());
                tracing::debug!(mv = input, %side, "move accepted");

                if game.is_checkmate() || game.is_stalemate() {
                    return finish(game, log, white, black, moves);
                }
            }
        }
    }
}

/// Announce the result, show the move list, store the summary, and drop
/// the session file.
fn finish(
    game: &Game,
    log: &SessionLog,
    white: &str,
    black: &str,
    moves: Vec<String>,
) -> Result<()> {
    // The side that made the final move is the opposite parity of the
    // side now to move.
    let winner = if game.is_checkmate() {
        let name = match side_for_turn(moves.len()) {
            Color::White => black,
            Color::Black => white,
        };
        println!("{name} won by checkmate!");
        Some(name.to_string())
    } else {
        println!("Draw by stalemate!");
        None
    };

    display::print_move_list(&moves);

    let advantage = game.compute_advantage();
    let summary = GameSummary {
        white: white.to_string(),
        black: black.to_string(),
        moves,
        winner,
        advantage,
    };
    summary.save(SUMMARY_FILE)?;
    tracing::info!(advantage, "game finished; summary saved");

    log.clear()
}
