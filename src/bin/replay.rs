use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use gess::{Game, Pos, Stone};
use tracing_subscriber::EnvFilter;

/// Apply Gess moves in order and print the board after each one
#[derive(Debug, Parser)]
#[command(name = "gess-replay", about = "Replay a Gess game from move strings")]
struct Args {
    /// Moves as FROM-TO or FROM:TO (e.g. C3-C6); read from stdin when absent
    moves: Vec<String>,

    /// Only print the final board
    #[arg(long)]
    quiet: bool,

    /// Stop at the first rejected move and exit with failure
    #[arg(long)]
    stop_on_error: bool,

    /// Log accepted moves (RUST_LOG overrides)
    #[arg(long)]
    verbose: bool,
}

enum Command {
    Move(Pos, Pos),
    Resign,
}

fn parse_line(line: &str) -> Result<Command> {
    if line.eq_ignore_ascii_case("resign") {
        return Ok(Command::Resign);
    }
    let Some((from, to)) = line.split_once(|c: char| c == '-' || c == ':') else {
        bail!("expected FROM-TO, got {:?}", line);
    };
    Ok(Command::Move(from.trim().parse()?, to.trim().parse()?))
}

fn read_stdin() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading moves from stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        lines.push(line.to_string());
    }
    Ok(lines)
}

/// Side to move, outcome and ring centers, e.g.
/// `White to move, in progress, rings Black [L3] White [L18]`
fn status_line(game: &Game) -> String {
    let centers = |stone: Stone| {
        let cells: Vec<String> = game.rings().of(stone).iter().map(Pos::to_string).collect();
        cells.join(" ")
    };
    format!(
        "{} to move, {}, rings Black [{}] White [{}]",
        game.turn(),
        game.state(),
        centers(Stone::Black),
        centers(Stone::White)
    )
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .init();

    let lines = if args.moves.is_empty() { read_stdin()? } else { args.moves.clone() };

    let mut game = Game::new();
    let mut rejected = 0usize;

    for (n, line) in lines.iter().enumerate() {
        let result = parse_line(line).and_then(|command| match command {
            Command::Resign => {
                game.resign();
                Ok(game.state())
            }
            Command::Move(from, to) => Ok(game.play(from, to)?),
        });

        match result {
            Ok(_) if args.quiet => {}
            Ok(_) => println!("{}. {}: {}\n{}\n", n + 1, line, status_line(&game), game.board()),
            Err(err) => {
                rejected += 1;
                eprintln!("{}. {}: {}", n + 1, line, err);
                if args.stop_on_error {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    if args.quiet {
        println!("{}\n", game.board());
    }
    println!(
        "{} ({} moves, {} rejected)",
        status_line(&game),
        game.history().len(),
        rejected
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert!(matches!(parse_line("C3-C6"), Ok(Command::Move(_, _))));
        assert!(matches!(parse_line("c3:c6"), Ok(Command::Move(_, _))));
        assert!(matches!(parse_line("Resign"), Ok(Command::Resign)));
        assert!(parse_line("C3 C6").is_err());
        assert!(parse_line("C3-Z9").is_err());
    }

    #[test]
    fn test_status_line_lists_turn_state_and_rings() {
        let mut game = Game::new();
        assert_eq!(
            status_line(&game),
            "Black to move, in progress, rings Black [L3] White [L18]"
        );
        game.make_move("C3", "C6").unwrap();
        game.resign();
        assert_eq!(
            status_line(&game),
            "White to move, Black won, rings Black [L3] White [L18]"
        );
    }
}
