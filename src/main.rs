//! Text front end for the five-in-a-row engine
//!
//! Deliberately thin: reads `row col` pairs from stdin, feeds them to
//! the game session, and renders the board after every accepted move.
//! All game logic lives in the library.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use tracing_subscriber::EnvFilter;

use wuziqi::{Board, GameMode, GameSession, Outcome, Pos, Stone, BOARD_SIZE};

#[derive(Parser)]
#[command(about = "Five-in-a-row on a 9x9 board")]
struct Cli {
    /// Two humans at one keyboard, or play against the computer
    #[arg(long, value_enum, default_value = "pvc")]
    mode: ModeArg,

    /// Cosmetic pause before the computer replies, in milliseconds
    #[arg(long, default_value_t = 500)]
    ai_delay_ms: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pvp,
    Pvc,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => GameMode::Pvp,
            ModeArg::Pvc => GameMode::Pvc,
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut session = GameSession::new(cli.mode.into());
    let delay = Duration::from_millis(cli.ai_delay_ms);

    render(session.board());
    println!("Enter moves as: row col (0-8)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        print!("{} to move> ", name_of(session.current_player(), session.mode()));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let Some((row, col)) = parse_move(&line) else {
            println!("could not read a move from '{}'", line.trim());
            continue;
        };

        if let Err(err) = session.apply_move(row, col) {
            println!("{err}");
            continue;
        }
        render(session.board());

        if session.ai_to_move() {
            thread::sleep(delay);
            let pos = session
                .play_ai_move()
                .expect("computer turn was just checked");
            println!("Computer plays {} {}", pos.row, pos.col);
            render(session.board());
        }
    }

    match session.outcome() {
        Some(Outcome::Win(winner)) => {
            println!("{} wins!", name_of(winner, session.mode()));
        }
        Some(Outcome::Draw) => println!("Draw!"),
        None => {}
    }
    Ok(())
}

fn parse_move(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn name_of(stone: Stone, mode: GameMode) -> String {
    match (mode, stone) {
        (GameMode::Pvc, Stone::Black) => "You (Black)".to_string(),
        (GameMode::Pvc, Stone::White) => "Computer (White)".to_string(),
        _ => stone.to_string(),
    }
}

fn render(board: &Board) {
    print!("   ");
    for col in 0..BOARD_SIZE {
        print!(" {col}");
    }
    println!();
    for row in 0..BOARD_SIZE {
        print!(" {row} ");
        for col in 0..BOARD_SIZE {
            match board.get(Pos::new(row as u8, col as u8)) {
                Stone::Black => print!(" {}", "x".red()),
                Stone::White => print!(" {}", "o".cyan()),
                Stone::Empty => print!(" {}", ".".dim()),
            }
        }
        println!();
    }
}
