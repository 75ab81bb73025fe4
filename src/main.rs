//! Plays a game of dominoes at the terminal, with every player sharing the same console.

use async_trait::async_trait;
use clap::Parser;
use domino_engine::{
    run, Board, Engine, GameView, Hand, MoveError, MoveOutcome, NewError, Pip, RunError, Seat, Tile,
};
use futures::executor::block_on;
use itertools::Itertools;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Double-six dominoes for two or more players at one terminal.
#[derive(Parser, Debug)]
#[command(name = "domino")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Player names in turn order
    #[arg(default_values = ["Player 1", "Player 2"])]
    players: Vec<String>,

    /// Tiles dealt to each player
    #[arg(long)]
    hand_len: Option<usize>,
}

/// Acts for the player at `index` through stdin and stdout.
#[derive(Debug)]
struct ConsoleSeat {
    index: usize,
}

#[async_trait]
impl Seat<io::Error> for ConsoleSeat {
    fn get_move<'a>(&self, view: &'a GameView<'_>, hand: &'a Hand) -> io::Result<Option<Tile>> {
        if must_pass(view.board, view.remaining_tiles, hand) {
            println!("{} has no playable tile and the boneyard is empty.", view.current_name());
            return Ok(None);
        }

        println!("Your hand:");
        for (number, tile) in hand.tiles().iter().enumerate() {
            let marker = if view.board.accepts(tile) { '+' } else { '-' };
            println!("  {}. {tile} {marker}", number + 1);
        }
        if view.remaining_tiles > 0 {
            println!("  0. Draw from boneyard");
        } else {
            println!("  0. Pass");
        }

        loop {
            let line = prompt(&format!("{}, choose a tile: ", view.current_name()))?;
            if let Some(choice) = parse_choice(&line, hand) {
                return Ok(choice);
            }
            println!("Enter a number from 0 to {}.", hand.len());
        }
    }

    fn update_move_errors<'a>(
        &self,
        _view: &'a GameView<'_>,
        _hand: &'a Hand,
        tile: Tile,
        move_errors: HashSet<MoveError>,
    ) -> io::Result<()> {
        println!("{tile} cannot be played:");
        for description in move_errors.iter().map(describe_move_error).sorted() {
            println!("  {description}");
        }
        Ok(())
    }

    fn update_outcome<'a>(&self, view: &'a GameView<'_>, outcome: MoveOutcome) -> io::Result<()> {
        let name = view.names[self.index];
        match outcome {
            MoveOutcome::NotInProgress => println!("The game is not in progress."),
            MoveOutcome::Played(tile) => println!("{name} played {tile}."),
            MoveOutcome::PlayedAfterDraw(tile) => {
                println!("{name} could not play, drew {tile} and played it.")
            }
            MoveOutcome::Drew(tile) => println!("{name} drew {tile}."),
            MoveOutcome::Passed => println!("{name} passed."),
        }
        Ok(())
    }

    async fn update_view<'a>(&self, view: &'a GameView<'_>, _hand: &'a Hand) -> io::Result<()> {
        if view.current_player != self.index {
            return Ok(());
        }

        println!();
        println!("Board: {}", view.board);
        println!("Boneyard: {} tiles", view.remaining_tiles);
        for (index, (name, hand_len)) in view.names.iter().zip(&view.hand_lens).enumerate() {
            let marker = if index == view.current_player { '*' } else { ' ' };
            println!("{marker} {name}: {hand_len} tiles");
        }
        Ok(())
    }

    async fn update_last_view<'a>(&self, view: &'a GameView<'_>, hand: &'a Hand) -> io::Result<()> {
        if self.index == 0 {
            println!();
            println!("=== Game over ===");
            println!("Board: {}", view.board);
        }
        println!(
            "{}: {} (value {})",
            view.names[self.index],
            hand,
            hand.total_value()
        );
        Ok(())
    }
}

/// Whether the only possible move is passing, so there is nothing to ask.
fn must_pass(board: &Board, remaining_tiles: usize, hand: &Hand) -> bool {
    remaining_tiles == 0 && !hand.tiles().iter().any(|tile| board.accepts(tile))
}

/// Reads `0` as drawing or passing and `1..=hand.len()` as the tile at that position.
/// Anything else is [None].
fn parse_choice(line: &str, hand: &Hand) -> Option<Option<Tile>> {
    match line.trim().parse::<usize>().ok()? {
        0 => Some(None),
        number => hand.tiles().get(number - 1).copied().map(Some),
    }
}

fn wants_another_game(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prints `message` and reads one line from stdin.
///
/// # Errors
///
/// When stdin is closed or cannot be read.
fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line)
}

fn describe_end(end: Option<Pip>) -> String {
    end.map_or_else(|| "none".to_owned(), |pip| pip.to_string())
}

fn describe_move_error(move_error: &MoveError) -> String {
    match move_error {
        MoveError::NotInProgress => "the game is not in progress".to_owned(),
        MoveError::NotInHand { tile } => format!("{tile} is not in your hand"),
        MoveError::NoMatchingEnd {
            tile,
            left_end,
            right_end,
        } => format!(
            "{tile} matches neither open end ({} and {})",
            describe_end(*left_end),
            describe_end(*right_end)
        ),
    }
}

fn describe_new_error(new_error: &NewError) -> String {
    match new_error {
        NewError::TooFewPlayers { players_len } => {
            format!("at least 2 players are required, got {players_len}")
        }
        NewError::DuplicateNames { duplicates } => {
            format!("player names must differ: {}", duplicates.iter().join(", "))
        }
        NewError::EmptyHands => "each player must be dealt at least one tile".to_owned(),
        NewError::NotEnoughTiles {
            requested_tiles,
            tiles_in_set,
        } => format!("cannot deal {requested_tiles} tiles from a set of {tiles_in_set}"),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut engine = match Engine::with_hand_len(cli.players, cli.hand_len) {
        Ok(engine) => engine,
        Err(new_errors) => {
            for new_error in new_errors.iter().map(describe_new_error).sorted() {
                eprintln!("error: {new_error}");
            }
            return ExitCode::FAILURE;
        }
    };
    let seats = (0..engine.players().len())
        .map(|index| ConsoleSeat { index })
        .collect_vec();

    println!("=== Dominoes ===");
    loop {
        if let Err(run_error) = block_on(run(&seats, &mut engine)) {
            match run_error {
                RunError::SeatsMismatch {
                    seats_len,
                    players_len,
                } => error!(seats_len, players_len, "seats do not match players"),
                RunError::Seats(io_errors) => {
                    for io_error in io_errors {
                        error!(%io_error, "console failed");
                    }
                }
            }
            return ExitCode::FAILURE;
        }

        if let Some(winner) = engine.winner() {
            println!("Winner: {}", winner.name());
        }

        match prompt("Play again? (y/n) ") {
            Ok(answer) if wants_another_game(&answer) => continue,
            _ => return ExitCode::SUCCESS,
        }
    }
}
