use anyhow::{anyhow, Context, Result};
use clap::Parser;
use indicatif::ProgressBar;

use std::io::{stdin, stdout, BufRead, Write};

use connect4_minimax::{
    board::Player, config::EngineConfig, game::Game, rules::GameOutcome, search::SearchMode,
    WIDTH,
};

mod display;

/// Play Connect 4 against a minimax engine with alpha-beta pruning.
#[derive(Parser, Debug)]
#[command(name = "connect4_minimax_cli")]
struct Args {
    /// Max depth for the minimax search (4 is a good starting place)
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// Search mode: reference | alternating
    #[arg(long, default_value = "reference")]
    mode: SearchMode,

    /// Start from a position given as 1-indexed column digits, e.g. 4453
    #[arg(long, default_value = "")]
    moves: String,

    /// Print search statistics after every engine move
    #[arg(long)]
    verbose: bool,
}

/// Reads a 1-indexed column from `input` and converts it to a 0-indexed one
///
/// Returns `None` once `input` has no more lines.
fn read_column<R: BufRead>(input: &mut R) -> Result<Option<usize>> {
    print!("Move input > ");
    stdout().flush().expect("Failed to flush to stdout!");
    let mut input_str = String::new();
    if input.read_line(&mut input_str)? == 0 {
        return Ok(None);
    }

    let column = input_str
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow!("Invalid number: {}", input_str.trim()))?;
    if column < 1 || column > WIDTH {
        return Err(anyhow!(
            "Invalid move, column {} out of range. Columns must be between 1 and {}",
            column,
            WIDTH
        ));
    }
    Ok(Some(column - 1))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = EngineConfig {
        depth: args.depth,
        mode: args.mode,
        verbose: args.verbose,
    };
    config.validate()?;

    let mut game = Game::from_moves(&args.moves, config)
        .with_context(|| format!("parsing starting moves '{}'", args.moves))?;

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display::draw(game.board()).expect("Failed to draw board!");

        match game.outcome() {
            GameOutcome::InProgress => match game.to_move() {
                // engine player
                Player::Second => {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message("AI is thinking...");
                    spinner.enable_steady_tick(100);

                    let reply = game.play_engine();
                    spinner.finish_and_clear();

                    let reply = reply?;
                    match reply.column {
                        Some(column) => println!("Best move: {}", column + 1),
                        None => return Err(anyhow!("engine found no move to play")),
                    }
                }
                // human player
                Player::First => {
                    let column = match read_column(&mut stdin().lock()) {
                        Ok(Some(column)) => column,
                        Ok(None) => {
                            println!("\nNo more input, leaving the game");
                            break;
                        }
                        Err(err) => {
                            println!("{}", err);
                            continue;
                        }
                    };

                    if let Err(err) = game.play_human(column) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            },

            // end states
            GameOutcome::Win(player) => {
                println!("Player {} wins!", player.number());
                break;
            }
            GameOutcome::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    println!("Moves played: {}", game.history());
    Ok(())
}
