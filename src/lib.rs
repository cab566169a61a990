//! A minimax agent for playing the board game 'Connect 4'
//!
//! The agent searches a fixed number of plies ahead with alpha-beta pruning
//! and scores the positions it cannot search to the end with a heuristic
//! built from every run of four cells on the board.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{apply_human_move, choose_engine_move, query_outcome};
//! use connect4_minimax::{board::{Board, Player}, rules::GameOutcome};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = apply_human_move(&Board::new(), 3, Player::First)?;
//! let reply = choose_engine_move(&board, 4);
//!
//! assert_eq!(reply.num_pieces(), 2);
//! assert_eq!(query_outcome(&reply), GameOutcome::InProgress);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod error;

pub mod rules;

pub mod evaluator;

pub mod search;

pub mod config;

pub mod game;


use board::{Board, Player};
use error::MoveError;
use rules::GameOutcome;
use search::{SearchMode, Searcher};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The column the evaluator favours
pub const CENTER_COLUMN: usize = WIDTH / 2;

// a run of four has to fit on the board in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
const_assert!(CENTER_COLUMN == 3);

/// Drops `player`'s piece into `column` for a human move
///
/// # Panics
/// Panics if `column` is not in `0..WIDTH`
pub fn apply_human_move(board: &Board, column: usize, player: Player) -> Result<Board, MoveError> {
    assert!(column < WIDTH, "column {} is outside the board", column);
    board.with_move(column, player)
}

/// Searches `depth` plies for the second player and returns the position after its move
///
/// # Panics
/// Panics if `depth` is 0
pub fn choose_engine_move(board: &Board, depth: usize) -> Board {
    Searcher::new(SearchMode::Reference).choose(board, depth).board
}

/// Reports whether the game on `board` is won, drawn or still in progress
pub fn query_outcome(board: &Board) -> GameOutcome {
    rules::detect_outcome(board)
}
