//! Move generation and end-of-game detection

use crate::{
    board::{Board, Cell, Player},
    HEIGHT, WIDTH,
};

/// The state of a game, derived purely from the contents of a board
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

// (row step, column step) for horizontal, vertical, diagonal up and diagonal down runs
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Calls `f` with the cells of every run of four that fits on the board,
/// grouped by direction: horizontal, vertical, rising diagonal, falling diagonal
pub fn for_each_window<F: FnMut([Cell; 4])>(board: &Board, mut f: F) {
    for &(d_row, d_col) in DIRECTIONS.iter() {
        for row in 0..HEIGHT as isize {
            for column in 0..WIDTH as isize {
                let (end_row, end_col) = (row + 3 * d_row, column + 3 * d_col);
                if end_row < 0 || end_row >= HEIGHT as isize || end_col >= WIDTH as isize {
                    continue;
                }
                let mut window = [Cell::Empty; 4];
                for (i, cell) in window.iter_mut().enumerate() {
                    let i = i as isize;
                    *cell = board.get((row + i * d_row) as usize, (column + i * d_col) as usize);
                }
                f(window);
            }
        }
    }
}

fn has_four(board: &Board, piece: Cell) -> bool {
    let mut found = false;
    for_each_window(board, |window| {
        found |= window.iter().all(|&cell| cell == piece);
    });
    found
}

/// Determines whether the game on `board` is won, drawn or still in progress
///
/// If both sides somehow have four in a row, the first player's win is reported.
pub fn detect_outcome(board: &Board) -> GameOutcome {
    if has_four(board, Player::First.piece()) {
        GameOutcome::Win(Player::First)
    } else if has_four(board, Player::Second.piece()) {
        GameOutcome::Win(Player::Second)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Returns the position after each legal move of `player`, in ascending column order
pub fn enumerate_child_boards(board: &Board, player: Player) -> Vec<Board> {
    legal_columns(board)
        .into_iter()
        .filter_map(|column| {
            board
                .lowest_empty_row(column)
                .map(|row| board.place_piece(row, column, player.piece()))
        })
        .collect()
}

/// Returns the columns that can still take a piece, in ascending order
pub fn legal_columns(board: &Board) -> Vec<usize> {
    (0..WIDTH).filter(|&column| board.is_column_playable(column)).collect()
}
