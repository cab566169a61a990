//! Positional heuristic for non-terminal positions
//!
//! The score is taken from the point of view of one player, but with an
//! inverted polarity: that player's own strong windows score *negative* and the
//! opponent's open threes score strongly *positive*. The search engine always
//! evaluates from the second player's side.

use crate::{
    board::{Board, Cell, Player},
    rules::for_each_window,
    CENTER_COLUMN, HEIGHT,
};

/// Penalty per piece of the evaluated player in the center column
pub const CENTER_WEIGHT: i64 = 5;
pub const FOUR_SCORE: i64 = -100;
pub const OPEN_THREE_SCORE: i64 = -50;
pub const OPEN_TWO_SCORE: i64 = -10;
/// Awarded when the opponent is one piece away from completing a window
pub const OPPONENT_THREAT_SCORE: i64 = 1000;

/// Scores a single run of four cells for `player`
pub fn evaluate_window(window: &[Cell; 4], player: Player) -> i64 {
    let own_piece = player.piece();
    let other_piece = player.other().piece();

    let own = window.iter().filter(|&&cell| cell == own_piece).count();
    let other = window.iter().filter(|&&cell| cell == other_piece).count();
    let empty = window.iter().filter(|cell| cell.is_empty()).count();

    let mut score = match (own, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => OPEN_THREE_SCORE,
        (2, 2) => OPEN_TWO_SCORE,
        _ => 0,
    };

    if other == 3 && empty == 1 {
        score += OPPONENT_THREAT_SCORE;
    }

    score
}

/// Scores `board` from `player`'s perspective by summing every window of four
/// along with the center column bias
pub fn evaluate(board: &Board, player: Player) -> i64 {
    let center_count = (0..HEIGHT)
        .filter(|&row| board.get(row, CENTER_COLUMN) == player.piece())
        .count() as i64;
    let mut score = -center_count * CENTER_WEIGHT;

    for_each_window(board, |window| {
        score += evaluate_window(&window, player);
    });

    score
}
