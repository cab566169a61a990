//! Depth-limited minimax search with alpha-beta pruning

use anyhow::{anyhow, Error};

use crate::{
    board::{Board, Player},
    evaluator::evaluate,
    rules::{detect_outcome, enumerate_child_boards, GameOutcome},
};

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// The score of a position won by the first player. A win for the second
/// player scores the negation
pub const WIN_SCORE: i64 = 1_000_000_000;

/// Chooses which player each recursive call of the search plays for
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SearchMode {
    /// Every level of the tree keeps the player the search was started with,
    /// so only that player's pieces are ever added
    Reference,
    /// Textbook minimax: levels alternate between the maximising first player
    /// and the minimising second player
    Alternating,
}

impl Default for SearchMode {
    fn default() -> Self {
        SearchMode::Reference
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reference" => Ok(SearchMode::Reference),
            "alternating" => Ok(SearchMode::Alternating),
            _ => Err(anyhow!(
                "unknown search mode '{}' (expected 'reference' or 'alternating')",
                s
            )),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Reference => write!(f, "reference"),
            SearchMode::Alternating => write!(f, "alternating"),
        }
    }
}

/// A score paired with the position the search picked to reach it
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub score: i64,
    pub board: Board,
}

impl SearchResult {
    /// The column played to get from `parent` to the chosen position, if any
    pub fn column(&self, parent: &Board) -> Option<usize> {
        parent.changed_column(&self.board)
    }
}

/// Scores a position where the search stops expanding
fn leaf_score(board: &Board, outcome: GameOutcome) -> i64 {
    match outcome {
        GameOutcome::Win(Player::First) => WIN_SCORE,
        GameOutcome::Win(Player::Second) => -WIN_SCORE,
        GameOutcome::Draw => 0,
        // depth exhausted, always judged from the second player's side
        GameOutcome::InProgress => evaluate(board, Player::Second),
    }
}

/// A minimax searcher
///
/// # Notes
/// The first player maximises and the second player minimises. Leaves are
/// scored with [`WIN_SCORE`] for decided games and with the heuristic
/// evaluator otherwise. Children are visited in ascending column order and
/// only a strictly better score replaces the current best, so ties go to the
/// lowest column.
#[derive(Clone, Debug)]
pub struct Searcher {
    mode: SearchMode,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            node_count: 0,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Searches `depth` plies below `board` for `player`
    ///
    /// Returns the minimax score of `board` and the child position that
    /// achieves it. If the search stops at `board` itself (decided game,
    /// depth exhausted or no legal moves) the returned board is `board`.
    pub fn search(
        &mut self,
        board: &Board,
        mut alpha: i64,
        mut beta: i64,
        depth: usize,
        player: Player,
    ) -> SearchResult {
        self.node_count += 1;

        let outcome = detect_outcome(board);
        if outcome.is_over() || depth == 0 {
            return SearchResult {
                score: leaf_score(board, outcome),
                board: *board,
            };
        }

        let next_player = match self.mode {
            SearchMode::Reference => player,
            SearchMode::Alternating => player.other(),
        };

        let mut best = SearchResult {
            score: match player {
                Player::First => i64::MIN,
                Player::Second => i64::MAX,
            },
            board: *board,
        };

        for child in enumerate_child_boards(board, player) {
            let score = self.search(&child, alpha, beta, depth - 1, next_player).score;
            match player {
                Player::First => {
                    if score > best.score {
                        best = SearchResult { score, board: child };
                    }
                    alpha = alpha.max(score);
                }
                Player::Second => {
                    if score < best.score {
                        best = SearchResult { score, board: child };
                    }
                    beta = beta.min(score);
                }
            }
            // neither side will allow play to reach the remaining children
            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// Picks the second player's move from `board` with a full search window
    pub fn choose(&mut self, board: &Board, depth: usize) -> SearchResult {
        self._choose(board, depth, true)
    }

    /// Picks the second player's move from `board`, logging search statistics to stdout
    pub fn choose_verbose(&mut self, board: &Board, depth: usize) -> SearchResult {
        self._choose(board, depth, false)
    }

    fn _choose(&mut self, board: &Board, depth: usize, silent: bool) -> SearchResult {
        assert!(depth > 0, "search depth must be at least 1");

        let start_count = self.node_count;
        let start = Instant::now();
        let result = self.search(board, i64::MIN, i64::MAX, depth, Player::Second);

        if !silent {
            let elapsed = start.elapsed();
            let nodes = self.node_count - start_count;
            println!(
                "Search depth: {}, mode: {}, score: {}, positions: {}, time: {:.3}ms, kpos/s: {:.1}",
                depth,
                self.mode(),
                result.score,
                nodes,
                elapsed.as_secs_f64() * 1000.0,
                nodes as f64 / (1000.0 * elapsed.as_secs_f64().max(1e-9))
            );
        }
        result
    }
}
