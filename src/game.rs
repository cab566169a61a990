//! A single game session between a human and the engine

use crate::{
    apply_human_move,
    board::{Board, Player},
    config::EngineConfig,
    error::MoveError,
    rules::{detect_outcome, GameOutcome},
    search::Searcher,
};

/// The engine's reply to a position
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EngineMove {
    /// `None` only if the search found no move to make
    pub column: Option<usize>,
    pub score: i64,
    pub node_count: usize,
}

/// Owns the authoritative board of a live game
///
/// The first player is the human and the second player is the engine. Every
/// engine turn starts a fresh search, nothing is carried over between turns.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    // 1-indexed columns, in the order they were played
    history: String,
    config: EngineConfig,
}

impl Game {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::First,
            history: String::new(),
            config,
        }
    }

    /// Starts a game from a string of 1-indexed column digits
    pub fn from_moves(moves: &str, config: EngineConfig) -> Result<Self, MoveError> {
        let board = Board::from_moves(moves)?;
        Ok(Self {
            board,
            to_move: board.player_to_move(),
            history: moves.to_string(),
            config,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn outcome(&self) -> GameOutcome {
        detect_outcome(&self.board)
    }

    /// Plays `column` for whichever player is to move
    pub fn play_human(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameFinished);
        }
        self.board = apply_human_move(&self.board, column, self.to_move)?;
        self.record(column);
        Ok(self.outcome())
    }

    /// Searches for and plays the second player's move
    pub fn play_engine(&mut self) -> Result<EngineMove, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameFinished);
        }
        if self.to_move != Player::Second {
            return Err(MoveError::OutOfTurn {
                player: Player::Second,
            });
        }

        let mut searcher = Searcher::new(self.config.mode);
        let result = if self.config.verbose {
            searcher.choose_verbose(&self.board, self.config.depth)
        } else {
            searcher.choose(&self.board, self.config.depth)
        };

        let column = result.column(&self.board);
        if let Some(column) = column {
            self.board = result.board;
            self.record(column);
        }

        Ok(EngineMove {
            column,
            score: result.score,
            node_count: searcher.node_count,
        })
    }

    fn record(&mut self, column: usize) {
        self.history.push_str(&(column + 1).to_string());
        self.to_move = self.to_move.other();
    }
}
