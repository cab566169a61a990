use crate::board::Player;

/// Errors raised when a move cannot be applied to a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// `column` is 0-indexed, the message shows it 1-indexed as players see it
    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },

    #[error("could not parse '{0}' as a valid move")]
    InvalidCharacter(char),

    #[error("Invalid position, game is over")]
    GameOver,

    #[error("the game has already finished")]
    GameFinished,

    #[error("it is not {player:?}'s turn to move")]
    OutOfTurn { player: Player },
}
