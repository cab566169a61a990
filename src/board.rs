//! Grid representation of a Connect 4 position

use crate::{error::MoveError, rules::detect_outcome, rules::GameOutcome, HEIGHT, WIDTH};

/// The contents of a single board cell
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    PieceA,
    PieceB,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One of the two sides of the game. `First` always moves first and
/// plays `PieceA`, `Second` plays `PieceB`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn piece(self) -> Cell {
        match self {
            Player::First => Cell::PieceA,
            Player::Second => Cell::PieceB,
        }
    }

    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// The 1-indexed player number shown to users
    pub fn number(self) -> usize {
        match self {
            Player::First => 1,
            Player::Second => 2,
        }
    }
}

/// A 6x7 Connect 4 grid
///
/// Row 0 is the bottom of the board. Boards are plain values: copying one
/// never shares cells with the original, so search branches can each own
/// their position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    num_pieces: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with every cell empty
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            num_pieces: 0,
        }
    }

    /// Builds a position from a string of 1-indexed column digits,
    /// alternating between the first and second player
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, MoveError> {
        let mut board = Self::new();
        let mut player = Player::First;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is decided at any point
                    if detect_outcome(&board) != GameOutcome::InProgress {
                        return Err(MoveError::GameOver);
                    }
                    board = board.with_move(column - 1, player)?;
                    player = player.other();
                }
                _ => return Err(MoveError::InvalidCharacter(column_char)),
            }
        }
        Ok(board)
    }

    fn index(row: usize, column: usize) -> usize {
        assert!(
            row < HEIGHT && column < WIDTH,
            "cell ({}, {}) is outside the board",
            row,
            column
        );
        column + WIDTH * row
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[Self::index(row, column)]
    }

    /// Returns true if the top cell of `column` is empty
    ///
    /// # Panics
    /// Panics if `column` is not on the board
    pub fn is_column_playable(&self, column: usize) -> bool {
        self.get(HEIGHT - 1, column).is_empty()
    }

    /// The first empty row of `column` scanning upwards from the bottom,
    /// or `None` if the column is full
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.get(row, column).is_empty())
    }

    /// Returns a copy of this board with `piece` written at (`row`, `column`)
    ///
    /// No legality checks are made here, callers decide which placements
    /// are legal.
    pub fn place_piece(&self, row: usize, column: usize, piece: Cell) -> Self {
        let mut next = *self;
        let idx = Self::index(row, column);
        match (next.cells[idx].is_empty(), piece.is_empty()) {
            (true, false) => next.num_pieces += 1,
            (false, true) => next.num_pieces -= 1,
            _ => {}
        }
        next.cells[idx] = piece;
        next
    }

    /// Drops `player`'s piece into `column`, failing if the column is full
    pub fn with_move(&self, column: usize, player: Player) -> Result<Self, MoveError> {
        match self.lowest_empty_row(column) {
            Some(row) if self.is_column_playable(column) => {
                Ok(self.place_piece(row, column, player.piece()))
            }
            _ => Err(MoveError::ColumnFull { column }),
        }
    }

    /// The number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        match cell {
            Cell::Empty => WIDTH * HEIGHT - self.num_pieces,
            _ => self.cells.iter().filter(|&&c| c == cell).count(),
        }
    }

    pub fn num_pieces(&self) -> usize {
        self.num_pieces
    }

    pub fn is_full(&self) -> bool {
        self.num_pieces == WIDTH * HEIGHT
    }

    /// The player whose turn it is, assuming strictly alternating play from
    /// the first player
    pub fn player_to_move(&self) -> Player {
        if self.num_pieces % 2 == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    /// Returns the lowest-numbered column in which `other` differs from this board
    pub fn changed_column(&self, other: &Board) -> Option<usize> {
        (0..WIDTH).find(|&column| {
            (0..HEIGHT).any(|row| self.get(row, column) != other.get(row, column))
        })
    }

    /// Returns true if no column holds an empty cell below a piece
    pub fn respects_gravity(&self) -> bool {
        (0..WIDTH).all(|column| {
            (1..HEIGHT)
                .all(|row| self.get(row, column).is_empty() || !self.get(row - 1, column).is_empty())
        })
    }
}
