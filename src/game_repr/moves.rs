use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use super::{GameError, BOARD_SIZE};

/// Legal move lists rarely exceed a couple of dozen entries.
pub type MoveList = SmallVec<[Move; 32]>;

/// A disc placement at `(row, col)`.
///
/// A `Move` only says where a disc goes; whether it is legal depends on the
/// position and side to move it is played against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Result<Move, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Caller guarantees `row` and `col` are on the board.
    pub(crate) const fn at(row: usize, col: usize) -> Move {
        Move {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses the `"r c"` form typed by human players. Commas are accepted too.
impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty());

        let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(GameError::Parse(format!("expected 'r c', got '{}'", s.trim())));
        };

        let row = r
            .parse::<usize>()
            .map_err(|_| GameError::Parse(format!("bad row '{r}'")))?;
        let col = c
            .parse::<usize>()
            .map_err(|_| GameError::Parse(format!("bad column '{c}'")))?;

        Move::new(row, col)
    }
}
