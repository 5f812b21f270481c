mod moves;
mod piece;
mod position;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use position::*;

use thiserror::Error;

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// Errors raised by the rules engine when handed malformed input.
///
/// The search only ever plays moves it obtained from
/// [`Position::available_moves`], so these surface from human input,
/// parsing, or a misbehaving agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("{mv} does not flip any disc")]
    IllegalMove { mv: Move },

    #[error("cannot parse: {0}")]
    Parse(String),
}
