// Position evaluation function
// Per-colour score = disc count + positional weight of every owned cell.

use crate::game_repr::{Color, Position, BOARD_SIZE};
use super::weight_tables::WeightTable;

/// Raw per-colour heuristic scores for one position.
///
/// The search only consumes [`Evaluation::differential`]. Comparing
/// differentials is equivalent to comparing the raw pair, since
/// `differential(Black) == -differential(White)` and it grows exactly when
/// Black's raw score grows relative to White's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub black: i32,
    pub white: i32,
}

impl Evaluation {
    /// Score of a single colour (the older, non zero-sum heuristic).
    pub fn raw(&self, color: Color) -> i32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// `color`'s score minus its opponent's.
    pub fn differential(&self, color: Color) -> i32 {
        self.raw(color) - self.raw(color.opposite())
    }
}

/// Evaluate a position with the given weight table.
pub fn evaluate(pos: &Position, table: &WeightTable) -> Evaluation {
    let mut eval = Evaluation {
        black: pos.count(Color::Black) as i32,
        white: pos.count(Color::White) as i32,
    };

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            match pos.cell(row, col).color() {
                Some(Color::Black) => eval.black += table.weight(row, col),
                Some(Color::White) => eval.white += table.weight(row, col),
                None => {}
            }
        }
    }

    eval
}

/// Differential score from Black's point of view, the sign convention used
/// throughout the search (Black maximises, White minimises).
#[inline]
pub fn score(pos: &Position, table: &WeightTable) -> i32 {
    evaluate(pos, table).differential(Color::Black)
}
