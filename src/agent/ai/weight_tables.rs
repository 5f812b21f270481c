// Positional weight tables for Othello evaluation
// Row-major, row 0 at the top. Corners are worth the most, the X and C
// squares next to them the least, edges and the centre sit in between.

use crate::game_repr::BOARD_SIZE;

/// Immutable 8x8 matrix of positional weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightTable([[i32; BOARD_SIZE]; BOARD_SIZE]);

impl WeightTable {
    pub const fn new(weights: [[i32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self(weights)
    }

    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> i32 {
        self.0[row][col]
    }

    pub fn rows(&self) -> &[[i32; BOARD_SIZE]; BOARD_SIZE] {
        &self.0
    }
}

// Tournament weights - X and C squares punished hard
pub const TOURNAMENT: WeightTable = WeightTable::new([
    [ 10000, -10000, 1000,  800,  800, 1000, -10000,  10000],  // Row 0
    [-10000, -10000, -450, -500, -500, -450, -10000, -10000],  // Row 1
    [  1000,   -450,   30,   10,   10,   30,   -450,   1000],  // Row 2
    [   800,   -500,   10,   50,   50,   10,   -500,    800],  // Row 3
    [   800,   -500,   10,   50,   50,   10,   -500,    800],  // Row 4
    [  1000,   -450,   30,   10,   10,   30,   -450,   1000],  // Row 5
    [-10000, -10000, -450, -500, -500, -450, -10000, -10000],  // Row 6
    [ 10000, -10000, 1000,  800,  800, 1000, -10000,  10000],  // Row 7
]);

// Alpha-beta weights - softer X/C penalty. Row 7 keeps its tuned values,
// which are not mirrored from row 0.
pub const ALPHA_BETA: WeightTable = WeightTable::new([
    [10000, -5000, 1000,  800,  800, 1000, -5000, 10000],  // Row 0
    [-5000, -5000, -450, -500, -500, -450, -5000, -5000],  // Row 1
    [ 1000,  -450,   30,   10,   10,   30,  -450,  1000],  // Row 2
    [  800,  -500,   10,   50,   50,   10,  -500,   800],  // Row 3
    [  800,  -500,   10,   50,   50,   10,  -500,   800],  // Row 4
    [ 1000,  -450,   30,   10,   10,   30,  -450,  1000],  // Row 5
    [-5000, -5000, -450, -500, -500, -450, -5000, -5000],  // Row 6
    [10000, -5000,  100,  800,  800,  100, -5000, 10000],  // Row 7
]);
