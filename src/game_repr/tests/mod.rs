use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a move that is known to be on the board
pub fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

/// Helper function to parse a test position
pub fn parse(board: &str) -> Position {
    board.parse().unwrap()
}

/// Helper function to list moves as (row, col) pairs
pub fn coords(moves: &[Move]) -> Vec<(usize, usize)> {
    moves.iter().map(|m| (m.row(), m.col())).collect()
}

// ==================== TEST MODULES ====================

mod flipping;
