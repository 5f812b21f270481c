use super::*;
use crate::game_repr::{Move, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to play `plies` random moves from the opening.
/// Returns `None` if the game ended on the way.
pub fn random_position(rng: &mut StdRng, plies: usize) -> Option<Position> {
    let mut pos = Position::new();
    for _ in 0..plies {
        let moves = pos.available_moves();
        let mv = *moves.choose(rng)?;
        pos = pos.apply_move(mv).ok()?;
    }
    (!pos.is_terminal()).then_some(pos)
}

/// Helper function to collect a batch of seeded mid-game positions
pub fn mid_game_positions(seed: u64, count: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(count);
    while positions.len() < count {
        let plies = 6 + positions.len() * 3;
        if let Some(pos) = random_position(&mut rng, plies) {
            positions.push(pos);
        }
    }
    positions
}

/// Helper function to run one unclocked depth with a given algorithm
pub fn fixed_depth(pos: &Position, depth: u8, algorithm: Algorithm) -> (Option<Move>, i32, SearchStats) {
    search_depth(pos, depth, &TOURNAMENT, &TimeBudget::unlimited(), algorithm, None)
}

// ==================== TEST MODULES ====================

mod selector;
