// Root move ordering for iterative deepening
//
// Interior nodes keep the rules engine's row-major order. At the root the
// best move of the previous iteration is searched first, so an iteration cut
// short by the clock has always re-examined the move it would replace.

use crate::game_repr::{Move, MoveList};

/// Move `first` to the front of `moves`, keeping the others in order.
/// No-op when `first` is not in the list.
pub fn promote_first(moves: &mut MoveList, first: Move) {
    if let Some(idx) = moves.iter().position(|&m| m == first) {
        let mv = moves.remove(idx);
        moves.insert(0, mv);
    }
}
