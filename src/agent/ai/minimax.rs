// Full-width Minimax Search
//
// Same node semantics as `alpha_beta` (Black maximises, first move found
// wins ties, same leaf and time tests) but every child is examined. It backs
// the `Minimax` strategy and serves as the reference the pruned search must
// agree with.

use crate::game_repr::{Move, Position};
use super::alpha_beta::{Role, SearchContext};
use super::move_ordering::promote_first;

/// Unpruned search of `pos` to `depth` plies.
pub fn minimax(pos: &Position, depth: u8, ctx: &mut SearchContext) -> (Option<Move>, i32) {
    minimax_root(pos, depth, ctx, None)
}

/// Unpruned search of the root, optionally trying `preferred` first.
pub fn minimax_root(
    pos: &Position,
    depth: u8,
    ctx: &mut SearchContext,
    preferred: Option<Move>,
) -> (Option<Move>, i32) {
    ctx.stats.nodes += 1;

    if let Some(value) = ctx.leaf_value(pos, depth) {
        return (None, value);
    }
    let mut moves = pos.available_moves();
    if moves.is_empty() {
        return (None, ctx.evaluate(pos));
    }
    if let Some(first) = preferred {
        promote_first(&mut moves, first);
    }

    let role = Role::of(pos.current());
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let Ok(child) = pos.apply_move(mv) else {
            continue;
        };

        let (_, value) = minimax_root(&child, depth - 1, ctx, None);

        match best {
            Some((_, best_value)) if !role.improves(value, best_value) => {}
            _ => best = Some((mv, value)),
        }

        if ctx.out_of_time() {
            break;
        }
    }

    ctx.settle(pos, best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::time_budget::TimeBudget;
    use crate::agent::ai::weight_tables::ALPHA_BETA;

    #[test]
    fn test_visits_whole_tree() {
        let budget = TimeBudget::unlimited();
        let mut ctx = SearchContext::new(&ALPHA_BETA, &budget);

        let (mv, _) = minimax(&Position::new(), 2, &mut ctx);

        // 1 root + 4 replies + 3 answers to each of them
        assert!(mv.is_some());
        assert_eq!(ctx.stats.nodes, 1 + 4 + 4 * 3);
        assert_eq!(ctx.stats.depth_limited_leaves, 12);
    }
}
