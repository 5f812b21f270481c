// Bounded Minimax Search with Alpha-Beta Pruning
//
// One routine serves both node roles. Scores are differentials from Black's
// point of view: nodes where Black moves maximise, nodes where White moves
// minimise. Because the role is read from the side to move, a forced pass
// simply lets the same role move again.
//
// Every node works on its own copy of the position (`Position` is `Copy`).
// Alpha and beta travel down by value. The clock is polled through the
// shared `TimeBudget`: the soft limit on node entry, the hard limit after
// every child.

use crate::game_repr::{Color, Move, Position};
use super::evaluation::score;
use super::move_ordering::promote_first;
use super::time_budget::TimeBudget;
use super::weight_tables::WeightTable;

/// Bound larger than any reachable evaluation
pub const INFINITY: i32 = i32::MAX;

/// Lower bound, kept symmetric with [`INFINITY`] so it can be negated
pub const NEG_INFINITY: i32 = -INFINITY;

/// Which way a node optimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Max,
    Min,
}

impl Role {
    /// Black maximises, White minimises.
    pub fn of(color: Color) -> Self {
        match color {
            Color::Black => Role::Max,
            Color::White => Role::Min,
        }
    }

    /// Value a node starts from before any child is seen.
    pub fn worst(self) -> i32 {
        match self {
            Role::Max => NEG_INFINITY,
            Role::Min => INFINITY,
        }
    }

    /// Strict comparison: on ties the first move found is kept.
    #[inline]
    pub fn improves(self, value: i32, best: i32) -> bool {
        match self {
            Role::Max => value > best,
            Role::Min => value < best,
        }
    }
}

/// Counters collected while searching one depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Leaves produced by running out of depth (as opposed to terminal positions)
    pub depth_limited_leaves: u64,
    /// A time cutoff fired somewhere in the tree
    pub aborted: bool,
}

impl SearchStats {
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.depth_limited_leaves += other.depth_limited_leaves;
        self.aborted |= other.aborted;
    }
}

/// State threaded through one depth-limited search.
pub struct SearchContext<'a> {
    pub table: &'a WeightTable,
    pub budget: &'a TimeBudget,
    pub stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub fn new(table: &'a WeightTable, budget: &'a TimeBudget) -> Self {
        Self {
            table,
            budget,
            stats: SearchStats::default(),
        }
    }

    /// Depth and soft-time leaf test shared by every search routine. Returns
    /// the static value when the node must not be expanded.
    pub(crate) fn leaf_value(&mut self, pos: &Position, depth: u8) -> Option<i32> {
        if depth == 0 {
            self.stats.depth_limited_leaves += 1;
        } else if self.budget.leaf_expired() {
            self.stats.aborted = true;
        } else {
            return None;
        }
        Some(self.evaluate(pos))
    }

    #[inline]
    pub(crate) fn evaluate(&self, pos: &Position) -> i32 {
        score(pos, self.table)
    }

    /// Value of an expanded node. A node where no child could be played
    /// falls back to its static value instead of reporting the role's bound.
    pub(crate) fn settle(&self, pos: &Position, best: Option<(Move, i32)>) -> (Option<Move>, i32) {
        match best {
            Some((mv, value)) => (Some(mv), value),
            None => (None, self.evaluate(pos)),
        }
    }

    /// Hard cutoff, polled after each child.
    #[inline]
    pub(crate) fn out_of_time(&mut self) -> bool {
        if self.budget.hard_expired() {
            self.stats.aborted = true;
            return true;
        }
        false
    }
}

/// Alpha-beta search of `pos` to `depth` plies within the window
/// `(alpha, beta)`.
///
/// # Returns
///
/// `(best_move, value)`. Leaves return `None`; internal nodes always return
/// the move that produced `value`. The value is exact when it falls strictly
/// inside the window, otherwise it is a bound on the correct side.
pub fn alpha_beta(
    pos: &Position,
    depth: u8,
    alpha: i32,
    beta: i32,
    ctx: &mut SearchContext,
) -> (Option<Move>, i32) {
    search_node(pos, depth, alpha, beta, ctx, None)
}

/// Full-window search of the root, optionally trying `preferred` first.
pub fn alpha_beta_root(
    pos: &Position,
    depth: u8,
    ctx: &mut SearchContext,
    preferred: Option<Move>,
) -> (Option<Move>, i32) {
    search_node(pos, depth, NEG_INFINITY, INFINITY, ctx, preferred)
}

fn search_node(
    pos: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
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
    let mut best_move = None;
    let mut best_value = role.worst();

    for mv in moves {
        let Ok(child) = pos.apply_move(mv) else {
            continue;
        };

        let (_, value) = search_node(&child, depth - 1, alpha, beta, ctx, None);

        if best_move.is_none() || role.improves(value, best_value) {
            best_value = value;
            best_move = Some(mv);
        }

        match role {
            Role::Max => alpha = alpha.max(value),
            Role::Min => beta = beta.min(value),
        }

        if ctx.out_of_time() {
            break;
        }

        if beta <= alpha {
            break;
        }
    }

    ctx.settle(pos, best_move.map(|mv| (mv, best_value)))
}
