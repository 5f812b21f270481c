// Iterative Deepening Search Orchestrator
//
// This module implements iterative deepening search for Othello move selection.
// It progressively searches deeper depths (1, 2, 3, ...) until the time budget
// runs out, using the best move of the previous iteration as the first move
// tried at the root.

use crate::game_repr::{Color, Move, Position};
use super::alpha_beta::{alpha_beta, alpha_beta_root, Role, SearchContext, SearchStats, INFINITY, NEG_INFINITY};
use super::evaluation::score;
use super::minimax::minimax_root;
use super::move_ordering::promote_first;
use super::time_budget::TimeBudget;
use super::weight_tables::WeightTable;
use rayon::prelude::*;

/// Depth ceiling; an 8x8 board runs out of time long before this.
pub const MAX_SEARCH_DEPTH: u8 = 30;

/// Tree search routine run at each depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
    /// Minimax without pruning
    Minimax,
    /// Alpha-beta with root moves split across rayon workers
    ParallelAlphaBeta,
}

/// Depth ceiling and clock for one search.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub max_depth: u8,
    pub budget: TimeBudget,
}

impl SearchLimits {
    /// Fixed depth, no clock.
    pub fn depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            budget: TimeBudget::unlimited(),
        }
    }

    /// Clock only, up to [`MAX_SEARCH_DEPTH`].
    pub fn timed(budget: TimeBudget) -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            budget,
        }
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Differential score from Black's point of view
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
    /// False when the retained iteration was cut short by the clock
    pub completed: bool,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes_searched: 0,
            time_ms: 0,
            completed: false,
        }
    }

    /// Score from `color`'s point of view.
    pub fn score_for(&self, color: Color) -> i32 {
        match color {
            Color::Black => self.score,
            Color::White => -self.score,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one depth-limited search of the root with the chosen algorithm.
pub fn search_depth(
    pos: &Position,
    depth: u8,
    table: &WeightTable,
    budget: &TimeBudget,
    algorithm: Algorithm,
    preferred: Option<Move>,
) -> (Option<Move>, i32, SearchStats) {
    match algorithm {
        Algorithm::AlphaBeta => {
            let mut ctx = SearchContext::new(table, budget);
            let (mv, value) = alpha_beta_root(pos, depth, &mut ctx, preferred);
            (mv, value, ctx.stats)
        }
        Algorithm::Minimax => {
            let mut ctx = SearchContext::new(table, budget);
            let (mv, value) = minimax_root(pos, depth, &mut ctx, preferred);
            (mv, value, ctx.stats)
        }
        Algorithm::ParallelAlphaBeta => parallel_root(pos, depth, table, budget, preferred),
    }
}

/// Search every root move on its own rayon worker with a full window, then
/// merge in root order. The merge keeps the first best move, so the answer
/// matches the sequential search for the same move order.
fn parallel_root(
    pos: &Position,
    depth: u8,
    table: &WeightTable,
    budget: &TimeBudget,
    preferred: Option<Move>,
) -> (Option<Move>, i32, SearchStats) {
    let mut moves = pos.available_moves();
    if depth == 0 || moves.len() < 2 || budget.leaf_expired() {
        let mut ctx = SearchContext::new(table, budget);
        let (mv, value) = alpha_beta_root(pos, depth, &mut ctx, preferred);
        return (mv, value, ctx.stats);
    }
    if let Some(first) = preferred {
        promote_first(&mut moves, first);
    }

    let scored: Vec<(Move, i32, SearchStats)> = moves
        .as_slice()
        .par_iter()
        .filter_map(|&mv| {
            let child = pos.apply_move(mv).ok()?;
            let mut ctx = SearchContext::new(table, budget);
            let (_, value) = alpha_beta(&child, depth - 1, NEG_INFINITY, INFINITY, &mut ctx);
            Some((mv, value, ctx.stats))
        })
        .collect();

    let role = Role::of(pos.current());
    let mut stats = SearchStats {
        nodes: 1,
        ..SearchStats::default()
    };
    let mut best: Option<(Move, i32)> = None;

    for (mv, value, child_stats) in scored {
        stats.merge(child_stats);
        match best {
            Some((_, best_value)) if !role.improves(value, best_value) => {}
            _ => best = Some((mv, value)),
        }
    }

    match best {
        Some((mv, value)) => (Some(mv), value, stats),
        None => (None, score(pos, table), stats),
    }
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `pos` - Current position to search
/// * `table` - Positional weights used at the leaves
/// * `limits` - Depth ceiling and time budget
/// * `algorithm` - Routine run at each depth
///
/// # Returns
/// SearchResult of the deepest iteration worth keeping. `best_move` is only
/// `None` when `pos` has no legal move.
pub fn iterative_deepening_search(
    pos: &Position,
    table: &WeightTable,
    limits: SearchLimits,
    algorithm: Algorithm,
) -> SearchResult {
    let budget = limits.budget;
    let mut best_result = SearchResult::new();
    let mut total_nodes = 0u64;

    let root_moves = pos.available_moves();
    if root_moves.is_empty() {
        best_result.score = score(pos, table);
        best_result.completed = true;
        best_result.time_ms = budget.elapsed().as_millis() as u64;
        return best_result;
    }

    // Principal variation (best move from previous iteration)
    let mut pv_move: Option<Move> = None;

    for depth in 1..=limits.max_depth.max(1) {
        if depth > 1 && budget.hard_expired() {
            break;
        }

        let (best_move, value, stats) = search_depth(pos, depth, table, &budget, algorithm, pv_move);
        total_nodes += stats.nodes;

        if stats.aborted {
            // The previous best was searched first, so a partial iteration
            // that produced a move has seen at least as much of it.
            if best_move.is_some() {
                best_result.best_move = best_move;
                best_result.score = value;
                best_result.depth = depth;
                best_result.completed = false;
                log_iteration(&best_result, total_nodes, &budget);
            }
            break;
        }

        best_result.best_move = best_move;
        best_result.score = value;
        best_result.depth = depth;
        best_result.completed = true;
        pv_move = best_move;

        log_iteration(&best_result, total_nodes, &budget);

        // No leaf was cut off by depth: the whole tree is solved
        if stats.depth_limited_leaves == 0 {
            break;
        }
    }

    if best_result.best_move.is_none() {
        let fallback = root_moves[0];
        log::warn!("search produced no move in time, falling back to {}", fallback);
        best_result.best_move = Some(fallback);
        best_result.score = pos
            .apply_move(fallback)
            .map(|next| score(&next, table))
            .unwrap_or_default();
        best_result.completed = false;
    }

    best_result.nodes_searched = total_nodes;
    best_result.time_ms = budget.elapsed().as_millis() as u64;
    best_result
}

fn log_iteration(result: &SearchResult, nodes: u64, budget: &TimeBudget) {
    let elapsed_ms = budget.elapsed().as_millis() as u64;
    let nps = if elapsed_ms > 0 {
        (nodes as f64 / elapsed_ms as f64 * 1000.0) as u64
    } else {
        nodes
    };

    log::debug!(
        "depth {}{} score {} nodes {} time {}ms nps {} move {:?}",
        result.depth,
        if result.completed { "" } else { " (partial)" },
        result.score,
        nodes,
        elapsed_ms,
        nps,
        result.best_move
    );
}
