// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the Othello AI: a depth-limited minimax search with
// alpha-beta pruning, driven by iterative deepening under a wall-clock budget.
//
// Key features:
// - Black-relative differential scoring (Black maximises, White minimises)
// - Positional weight tables as the leaf heuristic
// - Soft (leaf) and hard (move loop) time cutoffs sharing one start instant
// - Previous best move searched first at the root
// - Optional root parallelism through rayon

mod ai_type;
mod alpha_beta;
mod evaluation;
mod minimax;
mod move_ordering;
mod move_selector;
mod search;
mod time_budget;
mod weight_tables;

#[cfg(test)]
mod tests;

pub use ai_type::{AIConfig, Difficulty, Heuristic, SearchStrategy};
pub use move_selector::{MoveSelector, SearchError};

// Re-export useful types
pub use alpha_beta::{alpha_beta, alpha_beta_root, Role, SearchContext, SearchStats, INFINITY, NEG_INFINITY};
pub use evaluation::{evaluate, score, Evaluation};
pub use minimax::{minimax, minimax_root};
pub use search::{iterative_deepening_search, search_depth, Algorithm, SearchLimits, SearchResult, MAX_SEARCH_DEPTH};
pub use time_budget::{TimeBudget, TimeControl, DEFAULT_MAX_PER_MOVE, DEFAULT_SOFT_RATIO};
pub use weight_tables::{WeightTable, ALPHA_BETA, TOURNAMENT};
