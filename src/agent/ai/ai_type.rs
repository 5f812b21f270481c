//! AI Type Registry - Centralized registry for AI configurations
//!
//! This module provides a way to enumerate and instantiate the automated
//! players. An AI is described by three orthogonal choices: how it searches
//! ([`SearchStrategy`]), what it optimizes ([`Heuristic`]), and how deep and
//! how long it may look ([`AIConfig`], usually built from a [`Difficulty`]).

use super::move_selector::MoveSelector;
use super::search::{Algorithm, MAX_SEARCH_DEPTH};
use super::time_budget::TimeControl;
use super::weight_tables::{WeightTable, ALPHA_BETA, TOURNAMENT};
use crate::agent::player::Player;

/// Enumeration of available search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchStrategy {
    /// Iterative deepening minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
    /// Alpha-beta with the root moves split across threads
    ParallelAlphaBeta,
    /// Iterative deepening minimax without pruning
    Minimax,
    /// Uniformly random legal move
    Random,
}

impl SearchStrategy {
    /// Get all available strategies for enumeration
    pub fn all() -> &'static [SearchStrategy] {
        &[
            SearchStrategy::AlphaBeta,
            SearchStrategy::ParallelAlphaBeta,
            SearchStrategy::Minimax,
            SearchStrategy::Random,
        ]
    }

    /// Get the display name for this strategy
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchStrategy::AlphaBeta => "Alpha-Beta",
            SearchStrategy::ParallelAlphaBeta => "Parallel Alpha-Beta",
            SearchStrategy::Minimax => "Minimax",
            SearchStrategy::Random => "Random",
        }
    }

    /// Get a short description of this strategy
    pub fn description(&self) -> &'static str {
        match self {
            SearchStrategy::AlphaBeta => "Minimax with alpha-beta pruning and iterative deepening",
            SearchStrategy::ParallelAlphaBeta => "Alpha-beta with root moves searched in parallel",
            SearchStrategy::Minimax => "Full-width minimax with iterative deepening",
            SearchStrategy::Random => "Picks any legal move at random",
        }
    }

    /// Tree search routine behind this strategy, `None` for strategies that
    /// do not search.
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            SearchStrategy::AlphaBeta => Some(Algorithm::AlphaBeta),
            SearchStrategy::ParallelAlphaBeta => Some(Algorithm::ParallelAlphaBeta),
            SearchStrategy::Minimax => Some(Algorithm::Minimax),
            SearchStrategy::Random => None,
        }
    }
}

/// Positional weights the search optimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Corners +10000, X and C squares -10000
    #[default]
    Tournament,
    /// Softer X and C squares (-5000) with a tuned bottom row
    AlphaBeta,
    Custom(WeightTable),
}

impl Heuristic {
    pub fn table(&self) -> &WeightTable {
        match self {
            Heuristic::Tournament => &TOURNAMENT,
            Heuristic::AlphaBeta => &ALPHA_BETA,
            Heuristic::Custom(table) => table,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Tournament => "tournament",
            Heuristic::AlphaBeta => "alpha-beta",
            Heuristic::Custom(_) => "custom",
        }
    }
}

/// AI difficulty levels that map to search depth ceilings
///
/// Every level runs under the same [`TimeControl`]; the clock still bounds
/// the search when the depth ceiling is out of reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Depth 2
    Easy,
    /// Depth 4
    #[default]
    Medium,
    /// Depth 6
    Hard,
    /// No practical depth ceiling, limited by the clock alone
    Tournament,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Tournament,
        ]
    }

    /// Get the maximum search depth for this difficulty level
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Tournament => MAX_SEARCH_DEPTH,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Tournament => "Tournament",
        }
    }
}

/// Configuration for a single AI player
///
/// This stores all settings needed to create an AI player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AIConfig {
    pub strategy: SearchStrategy,
    pub heuristic: Heuristic,
    pub time_control: TimeControl,
    /// Depth ceiling for iterative deepening
    pub max_depth: u8,
    /// Seed for the random strategy; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl AIConfig {
    /// Create a new AI configuration
    pub fn new(strategy: SearchStrategy, difficulty: Difficulty) -> Self {
        Self {
            strategy,
            max_depth: difficulty.max_depth(),
            ..Self::default()
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_time_control(mut self, time_control: TimeControl) -> Self {
        self.time_control = time_control;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth.clamp(1, MAX_SEARCH_DEPTH);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a Player instance from this configuration
    pub fn create_player(&self) -> Box<dyn Player> {
        Box::new(MoveSelector::with_config(*self))
    }

    /// Get a display string for this configuration
    pub fn display_string(&self) -> String {
        match self.strategy {
            SearchStrategy::Random => self.strategy.display_name().to_string(),
            _ => format!(
                "{} (depth {}, {})",
                self.strategy.display_name(),
                self.max_depth,
                self.heuristic.name()
            ),
        }
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            heuristic: Heuristic::default(),
            time_control: TimeControl::default(),
            max_depth: Difficulty::Tournament.max_depth(),
            seed: None,
        }
    }
}

impl From<Difficulty> for AIConfig {
    fn from(difficulty: Difficulty) -> Self {
        AIConfig::new(SearchStrategy::AlphaBeta, difficulty)
    }
}
