//! MoveSelector - the configurable "choose a move" capability
//!
//! Every automated player is a `MoveSelector` with a different [`AIConfig`]:
//! the strategy decides how the move is found, the heuristic decides what the
//! search optimizes. The selector owns the per-player state (random number
//! generator, last search statistics) and implements [`Player`].
//!
//! # Examples
//!
//! ```
//! use othello_engine::agent::ai::{Difficulty, MoveSelector};
//! use othello_engine::game_repr::Position;
//! use std::time::Duration;
//!
//! let mut ai = MoveSelector::with_difficulty(Difficulty::Easy);
//! let pos = Position::new();
//! let mv = ai.choose_move(&pos, Duration::from_secs(10)).unwrap();
//! assert!(pos.is_legal(mv));
//! ```

use super::ai_type::{AIConfig, Difficulty, SearchStrategy};
use super::evaluation::score;
use super::search::{iterative_deepening_search, SearchLimits, SearchResult};
use crate::agent::player::{AgentError, Player};
use crate::game_repr::{Move, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The side to move has nothing to play; the caller passes or ends the game
    #[error("no legal move available")]
    NoLegalMove,
}

pub struct MoveSelector {
    config: AIConfig,
    rng: StdRng,
    name: String,
    last_result: Option<SearchResult>,
}

impl MoveSelector {
    /// Create a new selector with custom configuration and name
    pub fn new(config: AIConfig, name: String) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            name,
            last_result: None,
        }
    }

    /// Create a selector named after its configuration
    pub fn with_config(config: AIConfig) -> Self {
        let name = format!("AI ({})", config.display_string());
        Self::new(config, name)
    }

    /// Alpha-beta selector at a preset difficulty, named "AI (Medium)" etc.
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(AIConfig::from(difficulty), name)
    }

    /// Uniformly random legal moves, reproducible when `seed` is given.
    pub fn random(seed: Option<u64>) -> Self {
        let mut config = AIConfig::new(SearchStrategy::Random, Difficulty::Easy);
        config.seed = seed;
        Self::new(config, "Random".to_string())
    }

    pub fn config(&self) -> &AIConfig {
        &self.config
    }

    /// Statistics of the most recent search, if any.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Pick a move for the side to move in `pos`.
    ///
    /// `remaining` is this side's game clock; pass `Duration::MAX` for an
    /// unbounded clock. The returned move is always legal in `pos`.
    pub fn choose_move(&mut self, pos: &Position, remaining: Duration) -> Result<Move, SearchError> {
        let result = self.search(pos, remaining)?;
        result.best_move.ok_or(SearchError::NoLegalMove)
    }

    /// Like [`choose_move`](Self::choose_move) but returns the full search
    /// result.
    pub fn search(&mut self, pos: &Position, remaining: Duration) -> Result<SearchResult, SearchError> {
        let start = Instant::now();
        let moves = pos.available_moves();
        log::trace!("{} to move, root moves {:?}", pos.current(), moves.as_slice());

        let result = match (moves.as_slice(), self.config.strategy.algorithm()) {
            ([], _) => return Err(SearchError::NoLegalMove),
            (&[only], _) => self.forced(pos, only, start),
            (_, None) => {
                let mv = *moves.choose(&mut self.rng).ok_or(SearchError::NoLegalMove)?;
                self.forced(pos, mv, start)
            }
            (_, Some(algorithm)) => {
                let budget = self.config.time_control.budget_for(pos, remaining);
                let limits = SearchLimits {
                    max_depth: self.config.max_depth,
                    budget,
                };
                iterative_deepening_search(pos, self.config.heuristic.table(), limits, algorithm)
            }
        };

        debug_assert!(
            result.best_move.is_some_and(|mv| moves.contains(&mv)),
            "selector returned an illegal move {:?}",
            result.best_move
        );

        self.last_result = Some(result.clone());
        Ok(result)
    }

    fn forced(&self, pos: &Position, mv: Move, start: Instant) -> SearchResult {
        let table = self.config.heuristic.table();
        SearchResult {
            best_move: Some(mv),
            score: pos.apply_move(mv).map(|next| score(&next, table)).unwrap_or_default(),
            depth: 0,
            nodes_searched: 0,
            time_ms: start.elapsed().as_millis() as u64,
            completed: true,
        }
    }
}

impl Player for MoveSelector {
    fn make_move(&mut self, position: &Position, remaining: Duration) -> Result<Move, AgentError> {
        let mv = self.choose_move(position, remaining)?;

        if let Some(result) = &self.last_result {
            log::debug!(
                "[{}] {} after depth {} ({} nodes, {}ms, score {})",
                self.name,
                mv,
                result.depth,
                result.nodes_searched,
                result.time_ms,
                result.score_for(position.current())
            );
        }

        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
