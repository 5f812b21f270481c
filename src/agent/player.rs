//! Player trait and associated types for Othello game agents.
//!
//! This module provides the core abstraction for entities that can provide moves.
//! Different player types (human, random, searching AI) implement the `Player`
//! trait to participate in games run by the [`orchestrator`](crate::orchestrator).
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. Different player
//! implementations require different initialization parameters:
//! - `HumanPlayer` needs an input and an output stream
//! - `MoveSelector` needs an [`AIConfig`](crate::agent::ai::AIConfig), or
//!   just an optional seed for random play
//!
//! Therefore, the trait does not define a constructor method.
//!
//! # Synchronous Design
//!
//! `make_move()` is blocking: a human player waits for a line of input, an AI
//! player returns once its search is done. The orchestrator measures how long
//! the call took and charges it to the player's clock.

use crate::agent::ai::SearchError;
use crate::game_repr::{Color, Move, Position};
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Result of a completed game.
///
/// This enum represents all possible game outcomes. It is passed to players
/// via `game_ended()` to notify them of the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Black won on discs or by forfeit
    BlackWins,
    /// White won on discs or by forfeit
    WhiteWins,
    /// Equal disc counts
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning color, `None` meaning a draw
    pub fn from_winner(winner: Option<Color>) -> Self {
        match winner {
            Some(Color::Black) => GameResult::BlackWins,
            Some(Color::White) => GameResult::WhiteWins,
            None => GameResult::Draw,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::BlackWins => Some(Color::Black),
            GameResult::WhiteWins => Some(Color::White),
            GameResult::Draw => None,
        }
    }
}

/// Reasons a player could not produce a move.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no legal move available")]
    NoLegalMove,

    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),

    #[error("player resigned")]
    Resigned,
}

impl From<SearchError> for AgentError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::NoLegalMove => AgentError::NoLegalMove,
        }
    }
}

/// Trait for entities that can provide Othello moves.
///
/// # Required Methods
///
/// Only `make_move()` must be implemented. All other methods have default
/// implementations that can be overridden as needed.
///
/// ## `make_move()`
/// - **Blocking**: This method may block until a move is available
/// - `position` is the current position; the side to move is `position.current()`
/// - `remaining` is what is left on this player's game clock
/// - The returned move should be legal; the orchestrator forfeits the game otherwise
///
/// ## `game_ended()`
/// - Default: Does nothing
///
/// ## `name()`
/// - Default: Returns "Player"
pub trait Player {
    /// Request the next move from this player.
    fn make_move(&mut self, position: &Position, remaining: Duration) -> Result<Move, AgentError>;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
