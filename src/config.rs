//! Match configuration types.
//!
//! A [`GameConfig`] holds everything needed to set up an [`Orchestrator`]:
//! who plays each side, the clock, and how many games to play.

use crate::agent::ai::{AIConfig, MoveSelector};
use crate::agent::human_player::HumanPlayer;
use crate::agent::player::Player;
use crate::game_repr::Color;
use crate::orchestrator::Orchestrator;
use std::time::Duration;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerConfig {
    /// Human typing moves on the terminal
    Human,
    /// Uniformly random legal moves
    Random { seed: Option<u64> },
    /// Searching AI
    Ai(AIConfig),
}

impl PlayerConfig {
    /// Build the player for `color`.
    pub fn build(&self, color: Color) -> Box<dyn Player> {
        match self {
            PlayerConfig::Human => Box::new(HumanPlayer::stdio(format!("Human ({color})"))),
            PlayerConfig::Random { seed } => Box::new(MoveSelector::random(*seed)),
            PlayerConfig::Ai(config) => config.create_player(),
        }
    }

    pub fn display_string(&self) -> String {
        match self {
            PlayerConfig::Human => "Human".to_string(),
            PlayerConfig::Random { .. } => "Random".to_string(),
            PlayerConfig::Ai(config) => config.display_string(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::Ai(AIConfig::default())
    }
}

/// Complete match configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Configuration for the Black player (moves first)
    pub black: PlayerConfig,
    /// Configuration for the White player
    pub white: PlayerConfig,
    /// Total thinking time per player and game; `None` for no clock
    pub time_per_player: Option<Duration>,
    /// Number of games in the series
    pub games: u32,
    /// Adjudicate on discs after this many moves
    pub max_plies: Option<usize>,
}

impl GameConfig {
    /// Build the players and an orchestrator for this configuration.
    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::new(
            self.black.build(Color::Black),
            self.white.build(Color::White),
            self.time_per_player,
        )
        .with_max_plies(self.max_plies)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            black: PlayerConfig::default(),
            white: PlayerConfig::default(),
            time_per_player: Some(Duration::from_secs(60)),
            games: 1,
            max_plies: None,
        }
    }
}
