//! Runs a series of Othello games between two configured agents.
//!
//! ```shell
//! cargo run --release --bin othello -- --black tournament --white random --games 20
//! RUST_LOG=debug cargo run --release --bin othello -- --black alpha-beta --white minimax --max-depth 4
//! ```

use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use othello_engine::agent::ai::{AIConfig, Heuristic, SearchStrategy, MAX_SEARCH_DEPTH};
use othello_engine::config::{GameConfig, PlayerConfig};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    /// Uniformly random legal moves
    Random,
    /// Moves typed on stdin as "row col"
    Human,
    /// Alpha-beta with the alpha-beta weight table
    AlphaBeta,
    /// Unpruned minimax with the tournament weight table
    Minimax,
    /// Alpha-beta with root moves split across threads
    Parallel,
    /// Alpha-beta with the tournament weight table
    Tournament,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Othello between search agents", long_about = None)]
struct Cli {
    /// Agent playing Black (moves first)
    #[arg(long, value_enum, default_value_t = AgentKind::Tournament)]
    black: AgentKind,

    /// Agent playing White
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    white: AgentKind,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Thinking time per player and game in seconds (0 disables the clock)
    #[arg(long, default_value_t = 60.0)]
    time_per_player: f64,

    /// Depth ceiling for iterative deepening
    #[arg(long, default_value_t = MAX_SEARCH_DEPTH)]
    max_depth: u8,

    /// Adjudicate on discs after this many moves
    #[arg(long)]
    max_plies: Option<usize>,

    /// Seed for random agents; White uses seed + 1
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the final tally
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn player(&self, kind: AgentKind, seed: Option<u64>) -> PlayerConfig {
        let search = |strategy: SearchStrategy, heuristic: Heuristic| {
            let mut config = AIConfig {
                strategy,
                heuristic,
                ..AIConfig::default()
            }
            .with_max_depth(self.max_depth);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            PlayerConfig::Ai(config)
        };

        match kind {
            AgentKind::Random => PlayerConfig::Random { seed },
            AgentKind::Human => PlayerConfig::Human,
            AgentKind::AlphaBeta => search(SearchStrategy::AlphaBeta, Heuristic::AlphaBeta),
            AgentKind::Minimax => search(SearchStrategy::Minimax, Heuristic::Tournament),
            AgentKind::Parallel => search(SearchStrategy::ParallelAlphaBeta, Heuristic::Tournament),
            AgentKind::Tournament => search(SearchStrategy::AlphaBeta, Heuristic::Tournament),
        }
    }

    fn game_config(&self) -> Result<GameConfig> {
        if !self.time_per_player.is_finite() || self.time_per_player < 0.0 {
            bail!("--time-per-player must be a non-negative number of seconds");
        }
        if self.games == 0 {
            bail!("--games must be at least 1");
        }

        let time_per_player = match self.time_per_player {
            secs if secs > 0.0 => match Duration::try_from_secs_f64(secs) {
                Ok(limit) => Some(limit),
                Err(err) => bail!("--time-per-player {secs} is out of range: {err}"),
            },
            _ => None,
        };

        Ok(GameConfig {
            black: self.player(self.black, self.seed),
            white: self.player(self.white, self.seed.map(|s| s.wrapping_add(1))),
            time_per_player,
            games: self.games,
            max_plies: self.max_plies,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = cli.game_config()?;
    let mut orchestrator = config.orchestrator();

    println!(
        "{} (Black) vs {} (White), {} game(s)",
        config.black.display_string(),
        config.white.display_string(),
        config.games
    );

    let tally = orchestrator.play_series(config.games, |game, record| {
        if !cli.quiet {
            println!("game {game}: {record}");
        }
    });

    println!("{tally}");
    if tally.forfeits > 0 {
        log::warn!("{} game(s) ended by forfeit", tally.forfeits);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["othello"]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.games, 1);
        assert_eq!(config.time_per_player, Some(Duration::from_secs(60)));
        assert!(matches!(config.white, PlayerConfig::Random { seed: None }));
    }

    #[test]
    fn test_agent_names() {
        let cli = Cli::parse_from([
            "othello", "--black", "alpha-beta", "--white", "parallel", "--seed", "4", "--time-per-player", "0",
        ]);
        let config = cli.game_config().unwrap();

        let PlayerConfig::Ai(black) = config.black else {
            panic!("black should be an AI");
        };
        assert_eq!(black.heuristic, Heuristic::AlphaBeta);
        assert_eq!(black.seed, Some(4));
        let PlayerConfig::Ai(white) = config.white else {
            panic!("white should be an AI");
        };
        assert_eq!(white.strategy, SearchStrategy::ParallelAlphaBeta);
        assert_eq!(white.seed, Some(5));
        assert_eq!(config.time_per_player, None);
    }

    #[test]
    fn test_rejects_negative_clock() {
        let cli = Cli::parse_from(["othello", "--time-per-player=-1"]);
        assert!(cli.game_config().is_err());
    }

    #[test]
    fn test_rejects_oversized_clock() {
        let cli = Cli::parse_from(["othello", "--time-per-player", "1e30"]);
        assert!(cli.game_config().is_err());
    }
}
