//! Match running: turn management, game clocks and series tallies.
//!
//! This module contains the [`Orchestrator`], which plays games between two
//! [`Player`]s. It manages:
//! - Turn order (the rules engine decides who moves next, passes included)
//! - Per-player game clocks
//! - Forfeits for exhausted clocks, illegal moves and agent failures
//! - Game end detection and result bookkeeping
//!
//! # Example Flow
//!
//! ```text
//! [Reset] -> [Request Move] -> [Charge clock] -> [Validate] -> [Execute Move]
//!   -> [Check End] -> [Request Move] ... -> [Notify players] -> [GameRecord]
//! ```

use crate::agent::player::{AgentError, GameResult, Player};
use crate::game_repr::{Color, Move, Position};
use std::fmt;
use std::time::{Duration, Instant};

/// Why a game stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndReason {
    /// Neither side could move
    Completed,
    /// The ply limit was reached; decided on discs
    PlyLimit,
    /// `loser` used more time than was left on its clock
    TimeForfeit { loser: Color },
    /// `loser` returned a move that is not legal in the position
    IllegalMove { loser: Color, mv: Move },
    /// `loser` resigned or stopped answering
    Resigned { loser: Color },
    /// `loser` failed with an error
    AgentFailure { loser: Color, message: String },
}

impl EndReason {
    /// Side that lost by forfeit, if the game did not end on the board.
    pub fn forfeited_by(&self) -> Option<Color> {
        match self {
            EndReason::Completed | EndReason::PlyLimit => None,
            EndReason::TimeForfeit { loser }
            | EndReason::IllegalMove { loser, .. }
            | EndReason::Resigned { loser }
            | EndReason::AgentFailure { loser, .. } => Some(*loser),
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Completed => write!(f, "no moves left"),
            EndReason::PlyLimit => write!(f, "ply limit reached"),
            EndReason::TimeForfeit { loser } => write!(f, "{loser} ran out of time"),
            EndReason::IllegalMove { loser, mv } => write!(f, "{loser} played illegal move {mv}"),
            EndReason::Resigned { loser } => write!(f, "{loser} resigned"),
            EndReason::AgentFailure { loser, message } => write!(f, "{loser} failed: {message}"),
        }
    }
}

/// Summary of one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    pub reason: EndReason,
    pub black_discs: u32,
    pub white_discs: u32,
    /// Moves in the order they were played; passes leave no entry
    pub moves: Vec<Move>,
    /// Thinking time used by (black, white)
    pub time_used: (Duration, Duration),
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = match self.result {
            GameResult::BlackWins => "Black wins",
            GameResult::WhiteWins => "White wins",
            GameResult::Draw => "Draw",
        };
        write!(
            f,
            "{result} {}-{} after {} moves ({})",
            self.black_discs,
            self.white_discs,
            self.moves.len(),
            self.reason
        )
    }
}

/// Win/draw counts over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesTally {
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    pub forfeits: u32,
}

impl SeriesTally {
    pub fn record(&mut self, game: &GameRecord) {
        match game.result {
            GameResult::BlackWins => self.black_wins += 1,
            GameResult::WhiteWins => self.white_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
        if game.reason.forfeited_by().is_some() {
            self.forfeits += 1;
        }
    }

    pub fn games(&self) -> u32 {
        self.black_wins + self.white_wins + self.draws
    }
}

impl fmt::Display for SeriesTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: Black {} / White {} / Draw {} ({} forfeits)",
            self.games(),
            self.black_wins,
            self.white_wins,
            self.draws,
            self.forfeits
        )
    }
}

/// Remaining time per side; `None` means unlimited.
#[derive(Debug, Clone, Copy)]
struct Clocks {
    limit: Option<Duration>,
    used: [Duration; 2],
}

impl Clocks {
    fn new(limit: Option<Duration>) -> Self {
        Self {
            limit,
            used: [Duration::ZERO; 2],
        }
    }

    fn slot(color: Color) -> usize {
        match color {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    fn remaining(&self, color: Color) -> Duration {
        match self.limit {
            Some(limit) => limit.saturating_sub(self.used[Self::slot(color)]),
            None => Duration::MAX,
        }
    }

    /// Charge `elapsed` to `color`. Returns false once the clock is overdrawn.
    fn charge(&mut self, color: Color, elapsed: Duration) -> bool {
        let slot = Self::slot(color);
        self.used[slot] += elapsed;
        self.limit.map_or(true, |limit| self.used[slot] <= limit)
    }
}

/// Plays games between a Black and a White player.
///
/// The players are kept across games, so a series can be played with the
/// same instances (random generators keep advancing, human players keep
/// their streams).
pub struct Orchestrator {
    black: Box<dyn Player>,
    white: Box<dyn Player>,

    /// Position each game starts from
    start: Position,

    /// Current position of the game in progress
    position: Position,

    clocks: Clocks,

    /// Game is adjudicated on discs after this many moves
    max_plies: Option<usize>,

    moves: Vec<Move>,
}

impl Orchestrator {
    /// Create an orchestrator for the standard opening.
    ///
    /// `time_per_player` is each side's total thinking time for a game;
    /// `None` plays without clocks.
    pub fn new(black: Box<dyn Player>, white: Box<dyn Player>, time_per_player: Option<Duration>) -> Self {
        Self {
            black,
            white,
            start: Position::new(),
            position: Position::new(),
            clocks: Clocks::new(time_per_player),
            max_plies: None,
            moves: Vec::new(),
        }
    }

    /// Start every game from `position` instead of the opening.
    pub fn with_start(mut self, position: Position) -> Self {
        self.start = position;
        self.position = position;
        self
    }

    pub fn with_max_plies(mut self, max_plies: Option<usize>) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Play one game to the end and return its record.
    pub fn play_game(&mut self) -> GameRecord {
        self.reset();

        let record = loop {
            if let Some(reason) = self.check_game_end() {
                break self.finish(reason);
            }
            if let Err(reason) = self.request_move() {
                break self.finish(reason);
            }
        };

        self.black.game_ended(record.result);
        self.white.game_ended(record.result);

        log::info!(
            "{} (Black) vs {} (White): {}",
            self.black.name(),
            self.white.name(),
            record
        );
        record
    }

    /// Play `games` games, calling `on_game` after each one.
    pub fn play_series<F>(&mut self, games: u32, mut on_game: F) -> SeriesTally
    where
        F: FnMut(u32, &GameRecord),
    {
        let mut tally = SeriesTally::default();
        for game in 1..=games {
            let record = self.play_game();
            tally.record(&record);
            on_game(game, &record);
        }
        tally
    }

    fn reset(&mut self) {
        self.position = self.start;
        self.clocks = Clocks::new(self.clocks.limit);
        self.moves.clear();
    }

    /// Ask the side to move for a move, charge its clock and play it.
    fn request_move(&mut self) -> Result<(), EndReason> {
        let color = self.position.current();
        let remaining = self.clocks.remaining(color);
        let player = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };

        let started = Instant::now();
        let answer = player.make_move(&self.position, remaining);
        let in_time = self.clocks.charge(color, started.elapsed());

        let mv = match answer {
            Ok(mv) => mv,
            Err(AgentError::Resigned) => return Err(self.forfeit(EndReason::Resigned { loser: color })),
            Err(err) => {
                return Err(self.forfeit(EndReason::AgentFailure {
                    loser: color,
                    message: err.to_string(),
                }))
            }
        };

        if !in_time {
            return Err(self.forfeit(EndReason::TimeForfeit { loser: color }));
        }

        self.process_move(mv)
    }

    /// Validate and execute a move from the side to move.
    fn process_move(&mut self, mv: Move) -> Result<(), EndReason> {
        let color = self.position.current();
        match self.position.apply_move(mv) {
            Ok(next) => {
                log::trace!("{color} plays {mv}");
                self.position = next;
                self.moves.push(mv);
                if next.current() == color && !next.is_terminal() {
                    log::debug!("{} has no move and passes", color.opposite());
                }
                Ok(())
            }
            Err(_) => Err(self.forfeit(EndReason::IllegalMove { loser: color, mv })),
        }
    }

    fn check_game_end(&self) -> Option<EndReason> {
        if self.position.is_terminal() {
            Some(EndReason::Completed)
        } else if self.max_plies.is_some_and(|max| self.moves.len() >= max) {
            Some(EndReason::PlyLimit)
        } else {
            None
        }
    }

    fn forfeit(&self, reason: EndReason) -> EndReason {
        log::warn!("forfeit: {reason}");
        reason
    }

    fn finish(&self, reason: EndReason) -> GameRecord {
        let result = match reason.forfeited_by() {
            Some(loser) => GameResult::from_winner(Some(loser.opposite())),
            None => GameResult::from_winner(self.position.winner()),
        };

        GameRecord {
            result,
            reason,
            black_discs: self.position.count(Color::Black),
            white_discs: self.position.count(Color::White),
            moves: self.moves.clone(),
            time_used: (self.clocks.used[0], self.clocks.used[1]),
        }
    }
}
