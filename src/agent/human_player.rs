//! Human player that types moves on a text stream.
//!
//! The player prints the board and a prompt, then reads one line holding a
//! move as `"row col"` (or `"row,col"`), zero-based. Unparsable or illegal
//! input is reported and the prompt repeats. End of input, `quit` or
//! `resign` resign the game.
//!
//! # Examples
//!
//! ```rust,no_run
//! use othello_engine::agent::human_player::HumanPlayer;
//! use othello_engine::agent::player::Player;
//!
//! let mut player = HumanPlayer::stdio("Alice".to_string());
//! assert_eq!(player.name(), "Alice");
//! ```

use crate::agent::player::{AgentError, GameResult, Player};
use crate::game_repr::{Move, Position};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::time::Duration;

/// Human player reading moves from `R` and writing prompts to `W`.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// Human at the terminal.
    pub fn stdio(name: String) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), name)
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self { input, output, name }
    }

    /// Consume the player, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>, AgentError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn make_move(&mut self, position: &Position, remaining: Duration) -> Result<Move, AgentError> {
        let legal = position.available_moves();
        if legal.is_empty() {
            return Err(AgentError::NoLegalMove);
        }

        writeln!(self.output, "\n{position}")?;
        if remaining != Duration::MAX {
            writeln!(self.output, "{:.1}s left on your clock", remaining.as_secs_f64())?;
        }

        loop {
            write!(self.output, "{} ({}), enter your move as 'row col': ", self.name, position.current())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Err(AgentError::Resigned);
            };

            match line.to_ascii_lowercase().as_str() {
                "" => continue,
                "quit" | "resign" => return Err(AgentError::Resigned),
                _ => {}
            }

            match line.parse::<Move>() {
                Ok(mv) if legal.contains(&mv) => return Ok(mv),
                Ok(mv) => {
                    let options: Vec<String> = legal.iter().map(Move::to_string).collect();
                    writeln!(self.output, "{mv} is not legal here, try one of {}", options.join(" "))?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn game_ended(&mut self, result: GameResult) {
        let message = match result {
            GameResult::BlackWins => "Black wins",
            GameResult::WhiteWins => "White wins",
            GameResult::Draw => "Draw",
        };
        // A closed output stream only loses the farewell message.
        let _ = writeln!(self.output, "Game over: {message}");
    }

    fn name(&self) -> &str {
        &self.name
    }
}
