//! Wall-clock budget shared by every node of one move search.
//!
//! Two thresholds are measured from the same start instant:
//! - the **hard** limit is polled inside the move loop of each node; once it
//!   passes the node returns its best value so far and the search unwinds.
//! - the **soft** limit (never below the hard one) is polled on node entry;
//!   past it every new node is treated as a leaf.
//!
//! [`TimeControl`] turns a player's remaining game clock into such a budget.

use std::time::{Duration, Instant};

use crate::game_repr::Position;

/// Default ceiling for one move; also used when the clock is unbounded.
pub const DEFAULT_MAX_PER_MOVE: Duration = Duration::from_millis(4500);

/// Default soft/hard ratio (6s soft against 4.5s hard).
pub const DEFAULT_SOFT_RATIO: f64 = 4.0 / 3.0;

// Keeps the float conversion in range for unbounded clocks.
const SHARE_CAP: Duration = Duration::from_secs(1 << 32);

#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    start: Instant,
    hard: Duration,
    soft: Duration,
}

impl TimeBudget {
    /// Budget starting now. `soft` is raised to `hard` if given lower.
    pub fn new(hard: Duration, soft: Duration) -> Self {
        Self::starting_at(Instant::now(), hard, soft)
    }

    pub fn starting_at(start: Instant, hard: Duration, soft: Duration) -> Self {
        Self {
            start,
            hard,
            soft: soft.max(hard),
        }
    }

    /// A budget that never expires. Fixed-depth searches use this.
    pub fn unlimited() -> Self {
        Self::new(Duration::MAX, Duration::MAX)
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn hard_limit(&self) -> Duration {
        self.hard
    }

    pub fn soft_limit(&self) -> Duration {
        self.soft
    }

    /// Checked inside the move loop.
    #[inline]
    pub fn hard_expired(&self) -> bool {
        self.elapsed() > self.hard
    }

    /// Checked on node entry.
    #[inline]
    pub fn leaf_expired(&self) -> bool {
        self.elapsed() > self.soft
    }
}

/// Derives a per-move [`TimeBudget`] from the remaining game clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeControl {
    /// Upper bound for a single move
    pub max_per_move: Duration,
    /// Lower bound for a single move, so a nearly flagged clock still finishes depth 1
    pub min_per_move: Duration,
    /// Fraction of the even share actually spent
    pub safety: f64,
    /// Soft limit as a multiple of the hard limit
    pub soft_ratio: f64,
}

impl Default for TimeControl {
    fn default() -> Self {
        Self {
            max_per_move: DEFAULT_MAX_PER_MOVE,
            min_per_move: Duration::from_millis(10),
            safety: 0.9,
            soft_ratio: DEFAULT_SOFT_RATIO,
        }
    }
}

impl TimeControl {
    /// Fixed per-move limit regardless of the clock.
    pub fn fixed(per_move: Duration) -> Self {
        Self {
            max_per_move: per_move,
            min_per_move: per_move,
            ..Self::default()
        }
    }

    /// Hard limit for the next move: an even share of `remaining` over the
    /// moves this side still has to make, clamped to the configured bounds.
    pub fn per_move(&self, position: &Position, remaining: Duration) -> Duration {
        let moves_left = position.empty_count().div_ceil(2).max(1);
        let share = (remaining / moves_left).min(SHARE_CAP);
        share
            .mul_f64(self.safety.clamp(0.0, 1.0))
            .clamp(self.min_per_move.min(self.max_per_move), self.max_per_move)
    }

    pub fn budget_for(&self, position: &Position, remaining: Duration) -> TimeBudget {
        let hard = self.per_move(position, remaining);
        // Saturates for limits near `Duration::MAX`.
        let soft = Duration::try_from_secs_f64(hard.as_secs_f64() * self.soft_ratio.max(1.0))
            .unwrap_or(Duration::MAX);
        TimeBudget::new(hard, soft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_soft_never_below_hard() {
        let budget = TimeBudget::new(Duration::from_millis(50), Duration::from_millis(10));
        assert_eq!(budget.soft_limit(), Duration::from_millis(50));
    }

    #[test]
    fn test_unlimited_never_expires() {
        let budget = TimeBudget::unlimited();
        assert!(!budget.hard_expired());
        assert!(!budget.leaf_expired());
    }

    #[test]
    fn test_hard_fires_before_soft() {
        let budget = TimeBudget::new(Duration::from_millis(5), Duration::from_secs(60));
        thread::sleep(Duration::from_millis(10));
        assert!(budget.hard_expired());
        assert!(!budget.leaf_expired());
    }

    #[test]
    fn test_unbounded_clock_uses_ceiling() {
        let tc = TimeControl::default();
        let per_move = tc.per_move(&Position::new(), Duration::MAX);
        assert_eq!(per_move, DEFAULT_MAX_PER_MOVE);
    }

    #[test]
    fn test_clock_is_shared_over_remaining_moves() {
        let tc = TimeControl::default();
        // 60 empty cells -> 30 moves left -> 2s share -> 1.8s after safety
        let per_move = tc.per_move(&Position::new(), Duration::from_secs(60));
        assert_eq!(per_move, Duration::from_millis(1800));
    }

    #[test]
    fn test_empty_clock_gets_minimum() {
        let tc = TimeControl::default();
        let per_move = tc.per_move(&Position::new(), Duration::ZERO);
        assert_eq!(per_move, Duration::from_millis(10));
    }

    #[test]
    fn test_budget_soft_ratio() {
        let tc = TimeControl::fixed(Duration::from_millis(300));
        let budget = tc.budget_for(&Position::new(), Duration::from_secs(600));
        assert_eq!(budget.hard_limit(), Duration::from_millis(300));
        assert!(budget.soft_limit() >= Duration::from_millis(399));
        assert!(budget.soft_limit() <= Duration::from_millis(401));
    }

    #[test]
    fn test_huge_fixed_limit_saturates() {
        let tc = TimeControl::fixed(Duration::MAX);
        let budget = tc.budget_for(&Position::new(), Duration::MAX);
        assert_eq!(budget.hard_limit(), Duration::MAX);
        assert_eq!(budget.soft_limit(), Duration::MAX);
        assert!(!budget.hard_expired());
    }
}
