//! Engine state: phase, turn, counters and timer.

use serde::{Deserialize, Serialize};

use crate::cards::InstanceId;

/// Where the engine is in a game's lifecycle.
///
/// ```text
/// Idle --start--> Running --second card--> Resolving --+--> Running
///                    ^                                  |
///                    +----------------------------------+
///                                     last pair -> Won
/// ```
///
/// Any prepare/reset/start returns to `Idle` (and `start` then to `Running`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Deck dealt, timer not started, clicks ignored.
    #[default]
    Idle,
    /// Timer running, accepting clicks.
    Running,
    /// Two cards face up, waiting for the deferred resolution.
    Resolving,
    /// Every pair matched. Terminal until the next prepare.
    Won,
}

impl GamePhase {
    /// Does the elapsed-time tick run in this phase?
    #[must_use]
    pub const fn is_timed(self) -> bool {
        matches!(self, GamePhase::Running | GamePhase::Resolving)
    }
}

/// Pending selection for the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// First card turned over this turn.
    pub first: Option<InstanceId>,
    /// Second card, set only while a comparison is resolving.
    pub second: Option<InstanceId>,
    /// True only while a comparison's resolution is pending.
    pub input_locked: bool,
}

impl TurnState {
    /// Clear both selections and unlock input.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Move and match counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Completed two-card comparisons.
    pub moves: u32,
    /// Pairs locked in so far.
    pub matched_pairs: u32,
    /// Pairs on the board.
    pub total_pairs: u32,
}

impl GameStats {
    /// Zeroed counters for a board of `total_pairs` pairs.
    #[must_use]
    pub fn new(total_pairs: usize) -> Self {
        Self {
            moves: 0,
            matched_pairs: 0,
            total_pairs: u32::try_from(total_pairs).unwrap_or(u32::MAX),
        }
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_pairs > 0 && self.matched_pairs == self.total_pairs
    }
}

/// Elapsed-time bookkeeping.
///
/// While running, `elapsed_ms` is recomputed from clock deltas on every
/// update; on stop it freezes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Timer armed.
    pub running: bool,
    /// Clock reading when the timer started.
    pub started_at_ms: u64,
    /// Last computed elapsed time.
    pub elapsed_ms: u64,
}

impl TimerState {
    /// Arm the timer at `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.started_at_ms = now_ms;
        self.elapsed_ms = 0;
    }

    /// Recompute elapsed time if running. Returns the current value.
    pub fn update(&mut self, now_ms: u64) -> u64 {
        if self.running {
            self.elapsed_ms = now_ms.saturating_sub(self.started_at_ms);
        }
        self.elapsed_ms
    }

    /// Freeze the timer. Returns `false` if it was not running.
    pub fn stop(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        self.update(now_ms);
        self.running = false;
        true
    }
}
