//! Events the host feeds into the engine.
//!
//! User actions (`Start`, `Reset`, `DifficultyChanged`, `SelectCard`) come
//! straight from the page. `Tick` and `Resolve` are deferred callbacks the
//! engine asked the host's `Scheduler` to deliver later; both carry the
//! generation they were issued in, so a callback that outlives a reset is
//! recognised and dropped.

use serde::Serialize;

use crate::cards::InstanceId;

/// Identifies one pending pair resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ResolveToken {
    /// Game generation the resolution belongs to.
    pub generation: u64,
    /// Comparison number within the engine.
    pub serial: u64,
}

/// Identifies the elapsed-time tick of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TickToken {
    /// Game generation the tick belongs to.
    pub generation: u64,
}

/// An input to `GameEngine::dispatch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Start button: deal a new game and start the timer.
    Start,
    /// Reset button: deal a new game, timer stopped.
    Reset,
    /// The host's difficulty selector changed.
    DifficultyChanged,
    /// A card was clicked.
    SelectCard(InstanceId),
    /// Periodic elapsed-time tick.
    Tick(TickToken),
    /// Deferred match/mismatch resolution.
    Resolve(ResolveToken),
}

/// Why a card click did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IgnoreReason {
    /// No game is running.
    NotRunning,
    /// A comparison is resolving.
    InputLocked,
    /// No such card on the current board.
    UnknownCard,
    /// The card is already matched.
    AlreadyMatched,
    /// The card is already face up.
    AlreadyRevealed,
}

/// Result of a card click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SelectOutcome {
    /// Click dropped; nothing changed.
    Ignored(IgnoreReason),
    /// Card became the first selection.
    First,
    /// Card became the second selection; a resolution is now pending.
    Compared {
        /// Do the two cards pair?
        matched: bool,
    },
}

impl SelectOutcome {
    /// Did the click change anything?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }
}
