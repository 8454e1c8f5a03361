//! Point-in-time copy of the observable game state.

use im::Vector;
use serde::Serialize;

use super::state::{GamePhase, GameStats};
use crate::cards::Card;
use crate::core::Difficulty;

/// Observable state at one moment.
///
/// The card list shares structure with the engine's deck, so taking a
/// snapshot is O(1) and the engine can keep mutating afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct GameSnapshot {
    /// Lifecycle phase
    pub phase: GamePhase,
    /// Difficulty the board was dealt for
    pub difficulty: Difficulty,
    /// Cards in board order
    pub cards: Vector<Card>,
    /// Move and pair counters
    pub stats: GameStats,
    /// Clock reading, live while a game is running
    pub elapsed_ms: u64,
    /// Set while a pair is waiting to resolve
    pub input_locked: bool,
}

impl GameSnapshot {
    /// Cards currently face up but not matched.
    pub fn face_up(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.revealed && !c.matched)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }
}
