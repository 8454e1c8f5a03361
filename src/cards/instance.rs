//! Card instances - the physical cards on the board.
//!
//! Each pair face is dealt twice. The two copies share a `PairKey` but
//! have distinct `InstanceId`s, and carry their own revealed/matched flags.

use serde::{Deserialize, Serialize};

use super::definition::{CardFace, PairKey};

/// Unique identifier for a physical card.
///
/// Allocated from a per-engine counter, so ids from a discarded deck never
/// refer to a card in a later deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Monotonic `InstanceId` allocator.
#[derive(Clone, Debug, Default)]
pub struct InstanceIds {
    next: u32,
}

impl InstanceIds {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn allocate(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Unique id of this physical card.
    pub instance_id: InstanceId,
    /// Shared with exactly one other card in the deck.
    pub pair_key: PairKey,
    /// Text shown on the face.
    pub label: &'static str,
    /// Icon class shown on the face.
    pub icon: &'static str,
    /// Face up.
    pub revealed: bool,
    /// Permanently matched; no longer clickable.
    pub matched: bool,
}

impl Card {
    /// Create a face-down card showing `face`.
    #[must_use]
    pub fn new(instance_id: InstanceId, face: &CardFace) -> Self {
        Self {
            instance_id,
            pair_key: face.key,
            label: face.label,
            icon: face.icon,
            revealed: false,
            matched: false,
        }
    }

    /// Can the player turn this card over?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.instance_id != other.instance_id && self.pair_key == other.pair_key
    }
}
