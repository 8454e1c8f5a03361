//! The dealt deck.
//!
//! A deck for a difficulty with `N` pairs holds `2N` cards: two copies of
//! each of the first `N` catalog faces, shuffled. Decks are never reused;
//! every prepare builds a fresh one.

use im::Vector;
use rustc_hash::FxHashMap;

use super::definition::{PairKey, CATALOG};
use super::instance::{Card, InstanceId, InstanceIds};
use crate::core::{Difficulty, GameRng, LevelConfig};

/// An ordered, shuffled deck of cards.
///
/// Backed by `im::Vector` so snapshots clone in O(1).
#[derive(Clone, Debug)]
pub struct Deck {
    difficulty: Difficulty,
    cards: Vector<Card>,
}

impl Deck {
    /// Deal a fresh shuffled deck for `difficulty`.
    pub fn build(difficulty: Difficulty, ids: &mut InstanceIds, rng: &mut GameRng) -> Self {
        let level = difficulty.level();
        let mut cards = Vec::with_capacity(level.card_count());
        for face in CATALOG.iter().take(level.pairs) {
            cards.push(Card::new(ids.allocate(), face));
            cards.push(Card::new(ids.allocate(), face));
        }
        rng.shuffle(&mut cards);

        Self {
            difficulty,
            cards: cards.into_iter().collect(),
        }
    }

    /// An empty deck, used before the first deal.
    #[must_use]
    pub fn empty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            cards: Vector::new(),
        }
    }

    /// Difficulty this deck was dealt for.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Grid shape for this deck.
    #[must_use]
    pub fn level(&self) -> LevelConfig {
        self.difficulty.level()
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in this deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Board position of a card.
    #[must_use]
    pub fn position(&self, id: InstanceId) -> Option<usize> {
        self.cards.iter().position(|c| c.instance_id == id)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&Card> {
        self.cards.iter().find(|c| c.instance_id == id)
    }

    /// Look up a card by id, mutably.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut Card> {
        let index = self.position(id)?;
        self.cards.get_mut(index)
    }

    /// Number of cards already matched.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Occurrences of each pair key.
    #[must_use]
    pub fn pair_counts(&self) -> FxHashMap<PairKey, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.pair_key).or_insert(0) += 1;
        }
        counts
    }

    /// Check the deal invariant: `pair_count` distinct keys, each exactly twice.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let counts = self.pair_counts();
        counts.len() == self.difficulty.pair_count()
            && self.cards.len() == 2 * self.difficulty.pair_count()
            && counts.values().all(|&n| n == 2)
    }
}
