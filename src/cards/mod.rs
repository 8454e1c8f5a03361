//! Card system: faces, instances and the dealt deck.
//!
//! ## Key Types
//!
//! - `PairKey`: Identifier shared by the two cards of a pair
//! - `CardFace`: Static label and icon for a pair
//! - `InstanceId`: Unique id of a physical card
//! - `Card`: A card on the board with its revealed/matched flags
//! - `Deck`: The shuffled board for one game

pub mod deck;
pub mod definition;
pub mod instance;

pub use deck::Deck;
pub use definition::{CardFace, PairKey, CATALOG};
pub use instance::{Card, InstanceId, InstanceIds};
