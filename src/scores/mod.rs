//! Persisted best scores.
//!
//! - `BestScore`: A finished game's moves and time, with the ranking rule
//! - `ScoreStore`: Raw key-value persistence (`MemoryStore`, `FileStore`)
//! - `ScoreBook`: Difficulty-keyed table that never surfaces store errors

mod best;
mod book;
mod store;

pub use best::{score_text, BestScore, BestScoresView, NO_SCORE};
pub use book::ScoreBook;
pub use store::{FileStore, MemoryStore, ScoreStore};
