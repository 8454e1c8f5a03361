//! # memory-match
//!
//! Engine for a card-pairs memory game with a running clock and a
//! per-difficulty best-score table, plus the validators behind the site's
//! client-only contact form.
//!
//! ## Design Principles
//!
//! 1. **Pure State Container**: The engine owns no UI and no timers. Hosts
//!    feed it discrete `GameEvent`s and receive rendering callbacks.
//!
//! 2. **Generation-Checked Callbacks**: Deferred resolutions and clock ticks
//!    carry the generation they were issued in. Anything older than the
//!    current game is dropped, so a reset can never be undone by a late
//!    callback.
//!
//! 3. **Persistence Never Fails a Game**: Best scores go through
//!    `ScoreBook`, which logs store errors and reads them as "no record".
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, difficulty levels, clocks, time formatting
//! - `cards`: Card faces, instances and the dealt deck
//! - `engine`: Game state machine and host contract
//! - `scores`: Best-score ordering and key-value persistence
//! - `contact`: Contact form validation and submission
//! - `messages`: Player-facing text

pub mod cards;
pub mod contact;
pub mod core;
pub mod engine;
pub mod error;
pub mod messages;
pub mod scores;

// Re-export commonly used types
pub use crate::core::{
    format_time, Clock, Difficulty, EngineConfig, GameRng, LevelConfig, ManualClock, SystemClock,
};

pub use crate::cards::{Card, CardFace, Deck, InstanceId, PairKey};

pub use crate::engine::{
    BoardView, DifficultySource, Display, GameEngine, GameEvent, GamePhase, GameSnapshot,
    GameStats, Host, ManualScheduler, Scheduler, SelectOutcome,
};

pub use crate::scores::{BestScore, BestScoresView, FileStore, MemoryStore, ScoreBook, ScoreStore};

pub use crate::error::StoreError;
