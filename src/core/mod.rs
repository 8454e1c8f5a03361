//! Core engine types: RNG, configuration, difficulty levels, clocks.
//!
//! These are shared by the deck builder, the game engine and the
//! best-score table.

pub mod clock;
pub mod config;
pub mod rng;

pub use clock::{format_time, Clock, ManualClock, SystemClock};
pub use config::{Difficulty, EngineConfig, LevelConfig, UnknownDifficulty};
pub use rng::GameRng;
