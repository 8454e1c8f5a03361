//! Memory game engine and its host contract.
//!
//! ## Key Types
//!
//! - `GameEngine`: Deck, turn state, counters and timer for one board
//! - `GameEvent`: Everything the host can feed in, including deferred callbacks
//! - `Host`: `Display` + `Scheduler` + `DifficultySource`, implemented by the caller
//! - `ManualScheduler`: Clock-driven scheduler for tests and headless hosts
//!
//! ## Example
//!
//! ```
//! use memory_match::core::{Difficulty, EngineConfig, ManualClock};
//! use memory_match::engine::{
//!     BoardView, Display, GameEngine, GameEvent, GamePhase, GameStats, ManualScheduler,
//!     Scheduler, DifficultySource,
//! };
//! use memory_match::scores::{BestScoresView, ScoreBook};
//!
//! struct Page {
//!     sched: ManualScheduler,
//! }
//!
//! impl Display for Page {
//!     fn render_board(&mut self, _board: &BoardView<'_>) {}
//!     fn render_stats(&mut self, _stats: &GameStats) {}
//!     fn render_elapsed(&mut self, _formatted: &str) {}
//!     fn render_message(&mut self, _text: Option<&str>) {}
//!     fn render_best_scores(&mut self, _scores: &BestScoresView) {}
//! }
//!
//! impl Scheduler for Page {
//!     fn schedule_once(&mut self, delay_ms: u64, event: GameEvent) {
//!         self.sched.schedule_once(delay_ms, event);
//!     }
//!     fn start_repeating(&mut self, interval_ms: u64, event: GameEvent) {
//!         self.sched.start_repeating(interval_ms, event);
//!     }
//!     fn stop_repeating(&mut self) {
//!         self.sched.stop_repeating();
//!     }
//! }
//!
//! impl DifficultySource for Page {
//!     fn difficulty(&self) -> Difficulty {
//!         Difficulty::Easy
//!     }
//! }
//!
//! let clock = ManualClock::new();
//! let mut page = Page { sched: ManualScheduler::new(clock.clone()) };
//! let mut engine = GameEngine::new(EngineConfig::default().with_seed(3), clock.clone(), ScoreBook::default());
//!
//! engine.init(&mut page);
//! engine.dispatch(GameEvent::Start, &mut page);
//! assert_eq!(engine.phase(), GamePhase::Running);
//!
//! clock.advance(1_000);
//! for event in page.sched.due_events() {
//!     engine.dispatch(event, &mut page);
//! }
//! assert_eq!(engine.timer().elapsed_ms, 1_000);
//! ```

mod event;
mod game;
mod host;
mod snapshot;
mod state;

pub use event::{GameEvent, IgnoreReason, ResolveToken, SelectOutcome, TickToken};
pub use game::GameEngine;
pub use host::{BoardView, DifficultySource, Display, Host, ManualScheduler, Scheduler};
pub use snapshot::GameSnapshot;
pub use state::{GamePhase, GameStats, TimerState, TurnState};
