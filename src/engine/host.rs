//! Host-side collaborators.
//!
//! The engine owns no UI and no timers. Whatever composes the page
//! implements:
//!
//! - `Display`: Draw the board, counters, clock, message and best scores
//! - `Scheduler`: Deliver deferred `GameEvent`s back to the engine
//! - `DifficultySource`: Report the currently selected difficulty
//!
//! Anything implementing all three is a `Host`.

use im::Vector;
use serde::Serialize;

use super::event::GameEvent;
use super::state::GameStats;
use crate::cards::Card;
use crate::core::{Clock, Difficulty, ManualClock};
use crate::scores::{BestScore, BestScoresView};

/// The board as the host should draw it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BoardView<'a> {
    /// Difficulty the board was dealt for.
    pub difficulty: Difficulty,
    /// Grid columns.
    pub columns: usize,
    /// Grid rows.
    pub rows: usize,
    /// Cards in board order.
    pub cards: &'a Vector<Card>,
}

/// Rendering callbacks.
pub trait Display {
    /// Redraw every card.
    fn render_board(&mut self, board: &BoardView<'_>);

    /// Redraw the move/match counters.
    fn render_stats(&mut self, stats: &GameStats);

    /// Redraw the clock, already formatted as `M:SS`.
    fn render_elapsed(&mut self, formatted: &str);

    /// Show a message, or clear it with `None`.
    fn render_message(&mut self, text: Option<&str>);

    /// Redraw the best-score table.
    fn render_best_scores(&mut self, scores: &BestScoresView);

    /// A finished game set a new best score.
    fn new_record(&mut self, _difficulty: Difficulty, _score: &BestScore) {}
}

/// Deferred callback delivery.
///
/// The engine guarantees `start_repeating` and `stop_repeating` alternate:
/// one stop per start, never two starts in a row.
pub trait Scheduler {
    /// Deliver `event` once, `delay_ms` from now.
    fn schedule_once(&mut self, delay_ms: u64, event: GameEvent);

    /// Deliver `event` every `interval_ms` until stopped.
    fn start_repeating(&mut self, interval_ms: u64, event: GameEvent);

    /// Stop the repeating event.
    fn stop_repeating(&mut self);
}

/// The host's difficulty selector.
pub trait DifficultySource {
    /// Currently selected difficulty.
    fn difficulty(&self) -> Difficulty;
}

impl DifficultySource for Difficulty {
    fn difficulty(&self) -> Difficulty {
        *self
    }
}

/// Everything the engine needs from its surroundings.
pub trait Host: Display + Scheduler + DifficultySource {}

impl<T: Display + Scheduler + DifficultySource + ?Sized> Host for T {}

#[derive(Clone, Copy, Debug)]
struct Repeating {
    interval_ms: u64,
    next_due_ms: u64,
    event: GameEvent,
}

/// Scheduler driven by a `ManualClock`.
///
/// Nothing fires on its own: after moving the clock, call `due_events`
/// and dispatch what it returns. Cancelled work is not removed; the engine
/// is expected to recognise and drop stale events itself.
#[derive(Clone, Debug)]
pub struct ManualScheduler {
    clock: ManualClock,
    once: Vec<(u64, u64, GameEvent)>,
    repeating: Option<Repeating>,
    seq: u64,
    starts: u32,
    stops: u32,
}

impl ManualScheduler {
    /// Create a scheduler reading time from `clock`.
    #[must_use]
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            once: Vec::new(),
            repeating: None,
            seq: 0,
            starts: 0,
            stops: 0,
        }
    }

    /// Take every event due at the clock's current time, oldest first.
    pub fn due_events(&mut self) -> Vec<GameEvent> {
        let now = self.clock.now_ms();
        let mut due: Vec<(u64, u64, GameEvent)> = Vec::new();

        let (ready, waiting): (Vec<_>, Vec<_>) =
            self.once.drain(..).partition(|(at, _, _)| *at <= now);
        self.once = waiting;
        due.extend(ready);

        if let Some(rep) = self.repeating.as_mut() {
            while rep.next_due_ms <= now {
                due.push((rep.next_due_ms, u64::MAX, rep.event));
                let next = rep.next_due_ms.saturating_add(rep.interval_ms.max(1));
                if next == rep.next_due_ms {
                    break;
                }
                rep.next_due_ms = next;
            }
        }

        due.sort_by_key(|(at, seq, _)| (*at, *seq));
        due.into_iter().map(|(_, _, event)| event).collect()
    }

    /// One-shot events not yet delivered.
    #[must_use]
    pub fn pending_once(&self) -> usize {
        self.once.len()
    }

    /// Is a repeating event armed?
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.repeating.is_some()
    }

    /// Times `start_repeating` was called.
    #[must_use]
    pub fn repeating_starts(&self) -> u32 {
        self.starts
    }

    /// Times `stop_repeating` was called.
    #[must_use]
    pub fn repeating_stops(&self) -> u32 {
        self.stops
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay_ms: u64, event: GameEvent) {
        let at = self.clock.now_ms().saturating_add(delay_ms);
        self.once.push((at, self.seq, event));
        self.seq += 1;
    }

    fn start_repeating(&mut self, interval_ms: u64, event: GameEvent) {
        self.starts += 1;
        self.repeating = Some(Repeating {
            interval_ms,
            next_due_ms: self.clock.now_ms().saturating_add(interval_ms.max(1)),
            event,
        });
    }

    fn stop_repeating(&mut self) {
        self.stops += 1;
        self.repeating = None;
    }
}
