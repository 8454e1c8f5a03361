//! The memory game engine.
//!
//! A pure state container: every transition happens inside a method call
//! triggered by a discrete event, and every side effect goes out through
//! the `Host`. Deferred work (pair resolution, clock ticks) is handed to
//! the host's scheduler and comes back as `GameEvent::Resolve` /
//! `GameEvent::Tick`.
//!
//! Each prepare bumps a generation counter. Tokens from an older
//! generation are dropped on arrival, so a resolution or tick scheduled
//! before a reset can never touch the new game.

use tracing::{debug, info};

use super::event::{GameEvent, IgnoreReason, ResolveToken, SelectOutcome, TickToken};
use super::host::{BoardView, Host};
use super::snapshot::GameSnapshot;
use super::state::{GamePhase, GameStats, TimerState, TurnState};
use crate::cards::{Deck, InstanceId, InstanceIds};
use crate::core::{format_time, Clock, Difficulty, EngineConfig, GameRng, SystemClock};
use crate::messages::{win_message, PROMPT_START};
use crate::scores::{BestScore, ScoreBook};

/// A comparison waiting for its delayed resolution.
#[derive(Clone, Copy, Debug)]
struct PendingResolution {
    token: ResolveToken,
    first: InstanceId,
    second: InstanceId,
    matched: bool,
}

/// Memory game engine.
///
/// ## Usage
///
/// ```
/// use memory_match::core::{Difficulty, EngineConfig, ManualClock};
/// use memory_match::engine::{GameEngine, GamePhase};
/// use memory_match::scores::ScoreBook;
///
/// let clock = ManualClock::new();
/// let engine = GameEngine::new(EngineConfig::default().with_seed(1), clock, ScoreBook::default());
/// assert_eq!(engine.phase(), GamePhase::Idle);
/// assert!(engine.deck().is_empty()); // dealt on `init`/`prepare`
/// ```
pub struct GameEngine {
    config: EngineConfig,
    rng: GameRng,
    ids: InstanceIds,
    clock: Box<dyn Clock>,
    scores: ScoreBook,

    difficulty: Difficulty,
    deck: Deck,
    phase: GamePhase,
    turn: TurnState,
    stats: GameStats,
    timer: TimerState,

    generation: u64,
    next_serial: u64,
    pending: Option<PendingResolution>,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("difficulty", &self.difficulty)
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("stats", &self.stats)
            .field("timer", &self.timer)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Create an engine. No deck is dealt until `init` or `prepare`.
    pub fn new(config: EngineConfig, clock: impl Clock + 'static, scores: ScoreBook) -> Self {
        let rng = GameRng::from_seed_opt(config.seed);
        Self {
            config,
            rng,
            ids: InstanceIds::new(),
            clock: Box::new(clock),
            scores,
            difficulty: Difficulty::default(),
            deck: Deck::empty(Difficulty::default()),
            phase: GamePhase::Idle,
            turn: TurnState::default(),
            stats: GameStats::default(),
            timer: TimerState::default(),
            generation: 0,
            next_serial: 0,
            pending: None,
        }
    }

    /// Engine on the system clock.
    pub fn with_system_clock(config: EngineConfig, scores: ScoreBook) -> Self {
        Self::new(config, SystemClock::new(), scores)
    }

    // === Accessors ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Difficulty of the current deck.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Pending selection state.
    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Move/match counters.
    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Timer state as of the last update.
    #[must_use]
    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    /// Elapsed time: live while the timer runs, frozen otherwise.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        if self.timer.running {
            self.clock.now_ms().saturating_sub(self.timer.started_at_ms)
        } else {
            self.timer.elapsed_ms
        }
    }

    /// Current game generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The best-score table.
    #[must_use]
    pub fn scores(&self) -> &ScoreBook {
        &self.scores
    }

    /// Is a comparison waiting to resolve?
    #[must_use]
    pub fn has_pending_resolution(&self) -> bool {
        self.pending.is_some()
    }

    /// Cheap, serializable copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            difficulty: self.difficulty,
            cards: self.deck.cards().clone(),
            stats: self.stats,
            elapsed_ms: self.elapsed_ms(),
            input_locked: self.turn.input_locked,
        }
    }

    // === Lifecycle ===

    /// First load: draw the best-score table and deal a board for the
    /// host's current difficulty.
    pub fn init<H: Host + ?Sized>(&mut self, host: &mut H) {
        host.render_best_scores(&self.scores.view());
        self.prepare(host.difficulty(), host);
    }

    /// Throw away any game in progress and deal a fresh `Idle` board.
    ///
    /// Stops the timer if it runs and invalidates every outstanding
    /// resolution and tick.
    pub fn prepare<H: Host + ?Sized>(&mut self, difficulty: Difficulty, host: &mut H) {
        self.stop_timer(host);

        self.generation += 1;
        self.pending = None;

        self.difficulty = difficulty;
        self.deck = Deck::build(difficulty, &mut self.ids, &mut self.rng);
        self.phase = GamePhase::Idle;
        self.turn.clear();
        self.stats = GameStats::new(self.deck.pair_count());
        self.timer = TimerState::default();

        debug!(%difficulty, generation = self.generation, "board prepared");

        self.render_board(host);
        host.render_stats(&self.stats);
        host.render_elapsed(&format_time(0));
        host.render_message(Some(PROMPT_START));
    }

    /// Deal a new game for the host's difficulty and start the clock.
    ///
    /// Always a fresh game; there is no resume.
    pub fn start<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.prepare(host.difficulty(), host);

        self.phase = GamePhase::Running;
        self.timer.start(self.clock.now_ms());
        host.start_repeating(
            self.config.tick_interval_ms,
            GameEvent::Tick(TickToken {
                generation: self.generation,
            }),
        );
        host.render_message(None);

        info!(difficulty = %self.difficulty, generation = self.generation, "game started");
    }

    /// Deal a new `Idle` board for the host's difficulty.
    ///
    /// Safe at any time, including while a comparison is resolving.
    pub fn reset<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.prepare(host.difficulty(), host);
    }

    /// Route an event to the matching operation.
    pub fn dispatch<H: Host + ?Sized>(&mut self, event: GameEvent, host: &mut H) {
        match event {
            GameEvent::Start => self.start(host),
            GameEvent::Reset | GameEvent::DifficultyChanged => self.reset(host),
            GameEvent::SelectCard(id) => {
                self.select_card(id, host);
            }
            GameEvent::Tick(token) => {
                self.tick(token, host);
            }
            GameEvent::Resolve(token) => {
                self.resolve(token, host);
            }
        }
    }

    // === Turn loop ===

    /// Turn a card over.
    ///
    /// Ignored unless a game is running, input is unlocked, and the card is
    /// on the board, not matched and not already face up.
    pub fn select_card<H: Host + ?Sized>(&mut self, id: InstanceId, host: &mut H) -> SelectOutcome {
        if let Some(reason) = self.reject_reason(id) {
            debug!(card = %id, ?reason, "click ignored");
            return SelectOutcome::Ignored(reason);
        }

        if let Some(card) = self.deck.get_mut(id) {
            card.revealed = true;
        }
        self.render_board(host);

        let Some(first) = self.turn.first else {
            self.turn.first = Some(id);
            return SelectOutcome::First;
        };

        self.turn.second = Some(id);
        self.turn.input_locked = true;
        self.stats.moves += 1;
        self.phase = GamePhase::Resolving;
        host.render_stats(&self.stats);

        let matched = match (self.deck.get(first), self.deck.get(id)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        let token = ResolveToken {
            generation: self.generation,
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.pending = Some(PendingResolution {
            token,
            first,
            second: id,
            matched,
        });

        let delay = if matched {
            self.config.match_delay_ms
        } else {
            self.config.mismatch_delay_ms
        };
        host.schedule_once(delay, GameEvent::Resolve(token));

        debug!(first = %first, second = %id, matched, moves = self.stats.moves, "pair compared");
        SelectOutcome::Compared { matched }
    }

    fn reject_reason(&self, id: InstanceId) -> Option<IgnoreReason> {
        if self.turn.input_locked || self.phase == GamePhase::Resolving {
            return Some(IgnoreReason::InputLocked);
        }
        if self.phase != GamePhase::Running {
            return Some(IgnoreReason::NotRunning);
        }
        let Some(card) = self.deck.get(id) else {
            return Some(IgnoreReason::UnknownCard);
        };
        if card.matched {
            return Some(IgnoreReason::AlreadyMatched);
        }
        if card.revealed {
            return Some(IgnoreReason::AlreadyRevealed);
        }
        None
    }

    /// Apply a pending resolution. Returns `false` for stale tokens.
    pub fn resolve<H: Host + ?Sized>(&mut self, token: ResolveToken, host: &mut H) -> bool {
        let pending = match self.pending {
            Some(p) if p.token == token => p,
            _ => {
                debug!(?token, generation = self.generation, "stale resolution dropped");
                return false;
            }
        };
        self.pending = None;

        if pending.matched {
            for id in [pending.first, pending.second] {
                if let Some(card) = self.deck.get_mut(id) {
                    card.matched = true;
                }
            }
            self.stats.matched_pairs += 1;
            host.render_stats(&self.stats);
        } else {
            for id in [pending.first, pending.second] {
                if let Some(card) = self.deck.get_mut(id) {
                    card.revealed = false;
                }
            }
        }

        self.turn.clear();
        self.render_board(host);

        if self.stats.is_complete() {
            self.win(host);
        } else {
            self.phase = GamePhase::Running;
        }
        true
    }

    /// Refresh the clock display. Returns `false` for stale ticks.
    pub fn tick<H: Host + ?Sized>(&mut self, token: TickToken, host: &mut H) -> bool {
        if token.generation != self.generation || !self.timer.running {
            debug!(?token, generation = self.generation, "stale tick dropped");
            return false;
        }
        let elapsed = self.timer.update(self.clock.now_ms());
        host.render_elapsed(&format_time(elapsed));
        true
    }

    fn win<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.stop_timer(host);
        self.phase = GamePhase::Won;

        let elapsed = self.timer.elapsed_ms;
        let result = BestScore::new(self.stats.moves, elapsed);
        let new_record = self.scores.submit(self.difficulty, result);

        info!(
            difficulty = %self.difficulty,
            moves = self.stats.moves,
            elapsed_ms = elapsed,
            new_record,
            "game won"
        );

        host.render_elapsed(&format_time(elapsed));
        if new_record {
            host.render_best_scores(&self.scores.view());
            host.new_record(self.difficulty, &result);
        }
        host.render_message(Some(&win_message(self.stats.moves, elapsed, new_record)));
    }

    /// Stop the tick if it runs. Called on every way out of a timed phase,
    /// and a no-op when the timer is already stopped.
    fn stop_timer<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.timer.stop(self.clock.now_ms()) {
            host.stop_repeating();
        }
    }

    fn render_board<H: Host + ?Sized>(&self, host: &mut H) {
        let level = self.deck.level();
        host.render_board(&BoardView {
            difficulty: self.difficulty,
            columns: level.columns,
            rows: level.rows,
            cards: self.deck.cards(),
        });
    }
}
