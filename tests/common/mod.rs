//! Shared test host: records every render call and schedules through a
//! `ManualScheduler` on a shared `ManualClock`.

#![allow(dead_code)]

use memory_match::cards::{Card, InstanceId};
use memory_match::core::{Difficulty, EngineConfig, ManualClock};
use memory_match::engine::{
    BoardView, DifficultySource, Display, GameEngine, GameEvent, GameStats, ManualScheduler,
    Scheduler,
};
use memory_match::scores::{BestScore, BestScoresView, ScoreBook};

pub struct TestHost {
    pub difficulty: Difficulty,
    pub sched: ManualScheduler,
    pub board: Vec<Card>,
    pub columns: usize,
    pub board_renders: usize,
    pub stats: Vec<GameStats>,
    pub elapsed: Vec<String>,
    pub messages: Vec<Option<String>>,
    pub best: Vec<BestScoresView>,
    pub records: Vec<(Difficulty, BestScore)>,
}

impl TestHost {
    pub fn new(clock: &ManualClock) -> Self {
        Self {
            difficulty: Difficulty::Easy,
            sched: ManualScheduler::new(clock.clone()),
            board: Vec::new(),
            columns: 0,
            board_renders: 0,
            stats: Vec::new(),
            elapsed: Vec::new(),
            messages: Vec::new(),
            best: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().and_then(|m| m.as_deref())
    }
}

impl Display for TestHost {
    fn render_board(&mut self, board: &BoardView<'_>) {
        self.board = board.cards.iter().cloned().collect();
        self.columns = board.columns;
        self.board_renders += 1;
    }

    fn render_stats(&mut self, stats: &GameStats) {
        self.stats.push(*stats);
    }

    fn render_elapsed(&mut self, formatted: &str) {
        self.elapsed.push(formatted.to_string());
    }

    fn render_message(&mut self, text: Option<&str>) {
        self.messages.push(text.map(str::to_string));
    }

    fn render_best_scores(&mut self, scores: &BestScoresView) {
        self.best.push(scores.clone());
    }

    fn new_record(&mut self, difficulty: Difficulty, score: &BestScore) {
        self.records.push((difficulty, *score));
    }
}

impl Scheduler for TestHost {
    fn schedule_once(&mut self, delay_ms: u64, event: GameEvent) {
        self.sched.schedule_once(delay_ms, event);
    }

    fn start_repeating(&mut self, interval_ms: u64, event: GameEvent) {
        self.sched.start_repeating(interval_ms, event);
    }

    fn stop_repeating(&mut self) {
        self.sched.stop_repeating();
    }
}

impl DifficultySource for TestHost {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Route engine logs to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct Rig {
    pub clock: ManualClock,
    pub host: TestHost,
    pub engine: GameEngine,
}

impl Rig {
    pub fn new(seed: u64) -> Self {
        Self::with_book(seed, ScoreBook::default())
    }

    pub fn with_book(seed: u64, book: ScoreBook) -> Self {
        init_tracing();
        let clock = ManualClock::new();
        let host = TestHost::new(&clock);
        let engine = GameEngine::new(EngineConfig::default().with_seed(seed), clock.clone(), book);
        let mut rig = Self { clock, host, engine };
        rig.engine.init(&mut rig.host);
        rig
    }

    /// Deliver every event due at the current time.
    pub fn pump(&mut self) {
        for event in self.host.sched.due_events() {
            self.engine.dispatch(event, &mut self.host);
        }
    }

    pub fn advance(&mut self, ms: u64) {
        self.clock.advance(ms);
        self.pump();
    }

    pub fn send(&mut self, event: GameEvent) {
        self.engine.dispatch(event, &mut self.host);
    }

    pub fn click(&mut self, id: InstanceId) {
        self.send(GameEvent::SelectCard(id));
    }

    /// Two unmatched cards sharing a pair key.
    pub fn find_pair(&self) -> (InstanceId, InstanceId) {
        let cards = self.engine.deck().cards();
        for (i, a) in cards.iter().enumerate() {
            if a.matched {
                continue;
            }
            for b in cards.iter().skip(i + 1) {
                if !b.matched && a.pair_key == b.pair_key {
                    return (a.instance_id, b.instance_id);
                }
            }
        }
        panic!("no unmatched pair left");
    }

    /// Two unmatched cards with different pair keys.
    pub fn find_mismatch(&self) -> (InstanceId, InstanceId) {
        let cards = self.engine.deck().cards();
        for (i, a) in cards.iter().enumerate() {
            if a.matched {
                continue;
            }
            for b in cards.iter().skip(i + 1) {
                if !b.matched && a.pair_key != b.pair_key {
                    return (a.instance_id, b.instance_id);
                }
            }
        }
        panic!("no mismatched cards left");
    }

    /// Turn over a matching pair and let it resolve.
    pub fn play_match(&mut self) {
        let (a, b) = self.find_pair();
        self.click(a);
        self.click(b);
        self.advance(self.engine.config().match_delay_ms);
    }

    /// Turn over a mismatched pair and let it resolve.
    pub fn play_mismatch(&mut self) {
        let (a, b) = self.find_mismatch();
        self.click(a);
        self.click(b);
        self.advance(self.engine.config().mismatch_delay_ms);
    }

    /// Win with `mismatches` wasted moves, finishing at `finish_ms` on the clock.
    pub fn play_to_win(&mut self, mismatches: u32, finish_ms: u64) {
        for _ in 0..mismatches {
            self.play_mismatch();
        }
        while self.engine.stats().matched_pairs + 1 < self.engine.stats().total_pairs {
            self.play_match();
        }
        let delay = self.engine.config().match_delay_ms;
        self.clock.set(finish_ms - delay);
        self.pump();
        self.play_match();
    }
}
