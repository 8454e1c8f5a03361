//! Best-score table keyed by difficulty.
//!
//! `ScoreBook` sits between the engine and a `ScoreStore`. Every store or
//! payload failure is logged and then treated as "no record", so gameplay
//! never sees a persistence error.

use tracing::{debug, warn};

use super::best::{BestScore, BestScoresView};
use super::store::{MemoryStore, ScoreStore};
use crate::core::Difficulty;

/// Per-difficulty best scores over a key-value store.
pub struct ScoreBook {
    store: Box<dyn ScoreStore>,
}

impl std::fmt::Debug for ScoreBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreBook").finish_non_exhaustive()
    }
}

impl Default for ScoreBook {
    fn default() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl ScoreBook {
    /// Wrap a store.
    pub fn new(store: impl ScoreStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Read the best score for `difficulty`.
    ///
    /// Missing, empty, unreadable or malformed payloads all read as `None`.
    #[must_use]
    pub fn best(&self, difficulty: Difficulty) -> Option<BestScore> {
        let key = difficulty.storage_key();
        let raw = match self.store.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                warn!(key, error = %e, "best score read failed");
                return None;
            }
        };

        match parse_payload(&raw) {
            Ok(score) => Some(score),
            Err(e) => {
                warn!(key, error = %e, "ignoring malformed best score");
                None
            }
        }
    }

    /// Persist `score` for `difficulty`. Returns whether the write succeeded.
    pub fn write(&mut self, difficulty: Difficulty, score: &BestScore) -> bool {
        let key = difficulty.storage_key();
        let payload = match serde_json::to_string(score) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key, error = %e, "best score encode failed");
                return false;
            }
        };

        match self.store.set(key, &payload) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "best score write failed");
                false
            }
        }
    }

    /// Offer a finished game's result.
    ///
    /// If it beats the stored record (or none exists) it is written and
    /// `true` is returned. A failed write still counts as a new record for
    /// this game; it just won't be remembered.
    pub fn submit(&mut self, difficulty: Difficulty, result: BestScore) -> bool {
        let previous = self.best(difficulty);
        if !result.beats(previous.as_ref()) {
            debug!(%difficulty, moves = result.moves, "result did not beat best score");
            return false;
        }
        self.write(difficulty, &result);
        true
    }

    /// Formatted best scores for every difficulty.
    #[must_use]
    pub fn view(&self) -> BestScoresView {
        BestScoresView::from_lookup(|d| self.best(d))
    }
}

/// Only a JSON object with a numeric `moves` is a valid record.
///
/// A fractional move count is rounded up. A `timeMs` that is missing or not
/// a whole non-negative number is kept as "no time".
fn parse_payload(raw: &str) -> serde_json::Result<BestScore> {
    use serde::de::Error as _;
    use serde_json::Value;

    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(fields) = value else {
        return Err(serde_json::Error::custom("best score payload is not an object"));
    };

    let moves = match fields.get("moves") {
        Some(Value::Number(n)) => match (n.as_u64(), n.as_f64()) {
            (Some(whole), _) => u32::try_from(whole).unwrap_or(u32::MAX),
            (None, Some(f)) if f.is_finite() && f >= 0.0 => f.ceil() as u32,
            _ => return Err(serde_json::Error::custom("best score moves is negative")),
        },
        _ => return Err(serde_json::Error::custom("best score moves is not a number")),
    };
    let time_ms = fields.get("timeMs").and_then(Value::as_u64);

    Ok(BestScore { moves, time_ms })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};

    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Unavailable("disabled".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("disabled".into()))
        }
    }

    #[test]
    fn test_empty_book() {
        let book = ScoreBook::default();
        assert_eq!(book.best(Difficulty::Easy), None);
        assert_eq!(book.view().easy, "–");
    }

    #[test]
    fn test_submit_first_result() {
        let mut book = ScoreBook::default();
        assert!(book.submit(Difficulty::Easy, BestScore::new(8, 45_000)));
        assert_eq!(book.best(Difficulty::Easy), Some(BestScore::new(8, 45_000)));
        assert_eq!(book.best(Difficulty::Hard), None);
    }

    #[test]
    fn test_submit_keeps_better_record() {
        let mut book = ScoreBook::default();
        book.submit(Difficulty::Hard, BestScore::new(15, 60_000));

        assert!(!book.submit(Difficulty::Hard, BestScore::new(16, 1_000)));
        assert!(!book.submit(Difficulty::Hard, BestScore::new(15, 60_000)));
        assert!(book.submit(Difficulty::Hard, BestScore::new(15, 59_000)));
        assert_eq!(book.best(Difficulty::Hard), Some(BestScore::new(15, 59_000)));
    }

    #[test]
    fn test_malformed_payloads_read_as_absent() {
        for raw in ["", "null", "garbage", r#"{"moves":"8"}"#, r#"{"timeMs":5}"#, "[1,2]"] {
            let store = MemoryStore::new().with_raw("mg_best_easy", raw);
            let book = ScoreBook::new(store);
            assert_eq!(book.best(Difficulty::Easy), None, "payload {raw:?}");
        }
    }

    #[test]
    fn test_lenient_time_field() {
        for raw in [
            r#"{"moves":8,"timeMs":"x"}"#,
            r#"{"moves":8,"timeMs":null}"#,
            r#"{"moves":8,"timeMs":-5}"#,
            r#"{"moves":8,"timeMs":1.5}"#,
            r#"{"moves":8}"#,
        ] {
            let store = MemoryStore::new().with_raw("mg_best_easy", raw);
            let mut book = ScoreBook::new(store);
            assert_eq!(
                book.best(Difficulty::Easy),
                Some(BestScore { moves: 8, time_ms: None }),
                "payload {raw:?}"
            );
            assert_eq!(book.view().easy, "8 ėj. / –");

            // Worse games must not displace the untimed record.
            assert!(!book.submit(Difficulty::Easy, BestScore::new(20, 1_000)));
            // Equal moves with a time beats a missing time.
            assert!(book.submit(Difficulty::Easy, BestScore::new(8, 1_000)));
        }
    }

    #[test]
    fn test_fractional_and_negative_moves() {
        let store = MemoryStore::new().with_raw("mg_best_easy", r#"{"moves":7.5,"timeMs":100}"#);
        let book = ScoreBook::new(store);
        assert_eq!(book.best(Difficulty::Easy), Some(BestScore::new(8, 100)));

        let store = MemoryStore::new().with_raw("mg_best_easy", r#"{"moves":-1}"#);
        let book = ScoreBook::new(store);
        assert_eq!(book.best(Difficulty::Easy), None);
    }

    #[test]
    fn test_malformed_payload_is_overwritten() {
        let store = MemoryStore::new().with_raw("mg_best_easy", "{broken");
        let mut book = ScoreBook::new(store);
        assert!(book.submit(Difficulty::Easy, BestScore::new(30, 1)));
        assert_eq!(book.best(Difficulty::Easy), Some(BestScore::new(30, 1)));
    }

    #[test]
    fn test_broken_store_is_swallowed() {
        let mut book = ScoreBook::new(BrokenStore);
        assert_eq!(book.best(Difficulty::Easy), None);
        assert!(!book.write(Difficulty::Easy, &BestScore::new(1, 1)));
        // Still reported as a record for the game that just ended.
        assert!(book.submit(Difficulty::Easy, BestScore::new(1, 1)));
        assert_eq!(book.view().easy, "–");
    }
}
