//! Best-score records and their ordering.
//!
//! Fewer moves wins. At equal moves, less elapsed time wins. A record with
//! no stored time sorts after any record with one.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{format_time, Difficulty};

/// Placeholder shown when a difficulty has no best score.
pub const NO_SCORE: &str = "–";

/// A completed game's result, as persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestScore {
    /// Two-card comparisons made.
    pub moves: u32,
    /// Elapsed time. Older payloads may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<u64>,
}

impl BestScore {
    /// Create a record with a known time.
    #[must_use]
    pub const fn new(moves: u32, time_ms: u64) -> Self {
        Self {
            moves,
            time_ms: Some(time_ms),
        }
    }

    fn sort_time(&self) -> u64 {
        self.time_ms.unwrap_or(u64::MAX)
    }

    /// Compare two results. `Less` means `self` is the better result.
    #[must_use]
    pub fn rank(&self, other: &Self) -> Ordering {
        self.moves
            .cmp(&other.moves)
            .then_with(|| self.sort_time().cmp(&other.sort_time()))
    }

    /// Is `self` strictly better than `previous`? Anything beats no record.
    #[must_use]
    pub fn beats(&self, previous: Option<&Self>) -> bool {
        previous.map_or(true, |prev| self.rank(prev) == Ordering::Less)
    }

    /// Display text, e.g. `8 ėj. / 0:45`.
    #[must_use]
    pub fn text(&self) -> String {
        let time = self.time_ms.map_or_else(|| NO_SCORE.to_string(), format_time);
        format!("{} ėj. / {}", self.moves, time)
    }
}

/// Display text for an optional record.
#[must_use]
pub fn score_text(score: Option<&BestScore>) -> String {
    score.map_or_else(|| NO_SCORE.to_string(), BestScore::text)
}

/// Formatted best scores for every difficulty, ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BestScoresView {
    /// Text for the easy board
    pub easy: String,
    /// Text for the hard board
    pub hard: String,
}

impl BestScoresView {
    /// Build the view from a lookup function.
    pub fn from_lookup(mut lookup: impl FnMut(Difficulty) -> Option<BestScore>) -> Self {
        Self {
            easy: score_text(lookup(Difficulty::Easy).as_ref()),
            hard: score_text(lookup(Difficulty::Hard).as_ref()),
        }
    }

    /// Text for one difficulty.
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> &str {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Hard => &self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_moves_wins() {
        let a = BestScore::new(8, 90_000);
        let b = BestScore::new(9, 10_000);
        assert!(a.beats(Some(&b)));
        assert!(!b.beats(Some(&a)));
    }

    #[test]
    fn test_equal_moves_faster_wins() {
        let a = BestScore::new(8, 40_000);
        let b = BestScore::new(8, 45_000);
        assert!(a.beats(Some(&b)));
        assert!(!b.beats(Some(&a)));
    }

    #[test]
    fn test_tie_is_not_better() {
        let a = BestScore::new(8, 45_000);
        let same = BestScore::new(8, 45_000);
        assert!(!a.beats(Some(&same)));
    }

    #[test]
    fn test_anything_beats_nothing() {
        assert!(BestScore::new(100, 999_999).beats(None));
    }

    #[test]
    fn test_missing_time_sorts_last() {
        let untimed = BestScore { moves: 8, time_ms: None };
        let timed = BestScore::new(8, 3_600_000);
        assert!(timed.beats(Some(&untimed)));
        assert!(!untimed.beats(Some(&timed)));
    }

    #[test]
    fn test_text() {
        assert_eq!(BestScore::new(8, 45_000).text(), "8 ėj. / 0:45");
        assert_eq!(BestScore { moves: 3, time_ms: None }.text(), "3 ėj. / –");
        assert_eq!(score_text(None), "–");
    }

    #[test]
    fn test_payload_shape() {
        let json = serde_json::to_string(&BestScore::new(8, 45_000)).unwrap();
        assert_eq!(json, r#"{"moves":8,"timeMs":45000}"#);

        let parsed: BestScore = serde_json::from_str(r#"{"moves":5}"#).unwrap();
        assert_eq!(parsed, BestScore { moves: 5, time_ms: None });
    }

    #[test]
    fn test_view() {
        let view = BestScoresView::from_lookup(|d| match d {
            Difficulty::Easy => Some(BestScore::new(8, 45_000)),
            Difficulty::Hard => None,
        });
        assert_eq!(view.get(Difficulty::Easy), "8 ėj. / 0:45");
        assert_eq!(view.get(Difficulty::Hard), "–");
    }
}
