//! Card faces - the static picture printed on a pair of cards.
//!
//! The catalog is fixed. A deck for `N` pairs uses the first `N` faces.

use serde::Serialize;

/// Identifier shared by exactly two cards in a deck.
///
/// Two cards match when their pair keys are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairKey(pub &'static str);

impl PairKey {
    /// Get the raw key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Static face data for one pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardFace {
    /// Pair key shared by both cards showing this face.
    pub key: PairKey,
    /// Text shown under the icon.
    pub label: &'static str,
    /// Icon class name for the host to render.
    pub icon: &'static str,
}

impl CardFace {
    const fn new(key: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self {
            key: PairKey(key),
            label,
            icon,
        }
    }
}

/// Every face available to a deck, in deal order.
pub const CATALOG: [CardFace; 12] = [
    CardFace::new("motor", "Variklis", "bi-gear-wide-connected"),
    CardFace::new("drive", "Pavara", "bi-speedometer2"),
    CardFace::new("sensor", "Sensorius", "bi-broadcast"),
    CardFace::new("tool", "Įrankiai", "bi-wrench-adjustable"),
    CardFace::new("bolt", "Energija", "bi-lightning-charge"),
    CardFace::new("code", "Kodas", "bi-code-slash"),
    CardFace::new("chart", "Grafikai", "bi-graph-up"),
    CardFace::new("shield", "Apsauga", "bi-shield-check"),
    CardFace::new("cpu", "Valdiklis", "bi-cpu"),
    CardFace::new("box", "Spinta", "bi-box-seam"),
    CardFace::new("plug", "Jungtis", "bi-plug"),
    CardFace::new("robot", "Automatika", "bi-robot"),
];
