//! Player-facing text. The page ships in Lithuanian only.

use crate::core::format_time;

/// Shown on a freshly prepared board.
pub const PROMPT_START: &str = "Pasirinkite sunkumą ir spauskite „Start“.";

/// Appended to the win message when the result is a new best score.
pub const NEW_RECORD_SUFFIX: &str = " 🎉 Naujas geriausias rezultatas!";

/// Contact form result panel text when validation fails on submit.
pub const FORM_CHECK_FIELDS: &str = "<strong>Klaida:</strong> Patikrink laukus.";

/// Win message, e.g. `Laimėjote! Ėjimai: 8, laikas: 0:45.`
#[must_use]
pub fn win_message(moves: u32, elapsed_ms: u64, new_record: bool) -> String {
    let mut msg = format!("Laimėjote! Ėjimai: {moves}, laikas: {}.", format_time(elapsed_ms));
    if new_record {
        msg.push_str(NEW_RECORD_SUFFIX);
    }
    msg
}
