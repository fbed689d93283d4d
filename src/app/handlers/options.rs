//! Handler für Laufzeit-Optionen.

use crate::app::use_cases;
use crate::app::AppState;

pub fn set_step_length(state: &mut AppState, step_length: f64) {
    use_cases::options::set_step_length(state, step_length);
}

/// Ersetzt die Projektion; eine ungültige Definition wird als Fehler gemeldet.
pub fn set_projection(state: &mut AppState, definition: &str) -> anyhow::Result<()> {
    use_cases::options::set_projection(state, definition)
}
