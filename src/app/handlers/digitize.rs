//! Handler für das Setzen und Entfernen von Klickpunkten.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Hängt einen Klickpunkt an und propagiert Projektionsfehler an den Aufrufer.
pub fn add_click_point(state: &mut AppState, coordinate: DVec2) -> anyhow::Result<()> {
    use_cases::digitize::add_click_point(state, coordinate)
}

/// Entfernt den letzten Klickpunkt.
pub fn remove_last_point(state: &mut AppState) {
    use_cases::digitize::remove_last_point(state);
}

/// Leert die Strecke.
pub fn clear(state: &mut AppState) {
    use_cases::digitize::clear(state);
}
