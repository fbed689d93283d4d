//! Use-Case-Funktionen für Wegpunkte auf granularen Punkten.

use crate::app::AppState;
use crate::core::WaypointId;

/// Legt einen Wegpunkt am granularen Punkt `granular_index` an.
pub fn add_waypoint(
    state: &mut AppState,
    granular_index: usize,
    created_at_ms: i64,
) -> Option<WaypointId> {
    let Some(id) = state.track.add_waypoint(granular_index, None, created_at_ms) else {
        log::warn!("Granularer Punkt {} existiert nicht", granular_index);
        return None;
    };
    if let Some(waypoint) = state.track.find_waypoint(id) {
        log::info!(
            "Wegpunkt '{}' ({}) angelegt, Kurs {:.2}°",
            waypoint.name,
            id,
            waypoint.heading
        );
    }
    Some(id)
}

/// Benennt einen Wegpunkt um. Unbekannte Identitäten werden ignoriert.
pub fn rename_waypoint(state: &mut AppState, id: WaypointId, name: &str) {
    if !state.track.rename_waypoint(id, name) {
        log::warn!("Wegpunkt {} zum Umbenennen nicht gefunden", id);
    }
}

pub fn remove_waypoint(state: &mut AppState, id: WaypointId) {
    if state.track.remove_waypoint(id) {
        log::info!("Wegpunkt {} entfernt", id);
    } else {
        log::warn!("Wegpunkt {} zum Entfernen nicht gefunden", id);
    }
}

pub fn clear_waypoints(state: &mut AppState) {
    let count = state.track.waypoints().len();
    state.track.clear_waypoints();
    log::info!("{} Wegpunkte entfernt", count);
}
