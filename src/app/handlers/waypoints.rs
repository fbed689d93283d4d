//! Handler für Wegpunkte.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::WaypointId;

pub fn add(state: &mut AppState, granular_index: usize, created_at_ms: i64) {
    use_cases::waypoints::add_waypoint(state, granular_index, created_at_ms);
}

pub fn rename(state: &mut AppState, id: WaypointId, name: &str) {
    use_cases::waypoints::rename_waypoint(state, id, name);
}

pub fn remove(state: &mut AppState, id: WaypointId) {
    use_cases::waypoints::remove_waypoint(state, id);
}

pub fn clear(state: &mut AppState) {
    use_cases::waypoints::clear_waypoints(state);
}
