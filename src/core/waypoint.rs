//! Benannter Wegpunkt, abgeleitet aus einem granularen Punkt.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identität eines Wegpunkts: Erstellungszeitpunkt in Millisekunden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaypointId(pub i64);

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Beschreibt einen vom Benutzer markierten Wegpunkt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Unveränderliche Identität
    pub id: WaypointId,
    /// Position `(lng, lat)`
    pub position: DVec2,
    /// Frei editierbarer Name
    pub name: String,
    /// Kurs in Grad zum nächsten granularen Punkt
    pub heading: f64,
}

impl Waypoint {
    /// Erstellt einen neuen Wegpunkt
    pub fn new(id: WaypointId, position: DVec2, name: String, heading: f64) -> Self {
        Self {
            id,
            position,
            name,
            heading,
        }
    }
}
