//! Ein Streckenabschnitt zwischen zwei aufeinanderfolgenden Klickpunkten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Abschnitt `from → to` mit planarer Länge und laufender Gesamtdistanz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Startpunkt `(lng, lat)`
    pub from: DVec2,
    /// Endpunkt `(lng, lat)`
    pub to: DVec2,
    /// Euklidische Länge der projizierten Endpunkte
    pub distance: f64,
    /// Summe aller Abschnittslängen bis einschließlich diesem
    pub cumulative_distance: f64,
}

impl LineSegment {
    /// Erstellt einen Abschnitt, `previous_total` ist die Gesamtdistanz davor.
    pub fn new(from: DVec2, to: DVec2, distance: f64, previous_total: f64) -> Self {
        Self {
            from,
            to,
            distance,
            cumulative_distance: previous_total + distance,
        }
    }
}
