//! Auswahl der exportierbaren Listen.

use super::{points_to_delimited_text, waypoints_to_delimited_text};
use crate::core::Track;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Welche Liste der Strecke exportiert wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// Klickpunkte
    Points,
    /// Granulare Punkte aller Abschnitte
    GranularPoints,
    /// Benannte Wegpunkte mit Kurs
    Waypoints,
}

impl ExportKind {
    /// Alle Varianten in Menü-Reihenfolge.
    pub const ALL: [ExportKind; 3] = [
        ExportKind::Points,
        ExportKind::GranularPoints,
        ExportKind::Waypoints,
    ];

    /// Rendert die gewählte Liste. `None`, wenn die Liste leer ist.
    pub fn render(self, track: &Track) -> Option<String> {
        match self {
            ExportKind::Points => points_to_delimited_text(track.points()),
            ExportKind::GranularPoints => points_to_delimited_text(track.granular_points()),
            ExportKind::Waypoints => waypoints_to_delimited_text(track.waypoints()),
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExportKind::Points => "Punkte",
            ExportKind::GranularPoints => "granulare Punkte",
            ExportKind::Waypoints => "Wegpunkte",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn empty_track_renders_nothing() {
        let track = Track::new();
        for kind in ExportKind::ALL {
            assert!(kind.render(&track).is_none(), "{kind}");
        }
    }

    #[test]
    fn granular_kind_uses_granular_list() {
        let mut track = Track::new();
        track.push_start_point(DVec2::new(-71.0, -13.0));
        track.push_segment(
            DVec2::new(-71.0, -13.1),
            10.0,
            vec![DVec2::new(-71.0, -13.0), DVec2::new(-71.0, -13.05), DVec2::new(-71.0, -13.1)],
        );

        let points = ExportKind::Points.render(&track).unwrap();
        let granular = ExportKind::GranularPoints.render(&track).unwrap();
        assert_eq!(points.lines().count(), 3);
        assert_eq!(granular.lines().count(), 4);
        assert!(granular.contains("2;-13.050000;-71.000000"));
        assert!(ExportKind::Waypoints.render(&track).is_none());
    }
}
