//! Die digitalisierte Strecke: Klickpunkte, Abschnitte, granulare Punkte und Wegpunkte.
//!
//! Alle Listen wachsen nur am Ende und werden nur am Ende gekürzt. Invarianten:
//! - `lines.len() == points.len() - 1` (bei nicht-leerer Punktliste)
//! - `granular_counts.len() == lines.len()`
//! - `granular_points.len() == granular_counts.iter().sum()`

use super::geometry::heading;
use super::{LineSegment, Waypoint, WaypointId};
use glam::DVec2;
use serde::Serialize;

/// Vom Interaction-Controller gehaltene Strecke.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Track {
    points: Vec<DVec2>,
    lines: Vec<LineSegment>,
    granular_points: Vec<DVec2>,
    granular_counts: Vec<usize>,
    waypoints: Vec<Waypoint>,
}

impl Track {
    /// Erstellt eine leere Strecke
    pub fn new() -> Self {
        Self::default()
    }

    /// Klickpunkte `(lng, lat)` in Klickreihenfolge
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    /// Granulare Punkte aller Abschnitte, in Abschnittsreihenfolge verkettet
    pub fn granular_points(&self) -> &[DVec2] {
        &self.granular_points
    }

    /// Anzahl granularer Punkte je Abschnitt
    pub fn granular_counts(&self) -> &[usize] {
        &self.granular_counts
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn last_point(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Setzt den ersten Klickpunkt. Gibt `false` zurück, wenn schon Punkte existieren.
    pub fn push_start_point(&mut self, point: DVec2) -> bool {
        if !self.points.is_empty() {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Hängt einen Klickpunkt samt Abschnitt und dessen granularen Punkten an.
    ///
    /// Gibt `None` zurück (ohne Änderung), wenn es keinen Vorgängerpunkt gibt.
    pub fn push_segment(
        &mut self,
        to: DVec2,
        distance: f64,
        granular: Vec<DVec2>,
    ) -> Option<&LineSegment> {
        let from = self.last_point()?;
        let segment = LineSegment::new(from, to, distance, self.total_distance());

        self.points.push(to);
        self.lines.push(segment);
        self.granular_counts.push(granular.len());
        self.granular_points.extend(granular);

        self.lines.last()
    }

    /// Entfernt den letzten Klickpunkt inklusive seines Abschnitts und genau der
    /// granularen Punkte, die dieser Abschnitt beigetragen hat.
    pub fn remove_last_point(&mut self) -> bool {
        if self.points.pop().is_none() {
            return false;
        }
        // Der erste Punkt hat keinen Abschnitt
        if self.lines.len() == self.points.len() && self.lines.pop().is_some() {
            if let Some(count) = self.granular_counts.pop() {
                let keep = self.granular_points.len().saturating_sub(count);
                self.granular_points.truncate(keep);
            }
        }
        true
    }

    /// Leert die Strecke vollständig (inklusive Wegpunkte).
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.granular_points.clear();
        self.granular_counts.clear();
        self.waypoints.clear();
    }

    /// Summe aller Abschnittslängen
    pub fn total_distance(&self) -> f64 {
        self.lines.iter().map(|l| l.distance).sum()
    }

    /// Gesamtdistanz mit zwei Nachkommastellen
    pub fn formatted_total_distance(&self) -> String {
        format!("{:.2}", self.total_distance())
    }

    // ── Wegpunkte ───────────────────────────────────────────────────

    /// Kurs am granularen Punkt `index` in Richtung des nächsten Punkts mit
    /// abweichender Position. Am Streckenende zählt die Richtung vom letzten
    /// abweichenden Vorgänger, ein einzelner Punkt hat Kurs 0.
    pub fn heading_at(&self, index: usize) -> Option<f64> {
        let here = *self.granular_points.get(index)?;

        if let Some(next) = self.granular_points[index + 1..]
            .iter()
            .find(|p| **p != here)
        {
            return Some(heading(here, *next));
        }
        if let Some(prev) = self.granular_points[..index]
            .iter()
            .rev()
            .find(|p| **p != here)
        {
            return Some(heading(*prev, here));
        }
        Some(0.0)
    }

    /// Legt einen Wegpunkt am granularen Punkt `index` an.
    ///
    /// `created_at_ms` wird zur Identität; kollidiert sie mit einem älteren
    /// Wegpunkt, wird sie auf den nächsten freien Wert angehoben.
    pub fn add_waypoint(
        &mut self,
        index: usize,
        name: Option<String>,
        created_at_ms: i64,
    ) -> Option<WaypointId> {
        let position = *self.granular_points.get(index)?;
        let heading = self.heading_at(index)?;

        let next_free = self
            .waypoints
            .iter()
            .map(|w| w.id.0.saturating_add(1))
            .max()
            .unwrap_or(i64::MIN);
        let id = WaypointId(created_at_ms.max(next_free));
        let name = name.unwrap_or_else(|| format!("WP {}", self.waypoints.len() + 1));

        self.waypoints
            .push(Waypoint::new(id, position, name, heading));
        Some(id)
    }

    pub fn find_waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id == id)
    }

    /// Benennt einen Wegpunkt um; die Identität bleibt unverändert.
    pub fn rename_waypoint(&mut self, id: WaypointId, name: &str) -> bool {
        match self.waypoints.iter_mut().find(|w| w.id == id) {
            Some(waypoint) => {
                waypoint.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove_waypoint(&mut self, id: WaypointId) -> bool {
        let before = self.waypoints.len();
        self.waypoints.retain(|w| w.id != id);
        self.waypoints.len() != before
    }

    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }
}
