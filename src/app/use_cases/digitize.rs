//! Use-Case-Funktionen für die Digitalisierung per Kartenklick.

use crate::app::AppState;
use crate::core::{distance, divide_segment, GeometryError};
use anyhow::Context;
use glam::DVec2;

/// Verarbeitet einen Kartenklick an `(lng, lat)`.
///
/// Der erste Klick setzt nur den Startpunkt. Jeder weitere Klick projiziert
/// Vorgänger und neuen Punkt, unterteilt den Abschnitt in der aktuellen
/// Schrittweite und hängt Punkt, Abschnitt und granulare Punkte an.
/// Ein Klick auf den Vorgängerpunkt wird ignoriert.
pub fn add_click_point(state: &mut AppState, coordinate: DVec2) -> anyhow::Result<()> {
    let projection = &state.projection;
    let to = projection
        .forward(coordinate)
        .with_context(|| format!("Klickpunkt ({}, {}) nicht projizierbar", coordinate.x, coordinate.y))?;

    let Some(previous) = state.track.last_point() else {
        state.track.push_start_point(coordinate);
        log::info!("Startpunkt gesetzt: ({:.6}, {:.6})", coordinate.x, coordinate.y);
        return Ok(());
    };
    let from = projection.forward(previous)?;

    let planar = match divide_segment(from, to, state.options.step_length) {
        Ok(points) => points,
        Err(GeometryError::CoincidentEndpoints) => {
            log::warn!("Klick auf den letzten Punkt ignoriert");
            state.ui.status_message = Some("Punkt bereits gesetzt".into());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let granular = planar
        .into_iter()
        .map(|p| projection.inverse(p))
        .collect::<Result<Vec<_>, _>>()
        .context("Granulare Punkte nicht rückprojizierbar")?;

    let length = distance(from, to);
    if let Some(segment) = state.track.push_segment(coordinate, length, granular) {
        log::info!(
            "Abschnitt {:.2} angehängt (gesamt {:.2})",
            segment.distance,
            segment.cumulative_distance
        );
    }
    state.ui.status_message = None;
    Ok(())
}

/// Entfernt den letzten Klickpunkt samt Abschnitt und granularen Punkten.
pub fn remove_last_point(state: &mut AppState) {
    if state.track.remove_last_point() {
        log::info!(
            "Letzter Punkt entfernt, verbleibend: {}",
            state.track.points().len()
        );
    } else {
        log::debug!("Keine Punkte zum Entfernen");
    }
}

/// Leert Punkte, Abschnitte, granulare Punkte und Wegpunkte.
pub fn clear(state: &mut AppState) {
    state.track.clear();
    state.ui.status_message = None;
    log::info!("Strecke geleert");
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const START: DVec2 = DVec2::new(-71.978, -13.516);

    /// Punkt, der in Projektionseinheiten `meters` nördlich von `START` liegt.
    fn north_of_start(state: &AppState, meters: f64) -> DVec2 {
        let planar = state.projection.forward(START).unwrap() + DVec2::new(0.0, meters);
        state.projection.inverse(planar).unwrap()
    }

    #[test]
    fn first_click_sets_start_point_only() {
        let mut state = AppState::new();

        add_click_point(&mut state, START).unwrap();

        assert_eq!(state.track.points(), &[START]);
        assert!(state.track.lines().is_empty());
        assert!(state.track.granular_points().is_empty());
    }

    #[test]
    fn second_click_subdivides_segment() {
        let mut state = AppState::new();
        let end = north_of_start(&state, 250.0);

        add_click_point(&mut state, START).unwrap();
        add_click_point(&mut state, end).unwrap();

        assert_eq!(state.track.lines().len(), 1);
        assert_abs_diff_eq!(state.track.total_distance(), 250.0, epsilon = 1e-3);
        // 0, 100, 200 und Endpunkt
        assert_eq!(state.track.granular_counts(), &[4]);
        let granular = state.track.granular_points();
        assert_abs_diff_eq!(granular[0].x, START.x, epsilon = 1e-6);
        assert_abs_diff_eq!(granular[0].y, START.y, epsilon = 1e-6);
        assert_abs_diff_eq!(granular[3].y, end.y, epsilon = 1e-6);
    }

    #[test]
    fn click_on_last_point_is_ignored() {
        let mut state = AppState::new();
        add_click_point(&mut state, START).unwrap();

        add_click_point(&mut state, START).unwrap();

        assert_eq!(state.track.points().len(), 1);
        assert!(state.track.lines().is_empty());
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn unprojectable_click_leaves_track_unchanged() {
        let mut state = AppState::new();
        add_click_point(&mut state, START).unwrap();

        assert!(add_click_point(&mut state, DVec2::new(0.0, 95.0)).is_err());

        assert_eq!(state.track.points(), &[START]);
    }

    #[test]
    fn remove_and_clear() {
        let mut state = AppState::new();
        let end = north_of_start(&state, 150.0);
        add_click_point(&mut state, START).unwrap();
        add_click_point(&mut state, end).unwrap();

        remove_last_point(&mut state);
        assert_eq!(state.track.points(), &[START]);
        assert!(state.track.granular_points().is_empty());

        add_click_point(&mut state, end).unwrap();
        clear(&mut state);
        assert!(state.track.is_empty());
        remove_last_point(&mut state);
        assert!(state.track.is_empty());
    }
}
