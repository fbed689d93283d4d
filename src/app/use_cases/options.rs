//! Use-Case-Funktionen für Laufzeit-Optionen.
//!
//! Änderungen wirken nur auf künftige Abschnitte; bereits berechnete
//! granulare Punkte bleiben unverändert.

use crate::app::AppState;
use crate::core::ProjectionConfig;
use crate::shared::{is_valid_step_length, MIN_STEP_LENGTH};
use anyhow::Context;

/// Setzt die Schrittweite. Werte unter [`MIN_STEP_LENGTH`] werden verworfen.
pub fn set_step_length(state: &mut AppState, step_length: f64) {
    if !is_valid_step_length(step_length) {
        log::warn!(
            "Schrittweite {} ungültig (mindestens {}), behalte {}",
            step_length,
            MIN_STEP_LENGTH,
            state.options.step_length
        );
        return;
    }
    state.options.step_length = step_length;
    log::info!("Schrittweite: {}", step_length);
}

/// Ersetzt die Projektion. Bei ungültiger Definition bleibt die alte aktiv.
pub fn set_projection(state: &mut AppState, definition: &str) -> anyhow::Result<()> {
    let config = ProjectionConfig::parse(definition)
        .with_context(|| format!("Projektion '{}' ungültig", definition))?;
    let projection = config.build();
    projection
        .ensure_ready()
        .with_context(|| format!("Projektion '{}' nicht aufbaubar", definition))?;
    state.projection = projection;
    state.options.projection = config.to_string();
    log::info!("Projektion: {}", state.options.projection);
    Ok(())
}
