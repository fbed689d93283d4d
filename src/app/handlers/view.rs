//! Handler für die Kartenansicht.

use crate::app::AppState;

/// Schaltet zyklisch zum nächsten Kartenstil.
pub fn cycle_map_style(state: &mut AppState) {
    let count = state.options.map_styles.len();
    if count == 0 {
        return;
    }
    state.view.style_index = (state.view.style_index + 1) % count;
    log::info!(
        "Kartenstil: {} ({})",
        state.style_label(),
        state.style_url().unwrap_or_default()
    );
}
