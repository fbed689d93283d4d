use super::CommandLog;
use crate::core::{Projection, ProjectionConfig, Track};
use crate::shared::{DigitizerOptions, LayerStyles};
use std::path::PathBuf;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Index des aktiven Kartenstils in `options.map_styles`
    pub style_index: usize,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Statusnachricht für die Statuszeile
    pub status_message: Option<String>,
    /// Pfad des zuletzt geschriebenen Exports
    pub last_export: Option<PathBuf>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Digitalisierte Strecke
    pub track: Track,
    /// Aktive planare Projektion
    pub projection: Projection,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Command-Log
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: DigitizerOptions,
    /// Aus den Optionen dekodierte Layer-Farben
    pub layer_styles: LayerStyles,
    /// Signal zum Beenden der Anwendung
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen.
    pub fn new() -> Self {
        let options = DigitizerOptions::default();
        Self {
            track: Track::new(),
            projection: ProjectionConfig::default().build(),
            view: ViewState::default(),
            ui: UiState::default(),
            command_log: CommandLog::new(),
            layer_styles: LayerStyles::default(),
            options,
            should_exit: false,
        }
    }

    /// Erstellt einen App-State mit geprüften Optionen.
    pub fn with_options(options: DigitizerOptions) -> anyhow::Result<Self> {
        options.validate()?;
        let projection = options.projection_config()?.build();
        projection.ensure_ready()?;
        let layer_styles = LayerStyles::from_options(&options)?;
        Ok(Self {
            projection,
            layer_styles,
            options,
            ..Self::new()
        })
    }

    /// URL des aktiven Kartenstils.
    pub fn style_url(&self) -> Option<&str> {
        self.options
            .map_styles
            .get(self.view.style_index)
            .map(String::as_str)
    }

    /// Beschriftung des Stil-Schalters, z.B. `Style 2/4`.
    pub fn style_label(&self) -> String {
        format!(
            "Style {}/{}",
            self.view.style_index + 1,
            self.options.map_styles.len()
        )
    }

    /// Zeilen der Statusanzeige: Zähler, Gesamtdistanz und Stil.
    pub fn status_lines(&self) -> Vec<String> {
        vec![
            format!("Lines: {}", self.track.lines().len()),
            format!("Points: {}", self.track.points().len()),
            format!("dPoints: {}", self.track.granular_points().len()),
            format!("Total: {}", self.track.formatted_total_distance()),
            self.style_label(),
        ]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_reports_empty_status() {
        let state = AppState::new();
        assert_eq!(
            state.status_lines(),
            vec!["Lines: 0", "Points: 0", "dPoints: 0", "Total: 0.00", "Style 1/4"]
        );
        assert_eq!(state.style_url(), Some("mapbox://styles/mapbox/streets-v12"));
    }

    #[test]
    fn with_options_rejects_invalid_options() {
        let options = DigitizerOptions {
            step_length: -1.0,
            ..Default::default()
        };
        assert!(AppState::with_options(options).is_err());
    }

    #[test]
    fn with_options_builds_configured_projection() {
        let options = DigitizerOptions {
            projection: "+proj=utm +zone=30 +datum=WGS84 +units=km".into(),
            ..Default::default()
        };
        let state = AppState::with_options(options).unwrap();
        assert_eq!(state.projection.config().zone, 30);
        assert_eq!(state.layer_styles, LayerStyles::default());
    }
}
