//! Zentrale Konfiguration für den Wegpunkt-Digitalisierer.
//!
//! `DigitizerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::LayerStyles;
use crate::core::ProjectionConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Digitalisierung ─────────────────────────────────────────────────

/// Standard-Schrittweite der granularen Punkte (Projektionseinheiten).
pub const STEP_LENGTH: f64 = 100.0;
/// Kleinste zulässige Schrittweite (Projektionseinheiten).
pub const MIN_STEP_LENGTH: f64 = 0.01;
/// Standard-Projektion: UTM Zone 18 Süd, WGS84, Meter.
pub const PROJECTION_DEFINITION: &str =
    "+proj=utm +zone=18 +south +datum=WGS84 +units=m +no_defs +type=crs";

// ── Karte ───────────────────────────────────────────────────────────

/// Hintergrund-Stile in Umschalt-Reihenfolge.
pub const MAP_STYLES: [&str; 4] = [
    "mapbox://styles/mapbox/streets-v12",
    "mapbox://styles/mapbox/satellite-v9",
    "mapbox://styles/mapbox/satellite-streets-v12",
    "mapbox://styles/mapbox/navigation-night-v1",
];

// ── Layer-Farben (Hex) ─────────────────────────────────────────────

/// Farbe der Streckenlinien (Orange).
pub const ROUTE_COLOR: &str = "#ff8c00";
/// Füllfarbe der Klickpunkte (Orange).
pub const POINT_FILL_COLOR: &str = "#ff8c00";
/// Füllfarbe der granularen Punkte (Rot).
pub const GRANULAR_FILL_COLOR: &str = "#ff0000";
/// Umrissfarbe aller Punkte (Weiß).
pub const OUTLINE_COLOR: &str = "#ffffff";

/// Anfangsansicht der Karte.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InitialView {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            longitude: -71.978,
            latitude: -13.516,
            zoom: 13.0,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `waypoint_digitizer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DigitizerOptions {
    // ── Digitalisierung ─────────────────────────────────────────
    /// Abstand der granularen Punkte in Projektionseinheiten
    pub step_length: f64,
    /// PROJ-Definition der planaren Projektion
    pub projection: String,

    // ── Karte ───────────────────────────────────────────────────
    /// Hintergrund-Stile (URLs), zyklisch umschaltbar
    pub map_styles: Vec<String>,

    // ── Layer ───────────────────────────────────────────────────
    /// Linienfarbe der Abschnitte
    pub route_color: String,
    /// Linienbreite der Abschnitte
    pub route_width: f32,
    /// Füllfarbe der Klickpunkte
    pub point_fill_color: String,
    /// Radius der Klickpunkte
    pub point_radius: f32,
    /// Umrissbreite der Klickpunkte
    pub point_outline_width: f32,
    /// Füllfarbe der granularen Punkte
    pub granular_fill_color: String,
    /// Radius der granularen Punkte
    pub granular_radius: f32,
    /// Umrissbreite der granularen Punkte
    pub granular_outline_width: f32,
    /// Umrissfarbe aller Punkte
    pub outline_color: String,

    // ── Export ──────────────────────────────────────────────────
    /// Zielverzeichnis für CSV-Exporte
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    // Tabellen müssen in TOML nach allen einfachen Werten stehen
    /// Anfangsansicht der Karte
    #[serde(default)]
    pub initial_view: InitialView,
}

impl Default for DigitizerOptions {
    fn default() -> Self {
        Self {
            step_length: STEP_LENGTH,
            projection: PROJECTION_DEFINITION.to_string(),

            map_styles: MAP_STYLES.iter().map(|s| s.to_string()).collect(),

            route_color: ROUTE_COLOR.to_string(),
            route_width: 5.0,
            point_fill_color: POINT_FILL_COLOR.to_string(),
            point_radius: 1.0,
            point_outline_width: 0.5,
            granular_fill_color: GRANULAR_FILL_COLOR.to_string(),
            granular_radius: 0.5,
            granular_outline_width: 0.2,
            outline_color: OUTLINE_COLOR.to_string(),

            export_dir: default_export_dir(),
            initial_view: InitialView::default(),
        }
    }
}

/// Serde-Default für `export_dir` (Abwärtskompatibilität).
fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl DigitizerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("waypoint_digitizer"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("waypoint_digitizer.toml")
    }

    /// Parst die Projektionsdefinition.
    pub fn projection_config(&self) -> anyhow::Result<ProjectionConfig> {
        ProjectionConfig::parse(&self.projection)
            .with_context(|| format!("Projektion '{}' ungültig", self.projection))
    }

    /// Prüft alle Werte beim Start. Ungültige Optionen werden abgewiesen.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !is_valid_step_length(self.step_length) {
            anyhow::bail!(
                "Schrittweite muss endlich und mindestens {} sein (erhalten: {})",
                MIN_STEP_LENGTH,
                self.step_length
            );
        }
        if self.map_styles.is_empty() {
            anyhow::bail!("Mindestens ein Kartenstil erforderlich");
        }
        self.projection_config()?;
        LayerStyles::from_options(self).context("Layer-Farbe ungültig")?;
        Ok(())
    }
}

/// Schrittweite ist endlich und nicht kleiner als [`MIN_STEP_LENGTH`].
pub fn is_valid_step_length(step_length: f64) -> bool {
    step_length.is_finite() && step_length >= MIN_STEP_LENGTH
}
