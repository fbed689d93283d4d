use crate::core::WaypointId;
use crate::export::ExportKind;
use chrono::NaiveDateTime;
use glam::DVec2;

/// Mutierende Commands, die vom Controller zentral ausgeführt werden.
///
/// Zeitabhängige Werte (Wegpunkt-Identität, Exportzeitpunkt) werden beim
/// Mapping festgelegt, damit ein Command-Log deterministisch nachspielbar ist.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Klickpunkt anhängen, Abschnitt und granulare Punkte berechnen
    AddClickPoint { coordinate: DVec2 },
    /// Letzten Klickpunkt samt Abschnitt entfernen
    RemoveLastPoint,
    /// Strecke leeren
    ClearTrack,
    /// Kartenstil zyklisch weiterschalten
    CycleMapStyle,
    /// Wegpunkt am granularen Punkt anlegen
    AddWaypoint {
        granular_index: usize,
        created_at_ms: i64,
    },
    /// Wegpunkt umbenennen
    RenameWaypoint { id: WaypointId, name: String },
    /// Wegpunkt entfernen
    RemoveWaypoint { id: WaypointId },
    /// Alle Wegpunkte entfernen
    ClearWaypoints,
    /// Liste in eine CSV-Datei schreiben
    Export {
        kind: ExportKind,
        local_time: NaiveDateTime,
    },
    /// Schrittweite setzen
    SetStepLength { step_length: f64 },
    /// Projektion ersetzen
    SetProjection { definition: String },
    /// Anwendung beenden
    RequestExit,
}
