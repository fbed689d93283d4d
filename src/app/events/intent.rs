use crate::core::WaypointId;
use crate::export::ExportKind;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Karte an geographischer Position `(lng, lat)`
    MapClicked { coordinate: DVec2 },
    /// Letzten Klickpunkt entfernen
    RemoveLastPointRequested,
    /// Strecke vollständig leeren
    ClearRequested,
    /// Nächsten Kartenstil wählen
    CycleStyleRequested,
    /// Klick auf einen granularen Punkt (legt einen Wegpunkt an)
    GranularPointClicked { index: usize },
    /// Name eines Wegpunkts wurde im Editor geändert
    WaypointNameEdited { id: WaypointId, name: String },
    /// Wegpunkt löschen
    WaypointRemoveRequested { id: WaypointId },
    /// Alle Wegpunkte löschen
    WaypointsClearRequested,
    /// Liste als CSV exportieren
    ExportRequested { kind: ExportKind },
    /// Schrittweite der granularen Punkte geändert
    StepLengthChanged { step_length: f64 },
    /// Projektionsdefinition geändert
    ProjectionChanged { definition: String },
    /// Anwendung beenden
    ExitRequested,
}
