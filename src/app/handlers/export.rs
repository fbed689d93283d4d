//! Handler für den CSV-Export.

use crate::app::use_cases;
use crate::app::AppState;
use crate::export::ExportKind;
use chrono::NaiveDateTime;

/// Schreibt die gewählte Liste und propagiert I/O-Fehler an den Aufrufer.
pub fn export(
    state: &mut AppState,
    kind: ExportKind,
    local_time: NaiveDateTime,
) -> anyhow::Result<()> {
    use_cases::export::export_list(state, kind, local_time).map(|_| ())
}
