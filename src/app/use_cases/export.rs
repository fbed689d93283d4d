//! Use-Case-Funktionen für den CSV-Export.
//! Alle Dateisystem-Operationen des Exports sind hier zentralisiert.

use crate::app::AppState;
use crate::export::{export_file_name, ExportKind};
use anyhow::Context;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Schreibt die gewählte Liste nach `options.export_dir`.
///
/// Leere Listen erzeugen keine Datei (`Ok(None)`). Eine vorhandene Datei
/// gleichen Namens wird nie überschrieben.
pub fn export_list(
    state: &mut AppState,
    kind: ExportKind,
    local_time: NaiveDateTime,
) -> anyhow::Result<Option<PathBuf>> {
    let Some(text) = kind.render(&state.track) else {
        log::info!("Export übersprungen: keine {} vorhanden", kind);
        state.ui.status_message = Some(format!("Keine {} zum Exportieren", kind));
        return Ok(None);
    };

    let dir = &state.options.export_dir;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Exportverzeichnis {} nicht anlegbar", dir.display()))?;
    let path = unique_path(dir, &export_file_name(local_time));
    std::fs::write(&path, text)
        .with_context(|| format!("Export nach {} fehlgeschlagen", path.display()))?;

    log::info!("{} exportiert nach: {}", kind, path.display());
    state.ui.status_message = Some(format!("Exportiert: {}", path.display()));
    state.ui.last_export = Some(path.clone());
    Ok(Some(path))
}

/// Erster freie Pfad `name.csv`, `name_1.csv`, `name_2.csv`, …
fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|n| dir.join(format!("{stem}_{n}{extension}")))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}
