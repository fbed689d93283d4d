//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use chrono::{Local, Utc};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapClicked { coordinate } => vec![AppCommand::AddClickPoint { coordinate }],
        AppIntent::RemoveLastPointRequested => {
            if state.track.is_empty() {
                log::debug!("Keine Punkte zum Entfernen");
                vec![]
            } else {
                vec![AppCommand::RemoveLastPoint]
            }
        }
        AppIntent::ClearRequested => vec![AppCommand::ClearTrack],
        AppIntent::CycleStyleRequested => vec![AppCommand::CycleMapStyle],
        AppIntent::GranularPointClicked { index } => {
            if index < state.track.granular_points().len() {
                vec![AppCommand::AddWaypoint {
                    granular_index: index,
                    created_at_ms: Utc::now().timestamp_millis(),
                }]
            } else {
                log::warn!("Granularer Punkt {} existiert nicht", index);
                vec![]
            }
        }
        AppIntent::WaypointNameEdited { id, name } => {
            vec![AppCommand::RenameWaypoint { id, name }]
        }
        AppIntent::WaypointRemoveRequested { id } => vec![AppCommand::RemoveWaypoint { id }],
        AppIntent::WaypointsClearRequested => vec![AppCommand::ClearWaypoints],
        AppIntent::ExportRequested { kind } => vec![AppCommand::Export {
            kind,
            local_time: Local::now().naive_local(),
        }],
        AppIntent::StepLengthChanged { step_length } => {
            vec![AppCommand::SetStepLength { step_length }]
        }
        AppIntent::ProjectionChanged { definition } => {
            vec![AppCommand::SetProjection { definition }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
