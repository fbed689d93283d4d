//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Digitalisierung ===
            AppCommand::AddClickPoint { coordinate } => {
                handlers::digitize::add_click_point(state, coordinate)?
            }
            AppCommand::RemoveLastPoint => handlers::digitize::remove_last_point(state),
            AppCommand::ClearTrack => handlers::digitize::clear(state),

            // === Wegpunkte ===
            AppCommand::AddWaypoint {
                granular_index,
                created_at_ms,
            } => handlers::waypoints::add(state, granular_index, created_at_ms),
            AppCommand::RenameWaypoint { id, name } => {
                handlers::waypoints::rename(state, id, &name)
            }
            AppCommand::RemoveWaypoint { id } => handlers::waypoints::remove(state, id),
            AppCommand::ClearWaypoints => handlers::waypoints::clear(state),

            // === Karte ===
            AppCommand::CycleMapStyle => handlers::view::cycle_map_style(state),

            // === Export ===
            AppCommand::Export { kind, local_time } => {
                handlers::export::export(state, kind, local_time)?
            }

            // === Optionen ===
            AppCommand::SetStepLength { step_length } => {
                handlers::options::set_step_length(state, step_length)
            }
            AppCommand::SetProjection { definition } => {
                handlers::options::set_projection(state, &definition)?
            }

            // === Anwendung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
