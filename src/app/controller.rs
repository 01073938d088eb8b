//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Host-Events und Use-Cases auf den AppState.
///
/// Alle Aufrufe erfolgen aus einem single-threaded Event-Kontext; jede
/// Mutation ist abgeschlossen, bevor die Kontrolle zum Host zurückkehrt.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
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
            // === Editing ===
            AppCommand::CreateMarkerAt { position } => {
                handlers::editing::create_marker(state, position)
            }
            AppCommand::UpdateMarkerField { position, edit } => {
                handlers::editing::update_field(state, position, edit)
            }
            AppCommand::RemoveMarker { position } => {
                handlers::editing::remove_marker(state, position)
            }
            AppCommand::MoveMarker { from, to } => handlers::editing::move_marker(state, from, to),

            // === Datei-I/O ===
            AppCommand::ExportWorkspace => handlers::file_io::export_workspace(state)?,
            AppCommand::IngestArchive { contents } => {
                handlers::file_io::ingest_archive(state, &contents)
            }
            AppCommand::ConfirmOverwrite => handlers::file_io::confirm_overwrite(state),
            AppCommand::DeclineOverwrite => handlers::file_io::decline_overwrite(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenMarkerEditor { position, is_new } => {
                handlers::dialog::open_marker_editor(state, position, is_new)
            }
            AppCommand::CloseMarkerEditor => handlers::dialog::close_marker_editor(state),
            AppCommand::OpenImportDialog => handlers::dialog::open_import_dialog(state),
            AppCommand::CloseImportDialog => handlers::dialog::close_import_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }
}
