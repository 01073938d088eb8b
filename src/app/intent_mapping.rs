//! Mapping von Host-Intents auf mutierende App-Commands.
//!
//! Hier sitzen die Modus-Gates: Signale, die im aktuellen [`UiMode`]
//! ungültig sind, werden auf eine leere Command-Liste abgebildet und damit
//! ignoriert (z.B. der Export-Shortcut bei offenem Modal).

use super::state::UiMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapClicked { position } => {
            if !state.ui.is_idle() || !position.is_finite() {
                return Vec::new();
            }
            if state.workspace.contains(position) {
                // Doppelklick auf belegte Position: kein zweiter Datensatz,
                // stattdessen Editor für den bestehenden öffnen
                vec![AppCommand::OpenMarkerEditor {
                    position,
                    is_new: false,
                }]
            } else {
                vec![
                    AppCommand::CreateMarkerAt { position },
                    AppCommand::OpenMarkerEditor {
                        position,
                        is_new: true,
                    },
                ]
            }
        }
        AppIntent::MarkerEditRequested { position } => {
            if state.ui.is_idle() && state.workspace.contains(position) {
                vec![AppCommand::OpenMarkerEditor {
                    position,
                    is_new: false,
                }]
            } else {
                Vec::new()
            }
        }
        AppIntent::MarkerRemoveRequested { position } => match state.ui.mode {
            UiMode::Idle => vec![AppCommand::RemoveMarker { position }],
            UiMode::EditingMarker {
                position: editing, ..
            } if editing == position => vec![
                AppCommand::RemoveMarker { position },
                AppCommand::CloseMarkerEditor,
            ],
            _ => Vec::new(),
        },
        AppIntent::MarkerDragEnded { from, to } => {
            if state.ui.is_idle() && to.is_finite() {
                vec![AppCommand::MoveMarker { from, to }]
            } else {
                Vec::new()
            }
        }
        AppIntent::FieldEdited { position, edit } => match state.ui.mode {
            UiMode::EditingMarker {
                position: editing, ..
            } if editing == position => {
                vec![AppCommand::UpdateMarkerField { position, edit }]
            }
            _ => Vec::new(),
        },
        AppIntent::EditorClosed => match state.ui.mode {
            UiMode::EditingMarker { .. } => vec![AppCommand::CloseMarkerEditor],
            _ => Vec::new(),
        },
        AppIntent::ImportRequested => {
            if state.ui.is_idle() {
                vec![AppCommand::OpenImportDialog]
            } else {
                Vec::new()
            }
        }
        AppIntent::ExportRequested => {
            // Shortcut ist unterdrückt, solange ein Modal offen ist
            if state.ui.is_idle() {
                vec![AppCommand::ExportWorkspace]
            } else {
                Vec::new()
            }
        }
        AppIntent::ImportFileRead { contents } => match state.ui.mode {
            UiMode::ImportDialog => vec![AppCommand::IngestArchive { contents }],
            _ => Vec::new(),
        },
        AppIntent::ImportDialogDismissed => match state.ui.mode {
            UiMode::ImportDialog => vec![AppCommand::CloseImportDialog],
            _ => Vec::new(),
        },
        AppIntent::OverwriteConfirmed => {
            if state.ui.mode == UiMode::ImportDialog
                && state.ui.import_dialog.pending_overwrite.is_some()
            {
                vec![AppCommand::ConfirmOverwrite]
            } else {
                Vec::new()
            }
        }
        AppIntent::OverwriteDeclined => {
            if state.ui.mode == UiMode::ImportDialog
                && state.ui.import_dialog.pending_overwrite.is_some()
            {
                vec![AppCommand::DeclineOverwrite]
            } else {
                Vec::new()
            }
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
