use super::map_intent_to_commands;
use crate::app::state::UiMode;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::LatLng;

fn editing_state(position: LatLng) -> AppState {
    let mut state = AppState::new();
    state.workspace.add(position);
    state.ui.mode = UiMode::EditingMarker {
        position,
        is_new: true,
    };
    state
}

#[test]
fn test_map_klick_auf_freie_position_erzeugt_und_oeffnet() {
    let state = AppState::new();
    let position = LatLng::new(41.8, -72.25);

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { position });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::CreateMarkerAt { .. }));
    assert!(matches!(
        commands[1],
        AppCommand::OpenMarkerEditor { is_new: true, .. }
    ));
}

#[test]
fn test_map_klick_auf_belegte_position_oeffnet_bestehenden() {
    let mut state = AppState::new();
    let position = LatLng::new(41.8, -72.25);
    state.workspace.add(position);

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { position });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::OpenMarkerEditor { is_new: false, .. }
    ));
}

#[test]
fn test_map_klick_mit_nan_koordinate_wird_verworfen() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            position: LatLng::new(f64::NAN, 0.0),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_export_shortcut_ist_in_modals_unterdrueckt() {
    let position = LatLng::new(1.0, 2.0);

    let idle = AppState::new();
    assert!(!map_intent_to_commands(&idle, AppIntent::ExportRequested).is_empty());

    let editing = editing_state(position);
    assert!(map_intent_to_commands(&editing, AppIntent::ExportRequested).is_empty());

    let mut importing = AppState::new();
    importing.ui.mode = UiMode::ImportDialog;
    assert!(map_intent_to_commands(&importing, AppIntent::ExportRequested).is_empty());
}

#[test]
fn test_import_shortcut_nur_in_idle() {
    let editing = editing_state(LatLng::new(1.0, 2.0));
    assert!(map_intent_to_commands(&editing, AppIntent::ImportRequested).is_empty());
}

#[test]
fn test_field_edit_ausserhalb_des_editors_wird_ignoriert() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::FieldEdited {
            position: LatLng::new(1.0, 2.0),
            edit: crate::core::FieldEdit::Name("Library".to_string()),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_field_edit_fuer_anderen_marker_wird_ignoriert() {
    let state = editing_state(LatLng::new(1.0, 2.0));
    let commands = map_intent_to_commands(
        &state,
        AppIntent::FieldEdited {
            position: LatLng::new(9.0, 9.0),
            edit: crate::core::FieldEdit::Name("Library".to_string()),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_overwrite_bestaetigung_braucht_geparkte_marker() {
    let mut state = AppState::new();
    state.ui.mode = UiMode::ImportDialog;

    assert!(map_intent_to_commands(&state, AppIntent::OverwriteConfirmed).is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::OverwriteDeclined).is_empty());

    state.ui.import_dialog.pending_overwrite = Some(Vec::new());
    assert!(matches!(
        map_intent_to_commands(&state, AppIntent::OverwriteConfirmed)[..],
        [AppCommand::ConfirmOverwrite]
    ));
}

#[test]
fn test_file_read_ausserhalb_des_dialogs_wird_ignoriert() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::ImportFileRead {
            contents: "[]".to_string(),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_remove_waehrend_editierung_schliesst_editor_mit() {
    let position = LatLng::new(1.0, 2.0);
    let state = editing_state(position);

    let commands = map_intent_to_commands(&state, AppIntent::MarkerRemoveRequested { position });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::RemoveMarker { .. }));
    assert!(matches!(commands[1], AppCommand::CloseMarkerEditor));
}
