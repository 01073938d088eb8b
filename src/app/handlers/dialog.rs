//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::state::UiMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Öffnet den Marker-Editor für die Position.
pub fn open_marker_editor(state: &mut AppState, position: crate::core::LatLng, is_new: bool) {
    state.ui.mode = UiMode::EditingMarker { position, is_new };
}

/// Schließt den Marker-Editor und räumt ggf. leere Partials auf.
pub fn close_marker_editor(state: &mut AppState) {
    use_cases::editing::close_editor(state);
}

/// Öffnet den Import-Dialog.
pub fn open_import_dialog(state: &mut AppState) {
    state.ui.import_dialog.reset();
    state.ui.mode = UiMode::ImportDialog;
}

/// Schließt den Import-Dialog ohne Auswahl.
pub fn close_import_dialog(state: &mut AppState) {
    state.ui.import_dialog.reset();
    state.ui.mode = UiMode::Idle;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
