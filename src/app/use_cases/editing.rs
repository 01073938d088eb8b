//! Use-Cases für Marker-Editing.

use crate::app::state::UiMode;
use crate::app::AppState;
use crate::core::{FieldEdit, LatLng, WEEKDAYS};
use regex::Regex;

/// Muster für Uhrzeiten im 24-Stunden-Format.
const TIME_PATTERN: &str = r"^([01]\d|2[0-3]):[0-5]\d$";

/// Legt einen partiellen Marker an der Position an.
///
/// Das Mapping hat Duplikat und Endlichkeit bereits geprüft; ein dennoch
/// belegter Schlüssel ist ein stiller No-op.
pub fn create_marker_at(state: &mut AppState, position: LatLng) {
    match state.workspace.add(position) {
        Some(_) => log::info!("Marker angelegt bei {}", position),
        None => log::debug!("Position bereits belegt, kein neuer Marker: {}", position),
    }
}

/// Aktualisiert ein Feld des Markers an der Position.
///
/// Preset-Referenzen in Adresse/Beschreibung werden zur Editierzeit
/// kanonisch aufgelöst; Öffnungszeiten werden vor dem Speichern validiert.
/// Kein passender Datensatz ist ein stiller No-op (stale Referenz, kein
/// Nutzerfehler).
pub fn update_marker_field(state: &mut AppState, position: LatLng, edit: FieldEdit) {
    let edit = match edit {
        FieldEdit::Address(value) => FieldEdit::Address(state.presets.resolve_address(&value)),
        FieldEdit::Description(value) => {
            FieldEdit::Description(state.presets.resolve_description(&value))
        }
        FieldEdit::SetHours { day, open, close } => {
            if day >= WEEKDAYS.len() {
                log::warn!("Öffnungszeiten: ungültiger Tages-Index {}", day);
                return;
            }
            if !is_valid_time(&open) || !is_valid_time(&close) {
                log::warn!(
                    "Öffnungszeiten verworfen, kein HH:MM-Format: {} / {}",
                    open,
                    close
                );
                return;
            }
            FieldEdit::SetHours { day, open, close }
        }
        other => other,
    };

    if state.workspace.update_field(position, edit).is_none() {
        log::debug!("Feld-Update ohne Treffer bei {}", position);
    }
}

/// Entfernt den Marker an der Position. No-op wenn nicht vorhanden.
pub fn remove_marker(state: &mut AppState, position: LatLng) {
    if state.workspace.remove(position).is_some() {
        log::info!("Marker entfernt bei {}", position);
    }
}

/// Verschiebt einen Marker (Drag-Ende). Belegte Zielposition wird verweigert.
pub fn move_marker(state: &mut AppState, from: LatLng, to: LatLng) {
    if state.workspace.replace_position(from, to) {
        log::info!("Marker verschoben: {} -> {}", from, to);
    } else {
        log::warn!("Verschieben verweigert: {} -> {}", from, to);
    }
}

/// Schließt den Marker-Editor.
///
/// Ein frisch angelegter Datensatz, der noch partiell ist, wird je nach
/// Option verworfen statt als degenerierter Eintrag liegenzubleiben.
pub fn close_editor(state: &mut AppState) {
    if let UiMode::EditingMarker { position, is_new } = state.ui.mode {
        if is_new && state.options.discard_empty_partials {
            let is_still_partial = state
                .workspace
                .find(position)
                .is_some_and(|r| r.is_partial());
            if is_still_partial {
                state.workspace.remove(position);
                log::info!("Leerer partieller Marker verworfen bei {}", position);
            }
        }
    }
    state.ui.mode = UiMode::Idle;
}

/// Prüft eine Uhrzeit gegen das `HH:MM`-Format.
fn is_valid_time(value: &str) -> bool {
    Regex::new(TIME_PATTERN)
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}
