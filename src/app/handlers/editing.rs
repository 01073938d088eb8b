//! Handler für Marker-Editing (Anlegen, Feld-Updates, Entfernen, Verschieben).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{FieldEdit, LatLng};

/// Legt einen partiellen Marker an der Position an.
pub fn create_marker(state: &mut AppState, position: LatLng) {
    use_cases::editing::create_marker_at(state, position);
}

/// Aktualisiert ein Feld des Markers an der Position.
pub fn update_field(state: &mut AppState, position: LatLng, edit: FieldEdit) {
    use_cases::editing::update_marker_field(state, position, edit);
}

/// Entfernt den Marker an der Position.
pub fn remove_marker(state: &mut AppState, position: LatLng) {
    use_cases::editing::remove_marker(state, position);
}

/// Verschiebt einen Marker auf eine neue Position (Drag-Ende).
pub fn move_marker(state: &mut AppState, from: LatLng, to: LatLng) {
    use_cases::editing::move_marker(state, from, to);
}
