use crate::core::{FieldEdit, LatLng};
use crate::shared::EditorOptions;

/// App-Intents: Eingaben aus Host/UI ohne direkte Mutationslogik.
///
/// Jede externe Signalquelle (Karten-Klicks, die beiden Tastatur-Shortcuts,
/// File-Reader-Abschluss, Marker-Affordances) feuert genau einmal pro
/// Ereignis; ungültige Signale für den aktuellen Modus werden beim Mapping
/// verworfen.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Kartenfläche (Koordinate aus dem Map-Renderer)
    MapClicked { position: LatLng },
    /// "edit"-Affordance eines bestehenden Markers
    MarkerEditRequested { position: LatLng },
    /// "remove"-Affordance eines Markers
    MarkerRemoveRequested { position: LatLng },
    /// Drag-Ende eines Markers (neue Koordinate vom Map-Renderer)
    MarkerDragEnded { from: LatLng, to: LatLng },
    /// Feld im Marker-Editor geändert
    FieldEdited { position: LatLng, edit: FieldEdit },
    /// Marker-Editor geschlossen (ohne Löschen)
    EditorClosed,
    /// Import-Shortcut gedrückt (`<`)
    ImportRequested,
    /// Export-Shortcut gedrückt (`>`)
    ExportRequested,
    /// File-Reader hat die gewählte Datei vollständig gelesen
    ImportFileRead { contents: String },
    /// Import-Dialog geschlossen (ohne Auswahl)
    ImportDialogDismissed,
    /// Überschreiben des nicht-leeren Workspace bestätigt
    OverwriteConfirmed,
    /// Überschreiben abgelehnt
    OverwriteDeclined,
    /// Optionen wurden geändert (sofortige Anwendung + Persistenz)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
