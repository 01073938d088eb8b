use crate::core::{FieldEdit, LatLng};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Partiellen Marker an der Position anlegen
    CreateMarkerAt { position: LatLng },
    /// Marker-Editor für die Position öffnen
    OpenMarkerEditor { position: LatLng, is_new: bool },
    /// Marker-Editor schließen (inkl. Aufräumen leerer Partials)
    CloseMarkerEditor,
    /// Feld des Markers an der Position aktualisieren
    UpdateMarkerField { position: LatLng, edit: FieldEdit },
    /// Marker an der Position entfernen
    RemoveMarker { position: LatLng },
    /// Marker auf neue Position verschieben (Schlüsselwechsel)
    MoveMarker { from: LatLng, to: LatLng },
    /// Import-Dialog öffnen
    OpenImportDialog,
    /// Import-Dialog schließen (ohne Auswahl)
    CloseImportDialog,
    /// Gelesene Archiv-Bytes verarbeiten (inkl. Überschreib-Gate)
    IngestArchive { contents: String },
    /// Überschreiben bestätigen und geparkte Marker übernehmen
    ConfirmOverwrite,
    /// Überschreiben ablehnen, bestehenden Workspace behalten
    DeclineOverwrite,
    /// Workspace als Download-Payload exportieren
    ExportWorkspace,
    /// Neue Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen und persistieren
    ResetOptions,
}
