use crate::app::CommandLog;
use crate::core::{AnnotationStore, PresetCatalog};
use crate::shared::EditorOptions;

use super::{UiMode, UiState};

/// Export-Payload für das Datei-Speichern-Utility des Hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    /// Zieldateiname (Konvention: `cartographer.json`)
    pub file_name: String,
    /// Serialisierter Workspace
    pub contents: String,
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Der Annotations-Store (einziger geteilter mutierbarer Zustand;
    /// exklusiv vom Controller mutiert)
    pub workspace: AnnotationStore,
    /// UI-State (Modus, Dialoge, Statusmeldung)
    pub ui: UiState,
    /// Preset-Tabellen (read-only konsultiert)
    pub presets: PresetCatalog,
    /// Laufzeit-Optionen (Dateiname, Kartendefaults, Shortcuts)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host einen ausstehenden Datei-Download
    pub pending_download: Option<DownloadRequest>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit eingebauten Presets.
    pub fn new() -> Self {
        Self {
            workspace: AnnotationStore::new(),
            ui: UiState::new(),
            presets: PresetCatalog::builtin(),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            pending_download: None,
        }
    }

    /// Gibt die Anzahl der Marker zurück (für UI-Anzeige).
    pub fn marker_count(&self) -> usize {
        self.workspace.len()
    }

    /// Entnimmt einen ausstehenden Download-Payload.
    /// Der Host ruft dies nach jedem verarbeiteten Intent ab und stößt
    /// bei `Some` den Client-Download an.
    pub fn take_pending_download(&mut self) -> Option<DownloadRequest> {
        self.pending_download.take()
    }

    /// Gibt den aktuellen UI-Modus zurück.
    pub fn mode(&self) -> &UiMode {
        &self.ui.mode
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
