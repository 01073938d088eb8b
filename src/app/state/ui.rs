use crate::core::{LatLng, MarkerRecord};

/// Die drei wechselseitig exklusiven UI-Modi des Editors.
///
/// Export- und Import-Shortcuts sind nur in `Idle` wirksam; Feld-Editierungen
/// nur in `EditingMarker`. Der Modus ist ein expliziter Zustand, kein
/// impliziter Framework-Reaktivitätseffekt.
#[derive(Debug, Clone, PartialEq)]
pub enum UiMode {
    /// Kein Dialog offen
    Idle,
    /// Marker-Editor offen für den Datensatz an `position`.
    /// `is_new` = frisch per Klick angelegt (relevant fürs Aufräumen
    /// leerer Partials beim Schließen).
    EditingMarker { position: LatLng, is_new: bool },
    /// Datei-Import-Dialog offen
    ImportDialog,
}

/// Zustand des Import-Dialogs.
#[derive(Debug, Clone, Default)]
pub struct ImportDialogState {
    /// Geparste Marker, die auf die Überschreib-Bestätigung warten
    /// (nur gesetzt, wenn der Workspace beim Import nicht leer war)
    pub pending_overwrite: Option<Vec<MarkerRecord>>,
    /// Inline-Fehlermeldung des letzten Import-Versuchs
    pub error_notice: Option<String>,
}

impl ImportDialogState {
    /// Setzt den Dialog-Zustand vollständig zurück.
    pub fn reset(&mut self) {
        self.pending_overwrite = None;
        self.error_notice = None;
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Aktueller Modus
    pub mode: UiMode,
    /// Import-Dialog-Zustand (nur relevant im Modus `ImportDialog`)
    pub import_dialog: ImportDialogState,
    /// Temporäre Statusnachricht (z.B. Import-/Export-Ergebnis)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (Idle, keine Dialoge).
    pub fn new() -> Self {
        Self {
            mode: UiMode::Idle,
            import_dialog: ImportDialogState::default(),
            status_message: None,
        }
    }

    /// Gibt `true` zurück, wenn gerade kein Modal offen ist.
    pub fn is_idle(&self) -> bool {
        self.mode == UiMode::Idle
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
