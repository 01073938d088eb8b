/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung
/// (Workspace, UI-Modus, Optionen).
pub mod app_state;
pub mod ui;

pub use app_state::{AppState, DownloadRequest};
pub use ui::{ImportDialogState, UiMode, UiState};
