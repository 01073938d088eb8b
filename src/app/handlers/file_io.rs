//! Handler für Datei-Operationen (Export, Import, Überschreib-Gate).

use crate::app::use_cases;
use crate::app::AppState;

/// Exportiert den Workspace als Download-Payload.
pub fn export_workspace(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::export_workspace(state)
}

/// Verarbeitet gelesene Archiv-Bytes (Parsen + Überschreib-Gate).
pub fn ingest_archive(state: &mut AppState, contents: &str) {
    use_cases::file_io::ingest_archive(state, contents);
}

/// Übernimmt geparkte Marker nach bestätigtem Überschreiben.
pub fn confirm_overwrite(state: &mut AppState) {
    use_cases::file_io::confirm_overwrite(state);
}

/// Verwirft geparkte Marker nach abgelehntem Überschreiben.
pub fn decline_overwrite(state: &mut AppState) {
    use_cases::file_io::decline_overwrite(state);
}
