//! Use-Cases für Export und Import des Workspace.

use crate::app::state::{DownloadRequest, UiMode};
use crate::app::AppState;
use crate::core::MarkerRecord;
use crate::json;

/// Exportiert den Workspace-Snapshot als Download-Payload für den Host.
pub fn export_workspace(state: &mut AppState) -> anyhow::Result<()> {
    let contents = json::write_cartographer_archive(state.workspace.snapshot())?;
    let file_name = state.options.export_file_name.clone();
    log::info!(
        "Workspace exportiert: {} Marker nach {}",
        state.workspace.len(),
        file_name
    );
    state.pending_download = Some(DownloadRequest {
        file_name,
        contents,
    });
    Ok(())
}

/// Verarbeitet die gelesenen Archiv-Bytes.
///
/// Parse-Fehler lassen den Dialog mit Inline-Meldung offen und den Store
/// unangetastet. Ein nicht-leerer Store parkt die geparsten Marker hinter
/// dem Überschreib-Gate; erst die Bestätigung wendet `replace_all` an.
pub fn ingest_archive(state: &mut AppState, contents: &str) {
    let records = match json::parse_cartographer_archive(contents) {
        Ok(records) => dedupe_by_position(records),
        Err(e) => {
            log::warn!("Import fehlgeschlagen: {}", e);
            state.ui.import_dialog.error_notice = Some(e.to_string());
            return;
        }
    };

    state.ui.import_dialog.error_notice = None;

    if state.workspace.is_empty() {
        apply_import(state, records);
    } else {
        log::info!(
            "Workspace nicht leer ({} Marker), warte auf Überschreib-Bestätigung",
            state.workspace.len()
        );
        state.ui.import_dialog.pending_overwrite = Some(records);
    }
}

/// Übernimmt die geparkten Marker nach bestätigtem Überschreiben.
pub fn confirm_overwrite(state: &mut AppState) {
    if let Some(records) = state.ui.import_dialog.pending_overwrite.take() {
        apply_import(state, records);
    }
}

/// Verwirft die geparkten Marker; der bestehende Workspace bleibt
/// unverändert und der Dialog offen.
pub fn decline_overwrite(state: &mut AppState) {
    state.ui.import_dialog.pending_overwrite = None;
    log::info!("Überschreiben abgelehnt, Workspace bleibt unverändert");
}

fn apply_import(state: &mut AppState, records: Vec<MarkerRecord>) {
    let count = records.len();
    state.workspace.replace_all(records);
    state.ui.import_dialog.reset();
    state.ui.mode = UiMode::Idle;
    state.ui.status_message = Some(format!("{} Marker importiert", count));
    log::info!("Import übernommen: {} Marker", count);
}

/// Entfernt Positions-Duplikate aus einem Archiv (keep-first).
fn dedupe_by_position(records: Vec<MarkerRecord>) -> Vec<MarkerRecord> {
    let mut result: Vec<MarkerRecord> = Vec::with_capacity(records.len());
    let mut dropped = 0usize;
    for record in records {
        if result.iter().any(|r| r.position == record.position) {
            dropped += 1;
        } else {
            result.push(record);
        }
    }
    if dropped > 0 {
        log::warn!("Archiv enthielt {} Positions-Duplikate (verworfen)", dropped);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::dedupe_by_position;
    use crate::core::{LatLng, MarkerRecord};

    #[test]
    fn test_dedupe_behaelt_ersten_eintrag() {
        let mut first = MarkerRecord::partial(LatLng::new(1.0, 1.0));
        first.name = Some("Erster".to_string());
        let mut second = MarkerRecord::partial(LatLng::new(1.0, 1.0));
        second.name = Some("Zweiter".to_string());
        let third = MarkerRecord::partial(LatLng::new(2.0, 2.0));

        let result = dedupe_by_position(vec![first, second, third]);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name.as_deref(), Some("Erster"));
        assert_eq!(result[1].position, LatLng::new(2.0, 2.0));
    }
}
