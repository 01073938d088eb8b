//! Parser für Cartographer-JSON-Archive.

use crate::core::{MarkerRecord, WEEKDAYS};
use thiserror::Error;

/// Fehlerklassifikation des Imports.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Archiv ist kein gültiges JSON oder verletzt die Minimalform
    /// (Array von Objekten mit numerischem `position.lat`/`position.lng`).
    #[error("Archiv nicht lesbar: {0}")]
    MalformedData(String),
}

/// Parsed ein Cartographer-Archiv aus einem JSON-String.
///
/// Liefert die geordnete Marker-Sequenz in Dateireihenfolge. Die
/// Überschreib-Bestätigung für nicht-leere Stores liegt beim Aufrufer.
pub fn parse_cartographer_archive(contents: &str) -> Result<Vec<MarkerRecord>, ImportError> {
    let records: Vec<MarkerRecord> = serde_json::from_str(contents)
        .map_err(|e| ImportError::MalformedData(e.to_string()))?;

    for (index, record) in records.iter().enumerate() {
        if !record.position.is_finite() {
            return Err(ImportError::MalformedData(format!(
                "Eintrag {}: Position ist nicht endlich",
                index
            )));
        }
        if let Some(slots) = record.hours.as_ref() {
            if slots.len() > WEEKDAYS.len() {
                return Err(ImportError::MalformedData(format!(
                    "Eintrag {}: hours hat {} Slots (maximal {})",
                    index,
                    slots.len(),
                    WEEKDAYS.len()
                )));
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nicht_json_liefert_malformed_data() {
        let result = parse_cartographer_archive("definitiv kein json");
        assert!(matches!(result, Err(ImportError::MalformedData(_))));
    }

    #[test]
    fn test_fehlende_position_liefert_malformed_data() {
        let result = parse_cartographer_archive(r#"[{ "name": "Library" }]"#);
        assert!(matches!(result, Err(ImportError::MalformedData(_))));
    }

    #[test]
    fn test_nicht_numerische_koordinate_liefert_malformed_data() {
        let result = parse_cartographer_archive(
            r#"[{ "position": { "lat": "oops", "lng": 1.0 } }]"#,
        );
        assert!(matches!(result, Err(ImportError::MalformedData(_))));
    }

    #[test]
    fn test_zu_viele_hours_slots_liefern_malformed_data() {
        let result = parse_cartographer_archive(
            r#"[{ "position": { "lat": 1.0, "lng": 2.0 },
                  "hours": [null, null, null, null, null, null, null, null] }]"#,
        );
        assert!(matches!(result, Err(ImportError::MalformedData(_))));
    }

    #[test]
    fn test_minimalform_wird_akzeptiert() {
        let records = parse_cartographer_archive(
            r#"[{ "position": { "lat": 41.8, "lng": -72.25 } }]"#,
        )
        .expect("Minimalform sollte parsebar sein");
        assert_eq!(records.len(), 1);
        assert!(records[0].is_partial());
    }
}
