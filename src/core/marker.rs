//! Marker-Datensatz und Feld-Editierungen.

use super::LatLng;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Kanonische Wochentagsnamen für die Öffnungszeiten-Slots.
/// Slot-Index 0 = Montag, 6 = Sonntag.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Geschlossene Kategorienmenge eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    Academic,
    Residential,
    Dining,
    Other,
}

/// Öffnungszeiten-Slot eines Wochentags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerHours {
    /// Kanonischer Wochentagsname (siehe [`WEEKDAYS`])
    pub day: String,
    /// Öffnung als `HH:MM`
    pub open: String,
    /// Schließung als `HH:MM`
    pub close: String,
}

/// Ein annotierter Kartenpunkt mit Metadaten.
///
/// Ein Datensatz, bei dem nur `position` gesetzt ist, gilt als *partiell*
/// (frisch platzierter Punkt ohne Metadaten). Es gibt keinen separaten
/// Speichertyp dafür; siehe [`MarkerRecord::is_partial`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerRecord {
    /// Geografische Position, natürlicher Schlüssel
    pub position: LatLng,
    /// Anzeigename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Gebäudekategorie; effektiv `Other` wenn nicht gesetzt
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub building_type: Option<BuildingType>,
    /// Freitext-Beschreibung (kanonisch, Preset-Referenzen bereits aufgelöst)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Adresse (kanonisch, Preset-Referenzen bereits aufgelöst)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Kürzel der Klassenraum-Präfixe; nur bei `Academic` sinnvoll.
    /// Geordnet und duplikatfrei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom_prefixes: Option<IndexSet<String>>,
    /// Code aus dem Mensa-Katalog; nur bei `Dining` sinnvoll
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dining_hall_type: Option<String>,
    /// Öffnungszeiten: genau 7 Slots, Index = Wochentag (0 = Montag),
    /// `None`-Slot = keine Zeiten für diesen Tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<Option<MarkerHours>>>,
}

/// Geschlossene Feld-Editierung eines Markers.
///
/// Ersetzt dynamischen Property-Zugriff per Feldname durch eine Variante
/// pro Feld; ungültige Feldnamen sind damit nicht darstellbar.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// Anzeigename setzen (leerer String löscht das Feld)
    Name(String),
    /// Gebäudekategorie setzen
    BuildingType(BuildingType),
    /// Beschreibung setzen (Preset-Referenzen vorab auflösen)
    Description(String),
    /// Adresse setzen (Preset-Referenzen vorab auflösen)
    Address(String),
    /// Klassenraum-Präfix umschalten (an/aus, Set-Semantik)
    ToggleClassroomPrefix(String),
    /// Mensa-Typ setzen
    DiningHallType(String),
    /// Öffnungszeiten-Slot eines Wochentags setzen
    SetHours {
        /// Wochentags-Index 0..=6
        day: usize,
        open: String,
        close: String,
    },
    /// Öffnungszeiten-Slot eines Wochentags leeren
    ClearHours { day: usize },
}

impl MarkerRecord {
    /// Erstellt einen partiellen Datensatz (nur Position).
    pub fn partial(position: LatLng) -> Self {
        Self {
            position,
            name: None,
            building_type: None,
            description: None,
            address: None,
            classroom_prefixes: None,
            dining_hall_type: None,
            hours: None,
        }
    }

    /// Gibt `true` zurück, wenn außer der Position kein Feld gesetzt ist.
    pub fn is_partial(&self) -> bool {
        self.name.is_none()
            && self.building_type.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.classroom_prefixes.is_none()
            && self.dining_hall_type.is_none()
            && self.hours.is_none()
    }

    /// Effektive Kategorie: `Other`, solange keine gesetzt wurde.
    pub fn effective_type(&self) -> BuildingType {
        self.building_type.unwrap_or(BuildingType::Other)
    }

    /// Wendet eine Feld-Editierung auf den Datensatz an.
    ///
    /// Erwartet validierte Eingaben (Zeitformat, Tages-Index); ein Index
    /// außerhalb 0..=6 wird ignoriert.
    pub fn apply_edit(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(name) => {
                self.name = normalize_text(name);
            }
            FieldEdit::BuildingType(building_type) => {
                self.building_type = Some(building_type);
            }
            FieldEdit::Description(description) => {
                self.description = normalize_text(description);
            }
            FieldEdit::Address(address) => {
                self.address = normalize_text(address);
            }
            FieldEdit::ToggleClassroomPrefix(code) => {
                let prefixes = self.classroom_prefixes.get_or_insert_with(IndexSet::new);
                if !prefixes.shift_remove(&code) {
                    prefixes.insert(code);
                }
                // Geleertes Set normalisiert auf "nicht gesetzt"
                if prefixes.is_empty() {
                    self.classroom_prefixes = None;
                }
            }
            FieldEdit::DiningHallType(code) => {
                self.dining_hall_type = normalize_text(code);
            }
            FieldEdit::SetHours { day, open, close } => {
                let Some(day_name) = WEEKDAYS.get(day) else {
                    return;
                };
                let slots = self
                    .hours
                    .get_or_insert_with(|| vec![None; WEEKDAYS.len()]);
                slots.resize(WEEKDAYS.len(), None);
                slots[day] = Some(MarkerHours {
                    day: (*day_name).to_string(),
                    open,
                    close,
                });
            }
            FieldEdit::ClearHours { day } => {
                if day >= WEEKDAYS.len() {
                    return;
                }
                if let Some(slots) = self.hours.as_mut() {
                    if let Some(slot) = slots.get_mut(day) {
                        *slot = None;
                    }
                    if slots.iter().all(Option::is_none) {
                        self.hours = None;
                    }
                }
            }
        }
    }
}

/// Leere Strings werden als "Feld löschen" interpretiert.
fn normalize_text(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_erkennt_leere_felder() {
        let mut record = MarkerRecord::partial(LatLng::new(1.0, 2.0));
        assert!(record.is_partial());
        assert_eq!(record.effective_type(), BuildingType::Other);

        record.apply_edit(FieldEdit::Name("Library".to_string()));
        assert!(!record.is_partial());
    }

    #[test]
    fn test_toggle_prefix_haelt_set_duplikatfrei() {
        let mut record = MarkerRecord::partial(LatLng::new(0.0, 0.0));
        record.apply_edit(FieldEdit::ToggleClassroomPrefix("ITE".to_string()));
        record.apply_edit(FieldEdit::ToggleClassroomPrefix("BUSN".to_string()));
        record.apply_edit(FieldEdit::ToggleClassroomPrefix("ITE".to_string()));
        record.apply_edit(FieldEdit::ToggleClassroomPrefix("ITE".to_string()));

        let prefixes = record.classroom_prefixes.as_ref().unwrap();
        assert_eq!(prefixes.len(), 2);
        assert!(prefixes.contains("ITE"));
        assert!(prefixes.contains("BUSN"));
    }

    #[test]
    fn test_geleertes_prefix_set_wird_none() {
        let mut record = MarkerRecord::partial(LatLng::new(0.0, 0.0));
        record.apply_edit(FieldEdit::ToggleClassroomPrefix("ITE".to_string()));
        record.apply_edit(FieldEdit::ToggleClassroomPrefix("ITE".to_string()));
        assert!(record.classroom_prefixes.is_none());
        assert!(record.is_partial());
    }

    #[test]
    fn test_hours_slot_index_entspricht_wochentag() {
        let mut record = MarkerRecord::partial(LatLng::new(0.0, 0.0));
        record.apply_edit(FieldEdit::SetHours {
            day: 3,
            open: "09:00".to_string(),
            close: "17:00".to_string(),
        });

        let slots = record.hours.as_ref().unwrap();
        assert_eq!(slots.len(), 7);
        let thursday = slots[3].as_ref().unwrap();
        assert_eq!(thursday.day, "thursday");
        assert_eq!(thursday.open, "09:00");
        for (index, slot) in slots.iter().enumerate() {
            if index != 3 {
                assert!(slot.is_none());
            }
        }
    }

    #[test]
    fn test_clear_hours_letzter_slot_entfernt_feld() {
        let mut record = MarkerRecord::partial(LatLng::new(0.0, 0.0));
        record.apply_edit(FieldEdit::SetHours {
            day: 0,
            open: "08:00".to_string(),
            close: "12:00".to_string(),
        });
        record.apply_edit(FieldEdit::ClearHours { day: 0 });
        assert!(record.hours.is_none());
    }

    #[test]
    fn test_ungueltiger_tages_index_wird_ignoriert() {
        let mut record = MarkerRecord::partial(LatLng::new(0.0, 0.0));
        record.apply_edit(FieldEdit::SetHours {
            day: 7,
            open: "09:00".to_string(),
            close: "17:00".to_string(),
        });
        assert!(record.hours.is_none());
    }
}
