//! Externe Preset-Tabellen und Auflösung von `@presets/<KEY>`-Referenzen.
//!
//! Die Tabellen (Gebäudeadressen, Gebäudebeschreibungen, Klassenraum-Kürzel,
//! Mensa-Typen) werden read-only konsultiert: beim Auflösen von
//! Preset-Referenzen zur Editierzeit und zum Befüllen von Auswahllisten.

use indexmap::IndexMap;
use regex::Regex;

/// Reserviertes Präfix für symbolische Referenzen in Textfeldern.
pub const PRESET_PREFIX: &str = "@presets/";

/// Muster einer vollständigen Preset-Referenz.
const PRESET_REF_PATTERN: &str = r"^@presets/([A-Za-z0-9_]+)$";

/// Extrahiert den Schlüssel einer Preset-Referenz, falls `value` eine ist.
pub fn preset_key(value: &str) -> Option<String> {
    let re = Regex::new(PRESET_REF_PATTERN).ok()?;
    re.captures(value).map(|c| c[1].to_string())
}

/// Statische Preset-Tabellen des Campus.
///
/// Vom Host befüllbar; [`PresetCatalog::builtin`] liefert den eingebauten
/// Beispielbestand.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    addresses: IndexMap<String, String>,
    descriptions: IndexMap<String, String>,
    classroom_codes: IndexMap<String, String>,
    dining_halls: IndexMap<String, String>,
}

impl PresetCatalog {
    /// Erstellt einen leeren Katalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Eingebauter Beispielbestand (UConn-Campus).
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();

        for (key, value) in [
            ("BUSN", "2100 Hillside Rd, Storrs, CT 06269"),
            ("ITE", "371 Fairfield Way, Storrs, CT 06269"),
            ("LH", "337 Mansfield Rd, Storrs, CT 06269"),
            ("SU", "2110 Hillside Rd, Storrs, CT 06269"),
            ("LIB", "369 Fairfield Way, Storrs, CT 06269"),
            ("GAMP", "2095 Hillside Rd, Storrs, CT 06269"),
            ("MCHU", "406 Babbidge Rd, Storrs, CT 06269"),
            ("CHEM", "55 N Eagleville Rd, Storrs, CT 06269"),
        ] {
            catalog.addresses.insert(key.to_string(), value.to_string());
        }

        for (key, value) in [
            ("BUSN", "School of Business"),
            ("ITE", "Information Technology Engineering Building"),
            ("LH", "Laurel Hall"),
            ("SU", "Student Union"),
            ("LIB", "Homer Babbidge Library"),
            ("GAMP", "Harry A. Gampel Pavilion"),
            ("MCHU", "McHugh Hall"),
            ("CHEM", "Chemistry Building"),
        ] {
            catalog
                .descriptions
                .insert(key.to_string(), value.to_string());
        }

        for (key, value) in [
            ("BUSN", "School of Business"),
            ("ITE", "Information Technology Engineering"),
            ("LH", "Laurel Hall"),
            ("MCHU", "McHugh Hall"),
            ("CHEM", "Chemistry Building"),
            ("MONT", "Monteith"),
            ("OAK", "Oak Hall"),
            ("SCHN", "Andre Schenker Lecture Hall"),
        ] {
            catalog
                .classroom_codes
                .insert(key.to_string(), value.to_string());
        }

        for (key, value) in [
            ("BUCKLEY", "Buckley"),
            ("MCMAHON", "McMahon"),
            ("NORTH", "North"),
            ("NORTHWEST", "Northwest"),
            ("PUTNAM", "Putnam"),
            ("SOUTH", "South"),
            ("TOWERS", "Gelfenbien Commons"),
            ("WHITNEY", "Whitney"),
        ] {
            catalog
                .dining_halls
                .insert(key.to_string(), value.to_string());
        }

        catalog
    }

    /// Löst eine Adress-Eingabe auf: `@presets/<KEY>` wird durch den
    /// kanonischen Tabellenwert ersetzt, alles andere bleibt wörtlich.
    pub fn resolve_address(&self, value: &str) -> String {
        resolve(&self.addresses, value)
    }

    /// Löst eine Beschreibungs-Eingabe auf (siehe [`resolve_address`]).
    ///
    /// [`resolve_address`]: PresetCatalog::resolve_address
    pub fn resolve_description(&self, value: &str) -> String {
        resolve(&self.descriptions, value)
    }

    /// Klassenraum-Kürzel mit Anzeigenamen für Auswahllisten.
    pub fn classroom_codes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classroom_codes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Mensa-Codes mit Anzeigenamen für Auswahllisten.
    pub fn dining_halls(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dining_halls
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Prüft, ob ein Klassenraum-Kürzel im Katalog bekannt ist.
    pub fn knows_classroom_code(&self, code: &str) -> bool {
        self.classroom_codes.contains_key(code)
    }

    /// Prüft, ob ein Mensa-Code im Katalog bekannt ist.
    pub fn knows_dining_hall(&self, code: &str) -> bool {
        self.dining_halls.contains_key(code)
    }
}

/// Unbekannte Schlüssel bleiben wörtlich erhalten und werden geloggt.
fn resolve(table: &IndexMap<String, String>, value: &str) -> String {
    let Some(key) = preset_key(value) else {
        return value.to_string();
    };
    match table.get(&key) {
        Some(canonical) => canonical.clone(),
        None => {
            log::warn!("Unbekannter Preset-Schlüssel: {}", key);
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_key_erkennt_referenzen() {
        assert_eq!(preset_key("@presets/BUSN").as_deref(), Some("BUSN"));
        assert_eq!(preset_key("@presets/ITE").as_deref(), Some("ITE"));
        assert!(preset_key("BUSN").is_none());
        assert!(preset_key("@presets/").is_none());
        assert!(preset_key("@presets/FOO/BAR").is_none());
    }

    #[test]
    fn test_resolve_ersetzt_referenz_durch_kanonischen_wert() {
        let catalog = PresetCatalog::builtin();
        assert_eq!(
            catalog.resolve_address("@presets/BUSN"),
            "2100 Hillside Rd, Storrs, CT 06269"
        );
        assert_eq!(
            catalog.resolve_description("@presets/LIB"),
            "Homer Babbidge Library"
        );
    }

    #[test]
    fn test_resolve_laesst_freitext_unveraendert() {
        let catalog = PresetCatalog::builtin();
        assert_eq!(catalog.resolve_address("12 Main St"), "12 Main St");
    }

    #[test]
    fn test_resolve_behaelt_unbekannten_schluessel_woertlich() {
        let catalog = PresetCatalog::builtin();
        assert_eq!(
            catalog.resolve_address("@presets/NOPE"),
            "@presets/NOPE"
        );
    }
}
