//! Zentrale Konfiguration für den Cartographer-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Export ──────────────────────────────────────────────────────────

/// Standard-Dateiname für exportierte Archive.
pub const EXPORT_FILE_NAME: &str = "cartographer.json";

// ── Karte ───────────────────────────────────────────────────────────

/// Initiales Kartenzentrum (Breite/Länge, UConn Storrs).
pub const MAP_CENTER: [f64; 2] = [41.8059613, -72.2509286];
/// Initiale Zoom-Stufe der Karte.
pub const MAP_ZOOM: u8 = 17;

// ── Tastatur ────────────────────────────────────────────────────────

/// Taste für den Import-Dialog.
pub const IMPORT_KEY: char = '<';
/// Taste für den Workspace-Export.
pub const EXPORT_KEY: char = '>';

// ── Konfigurationsdatei ─────────────────────────────────────────────

/// Dateiname der persistierten Optionen.
pub const CONFIG_FILE_NAME: &str = "cartographer.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `cartographer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Export ──────────────────────────────────────────────────
    /// Dateiname für exportierte Archive
    pub export_file_name: String,

    // ── Karte ───────────────────────────────────────────────────
    /// Initiales Kartenzentrum (Breite/Länge)
    pub map_center: [f64; 2],
    /// Initiale Zoom-Stufe
    pub map_zoom: u8,

    // ── Tastatur ────────────────────────────────────────────────
    /// Taste für den Import-Dialog
    pub import_key: char,
    /// Taste für den Workspace-Export
    pub export_key: char,

    // ── Editor-Verhalten ────────────────────────────────────────
    /// Frisch angelegte, noch leere Marker beim Schließen des Editors verwerfen
    #[serde(default = "default_discard_empty_partials")]
    pub discard_empty_partials: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            export_file_name: EXPORT_FILE_NAME.to_string(),
            map_center: MAP_CENTER,
            map_zoom: MAP_ZOOM,
            import_key: IMPORT_KEY,
            export_key: EXPORT_KEY,
            discard_empty_partials: true,
        }
    }
}

/// Serde-Default für `discard_empty_partials` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_discard_empty_partials() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cartographer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
