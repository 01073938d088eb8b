//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Konstanten, die zwischen `app`
//! und einem einbettenden Host geteilt werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{EXPORT_FILE_NAME, EXPORT_KEY, IMPORT_KEY, MAP_CENTER, MAP_ZOOM};
