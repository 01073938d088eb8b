//! Cartographer Library.
//! Core-Funktionalität als Library exportiert für Tests und einbettende Hosts.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, DownloadRequest, UiMode, UiState};
pub use core::{
    AnnotationStore, BuildingType, FieldEdit, LatLng, MarkerHours, MarkerRecord, PresetCatalog,
};
pub use json::{parse_cartographer_archive, write_cartographer_archive, ImportError};
pub use shared::EditorOptions;
