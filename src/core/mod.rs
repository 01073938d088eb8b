//! Core-Domänentypen: Koordinaten, Marker, Annotations-Store, Preset-Katalog.

pub mod latlng;
pub mod marker;
pub mod presets;
pub mod store;

pub use latlng::LatLng;
pub use marker::{BuildingType, FieldEdit, MarkerHours, MarkerRecord, WEEKDAYS};
pub use presets::{preset_key, PresetCatalog, PRESET_PREFIX};
pub use store::AnnotationStore;
