use serde::{Deserialize, Serialize};

/// Geografische Koordinate (Breiten-/Längengrad).
/// Dient als natürlicher Schlüssel eines Markers: exakte Gleichheit
/// beider Komponenten identifiziert den Datensatz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine neue Koordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Gibt `true` zurück, wenn beide Komponenten endlich sind.
    /// Nicht-endliche Koordinaten werden an allen Eingangs-Grenzen verworfen.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}
