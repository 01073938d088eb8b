//! Der zentrale Annotations-Store: geordnete Marker-Sammlung mit Positions-Schlüssel.

use super::{FieldEdit, LatLng, MarkerRecord};

/// In-Memory-Sammlung aller Marker eines Workspace.
///
/// Die Reihenfolge entspricht der Einfügereihenfolge; der Schlüssel ist die
/// exakte Position (Komponenten-Gleichheit beider Koordinaten). Alle
/// Operationen laufen single-threaded aus dem Event-Kontext des Controllers;
/// jede Mutation ist vor Rückkehr zum Aufrufer vollständig sichtbar.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    records: Vec<MarkerRecord>,
}

impl AnnotationStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Hängt einen partiellen Datensatz an der Position an.
    ///
    /// Gibt `None` zurück, wenn die Position bereits belegt ist
    /// (Positions-Eindeutigkeit wird nicht verletzt).
    pub fn add(&mut self, position: LatLng) -> Option<&MarkerRecord> {
        if self.contains(position) {
            return None;
        }
        self.records.push(MarkerRecord::partial(position));
        self.records.last()
    }

    /// Findet den Datensatz an der exakten Position.
    pub fn find(&self, position: LatLng) -> Option<&MarkerRecord> {
        self.records.iter().find(|r| r.position == position)
    }

    /// Prüft, ob an der Position ein Datensatz existiert.
    pub fn contains(&self, position: LatLng) -> bool {
        self.find(position).is_some()
    }

    /// Wendet eine Feld-Editierung auf den Datensatz an der Position an
    /// und gibt den aktualisierten Datensatz zurück.
    ///
    /// `None` = kein passender Datensatz (stiller No-op beim Aufrufer).
    pub fn update_field(&mut self, position: LatLng, edit: FieldEdit) -> Option<&MarkerRecord> {
        let index = self.index_of(position)?;
        self.records[index].apply_edit(edit);
        Some(&self.records[index])
    }

    /// Verschiebt einen Marker auf eine neue Position (Schlüsselwechsel).
    ///
    /// Alle übrigen Felder und die Einfügereihenfolge bleiben erhalten.
    /// Gibt `false` zurück, wenn kein Datensatz an `old` existiert oder
    /// `new` bereits von einem anderen Datensatz belegt ist.
    pub fn replace_position(&mut self, old: LatLng, new: LatLng) -> bool {
        let Some(index) = self.index_of(old) else {
            return false;
        };
        if old != new && self.contains(new) {
            return false;
        }
        self.records[index].position = new;
        true
    }

    /// Entfernt den Datensatz an der Position. No-op wenn nicht vorhanden.
    pub fn remove(&mut self, position: LatLng) -> Option<MarkerRecord> {
        let index = self.index_of(position)?;
        Some(self.records.remove(index))
    }

    /// Ersetzt die gesamte Sammlung (Import).
    pub fn replace_all(&mut self, records: Vec<MarkerRecord>) {
        self.records = records;
    }

    /// Read-only-Sicht auf die geordnete Sammlung (Rendering und Export).
    pub fn snapshot(&self) -> &[MarkerRecord] {
        &self.records
    }

    /// Gibt die Anzahl der Marker zurück.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurück, wenn der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn index_of(&self, position: LatLng) -> Option<usize> {
        self.records.iter().position(|r| r.position == position)
    }
}
