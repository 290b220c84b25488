//! Undo/Redo-History als Snapshot-Sequenz mit Cursor.
//!
//! Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1) —
//! der teure Graph-Klon findet erst beim nächsten `Arc::make_mut()` in einem
//! Use-Case statt (COW-Semantik).
//!
//! Invariante: `snapshots[cursor]` entspricht immer dem aktuell installierten
//! Graphen. Jede abgeschlossene Mutation ruft `record()` auf; Undo/Redo
//! bewegen nur den Cursor und liefern den zu installierenden Snapshot.

use std::sync::Arc;

use crate::core::{TopoError, TopologyGraph};

/// Linearer Undo/Redo-Manager über Graph-Snapshots.
pub struct EditHistory {
    /// Snapshot-Sequenz; Index 0 ist die Baseline
    snapshots: Vec<Arc<TopologyGraph>>,
    /// Zeigt auf den aktuell installierten Snapshot
    cursor: usize,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt eine History mit Baseline-Snapshot und maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize, baseline: Arc<TopologyGraph>) -> Self {
        Self {
            snapshots: vec![baseline],
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Ersetzt die gesamte History durch eine neue Baseline
    /// (nach erfolgreichem Datei-Laden).
    pub fn reset_baseline(&mut self, baseline: Arc<TopologyGraph>) {
        self.snapshots.clear();
        self.snapshots.push(baseline);
        self.cursor = 0;
    }

    /// Hängt einen Snapshot hinter dem Cursor an.
    ///
    /// Alle Redo-Einträge hinter dem Cursor werden verworfen; bei
    /// überschrittener Tiefe fällt der älteste Eintrag heraus.
    pub fn record(&mut self, snapshot: Arc<TopologyGraph>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.max_depth {
            self.snapshots.remove(0);
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Bewegt den Cursor einen Schritt zurück und liefert den Snapshot.
    ///
    /// An der Baseline gibt es nichts zurückzunehmen (`NoHistory`).
    pub fn undo(&mut self) -> Result<Arc<TopologyGraph>, TopoError> {
        if self.cursor == 0 {
            return Err(TopoError::NoHistory);
        }
        self.cursor -= 1;
        Ok(Arc::clone(&self.snapshots[self.cursor]))
    }

    /// Bewegt den Cursor einen Schritt vor und liefert den Snapshot.
    ///
    /// Am jüngsten Snapshot gibt es nichts zu wiederholen (`NoHistory`).
    pub fn redo(&mut self) -> Result<Arc<TopologyGraph>, TopoError> {
        if self.cursor + 1 >= self.snapshots.len() {
            return Err(TopoError::NoHistory);
        }
        self.cursor += 1;
        Ok(Arc::clone(&self.snapshots[self.cursor]))
    }

    /// Anzahl gehaltener Snapshots (inklusive Baseline).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Gibt `true` zurück, wenn nur die Baseline vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.snapshots.len() <= 1
    }
}
