use crate::app::history::EditHistory;
use crate::app::CommandLog;
use crate::core::TopologyGraph;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{InteractionState, SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Topologie (immer vorhanden; leerer Graph = leerer Canvas)
    pub graph: Arc<TopologyGraph>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Laufende Zeiger-Interaktion
    pub interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-Sequenz mit Cursor)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Radien, Schrittweiten)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Graphen als History-Baseline.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        let graph = Arc::new(TopologyGraph::new());
        let history = EditHistory::new_with_capacity(options.history_capacity, Arc::clone(&graph));
        Self {
            graph,
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            interaction: InteractionState::new(),
            command_log: CommandLog::new(),
            history,
            options,
            should_exit: false,
        }
    }

    /// Gibt mutablen Zugriff auf den Graphen (CoW: klont nur wenn die
    /// History den Snapshot noch teilt).
    pub fn graph_mut(&mut self) -> &mut TopologyGraph {
        Arc::make_mut(&mut self.graph)
    }

    /// Gibt die Anzahl der Geräte zurück (für UI-Anzeige)
    pub fn device_count(&self) -> usize {
        self.graph.device_count()
    }

    /// Gibt die Anzahl der Verbindungen zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.graph.connection_count()
    }

    /// Gibt die Anzahl der Gruppen zurück (für UI-Anzeige)
    pub fn group_count(&self) -> usize {
        self.graph.group_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Hängt den aktuellen Graphen als History-Eintrag an.
    /// Wird von Use-Cases NACH einer abgeschlossenen Mutation aufgerufen.
    pub fn record_history_snapshot(&mut self) {
        let snapshot = Arc::clone(&self.graph);
        self.history.record(snapshot);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
