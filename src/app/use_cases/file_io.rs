//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use std::sync::Arc;

use crate::app::AppState;
use crate::core::{TopologyGraph, TopologySnapshot};

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt eine Topologie-Datei in den AppState.
///
/// Parse- und Validierungsfehler lassen den aktuellen Zustand vollständig
/// unangetastet; der Fehler landet als Statusnachricht in der UI.
/// Erfolgreiches Laden setzt die History auf eine neue Baseline und
/// verwirft Selektion und laufende Interaktion.
pub fn load_selected_file(state: &mut AppState, path: String) {
    let graph = match read_graph_from_file(&path) {
        Ok(graph) => graph,
        Err(e) => {
            log::error!("Laden fehlgeschlagen ({}): {}", path, e);
            state.ui.status_message = Some(format!("Laden fehlgeschlagen: {}", e));
            return;
        }
    };

    log::info!(
        "Topologie geladen: {} Geräte, {} Verbindungen, {} Gruppen",
        graph.device_count(),
        graph.connection_count(),
        graph.group_count()
    );

    state.graph = Arc::new(graph);
    state.history.reset_baseline(Arc::clone(&state.graph));
    state.selection.clear();
    state.interaction.finish();
    state.ui.current_file_path = Some(path);
    state.ui.status_message = None;
}

/// Liest und validiert eine Snapshot-Datei.
fn read_graph_from_file(path: &str) -> anyhow::Result<TopologyGraph> {
    let content = std::fs::read_to_string(path)?;
    let snapshot: TopologySnapshot = serde_json::from_str(&content)?;
    let graph = TopologyGraph::from_snapshot(&snapshot)?;
    Ok(graph)
}

/// Speichert die aktuelle Datei (wenn Pfad bekannt) oder öffnet Dialog.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        write_graph_to_file(state, &path)?;
        log::info!("Datei gespeichert");
        Ok(())
    } else {
        // Kein Pfad bekannt → Save As Dialog öffnen
        request_save_file(state);
        Ok(())
    }
}

/// Speichert die Datei unter dem angegebenen Pfad.
pub fn save_file_as(state: &mut AppState, path: String) -> anyhow::Result<()> {
    write_graph_to_file(state, &path)?;
    state.ui.current_file_path = Some(path.clone());
    log::info!("Datei gespeichert als: {}", path);
    Ok(())
}

/// Schreibt den Graphen als geordnetes JSON in eine Datei.
fn write_graph_to_file(state: &AppState, path: &str) -> anyhow::Result<()> {
    let snapshot = state.graph.to_snapshot();
    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DeviceKind, PortRef};
    use glam::Vec2;

    fn populated_state() -> AppState {
        let mut state = AppState::new();
        let graph = state.graph_mut();
        let a = graph.add_device(DeviceKind::Router, Vec2::new(10.0, 10.0));
        let b = graph.add_device(DeviceKind::Host, Vec2::new(300.0, 50.0));
        graph
            .connect(PortRef::new(a, 1), PortRef::new(b, 1))
            .expect("Connect im Setup");
        state.record_history_snapshot();
        state
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("net_topo_editor_io_test");
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let path = dir.join("roundtrip.json").to_string_lossy().into_owned();

        let mut state = populated_state();
        save_file_as(&mut state, path.clone()).expect("Speichern");

        let mut loaded = AppState::new();
        load_selected_file(&mut loaded, path.clone());

        assert_eq!(loaded.device_count(), 2);
        assert_eq!(loaded.connection_count(), 1);
        assert_eq!(loaded.ui.current_file_path.as_deref(), Some(path.as_str()));
        // Frische Baseline: kein Undo über das Laden hinweg
        assert!(!loaded.can_undo());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_preserves_current_state() {
        let dir = std::env::temp_dir().join("net_topo_editor_io_test");
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let path = dir.join("malformed.json");
        std::fs::write(&path, "{ \"version\": 1, \"devices\": [").expect("Schreiben");

        let mut state = populated_state();
        let graph_before = Arc::clone(&state.graph);

        load_selected_file(&mut state, path.to_string_lossy().into_owned());

        assert!(Arc::ptr_eq(&state.graph, &graph_before));
        assert!(state.ui.status_message.is_some());
        assert!(state.ui.current_file_path.is_none());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn dangling_reference_is_rejected_on_load() {
        let dir = std::env::temp_dir().join("net_topo_editor_io_test");
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis");
        let path = dir.join("dangling.json");

        let state = populated_state();
        let mut snapshot = state.graph.to_snapshot();
        snapshot.connections[0].target = PortRef::new(9999, 1);
        std::fs::write(&path, serde_json::to_string(&snapshot).expect("JSON")).expect("Schreiben");

        let mut target = AppState::new();
        load_selected_file(&mut target, path.to_string_lossy().into_owned());

        assert_eq!(target.device_count(), 0);
        assert!(target.ui.status_message.is_some());

        let _ = std::fs::remove_file(&path);
    }
}
