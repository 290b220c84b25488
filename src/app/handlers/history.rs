//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// `NoHistory` an der Grenze wird hier verschluckt; die UI deaktiviert
/// den Button ohnehin über `can_undo()`.
pub fn undo(state: &mut AppState) {
    match state.history.undo() {
        Ok(snapshot) => {
            state.graph = snapshot;
            state.selection.clear();
            state.interaction.finish();
            log::info!("Undo ausgeführt");
        }
        Err(err) => log::debug!("Undo: {err}"),
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    match state.history.redo() {
        Ok(snapshot) => {
            state.graph = snapshot;
            state.selection.clear();
            state.interaction.finish();
            log::info!("Redo ausgeführt");
        }
        Err(err) => log::debug!("Redo: {err}"),
    }
}
