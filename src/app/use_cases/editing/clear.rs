//! Use-Case: Canvas vollständig leeren.

use crate::app::AppState;

/// Leert den Graphen als eine einzelne, undo-bare Operation.
/// Ein leerer Graph bleibt unverändert (kein History-Eintrag).
pub fn clear_canvas(state: &mut AppState) {
    if state.graph.is_empty() {
        log::debug!("Canvas bereits leer");
        return;
    }
    state.graph_mut().clear();
    state.selection.clear();
    state.record_history_snapshot();
    log::info!("Canvas geleert");
}
