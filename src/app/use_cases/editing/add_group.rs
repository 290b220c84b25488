//! Use-Case: Neue Gruppe ("Raum") an einer Weltposition platzieren.

use crate::app::state::Selection;
use crate::app::AppState;

/// Fügt eine leere Gruppe in Standardgröße hinzu und selektiert sie.
pub fn add_group_at(state: &mut AppState, world_pos: glam::Vec2) {
    let size = glam::Vec2::from(state.options.group_default_size);
    let id = state.graph_mut().add_group(world_pos, size);
    state.selection.current = Selection::Group(id);
    state.record_history_snapshot();

    log::info!(
        "Gruppe {} an Position ({:.1}, {:.1}) hinzugefügt",
        id,
        world_pos.x,
        world_pos.y
    );
}
