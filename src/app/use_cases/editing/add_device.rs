//! Use-Case: Neues Gerät an einer Weltposition platzieren.

use crate::app::state::Selection;
use crate::app::AppState;
use crate::core::DeviceKind;

/// Fügt ein Gerät der angegebenen Art hinzu und selektiert es.
pub fn add_device_at(state: &mut AppState, kind: DeviceKind, world_pos: glam::Vec2) {
    let id = state.graph_mut().add_device(kind, world_pos);
    state.selection.current = Selection::Device(id);
    state.record_history_snapshot();

    log::info!(
        "Gerät {} ({}) an Position ({:.1}, {:.1}) hinzugefügt",
        id,
        kind.label(),
        world_pos.x,
        world_pos.y
    );
}
