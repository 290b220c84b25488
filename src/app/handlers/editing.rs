//! Handler für Topologie-Editing und Selektion.

use crate::app::state::Selection;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ConnectionPatch, DeviceKind, DevicePatch, GroupPatch};

/// Selektiert ein Gerät.
pub fn select_device(state: &mut AppState, device_id: u64) {
    state.selection.current = Selection::Device(device_id);
}

/// Selektiert eine Gruppe.
pub fn select_group(state: &mut AppState, group_id: u64) {
    state.selection.current = Selection::Group(group_id);
}

/// Selektiert eine Verbindung.
pub fn select_connection(state: &mut AppState, connection_id: u64) {
    state.selection.current = Selection::Connection(connection_id);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Fügt ein Gerät an der Weltposition hinzu.
pub fn add_device(state: &mut AppState, kind: DeviceKind, world_pos: glam::Vec2) {
    use_cases::editing::add_device_at(state, kind, world_pos);
}

/// Fügt eine Gruppe an der Weltposition hinzu.
pub fn add_group(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::editing::add_group_at(state, world_pos);
}

/// Löscht die selektierte Entity.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Wendet einen Geräte-Patch an.
pub fn update_device_props(state: &mut AppState, device_id: u64, patch: DevicePatch) {
    use_cases::editing::update_device_props(state, device_id, patch);
}

/// Wendet einen Gruppen-Patch an.
pub fn update_group_props(state: &mut AppState, group_id: u64, patch: GroupPatch) {
    use_cases::editing::update_group_props(state, group_id, patch);
}

/// Wendet einen Verbindungs-Patch an.
pub fn update_connection_props(state: &mut AppState, connection_id: u64, patch: ConnectionPatch) {
    use_cases::editing::update_connection_props(state, connection_id, patch);
}

/// Öffnet den Canvas-Leeren-Bestätigungsdialog.
pub fn request_clear_confirm(state: &mut AppState) {
    state.ui.show_clear_confirm = true;
}

/// Schließt den Canvas-Leeren-Bestätigungsdialog.
pub fn dismiss_clear_confirm(state: &mut AppState) {
    state.ui.show_clear_confirm = false;
}

/// Leert den Canvas.
pub fn clear_canvas(state: &mut AppState) {
    use_cases::editing::clear_canvas(state);
}
