//! Handler für den Pointer-Interaktions-Lifecycle.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PortRef;

/// Startet einen Canvas-Pan.
pub fn begin_canvas_drag(state: &mut AppState, screen_pos: Vec2) {
    use_cases::pointer::begin_canvas_drag(state, screen_pos);
}

/// Startet einen Geräte-Drag.
pub fn begin_device_drag(state: &mut AppState, device_id: u64, grab_offset: Vec2) {
    use_cases::pointer::begin_device_drag(state, device_id, grab_offset);
}

/// Startet einen Gruppen-Drag.
pub fn begin_group_drag(state: &mut AppState, group_id: u64, grab_offset: Vec2) {
    use_cases::pointer::begin_group_drag(state, group_id, grab_offset);
}

/// Startet ein Gruppen-Resize.
pub fn begin_group_resize(state: &mut AppState, group_id: u64) {
    use_cases::pointer::begin_group_resize(state, group_id);
}

/// Startet ein Draht-Ziehen am Quell-Port.
pub fn begin_wiring(state: &mut AppState, source: PortRef) {
    use_cases::pointer::begin_wiring(state, source);
}

/// Führt das Gerät während des Drags nach.
pub fn drag_device_to(state: &mut AppState, device_id: u64, world_pos: Vec2) {
    use_cases::pointer::drag_device_to(state, device_id, world_pos);
}

/// Führt die Gruppe während des Drags nach.
pub fn drag_group_to(state: &mut AppState, group_id: u64, world_pos: Vec2) {
    use_cases::pointer::drag_group_to(state, group_id, world_pos);
}

/// Setzt die Gruppengröße während des Resize.
pub fn resize_group_to(state: &mut AppState, group_id: u64, size: Vec2) {
    use_cases::pointer::resize_group_to(state, group_id, size);
}

/// Führt den provisorischen Draht-Endpunkt nach.
pub fn update_wire_pointer(state: &mut AppState, world_pos: Vec2) {
    use_cases::pointer::update_wire_pointer(state, world_pos);
}

/// Schließt einen Entity-Drag ab (ggf. ein History-Eintrag).
pub fn commit_drag(state: &mut AppState) {
    use_cases::pointer::commit_drag(state);
}

/// Schließt das Draht-Ziehen ab.
pub fn complete_wiring(state: &mut AppState, target: Option<PortRef>) {
    use_cases::pointer::complete_wiring(state, target);
}

/// Beendet eine Interaktion ohne History-Eintrag.
pub fn end_interaction(state: &mut AppState) {
    use_cases::pointer::end_interaction(state);
}
