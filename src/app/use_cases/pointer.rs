//! Use-Case-Funktionen für den Pointer-Lifecycle.
//!
//! Drags mutieren den Graphen live — die Drag-Vorschau ist der echte
//! Zustand, kein Overlay. Ein History-Eintrag entsteht erst beim Commit
//! und nur wenn sich tatsächlich etwas geändert hat (Zero-Move-Drags
//! hinterlassen keine Spur).

use glam::Vec2;

use crate::app::state::Interaction;
use crate::app::AppState;
use crate::core::PortRef;

/// Startet einen Canvas-Pan.
pub fn begin_canvas_drag(state: &mut AppState, screen_pos: Vec2) {
    state.interaction.begin(Interaction::DraggingCanvas {
        last_screen: screen_pos,
    });
}

/// Startet einen Geräte-Drag.
pub fn begin_device_drag(state: &mut AppState, device_id: u64, grab_offset: Vec2) {
    if state.graph.device(device_id).is_none() {
        log::warn!("Drag-Start auf unbekanntem Gerät {}", device_id);
        return;
    }
    state.interaction.begin(Interaction::DraggingDevice {
        device_id,
        grab_offset,
    });
}

/// Startet einen Gruppen-Drag.
pub fn begin_group_drag(state: &mut AppState, group_id: u64, grab_offset: Vec2) {
    if state.graph.group(group_id).is_none() {
        log::warn!("Drag-Start auf unbekannter Gruppe {}", group_id);
        return;
    }
    state.interaction.begin(Interaction::DraggingGroup {
        group_id,
        grab_offset,
    });
}

/// Startet ein Gruppen-Resize am Griff.
pub fn begin_group_resize(state: &mut AppState, group_id: u64) {
    if state.graph.group(group_id).is_none() {
        return;
    }
    state.interaction.begin(Interaction::ResizingGroup { group_id });
}

/// Startet ein Draht-Ziehen am Quell-Port.
pub fn begin_wiring(state: &mut AppState, source: PortRef) {
    let Some(anchor) = state.graph.port_anchor(source) else {
        log::warn!(
            "Wiring-Start auf unbekanntem Port {}/{}",
            source.device_id,
            source.port_id
        );
        return;
    };
    state.interaction.begin(Interaction::Wiring {
        source,
        pointer_world: anchor,
    });
}

/// Führt das Gerät während des Drags an eine neue Weltposition.
pub fn drag_device_to(state: &mut AppState, device_id: u64, world_pos: Vec2) {
    let unchanged = state
        .graph
        .device(device_id)
        .is_some_and(|d| d.position == world_pos);
    if unchanged {
        return;
    }
    if state.graph_mut().move_device(device_id, world_pos) {
        state.interaction.drag_dirty = true;
    }
}

/// Führt die Gruppe (inklusive Mitglieder) an eine neue Weltposition.
pub fn drag_group_to(state: &mut AppState, group_id: u64, world_pos: Vec2) {
    let unchanged = state
        .graph
        .group(group_id)
        .is_some_and(|g| g.position == world_pos);
    if unchanged {
        return;
    }
    if state.graph_mut().move_group(group_id, world_pos) {
        state.interaction.drag_dirty = true;
    }
}

/// Setzt die Gruppengröße während des Resize (geklemmt im Modell).
pub fn resize_group_to(state: &mut AppState, group_id: u64, size: Vec2) {
    let unchanged = state
        .graph
        .group(group_id)
        .is_some_and(|g| g.size == size.max(Vec2::splat(crate::core::GROUP_MIN_SIZE)));
    if unchanged {
        return;
    }
    if state.graph_mut().resize_group(group_id, size) {
        state.interaction.drag_dirty = true;
    }
}

/// Führt den provisorischen Draht-Endpunkt nach (reine Vorschau).
pub fn update_wire_pointer(state: &mut AppState, world_pos: Vec2) {
    if let Interaction::Wiring { source, .. } = state.interaction.current {
        state.interaction.current = Interaction::Wiring {
            source,
            pointer_world: world_pos,
        };
    }
}

/// Aktualisiert den Pan-Anker nach einem Kamera-Pan-Schritt.
pub fn advance_canvas_drag(state: &mut AppState, delta_screen: Vec2) {
    if let Interaction::DraggingCanvas { last_screen } = state.interaction.current {
        state.interaction.current = Interaction::DraggingCanvas {
            last_screen: last_screen + delta_screen,
        };
    }
}

/// Schließt einen Entity-Drag ab.
///
/// Endet ein Geräte-Drag mit dem Gerät vollständig innerhalb einer Gruppe
/// und ohne bestehende Mitgliedschaft, wird es implizit zugewiesen.
/// Genau ein History-Eintrag pro Drag, und nur wenn sich etwas geändert hat.
pub fn commit_drag(state: &mut AppState) {
    if let Interaction::DraggingDevice { device_id, .. } = state.interaction.current {
        let ungrouped = state
            .graph
            .device(device_id)
            .is_some_and(|d| d.group_id.is_none());
        if ungrouped {
            if let Some(group_id) = state.graph.group_containing_device(device_id) {
                if state.graph_mut().assign_device_to_group(device_id, group_id) {
                    state.interaction.drag_dirty = true;
                    log::debug!("Gerät {} beim Ablegen Gruppe {} zugewiesen", device_id, group_id);
                }
            }
        }
    }

    if state.interaction.drag_dirty {
        state.record_history_snapshot();
        log::info!("Drag abgeschlossen, History-Eintrag erstellt");
    }
    state.interaction.finish();
}

/// Schließt ein Draht-Ziehen ab.
///
/// Ungültige Endpunkte (Leerraum, Self-Loop, bereits verbundenes Paar)
/// brechen still ab; nur ein erfolgreiches Connect erzeugt einen
/// History-Eintrag.
pub fn complete_wiring(state: &mut AppState, target: Option<PortRef>) {
    let Interaction::Wiring { source, .. } = state.interaction.current else {
        state.interaction.finish();
        return;
    };
    state.interaction.finish();

    let Some(target) = target else {
        log::debug!("Wiring ohne Ziel-Port abgebrochen");
        return;
    };

    match state.graph_mut().connect(source, target) {
        Ok(id) => {
            state.record_history_snapshot();
            log::info!(
                "Verbindung {} erstellt: {}/{} ↔ {}/{}",
                id,
                source.device_id,
                source.port_id,
                target.device_id,
                target.port_id
            );
        }
        Err(e) => {
            log::debug!("Wiring verworfen: {}", e);
        }
    }
}

/// Beendet eine Interaktion ohne History-Eintrag (Canvas-Pan, Idle).
pub fn end_interaction(state: &mut AppState) {
    state.interaction.finish();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeviceKind;
    use std::sync::Arc;

    fn state_with_two_devices() -> (AppState, u64, u64) {
        let mut state = AppState::new();
        let mut graph = crate::core::TopologyGraph::new();
        let a = graph.add_device(DeviceKind::Host, Vec2::new(0.0, 0.0));
        let b = graph.add_device(DeviceKind::Host, Vec2::new(300.0, 0.0));
        state.graph = Arc::new(graph);
        state.history.reset_baseline(Arc::clone(&state.graph));
        (state, a, b)
    }

    #[test]
    fn device_drag_commits_exactly_one_history_entry() {
        let (mut state, a, _) = state_with_two_devices();

        begin_device_drag(&mut state, a, Vec2::ZERO);
        drag_device_to(&mut state, a, Vec2::new(50.0, 50.0));
        drag_device_to(&mut state, a, Vec2::new(80.0, 90.0));
        drag_device_to(&mut state, a, Vec2::new(120.0, 130.0));
        commit_drag(&mut state);

        assert!(state.can_undo());
        assert_eq!(state.history.len(), 2);
        assert_eq!(
            state.graph.device(a).unwrap().position,
            Vec2::new(120.0, 130.0)
        );
    }

    #[test]
    fn zero_move_drag_leaves_history_untouched() {
        let (mut state, a, _) = state_with_two_devices();

        begin_device_drag(&mut state, a, Vec2::ZERO);
        commit_drag(&mut state);

        assert!(!state.can_undo());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn drop_into_group_attaches_device() {
        let (mut state, a, _) = state_with_two_devices();
        let group_id = state.graph_mut().add_group(Vec2::new(500.0, 500.0), Vec2::new(300.0, 200.0));
        state.record_history_snapshot();

        begin_device_drag(&mut state, a, Vec2::ZERO);
        drag_device_to(&mut state, a, Vec2::new(550.0, 550.0));
        commit_drag(&mut state);

        assert_eq!(state.graph.device(a).unwrap().group_id, Some(group_id));
        assert!(state.graph.group(group_id).unwrap().device_ids.contains(&a));
    }

    #[test]
    fn successful_wiring_records_history() {
        let (mut state, a, b) = state_with_two_devices();

        begin_wiring(&mut state, PortRef::new(a, 1));
        complete_wiring(&mut state, Some(PortRef::new(b, 1)));

        assert_eq!(state.connection_count(), 1);
        assert!(state.can_undo());
        assert!(state.interaction.is_idle());
    }

    #[test]
    fn failed_wiring_is_silent_and_unrecorded() {
        let (mut state, a, _) = state_with_two_devices();

        // Self-Loop: gleiche Geräte-ID
        begin_wiring(&mut state, PortRef::new(a, 1));
        complete_wiring(&mut state, Some(PortRef::new(a, 1)));
        assert_eq!(state.connection_count(), 0);
        assert!(!state.can_undo());

        // Leerraum: kein Ziel-Port
        begin_wiring(&mut state, PortRef::new(a, 1));
        complete_wiring(&mut state, None);
        assert_eq!(state.connection_count(), 0);
        assert!(!state.can_undo());
        assert!(state.interaction.is_idle());
    }

    #[test]
    fn canvas_pan_never_records_history() {
        let (mut state, _, _) = state_with_two_devices();

        begin_canvas_drag(&mut state, Vec2::new(100.0, 100.0));
        crate::app::use_cases::camera::pan(&mut state, Vec2::new(30.0, 0.0));
        advance_canvas_drag(&mut state, Vec2::new(30.0, 0.0));
        end_interaction(&mut state);

        assert!(!state.can_undo());
        assert_eq!(state.view.camera.pan, Vec2::new(30.0, 0.0));
    }
}
