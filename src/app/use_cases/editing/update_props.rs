//! Use-Case: Property-Patches aus dem Properties-Panel anwenden.
//!
//! Patches sind atomar: ein abgelehnter Patch (z.B. doppelte Port-IDs)
//! lässt Graph und History unverändert und meldet den Fehler als
//! Statusnachricht.

use crate::app::AppState;
use crate::core::{ConnectionPatch, DevicePatch, GroupPatch};

/// Wendet einen Geräte-Patch an.
pub fn update_device_props(state: &mut AppState, device_id: u64, patch: DevicePatch) {
    match state.graph_mut().update_device_props(device_id, patch) {
        Ok(()) => {
            state.record_history_snapshot();
            log::info!("Gerät {} aktualisiert", device_id);
        }
        Err(e) => {
            log::warn!("Geräte-Patch abgelehnt: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}

/// Wendet einen Gruppen-Patch an.
pub fn update_group_props(state: &mut AppState, group_id: u64, patch: GroupPatch) {
    match state.graph_mut().update_group_props(group_id, patch) {
        Ok(()) => {
            state.record_history_snapshot();
            log::info!("Gruppe {} aktualisiert", group_id);
        }
        Err(e) => {
            log::warn!("Gruppen-Patch abgelehnt: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}

/// Wendet einen Verbindungs-Patch an.
pub fn update_connection_props(state: &mut AppState, connection_id: u64, patch: ConnectionPatch) {
    match state.graph_mut().update_connection_props(connection_id, patch) {
        Ok(()) => {
            state.record_history_snapshot();
            log::info!("Verbindung {} aktualisiert", connection_id);
        }
        Err(e) => {
            log::warn!("Verbindungs-Patch abgelehnt: {}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}
