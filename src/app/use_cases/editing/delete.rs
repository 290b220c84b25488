//! Use-Case: Selektierte Entity löschen.

use crate::app::state::Selection;
use crate::app::AppState;

/// Löscht die aktuell selektierte Entity.
///
/// Kaskaden liegen im Modell: Geräte nehmen ihre Verbindungen mit,
/// Gruppen lösen ihre Mitglieder. Ohne Selektion passiert nichts.
pub fn delete_selected(state: &mut AppState) {
    let deleted = match state.selection.current {
        Selection::None => false,
        Selection::Device(id) => {
            let ok = state.graph_mut().delete_device(id);
            if ok {
                log::info!("Gerät {} gelöscht (inkl. Verbindungen)", id);
            }
            ok
        }
        Selection::Group(id) => {
            let ok = state.graph_mut().delete_group(id);
            if ok {
                log::info!("Gruppe {} gelöscht, Mitglieder gelöst", id);
            }
            ok
        }
        Selection::Connection(id) => {
            let ok = state.graph_mut().delete_connection(id);
            if ok {
                log::info!("Verbindung {} gelöscht", id);
            }
            ok
        }
    };

    if deleted {
        state.selection.clear();
        state.record_history_snapshot();
    }
}
