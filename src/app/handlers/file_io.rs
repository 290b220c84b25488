//! Handler für Datei-Operationen (Öffnen, Speichern).

use crate::app::use_cases;
use crate::app::AppState;

/// Öffnet den Datei-Öffnen-Dialog.
pub fn request_open(state: &mut AppState) {
    use_cases::file_io::request_open_file(state);
}

/// Öffnet den Datei-Speichern-Dialog.
pub fn request_save(state: &mut AppState) {
    use_cases::file_io::request_save_file(state);
}

/// Lädt eine Topologie aus dem übergebenen Pfad.
/// Fehler landen als Statusnachricht in der UI, nie als Panik.
pub fn load(state: &mut AppState, path: String) {
    use_cases::file_io::load_selected_file(state, path);
}

/// Speichert die Topologie.
///
/// `None` speichert unter dem aktuell bekannten Pfad (oder öffnet den Dialog).
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    match path {
        Some(p) => use_cases::file_io::save_file_as(state, p),
        None => use_cases::file_io::save_current_file(state),
    }
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
