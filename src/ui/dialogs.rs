//! Datei-Dialoge und modale Fenster.

use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Topologie", &["json"])
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Save-Datei-Dialog
    if ui_state.show_save_file_dialog {
        ui_state.show_save_file_dialog = false;

        let default_name = ui_state
            .current_file_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("topology.json");

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Topologie", &["json"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}

/// Zeigt den Canvas-Leeren-Bestätigungsdialog als modales Fenster.
pub fn show_clear_confirm_dialog(ctx: &egui::Context, show: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !show {
        return events;
    }

    egui::Window::new("Canvas leeren")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label("Alle Geräte, Verbindungen und Räume werden entfernt.");
                ui.label("Die Aktion kann mit Undo rückgängig gemacht werden.");
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Leeren").clicked() {
                        events.push(AppIntent::ClearCanvasConfirmed);
                    }

                    if ui.button("Abbrechen").clicked() {
                        events.push(AppIntent::ClearCanvasCancelled);
                    }
                });
            });
        });

    events
}
