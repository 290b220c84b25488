//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, Selection};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Devices: {} | Connections: {} | Rooms: {}",
                state.device_count(),
                state.connection_count(),
                state.group_count()
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Pan: ({:.0}, {:.0})",
                state.view.camera.scale, state.view.camera.pan.x, state.view.camera.pan.y
            ));

            ui.separator();

            if let Some(ref path) = state.ui.current_file_path {
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("Datei: {}", filename));
            } else {
                ui.label("Keine Datei geladen");
            }

            ui.separator();

            match state.selection.current {
                Selection::None => ui.label("Selektion: –"),
                Selection::Device(id) => ui.label(format!("Selektion: Gerät {}", id)),
                Selection::Group(id) => ui.label(format!("Selektion: Raum {}", id)),
                Selection::Connection(id) => ui.label(format!("Selektion: Verbindung {}", id)),
            };

            // Statusnachricht (z.B. Lade-Fehler oder abgelehnter Patch)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));

                // Jüngster Command aus dem Log, nur der Variantenname
                if let Some(command) = state.command_log.last() {
                    let debug = format!("{:?}", command);
                    let name = debug
                        .split(|c: char| c == ' ' || c == '{')
                        .next()
                        .unwrap_or(&debug);
                    ui.separator();
                    ui.label(egui::RichText::new(name.to_owned()).weak());
                }
            });
        });
    });
}
