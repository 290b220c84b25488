//! Toolbar mit Geräte-Palette und Undo/Redo/Zoom-Buttons.

use crate::app::{AppIntent, AppState, Selection};
use crate::core::DeviceKind;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Palette:");
            ui.separator();

            // Geräte-Palette: ein Button pro Gerätetyp, Platzierung in der
            // Viewport-Mitte
            for kind in DeviceKind::ALL {
                if ui.button(kind.label()).clicked() {
                    events.push(AppIntent::AddDeviceRequested { kind });
                }
            }

            ui.separator();

            if ui.button("Room").clicked() {
                events.push(AppIntent::AddGroupRequested);
            }

            ui.separator();

            let has_selection = state.selection.current != Selection::None;
            if ui
                .add_enabled(has_selection, egui::Button::new("🗑 Delete (Del)"))
                .clicked()
            {
                events.push(AppIntent::DeleteSelectedRequested);
            }

            ui.separator();

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("⟲ Undo"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("⟳ Redo"))
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            ui.separator();

            if ui.button("＋ Zoom").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("－ Zoom").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui.button("1:1").clicked() {
                events.push(AppIntent::ResetViewRequested);
            }
        });
    });

    events
}
