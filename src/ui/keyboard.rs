//! Keyboard-Shortcuts für den Editor.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, Selection};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, selection: Selection) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_z, key_y, key_o, key_s, key_del) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
        )
    });

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    if modifiers.command && key_z && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y || (modifiers.shift && key_z)) {
        events.push(AppIntent::RedoRequested);
    }

    if modifiers.command && key_o {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s {
        if modifiers.shift {
            events.push(AppIntent::SaveAsRequested);
        } else {
            events.push(AppIntent::SaveRequested);
        }
    }

    if key_del && selection != Selection::None {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_with_key_event(event: egui::Event, selection: Selection) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        if let egui::Event::Key { modifiers, .. } = &event {
            raw_input.modifiers = *modifiers;
        }
        raw_input.events.push(event);

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = collect_keyboard_intents(ui, selection);
            });
        });

        events
    }

    #[test]
    fn test_ctrl_z_emits_undo_intent() {
        let events = collect_with_key_event(
            egui::Event::Key {
                key: egui::Key::Z,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::COMMAND,
            },
            Selection::None,
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::UndoRequested)));
    }

    #[test]
    fn test_shift_ctrl_z_emits_redo_intent() {
        let events = collect_with_key_event(
            egui::Event::Key {
                key: egui::Key::Z,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
            },
            Selection::None,
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::RedoRequested)));
        assert!(!events
            .iter()
            .any(|event| matches!(event, AppIntent::UndoRequested)));
    }

    #[test]
    fn test_delete_with_selection_emits_delete_intent() {
        let events = collect_with_key_event(
            egui::Event::Key {
                key: egui::Key::Delete,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            },
            Selection::Device(7),
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::DeleteSelectedRequested)));
    }

    #[test]
    fn test_delete_without_selection_does_nothing() {
        let events = collect_with_key_event(
            egui::Event::Key {
                key: egui::Key::Delete,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            },
            Selection::None,
        );

        assert!(events.is_empty());
    }
}
