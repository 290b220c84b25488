//! Viewport-Input-Handling: Maus-Events und Scroll → AppIntent.
//!
//! Der Viewport leitet rohe Pointer-Events als Intents weiter; die
//! Interaktions-Zustandsmaschine im Application-Layer entscheidet, was
//! daraus wird (Pan, Drag, Draht-Ziehen).

use super::keyboard;
use crate::app::{AppIntent, AppState};

/// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
///
/// Pointer-Positionen werden Canvas-lokal gemeldet (Ursprung = linke
/// obere Ecke des Viewports), passend zur Kamera-Abbildung.
pub fn collect_viewport_events(
    ui: &egui::Ui,
    response: &egui::Response,
    state: &AppState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let rect = response.rect;
    events.push(AppIntent::ViewportResized {
        size: [rect.width(), rect.height()],
    });

    events.extend(keyboard::collect_keyboard_intents(
        ui,
        state.selection.current,
    ));

    let to_local = |pos: egui::Pos2| glam::Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);

    let (primary_pressed, primary_released, press_origin, latest_pos, is_moving) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.press_origin(),
            i.pointer.latest_pos(),
            i.pointer.is_moving(),
        )
    });

    // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle)
    if primary_pressed && response.hovered() {
        if let Some(pos) = press_origin.or(latest_pos) {
            events.push(AppIntent::PointerPressed {
                screen_pos: to_local(pos),
            });
        }
    }

    // Moves auch außerhalb des Viewports melden, solange eine Interaktion
    // läuft (Drags dürfen den Canvas-Rand überschreiten)
    if is_moving && (response.hovered() || !state.interaction.is_idle()) {
        if let Some(pos) = latest_pos {
            events.push(AppIntent::PointerMoved {
                screen_pos: to_local(pos),
            });
        }
    }

    if primary_released && !state.interaction.is_idle() {
        if let Some(pos) = latest_pos {
            events.push(AppIntent::PointerReleased {
                screen_pos: to_local(pos),
            });
        }
    }

    // Scroll-Zoom in Stufen
    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll != 0.0 && response.hovered() {
        if scroll > 0.0 {
            events.push(AppIntent::ZoomInRequested);
        } else {
            events.push(AppIntent::ZoomOutRequested);
        }
    }

    events
}
