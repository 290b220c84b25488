//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Zoomt die Kamera einen additiven Schritt hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_step(state.options.camera_zoom_step);
}

/// Zoomt die Kamera einen additiven Schritt heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_step(-state.options.camera_zoom_step);
}

/// Setzt die Ansicht zurück (kein Pan, Maßstab 1.0). Kein History-Eintrag:
/// die Kamera ist Session-Zustand und wird nie mit dem Graph persistiert.
pub fn reset_view(state: &mut AppState) {
    state.view.camera.reset();
}

/// Verschiebt die Kamera um ein Screen-Pixel-Delta.
pub fn pan(state: &mut AppState, delta_screen: glam::Vec2) {
    state.view.camera.pan_by(delta_screen);
}
