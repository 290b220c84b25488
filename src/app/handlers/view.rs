//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Setzt die Ansicht auf den Ausgangszustand zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Screen-Pixel-Delta.
///
/// Läuft ein Canvas-Pan, wird dessen Anker mitgeführt, damit das nächste
/// Bewegungs-Delta relativ zur neuen Zeigerposition berechnet wird.
pub fn pan(state: &mut AppState, delta_screen: glam::Vec2) {
    use_cases::camera::pan(state, delta_screen);
    use_cases::pointer::advance_canvas_drag(state, delta_screen);
}
