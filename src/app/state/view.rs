use crate::core::Camera2D;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }

    /// Weltposition der Viewport-Mitte (Platzierungspunkt der Palette).
    pub fn viewport_center_world(&self) -> Vec2 {
        let center_screen = Vec2::new(self.viewport_size[0] * 0.5, self.viewport_size[1] * 0.5);
        self.camera.screen_to_world(center_screen)
    }
}
