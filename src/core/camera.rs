//! 2D-Kamera: Abbildung zwischen Welt- und Screen-Koordinaten unter Pan/Zoom.

use glam::Vec2;

/// Session-lokale Canvas-Transformation (wird nie mit dem Graph persistiert).
///
/// Abbildung: `screen = world * scale + pan`. Beide Richtungen sind bis auf
/// Float-Toleranz exakte Inverse. Zoom ist am Canvas-Ursprung verankert:
/// `pan` bleibt beim Zoomen unverändert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// Verschiebung in Screen-Pixeln
    pub pan: Vec2,
    /// Maßstab, geklemmt auf [SCALE_MIN, SCALE_MAX]
    pub scale: f32,
}

impl Camera2D {
    /// Minimaler Maßstab.
    pub const SCALE_MIN: f32 = 0.5;
    /// Maximaler Maßstab.
    pub const SCALE_MAX: f32 = 2.0;

    /// Erstellt die Standard-Kamera (kein Pan, Maßstab 1.0).
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Welt → Screen.
    pub fn world_to_screen(&self, world_pos: Vec2) -> Vec2 {
        world_pos * self.scale + self.pan
    }

    /// Screen → Welt.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.pan) / self.scale
    }

    /// Verschiebt die Ansicht um ein Screen-Pixel-Delta.
    pub fn pan_by(&mut self, delta_screen: Vec2) {
        self.pan += delta_screen;
    }

    /// Additiver Zoom-Schritt, geklemmt auf [0.5, 2.0]. Pan bleibt unverändert.
    pub fn zoom_step(&mut self, delta: f32) {
        self.scale = (self.scale + delta).clamp(Self::SCALE_MIN, Self::SCALE_MAX);
    }

    /// Setzt die Ansicht auf den Ausgangszustand zurück (kein Pan, Maßstab 1.0).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Rechnet einen Screen-Pixel-Radius in Welteinheiten um
    /// (für Hit-Tests, die unabhängig vom Zoom gleich "greifbar" bleiben).
    pub fn pick_radius_world(&self, radius_px: f32) -> f32 {
        radius_px / self.scale
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_world_screen_roundtrip() {
        let camera = Camera2D {
            pan: Vec2::new(120.0, -35.5),
            scale: 1.7,
        };
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(-300.25, 42.0),
            Vec2::new(1234.5, -9876.0),
        ];
        for p in points {
            let back = camera.screen_to_world(camera.world_to_screen(p));
            assert_relative_eq!(back.x, p.x, epsilon = 1e-3);
            assert_relative_eq!(back.y, p.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_zoom_step_clamps_to_bounds() {
        let mut camera = Camera2D::new();
        for _ in 0..30 {
            camera.zoom_step(0.1);
        }
        assert_relative_eq!(camera.scale, Camera2D::SCALE_MAX);

        for _ in 0..60 {
            camera.zoom_step(-0.1);
        }
        assert_relative_eq!(camera.scale, Camera2D::SCALE_MIN);
    }

    #[test]
    fn test_zoom_sequence_steps_linearly() {
        // 1.0 → +0.1 dreimal → -0.1 einmal: 1.1, 1.2, 1.3, 1.2
        let mut camera = Camera2D::new();
        let mut observed = Vec::new();
        for _ in 0..3 {
            camera.zoom_step(0.1);
            observed.push(camera.scale);
        }
        camera.zoom_step(-0.1);
        observed.push(camera.scale);

        let expected = [1.1, 1.2, 1.3, 1.2];
        for (o, e) in observed.iter().zip(expected.iter()) {
            assert_relative_eq!(o, e, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_zoom_keeps_pan_unchanged() {
        let mut camera = Camera2D {
            pan: Vec2::new(50.0, 60.0),
            scale: 1.0,
        };
        camera.zoom_step(0.3);
        assert_eq!(camera.pan, Vec2::new(50.0, 60.0));
    }

    #[test]
    fn test_reset_restores_default_view() {
        let mut camera = Camera2D {
            pan: Vec2::new(-80.0, 33.0),
            scale: 1.6,
        };
        camera.reset();
        assert_eq!(camera.pan, Vec2::ZERO);
        assert_relative_eq!(camera.scale, 1.0);
    }

    #[test]
    fn test_pan_by_accumulates() {
        let mut camera = Camera2D::new();
        camera.pan_by(Vec2::new(10.0, 5.0));
        camera.pan_by(Vec2::new(-4.0, 1.0));
        assert_eq!(camera.pan, Vec2::new(6.0, 6.0));
    }
}
