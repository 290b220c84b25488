//! Gruppen ("Räume"): rechteckige Containment-Regionen für Geräte.

use glam::Vec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::Device;

/// Minimale Kantenlänge einer Gruppe in Welteinheiten.
/// Resize darunter wird geklemmt, nie als Fehler gemeldet.
pub const GROUP_MIN_SIZE: f32 = 1.0;

/// Eine rechteckige Containment-Region, die Geräte visuell und logisch bündelt.
///
/// `device_ids` ist redundant zu `Device::group_id` und wird ausschließlich
/// vom Graph-Modell konsistent gehalten, nie von Aufrufern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    /// Linke obere Ecke in Weltkoordinaten
    pub position: Vec2,
    pub size: Vec2,
    /// Mitglieds-Geräte in deterministischer Einfüge-Reihenfolge
    #[serde(default)]
    pub device_ids: IndexSet<u64>,
}

impl Group {
    /// Erstellt eine leere Gruppe mit Standardnamen.
    pub fn new(id: u64, position: Vec2, size: Vec2) -> Self {
        Self {
            id,
            name: format!("Room {}", id),
            position,
            size,
            device_ids: IndexSet::new(),
        }
    }

    /// Rechte untere Ecke in Weltkoordinaten.
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// Prüft ob ein Weltpunkt innerhalb der Gruppenfläche liegt.
    pub fn contains_point(&self, world_pos: Vec2) -> bool {
        let max = self.max();
        self.position.x <= world_pos.x
            && world_pos.x <= max.x
            && self.position.y <= world_pos.y
            && world_pos.y <= max.y
    }

    /// Prüft ob ein Gerät vollständig innerhalb der Gruppenfläche liegt.
    pub fn contains_device(&self, device: &Device) -> bool {
        device.fully_inside(self.position, self.max())
    }

    /// Prüft ob ein Weltpunkt auf dem Resize-Griff (rechte untere Ecke) liegt.
    pub fn hits_resize_handle(&self, world_pos: Vec2, tolerance: f32) -> bool {
        (world_pos - self.max()).length() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeviceKind;

    #[test]
    fn contains_device_requires_full_containment() {
        let group = Group::new(1, Vec2::new(0.0, 0.0), Vec2::new(300.0, 200.0));
        let mut device = Device::new(2, DeviceKind::Host, Vec2::new(10.0, 10.0));
        assert!(group.contains_device(&device));

        // Teilweise überlappend zählt nicht
        device.position = Vec2::new(280.0, 10.0);
        assert!(!group.contains_device(&device));
    }

    #[test]
    fn resize_handle_hit_uses_tolerance() {
        let group = Group::new(1, Vec2::ZERO, Vec2::new(100.0, 100.0));
        assert!(group.hits_resize_handle(Vec2::new(102.0, 99.0), 5.0));
        assert!(!group.hits_resize_handle(Vec2::new(120.0, 99.0), 5.0));
    }
}
