//! Verbindungen zwischen zwei Geräte-Ports.

use serde::{Deserialize, Serialize};

use super::Bandwidth;

/// Externe Port-Referenz: Paar aus Geräte-ID und geräte-lokaler Port-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRef {
    pub device_id: u64,
    pub port_id: u32,
}

impl PortRef {
    pub fn new(device_id: u64, port_id: u32) -> Self {
        Self { device_id, port_id }
    }
}

/// Eine Kante zwischen zwei Ports zweier (verschiedener) Geräte.
///
/// Für das Rendering ungerichtet; source/target bleiben nach Erstellung
/// stabil und werden nie getauscht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: u64,
    pub source: PortRef,
    pub target: PortRef,
    /// Bandbreite in Mbit/s (Minimum der beiden Port-Bandbreiten bei Erstellung)
    pub bandwidth: Bandwidth,
}

impl Connection {
    pub fn new(id: u64, source: PortRef, target: PortRef, bandwidth: Bandwidth) -> Self {
        Self {
            id,
            source,
            target,
            bandwidth,
        }
    }

    /// Prüft ob diese Verbindung dasselbe ungeordnete Port-Paar verbindet.
    pub fn links_same_ports(&self, a: PortRef, b: PortRef) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Prüft ob ein Endpunkt auf dem angegebenen Gerät liegt.
    pub fn touches_device(&self, device_id: u64) -> bool {
        self.source.device_id == device_id || self.target.device_id == device_id
    }

    /// Prüft ob ein Endpunkt exakt auf dem angegebenen Port liegt.
    pub fn touches_port(&self, port: PortRef) -> bool {
        self.source == port || self.target == port
    }
}
