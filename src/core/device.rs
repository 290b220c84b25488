//! Geräte und Ports: die Knoten des Topologie-Graphen.
//!
//! Jede Geräteart bringt eine feste Grundfläche und eine Port-Vorlage mit;
//! beide werden bei der Erstellung aus der Art abgeleitet, Ports bleiben
//! danach über das Properties-Panel editierbar.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Die acht unterstützten Gerätearten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    Router,
    SwitchAccess,
    SwitchAggregation,
    SwitchCore,
    Firewall,
    Host,
    WirelessAp,
    MonitorCamera,
}

impl DeviceKind {
    /// Alle Arten in Palette-Reihenfolge.
    pub const ALL: [DeviceKind; 8] = [
        DeviceKind::Router,
        DeviceKind::SwitchAccess,
        DeviceKind::SwitchAggregation,
        DeviceKind::SwitchCore,
        DeviceKind::Firewall,
        DeviceKind::Host,
        DeviceKind::WirelessAp,
        DeviceKind::MonitorCamera,
    ];

    /// Anzeigename (Palette, Properties-Panel, Default-Gerätename).
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Router => "Router",
            DeviceKind::SwitchAccess => "Access Switch",
            DeviceKind::SwitchAggregation => "Aggregation Switch",
            DeviceKind::SwitchCore => "Core Switch",
            DeviceKind::Firewall => "Firewall",
            DeviceKind::Host => "Host",
            DeviceKind::WirelessAp => "Wireless AP",
            DeviceKind::MonitorCamera => "Camera",
        }
    }

    /// Feste Grundfläche der Art in Welteinheiten.
    pub fn footprint(&self) -> Vec2 {
        match self {
            DeviceKind::Router => Vec2::new(60.0, 40.0),
            DeviceKind::SwitchAccess => Vec2::new(60.0, 30.0),
            DeviceKind::SwitchAggregation => Vec2::new(70.0, 30.0),
            DeviceKind::SwitchCore => Vec2::new(80.0, 40.0),
            DeviceKind::Firewall => Vec2::new(50.0, 40.0),
            DeviceKind::Host => Vec2::new(40.0, 40.0),
            DeviceKind::WirelessAp => Vec2::new(30.0, 30.0),
            DeviceKind::MonitorCamera => Vec2::new(30.0, 30.0),
        }
    }

    /// Port-Vorlage der Art: (Anzahl, Bandbreite je Port).
    pub fn port_template(&self) -> (usize, Bandwidth) {
        match self {
            DeviceKind::Router => (4, Bandwidth::Mbps1000),
            DeviceKind::SwitchAccess => (8, Bandwidth::Mbps100),
            DeviceKind::SwitchAggregation => (8, Bandwidth::Mbps1000),
            DeviceKind::SwitchCore => (4, Bandwidth::Mbps10000),
            DeviceKind::Firewall => (4, Bandwidth::Mbps1000),
            DeviceKind::Host => (1, Bandwidth::Mbps1000),
            DeviceKind::WirelessAp => (2, Bandwidth::Mbps1000),
            DeviceKind::MonitorCamera => (1, Bandwidth::Mbps100),
        }
    }
}

/// Port-Bandbreite in Mbit/s; nur die drei Ethernet-Stufen sind gültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Bandwidth {
    Mbps100,
    Mbps1000,
    Mbps10000,
}

impl Bandwidth {
    /// Numerischer Wert in Mbit/s.
    pub fn mbps(&self) -> u32 {
        match self {
            Bandwidth::Mbps100 => 100,
            Bandwidth::Mbps1000 => 1000,
            Bandwidth::Mbps10000 => 10000,
        }
    }
}

impl From<Bandwidth> for u32 {
    fn from(b: Bandwidth) -> u32 {
        b.mbps()
    }
}

impl TryFrom<u32> for Bandwidth {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(Bandwidth::Mbps100),
            1000 => Ok(Bandwidth::Mbps1000),
            10000 => Ok(Bandwidth::Mbps10000),
            other => Err(format!("unbekannte Bandbreite: {} Mbit/s", other)),
        }
    }
}

/// Betriebszustand eines Ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    #[default]
    Up,
    Down,
}

/// Ein physischer Anschluss an einem Gerät.
///
/// `id` ist geräte-lokal eindeutig und bleibt über Umbenennungen stabil;
/// Verbindungen referenzieren Ports ausschließlich über (Geräte-ID, Port-ID).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub status: PortStatus,
    pub bandwidth: Bandwidth,
}

/// Ein Netzwerkgerät auf dem Canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: u64,
    pub kind: DeviceKind,
    pub name: String,
    #[serde(default)]
    pub ip: Option<String>,
    /// Linke obere Ecke in Weltkoordinaten (unrotiert)
    pub position: Vec2,
    /// Grundfläche, fest je Art
    pub size: Vec2,
    /// Rotation in Grad um den Mittelpunkt
    #[serde(default)]
    pub rotation: f32,
    /// Gruppen-Mitgliedschaft; wird nur vom Graph-Modell gepflegt
    #[serde(default)]
    pub group_id: Option<u64>,
    #[serde(default)]
    pub alarm: bool,
    /// Ports in stabiler Anzeige-Reihenfolge
    pub ports: Vec<Port>,
}

impl Device {
    /// Erstellt ein Gerät mit Grundfläche und Ports aus der Art-Vorlage.
    pub fn new(id: u64, kind: DeviceKind, position: Vec2) -> Self {
        let (port_count, bandwidth) = kind.port_template();
        let ports = (0..port_count)
            .map(|i| Port {
                id: (i + 1) as u32,
                name: format!("eth{}", i),
                status: PortStatus::Up,
                bandwidth,
            })
            .collect();
        Self {
            id,
            kind,
            name: format!("{} {}", kind.label(), id),
            ip: None,
            position,
            size: kind.footprint(),
            rotation: 0.0,
            group_id: None,
            alarm: false,
            ports,
        }
    }

    /// Mittelpunkt in Weltkoordinaten (Rotationszentrum).
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Port per geräte-lokaler ID.
    pub fn port(&self, port_id: u32) -> Option<&Port> {
        self.ports.iter().find(|p| p.id == port_id)
    }

    /// Hit-Test gegen die rotierte Grundfläche: der Weltpunkt wird um den
    /// Mittelpunkt zurückgedreht und gegen das unrotierte Rechteck geprüft.
    pub fn contains(&self, world_pos: Vec2) -> bool {
        let center = self.center();
        let local = rotate_vec2(world_pos - center, -self.rotation.to_radians()) + center;
        let max = self.position + self.size;
        self.position.x <= local.x
            && local.x <= max.x
            && self.position.y <= local.y
            && local.y <= max.y
    }

    /// Weltposition des Port-Ankers per Listenindex.
    ///
    /// Anker liegen gleichmäßig verteilt auf der Unterkante und werden live
    /// aus Position und Rotation berechnet, nie gespeichert.
    pub fn port_anchor(&self, index: usize) -> Vec2 {
        let n = self.ports.len().max(1) as f32;
        let t = (index as f32 + 1.0) / (n + 1.0);
        let unrotated = Vec2::new(self.position.x + self.size.x * t, self.position.y + self.size.y);
        let center = self.center();
        rotate_vec2(unrotated - center, self.rotation.to_radians()) + center
    }

    /// Weltposition des Port-Ankers per geräte-lokaler Port-ID.
    pub fn port_anchor_by_id(&self, port_id: u32) -> Option<Vec2> {
        self.ports
            .iter()
            .position(|p| p.id == port_id)
            .map(|idx| self.port_anchor(idx))
    }

    /// Prüft ob die (unrotierte) Bounding-Box vollständig im Rechteck liegt.
    pub fn fully_inside(&self, min: Vec2, max: Vec2) -> bool {
        let own_max = self.position + self.size;
        min.x <= self.position.x && own_max.x <= max.x && min.y <= self.position.y && own_max.y <= max.y
    }
}

/// Rotiert einen Vektor um den Ursprung (Winkel im Bogenmaß).
pub fn rotate_vec2(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
