//! Core-Domänentypen: Geräte, Ports, Verbindungen, Gruppen, Kamera, Snapshot.

pub mod camera;
pub mod connection;
pub mod device;
pub mod error;
pub mod group;
pub mod snapshot;
/// Core-Datenmodell der Netzwerk-Topologie
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - TopologyGraph: Container für alle Geräte, Verbindungen und Gruppen
/// - Device/Port: Netzwerkgerät mit fester Grundfläche und Anschlüssen
/// - Connection: Kante zwischen zwei Ports zweier Geräte
/// - Group: rechteckige Containment-Region ("Raum")
pub mod topology;

pub use camera::Camera2D;
pub use connection::{Connection, PortRef};
pub use device::{rotate_vec2, Bandwidth, Device, DeviceKind, Port, PortStatus};
pub use error::TopoError;
pub use group::{Group, GROUP_MIN_SIZE};
pub use snapshot::{TopologySnapshot, SNAPSHOT_VERSION};
pub use topology::{
    distance_to_segment, ConnectionPatch, DevicePatch, GroupPatch, TopologyGraph,
};
