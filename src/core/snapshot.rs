//! Serialisierbarer Voll-Snapshot der Topologie.
//!
//! Snapshots dienen sowohl der Undo/Redo-History (in-memory, via `Arc`)
//! als auch Save/Load auf Platte (JSON). Beim Laden wird vollständig
//! validiert; ein fehlerhafter Snapshot lässt den aktuellen Zustand
//! unangetastet.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Connection, Device, Group, TopoError, TopologyGraph};

/// Aktuelle Snapshot-Formatversion.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Vollständige, geordnete Abbildung des Graphen für Persistenz.
///
/// Alle Listen sind nach ID sortiert, damit Dateien diff-stabil bleiben.
/// Kamera und Selektion sind session-lokal und tauchen hier bewusst
/// nicht auf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologySnapshot {
    pub version: u32,
    pub devices: Vec<Device>,
    pub connections: Vec<Connection>,
    pub groups: Vec<Group>,
}

impl TopologyGraph {
    /// Erstellt einen geordneten Snapshot des aktuellen Zustands.
    pub fn to_snapshot(&self) -> TopologySnapshot {
        let mut devices: Vec<Device> = self.devices.values().cloned().collect();
        devices.sort_by_key(|d| d.id);
        let mut connections: Vec<Connection> = self.connections.values().cloned().collect();
        connections.sort_by_key(|c| c.id);
        let mut groups: Vec<Group> = self.groups.values().cloned().collect();
        groups.sort_by_key(|g| g.id);

        TopologySnapshot {
            version: SNAPSHOT_VERSION,
            devices,
            connections,
            groups,
        }
    }

    /// Rekonstruiert einen Graphen aus einem Snapshot.
    ///
    /// Validiert jede referentielle Invariante; der erste Verstoß bricht mit
    /// `MalformedSnapshot` ab, bevor irgendein Zustand entsteht.
    /// Gruppen-Mitgliedslisten werden nicht aus der Datei übernommen, sondern
    /// aus `Device::group_id` neu aufgebaut (das Modell ist die einzige
    /// Autorität über diese Redundanz).
    pub fn from_snapshot(snapshot: &TopologySnapshot) -> Result<Self, TopoError> {
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(TopoError::malformed(format!(
                "Formatversion {} wird nicht unterstützt (max. {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }

        let mut graph = TopologyGraph::new();
        let mut seen_ids: HashSet<u64> = HashSet::new();
        let mut max_id: u64 = 0;

        for device in &snapshot.devices {
            if !seen_ids.insert(device.id) {
                return Err(TopoError::malformed(format!(
                    "doppelte Entity-ID {}",
                    device.id
                )));
            }
            if device.size.x <= 0.0 || device.size.y <= 0.0 {
                return Err(TopoError::malformed(format!(
                    "Gerät {} hat ungültige Größe",
                    device.id
                )));
            }
            let mut port_ids = HashSet::new();
            for port in &device.ports {
                if !port_ids.insert(port.id) {
                    return Err(TopoError::malformed(format!(
                        "doppelte Port-ID {} an Gerät {}",
                        port.id, device.id
                    )));
                }
            }
            max_id = max_id.max(device.id);
        }

        for group in &snapshot.groups {
            if !seen_ids.insert(group.id) {
                return Err(TopoError::malformed(format!(
                    "doppelte Entity-ID {}",
                    group.id
                )));
            }
            if group.size.x <= 0.0 || group.size.y <= 0.0 {
                return Err(TopoError::malformed(format!(
                    "Gruppe {} hat ungültige Größe",
                    group.id
                )));
            }
            max_id = max_id.max(group.id);
        }

        let device_index: HashMap<u64, &Device> =
            snapshot.devices.iter().map(|d| (d.id, d)).collect();
        let group_ids: HashSet<u64> = snapshot.groups.iter().map(|g| g.id).collect();

        for device in &snapshot.devices {
            if let Some(group_id) = device.group_id {
                if !group_ids.contains(&group_id) {
                    return Err(TopoError::malformed(format!(
                        "Gerät {} referenziert fehlende Gruppe {}",
                        device.id, group_id
                    )));
                }
            }
        }

        for conn in &snapshot.connections {
            if !seen_ids.insert(conn.id) {
                return Err(TopoError::malformed(format!(
                    "doppelte Entity-ID {}",
                    conn.id
                )));
            }
            if conn.source.device_id == conn.target.device_id {
                return Err(TopoError::malformed(format!(
                    "Verbindung {} ist ein Self-Loop",
                    conn.id
                )));
            }
            for endpoint in [conn.source, conn.target] {
                let port_exists = device_index
                    .get(&endpoint.device_id)
                    .is_some_and(|d| d.port(endpoint.port_id).is_some());
                if !port_exists {
                    return Err(TopoError::malformed(format!(
                        "Verbindung {} referenziert fehlenden Port {}/{}",
                        conn.id, endpoint.device_id, endpoint.port_id
                    )));
                }
            }
            let duplicate = snapshot
                .connections
                .iter()
                .any(|other| other.id != conn.id && other.links_same_ports(conn.source, conn.target));
            if duplicate {
                return Err(TopoError::malformed(format!(
                    "Port-Paar der Verbindung {} ist mehrfach verbunden",
                    conn.id
                )));
            }
            max_id = max_id.max(conn.id);
        }

        // Ab hier kann nichts mehr scheitern: Collections befüllen
        for device in &snapshot.devices {
            graph.devices.insert(device.id, device.clone());
        }
        for group in &snapshot.groups {
            let mut group = group.clone();
            group.device_ids.clear();
            graph.groups.insert(group.id, group);
        }
        // Mitgliedslisten aus den Geräten neu aufbauen
        let mut memberships: Vec<(u64, u64)> = graph
            .devices
            .values()
            .filter_map(|d| d.group_id.map(|g| (g, d.id)))
            .collect();
        memberships.sort_unstable();
        for (group_id, device_id) in memberships {
            if let Some(group) = graph.groups.get_mut(&group_id) {
                group.device_ids.insert(device_id);
            }
        }
        for conn in &snapshot.connections {
            graph.connections.insert(conn.id, conn.clone());
        }
        graph.next_entity_id = max_id + 1;
        Ok(graph)
    }
}
