//! Das zentrale Graph-Modell: Geräte, Verbindungen und Gruppen als
//! Arena-Collections, adressiert über opake IDs.
//!
//! Alle Mutationen sind atomar: entweder sie gelingen vollständig oder das
//! Modell bleibt unverändert. Aufrufer halten nie direkten mutablen Zugriff
//! auf die Collections; Konsistenz (Gruppen-Mitgliedschaft, Kaskaden beim
//! Löschen) liegt ausschließlich hier.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use super::group::GROUP_MIN_SIZE;
use super::{Bandwidth, Connection, Device, DeviceKind, Group, Port, PortRef, TopoError};

/// Teil-Update für mutable Geräte-Felder (shallow merge).
#[derive(Debug, Clone, Default)]
pub struct DevicePatch {
    pub name: Option<String>,
    /// `Some(None)` löscht die IP, `Some(Some(ip))` setzt sie.
    pub ip: Option<Option<String>>,
    pub alarm: Option<bool>,
    pub rotation: Option<f32>,
    /// Vollständiger Ersatz der Port-Liste; Port-IDs müssen eindeutig bleiben.
    pub ports: Option<Vec<Port>>,
}

/// Teil-Update für mutable Gruppen-Felder.
#[derive(Debug, Clone, Default)]
pub struct GroupPatch {
    pub name: Option<String>,
}

/// Teil-Update für mutable Verbindungs-Felder.
#[derive(Debug, Clone, Default)]
pub struct ConnectionPatch {
    pub bandwidth: Option<Bandwidth>,
}

/// Container für die gesamte Netzwerk-Topologie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopologyGraph {
    pub(crate) devices: HashMap<u64, Device>,
    pub(crate) connections: HashMap<u64, Connection>,
    pub(crate) groups: HashMap<u64, Group>,
    /// Nächste freie Entity-ID (gemeinsamer Zähler für alle drei Collections)
    pub(crate) next_entity_id: u64,
}

impl TopologyGraph {
    /// Erstellt eine leere Topologie.
    pub fn new() -> Self {
        Self {
            devices: HashMap::new(),
            connections: HashMap::new(),
            groups: HashMap::new(),
            next_entity_id: 1,
        }
    }

    // ── Lesezugriff ─────────────────────────────────────────────────

    pub fn device(&self, id: u64) -> Option<&Device> {
        self.devices.get(&id)
    }

    pub fn group(&self, id: u64) -> Option<&Group> {
        self.groups.get(&id)
    }

    pub fn connection(&self, id: u64) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn devices_iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    pub fn connections_iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    pub fn groups_iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty() && self.connections.is_empty() && self.groups.is_empty()
    }

    /// Weltposition eines Port-Ankers, live aus der Geräteposition berechnet.
    pub fn port_anchor(&self, port: PortRef) -> Option<Vec2> {
        self.devices
            .get(&port.device_id)
            .and_then(|d| d.port_anchor_by_id(port.port_id))
    }

    /// Beide Endpunkt-Anker einer Verbindung.
    pub fn connection_endpoints(&self, connection_id: u64) -> Option<(Vec2, Vec2)> {
        let conn = self.connections.get(&connection_id)?;
        Some((self.port_anchor(conn.source)?, self.port_anchor(conn.target)?))
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        id
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Fügt ein Gerät der angegebenen Art hinzu; Ports und Größe kommen aus
    /// der Kind-Vorlage. Gibt die neue Geräte-ID zurück.
    pub fn add_device(&mut self, kind: DeviceKind, position: Vec2) -> u64 {
        let id = self.alloc_id();
        self.devices.insert(id, Device::new(id, kind, position));
        id
    }

    /// Fügt eine leere Gruppe hinzu. Gibt die neue Gruppen-ID zurück.
    pub fn add_group(&mut self, position: Vec2, size: Vec2) -> u64 {
        let id = self.alloc_id();
        let size = size.max(Vec2::splat(GROUP_MIN_SIZE));
        self.groups.insert(id, Group::new(id, position, size));
        id
    }

    /// Verschiebt ein Gerät an eine neue Position.
    ///
    /// Drag wird nie blockiert, nur uminterpretiert: verlässt ein gruppiertes
    /// Gerät dabei die Gruppenfläche, wird es implizit aus der Gruppe gelöst
    /// statt die Bewegung abzulehnen.
    pub fn move_device(&mut self, id: u64, position: Vec2) -> bool {
        let Some(device) = self.devices.get_mut(&id) else {
            return false;
        };
        device.position = position;

        if let Some(group_id) = device.group_id {
            let still_inside = self
                .groups
                .get(&group_id)
                .is_some_and(|g| g.contains_device(device));
            if !still_inside {
                device.group_id = None;
                if let Some(group) = self.groups.get_mut(&group_id) {
                    group.device_ids.shift_remove(&id);
                }
                log::debug!("Gerät {} hat Gruppe {} per Drag verlassen", id, group_id);
            }
        }
        true
    }

    /// Verschiebt eine Gruppe und alle Mitglieds-Geräte um dasselbe Delta.
    pub fn move_group(&mut self, id: u64, position: Vec2) -> bool {
        let Some(group) = self.groups.get_mut(&id) else {
            return false;
        };
        let delta = position - group.position;
        group.position = position;

        let member_ids: Vec<u64> = group.device_ids.iter().copied().collect();
        for device_id in member_ids {
            if let Some(device) = self.devices.get_mut(&device_id) {
                device.position += delta;
            }
        }
        true
    }

    /// Setzt die Gruppengröße, geklemmt auf das Minimum.
    ///
    /// Mitglieds-Geräte werden bewusst nicht umpositioniert — nach einem
    /// Shrink können sie visuell außerhalb liegen (siehe Datenmodell-Notiz).
    pub fn resize_group(&mut self, id: u64, size: Vec2) -> bool {
        let Some(group) = self.groups.get_mut(&id) else {
            return false;
        };
        group.size = size.max(Vec2::splat(GROUP_MIN_SIZE));
        true
    }

    /// Weist ein Gerät einer Gruppe zu.
    ///
    /// Gelingt nur wenn beide existieren und das Gerät vollständig innerhalb
    /// der Gruppenfläche liegt (Invariante wird am Zuweisungszeitpunkt
    /// geprüft, nicht fortlaufend).
    pub fn assign_device_to_group(&mut self, device_id: u64, group_id: u64) -> bool {
        let contained = match (self.devices.get(&device_id), self.groups.get(&group_id)) {
            (Some(device), Some(group)) => group.contains_device(device),
            _ => return false,
        };
        if !contained {
            return false;
        }

        // Alte Mitgliedschaft lösen
        let old_group_id = self.devices.get(&device_id).and_then(|d| d.group_id);
        if old_group_id == Some(group_id) {
            return true;
        }
        if let Some(old_id) = old_group_id {
            if let Some(old_group) = self.groups.get_mut(&old_id) {
                old_group.device_ids.shift_remove(&device_id);
            }
        }

        if let Some(device) = self.devices.get_mut(&device_id) {
            device.group_id = Some(group_id);
        }
        if let Some(group) = self.groups.get_mut(&group_id) {
            group.device_ids.insert(device_id);
        }
        true
    }

    /// Löst ein Gerät aus seiner Gruppe (no-op wenn ungruppiert).
    pub fn detach_device_from_group(&mut self, device_id: u64) -> bool {
        let Some(device) = self.devices.get_mut(&device_id) else {
            return false;
        };
        let Some(group_id) = device.group_id.take() else {
            return false;
        };
        if let Some(group) = self.groups.get_mut(&group_id) {
            group.device_ids.shift_remove(&device_id);
        }
        true
    }

    /// Löscht ein Gerät inklusive Gruppen-Mitgliedschaft und aller
    /// Verbindungen mit einem Endpunkt auf diesem Gerät (Kaskade).
    pub fn delete_device(&mut self, id: u64) -> bool {
        let Some(device) = self.devices.remove(&id) else {
            return false;
        };
        if let Some(group_id) = device.group_id {
            if let Some(group) = self.groups.get_mut(&group_id) {
                group.device_ids.shift_remove(&id);
            }
        }
        self.connections.retain(|_, c| !c.touches_device(id));
        true
    }

    /// Löscht eine Gruppe; Mitglieder werden gelöst, nicht gelöscht.
    pub fn delete_group(&mut self, id: u64) -> bool {
        let Some(group) = self.groups.remove(&id) else {
            return false;
        };
        for device_id in group.device_ids {
            if let Some(device) = self.devices.get_mut(&device_id) {
                device.group_id = None;
            }
        }
        true
    }

    /// Erstellt eine Verbindung zwischen zwei Ports.
    ///
    /// Scheitert mit `InvalidEndpoint` wenn ein Endpunkt nicht existiert,
    /// beide Endpunkte auf demselben Gerät liegen (Self-Loop) oder dasselbe
    /// ungeordnete Port-Paar bereits verbunden ist (idempotentes Connect).
    /// Die Bandbreite ist das Minimum der beiden Port-Bandbreiten.
    pub fn connect(&mut self, a: PortRef, b: PortRef) -> Result<u64, TopoError> {
        if a.device_id == b.device_id {
            return Err(TopoError::invalid_endpoint(format!(
                "Self-Loop auf Gerät {} abgelehnt",
                a.device_id
            )));
        }

        let port_a = self
            .devices
            .get(&a.device_id)
            .and_then(|d| d.port(a.port_id))
            .ok_or_else(|| {
                TopoError::invalid_endpoint(format!(
                    "Port {}/{} existiert nicht",
                    a.device_id, a.port_id
                ))
            })?;
        let port_b = self
            .devices
            .get(&b.device_id)
            .and_then(|d| d.port(b.port_id))
            .ok_or_else(|| {
                TopoError::invalid_endpoint(format!(
                    "Port {}/{} existiert nicht",
                    b.device_id, b.port_id
                ))
            })?;

        if self.connections.values().any(|c| c.links_same_ports(a, b)) {
            return Err(TopoError::invalid_endpoint(
                "Port-Paar ist bereits verbunden",
            ));
        }

        let bandwidth = port_a.bandwidth.min(port_b.bandwidth);
        let id = self.alloc_id();
        self.connections
            .insert(id, Connection::new(id, a, b, bandwidth));
        Ok(id)
    }

    /// Löscht eine Verbindung.
    pub fn delete_connection(&mut self, id: u64) -> bool {
        self.connections.remove(&id).is_some()
    }

    /// Leert alle drei Collections (Clear-Canvas).
    pub fn clear(&mut self) {
        self.devices.clear();
        self.connections.clear();
        self.groups.clear();
    }

    // ── Property-Patches ────────────────────────────────────────────

    /// Shallow-Merge eines Geräte-Patches.
    ///
    /// Port-Listen-Änderungen werden vorab validiert (eindeutige Port-IDs);
    /// Verbindungen auf entfernte Ports werden in derselben atomaren
    /// Operation mitgelöscht.
    pub fn update_device_props(&mut self, id: u64, patch: DevicePatch) -> Result<(), TopoError> {
        // Validierung vor jeder Mutation (Atomarität)
        if let Some(ports) = &patch.ports {
            let mut seen = HashSet::new();
            for port in ports {
                if !seen.insert(port.id) {
                    return Err(TopoError::invalid_patch(format!(
                        "doppelte Port-ID {} an Gerät {}",
                        port.id, id
                    )));
                }
            }
        }

        let Some(device) = self.devices.get_mut(&id) else {
            return Err(TopoError::invalid_patch(format!(
                "Gerät {} existiert nicht",
                id
            )));
        };
        if let Some(name) = patch.name {
            device.name = name;
        }
        if let Some(ip) = patch.ip {
            device.ip = ip;
        }
        if let Some(alarm) = patch.alarm {
            device.alarm = alarm;
        }
        if let Some(rotation) = patch.rotation {
            device.rotation = rotation;
        }
        if let Some(ports) = patch.ports {
            let kept: HashSet<u32> = ports.iter().map(|p| p.id).collect();
            device.ports = ports;
            // Kaskade: Verbindungen auf entfernte Ports mitlöschen
            self.connections.retain(|_, c| {
                let gone = |p: PortRef| p.device_id == id && !kept.contains(&p.port_id);
                !gone(c.source) && !gone(c.target)
            });
        }
        Ok(())
    }

    /// Shallow-Merge eines Gruppen-Patches.
    pub fn update_group_props(&mut self, id: u64, patch: GroupPatch) -> Result<(), TopoError> {
        let Some(group) = self.groups.get_mut(&id) else {
            return Err(TopoError::invalid_patch(format!(
                "Gruppe {} existiert nicht",
                id
            )));
        };
        if let Some(name) = patch.name {
            group.name = name;
        }
        Ok(())
    }

    /// Shallow-Merge eines Verbindungs-Patches.
    pub fn update_connection_props(
        &mut self,
        id: u64,
        patch: ConnectionPatch,
    ) -> Result<(), TopoError> {
        let Some(conn) = self.connections.get_mut(&id) else {
            return Err(TopoError::invalid_patch(format!(
                "Verbindung {} existiert nicht",
                id
            )));
        };
        if let Some(bandwidth) = patch.bandwidth {
            conn.bandwidth = bandwidth;
        }
        Ok(())
    }

    // ── Hit-Tests ───────────────────────────────────────────────────
    //
    // Lineare Scans; bei mehreren Treffern gewinnt die höchste ID
    // (zuletzt erstellt = visuell oben).

    /// Oberstes Gerät an einem Weltpunkt.
    pub fn pick_device(&self, world_pos: Vec2) -> Option<u64> {
        self.devices
            .values()
            .filter(|d| d.contains(world_pos))
            .map(|d| d.id)
            .max()
    }

    /// Nächster Port-Anker innerhalb des Radius.
    pub fn pick_port(&self, world_pos: Vec2, radius: f32) -> Option<PortRef> {
        let mut best: Option<(f32, PortRef)> = None;
        for device in self.devices.values() {
            for (idx, port) in device.ports.iter().enumerate() {
                let dist = (device.port_anchor(idx) - world_pos).length();
                if dist <= radius && best.map_or(true, |(d, _)| dist < d) {
                    best = Some((dist, PortRef::new(device.id, port.id)));
                }
            }
        }
        best.map(|(_, port)| port)
    }

    /// Oberste Gruppe, deren Fläche den Weltpunkt enthält.
    pub fn pick_group(&self, world_pos: Vec2) -> Option<u64> {
        self.groups
            .values()
            .filter(|g| g.contains_point(world_pos))
            .map(|g| g.id)
            .max()
    }

    /// Gruppe, deren Resize-Griff getroffen wurde.
    pub fn pick_group_handle(&self, world_pos: Vec2, tolerance: f32) -> Option<u64> {
        self.groups
            .values()
            .filter(|g| g.hits_resize_handle(world_pos, tolerance))
            .map(|g| g.id)
            .max()
    }

    /// Verbindung, deren Kante näher als `tolerance` am Weltpunkt verläuft.
    pub fn pick_connection(&self, world_pos: Vec2, tolerance: f32) -> Option<u64> {
        let mut best: Option<(f32, u64)> = None;
        for conn in self.connections.values() {
            let Some((a, b)) = self.connection_endpoints(conn.id) else {
                continue;
            };
            let dist = distance_to_segment(world_pos, a, b);
            if dist <= tolerance && best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, conn.id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Oberste Gruppe, die ein Gerät vollständig enthält (für Drop-Zuweisung).
    pub fn group_containing_device(&self, device_id: u64) -> Option<u64> {
        let device = self.devices.get(&device_id)?;
        self.groups
            .values()
            .filter(|g| g.contains_device(device))
            .map(|g| g.id)
            .max()
    }
}

/// Kürzester Abstand eines Punkts zu einer Strecke.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= f32::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_devices() -> (TopologyGraph, u64, u64) {
        let mut graph = TopologyGraph::new();
        let a = graph.add_device(DeviceKind::Router, Vec2::new(0.0, 0.0));
        let b = graph.add_device(DeviceKind::SwitchAccess, Vec2::new(200.0, 0.0));
        (graph, a, b)
    }

    #[test]
    fn connect_is_idempotent() {
        let (mut graph, a, b) = two_devices();
        graph
            .connect(PortRef::new(a, 1), PortRef::new(b, 1))
            .expect("erstes Connect muss gelingen");

        let second = graph.connect(PortRef::new(a, 1), PortRef::new(b, 1));
        assert!(matches!(second, Err(TopoError::InvalidEndpoint { .. })));
        // Auch mit vertauschten Endpunkten kein Duplikat
        let swapped = graph.connect(PortRef::new(b, 1), PortRef::new(a, 1));
        assert!(matches!(swapped, Err(TopoError::InvalidEndpoint { .. })));

        assert_eq!(graph.connection_count(), 1);
    }

    #[test]
    fn connect_rejects_self_loop() {
        let (mut graph, a, _) = two_devices();
        let result = graph.connect(PortRef::new(a, 1), PortRef::new(a, 2));
        assert!(matches!(result, Err(TopoError::InvalidEndpoint { .. })));
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn connect_rejects_missing_port() {
        let (mut graph, a, b) = two_devices();
        let result = graph.connect(PortRef::new(a, 99), PortRef::new(b, 1));
        assert!(matches!(result, Err(TopoError::InvalidEndpoint { .. })));
        let result = graph.connect(PortRef::new(a, 1), PortRef::new(999, 1));
        assert!(matches!(result, Err(TopoError::InvalidEndpoint { .. })));
    }

    #[test]
    fn connect_uses_minimum_bandwidth() {
        let (mut graph, a, b) = two_devices();
        // Router-Port: 1000, Access-Switch-Port: 100 → Verbindung 100
        let id = graph
            .connect(PortRef::new(a, 1), PortRef::new(b, 1))
            .unwrap();
        assert_eq!(graph.connection(id).unwrap().bandwidth, Bandwidth::Mbps100);
    }

    #[test]
    fn delete_device_cascades_connections() {
        let (mut graph, a, b) = two_devices();
        let c = graph.add_device(DeviceKind::Host, Vec2::new(400.0, 0.0));
        graph.connect(PortRef::new(a, 1), PortRef::new(b, 1)).unwrap();
        graph.connect(PortRef::new(a, 2), PortRef::new(c, 1)).unwrap();
        graph.connect(PortRef::new(b, 2), PortRef::new(c, 1)).unwrap();

        assert!(graph.delete_device(a));

        assert_eq!(graph.device_count(), 2);
        assert_eq!(graph.connection_count(), 1);
        assert!(graph.connections_iter().all(|c| !c.touches_device(a)));
    }

    #[test]
    fn delete_group_detaches_members_without_deleting() {
        let mut graph = TopologyGraph::new();
        let g = graph.add_group(Vec2::ZERO, Vec2::new(300.0, 200.0));
        let d = graph.add_device(DeviceKind::Host, Vec2::new(10.0, 10.0));
        assert!(graph.assign_device_to_group(d, g));

        assert!(graph.delete_group(g));

        let device = graph.device(d).expect("Gerät bleibt erhalten");
        assert!(device.group_id.is_none());
        assert_eq!(graph.group_count(), 0);
    }

    #[test]
    fn move_group_translates_members_only() {
        let mut graph = TopologyGraph::new();
        let g = graph.add_group(Vec2::ZERO, Vec2::new(300.0, 200.0));
        let inside = graph.add_device(DeviceKind::Host, Vec2::new(10.0, 20.0));
        let outside = graph.add_device(DeviceKind::Host, Vec2::new(500.0, 500.0));
        assert!(graph.assign_device_to_group(inside, g));

        assert!(graph.move_group(g, Vec2::new(50.0, 50.0)));

        assert_eq!(graph.device(inside).unwrap().position, Vec2::new(60.0, 70.0));
        assert_eq!(graph.device(outside).unwrap().position, Vec2::new(500.0, 500.0));
        assert_eq!(graph.group(g).unwrap().position, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn move_device_out_of_group_detaches_instead_of_blocking() {
        let mut graph = TopologyGraph::new();
        let g = graph.add_group(Vec2::ZERO, Vec2::new(300.0, 200.0));
        let d = graph.add_device(DeviceKind::Host, Vec2::new(10.0, 10.0));
        assert!(graph.assign_device_to_group(d, g));

        // Innerhalb bleiben: Mitgliedschaft bleibt bestehen
        assert!(graph.move_device(d, Vec2::new(100.0, 100.0)));
        assert_eq!(graph.device(d).unwrap().group_id, Some(g));

        // Herausziehen: Bewegung wird ausgeführt, Mitgliedschaft gelöst
        assert!(graph.move_device(d, Vec2::new(1000.0, 1000.0)));
        let device = graph.device(d).unwrap();
        assert_eq!(device.position, Vec2::new(1000.0, 1000.0));
        assert!(device.group_id.is_none());
        assert!(!graph.group(g).unwrap().device_ids.contains(&d));
    }

    #[test]
    fn assign_rejects_device_outside_bounds() {
        let mut graph = TopologyGraph::new();
        let g = graph.add_group(Vec2::ZERO, Vec2::new(100.0, 100.0));
        let d = graph.add_device(DeviceKind::Host, Vec2::new(90.0, 10.0));
        // Host (40x40) ragt rechts heraus
        assert!(!graph.assign_device_to_group(d, g));
        assert!(graph.device(d).unwrap().group_id.is_none());
    }

    #[test]
    fn resize_group_clamps_to_minimum_and_keeps_members() {
        let mut graph = TopologyGraph::new();
        let g = graph.add_group(Vec2::ZERO, Vec2::new(300.0, 200.0));
        let d = graph.add_device(DeviceKind::Host, Vec2::new(200.0, 100.0));
        assert!(graph.assign_device_to_group(d, g));

        assert!(graph.resize_group(g, Vec2::new(-5.0, 0.5)));

        let group = graph.group(g).unwrap();
        assert_eq!(group.size, Vec2::new(GROUP_MIN_SIZE, GROUP_MIN_SIZE));
        // Mitglied bleibt zugewiesen, auch wenn es nun visuell außerhalb liegt
        assert_eq!(graph.device(d).unwrap().group_id, Some(g));
    }

    #[test]
    fn update_device_props_rejects_duplicate_port_ids_atomically() {
        let (mut graph, a, _) = two_devices();
        let original_ports = graph.device(a).unwrap().ports.clone();

        let patch = DevicePatch {
            name: Some("sollte nicht ankommen".into()),
            ports: Some(vec![
                Port {
                    id: 1,
                    name: "x".into(),
                    status: Default::default(),
                    bandwidth: Bandwidth::Mbps100,
                },
                Port {
                    id: 1,
                    name: "y".into(),
                    status: Default::default(),
                    bandwidth: Bandwidth::Mbps100,
                },
            ]),
            ..Default::default()
        };

        let result = graph.update_device_props(a, patch);
        assert!(matches!(result, Err(TopoError::InvalidPatch { .. })));

        let device = graph.device(a).unwrap();
        assert_eq!(device.ports, original_ports);
        assert_ne!(device.name, "sollte nicht ankommen");
    }

    #[test]
    fn port_removal_cascades_connections() {
        let (mut graph, a, b) = two_devices();
        graph.connect(PortRef::new(a, 1), PortRef::new(b, 1)).unwrap();
        graph.connect(PortRef::new(a, 2), PortRef::new(b, 2)).unwrap();

        // Port 1 an Gerät a entfernen
        let remaining: Vec<Port> = graph
            .device(a)
            .unwrap()
            .ports
            .iter()
            .filter(|p| p.id != 1)
            .cloned()
            .collect();
        graph
            .update_device_props(
                a,
                DevicePatch {
                    ports: Some(remaining),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(graph.connection_count(), 1);
        assert!(graph
            .connections_iter()
            .all(|c| !c.touches_port(PortRef::new(a, 1))));
    }

    #[test]
    fn pick_port_finds_nearest_within_radius() {
        let mut graph = TopologyGraph::new();
        let d = graph.add_device(DeviceKind::Host, Vec2::new(100.0, 100.0));
        let anchor = graph.port_anchor(PortRef::new(d, 1)).unwrap();

        let hit = graph.pick_port(anchor + Vec2::new(3.0, 0.0), 8.0);
        assert_eq!(hit, Some(PortRef::new(d, 1)));

        let miss = graph.pick_port(anchor + Vec2::new(50.0, 0.0), 8.0);
        assert!(miss.is_none());
    }

    #[test]
    fn pick_device_prefers_topmost() {
        let mut graph = TopologyGraph::new();
        let lower = graph.add_device(DeviceKind::Host, Vec2::new(0.0, 0.0));
        let upper = graph.add_device(DeviceKind::Host, Vec2::new(10.0, 10.0));
        // Überlappender Punkt: beide getroffen, höhere ID gewinnt
        let hit = graph.pick_device(Vec2::new(20.0, 20.0));
        assert_eq!(hit, Some(upper));
        let _ = lower;
    }
}
