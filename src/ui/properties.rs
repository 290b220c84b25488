//! Properties-Panel (rechte Seitenleiste) für Geräte-, Raum- und
//! Verbindungs-Eigenschaften.

use crate::app::{AppIntent, AppState, Selection};
use crate::core::{Bandwidth, ConnectionPatch, DevicePatch, GroupPatch, PortStatus};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
///
/// Textfelder werden über einen Draft-Puffer editiert und erst bei
/// Fokusverlust oder Enter als Patch committet (ein History-Eintrag
/// pro Commit, nicht pro Tastendruck).
pub fn render_properties_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    reseed_draft_on_selection_change(state);

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            match state.selection.current {
                Selection::None => {
                    ui.label("Keine Selektion");
                }
                Selection::Device(device_id) => {
                    render_device_props(ui, state, device_id, &mut events);
                }
                Selection::Group(group_id) => {
                    render_group_props(ui, state, group_id, &mut events);
                }
                Selection::Connection(connection_id) => {
                    render_connection_props(ui, state, connection_id, &mut events);
                }
            }
        });

    events
}

/// Lädt den Draft-Puffer neu, wenn sich die Selektion geändert hat.
fn reseed_draft_on_selection_change(state: &mut AppState) {
    let selection = state.selection.current;
    if state.ui.props_draft.entity == selection {
        return;
    }

    let draft = &mut state.ui.props_draft;
    draft.entity = selection;
    draft.name.clear();
    draft.ip.clear();
    draft.rotation = 0.0;

    match selection {
        Selection::Device(id) => {
            if let Some(device) = state.graph.device(id) {
                draft.name = device.name.clone();
                draft.ip = device.ip.clone().unwrap_or_default();
                draft.rotation = device.rotation;
            }
        }
        Selection::Group(id) => {
            if let Some(group) = state.graph.group(id) {
                draft.name = group.name.clone();
            }
        }
        _ => {}
    }
}

fn text_committed(response: &egui::Response) -> bool {
    response.lost_focus()
}

fn render_device_props(
    ui: &mut egui::Ui,
    state: &mut AppState,
    device_id: u64,
    events: &mut Vec<AppIntent>,
) {
    let Some(device) = state.graph.device(device_id) else {
        ui.label("Gerät nicht mehr vorhanden");
        return;
    };

    ui.label(format!("Gerät ID: {}", device_id));
    ui.label(format!("Typ: {}", device.kind.label()));
    ui.label(format!(
        "Position: ({:.1}, {:.1})",
        device.position.x, device.position.y
    ));
    if let Some(group_id) = device.group_id {
        ui.label(format!("Raum: {}", group_id));
    }

    ui.separator();

    // Ports lesen, bevor der Draft-Puffer mutabel gebraucht wird
    let ports = device.ports.clone();
    let current_name = device.name.clone();
    let current_ip = device.ip.clone();
    let current_rotation = device.rotation;
    let alarm = device.alarm;

    let draft = &mut state.ui.props_draft;

    // Name
    ui.horizontal(|ui| {
        ui.label("Name:");
        let response = ui.text_edit_singleline(&mut draft.name);
        if text_committed(&response) && draft.name != current_name {
            events.push(AppIntent::UpdateDevicePropsRequested {
                device_id,
                patch: DevicePatch {
                    name: Some(draft.name.clone()),
                    ..Default::default()
                },
            });
        }
    });

    // IP (leer = keine IP)
    ui.horizontal(|ui| {
        ui.label("IP:");
        let response = ui.text_edit_singleline(&mut draft.ip);
        if text_committed(&response) {
            let new_ip = if draft.ip.trim().is_empty() {
                None
            } else {
                Some(draft.ip.trim().to_string())
            };
            if new_ip != current_ip {
                events.push(AppIntent::UpdateDevicePropsRequested {
                    device_id,
                    patch: DevicePatch {
                        ip: Some(new_ip),
                        ..Default::default()
                    },
                });
            }
        }
    });

    // Rotation in Grad
    ui.horizontal(|ui| {
        ui.label("Rotation:");
        let response = ui.add(
            egui::DragValue::new(&mut draft.rotation)
                .speed(1.0)
                .suffix("°"),
        );
        let committed = response.drag_stopped() || response.lost_focus();
        if committed && (draft.rotation - current_rotation).abs() > f32::EPSILON {
            events.push(AppIntent::UpdateDevicePropsRequested {
                device_id,
                patch: DevicePatch {
                    rotation: Some(draft.rotation),
                    ..Default::default()
                },
            });
        }
    });

    // Alarm-Flag (Toggle committet sofort)
    let mut alarm_draft = alarm;
    if ui.checkbox(&mut alarm_draft, "Alarm").changed() {
        events.push(AppIntent::UpdateDevicePropsRequested {
            device_id,
            patch: DevicePatch {
                alarm: Some(alarm_draft),
                ..Default::default()
            },
        });
    }

    ui.separator();
    ui.label("Ports:");

    // Port-Status pro Port umschaltbar; jede Änderung committet die
    // komplette Portliste als Patch
    for port in &ports {
        ui.horizontal(|ui| {
            ui.label(format!("{} ({} Mbit/s)", port.name, port.bandwidth.mbps()));

            let mut status = port.status;
            egui::ComboBox::from_id_salt(format!("port_status_{}_{}", device_id, port.id))
                .selected_text(status_label(status))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut status, PortStatus::Up, "Up");
                    ui.selectable_value(&mut status, PortStatus::Down, "Down");
                });

            if status != port.status {
                let mut new_ports = ports.clone();
                if let Some(p) = new_ports.iter_mut().find(|p| p.id == port.id) {
                    p.status = status;
                }
                events.push(AppIntent::UpdateDevicePropsRequested {
                    device_id,
                    patch: DevicePatch {
                        ports: Some(new_ports),
                        ..Default::default()
                    },
                });
            }
        });
    }
}

fn render_group_props(
    ui: &mut egui::Ui,
    state: &mut AppState,
    group_id: u64,
    events: &mut Vec<AppIntent>,
) {
    let Some(group) = state.graph.group(group_id) else {
        ui.label("Raum nicht mehr vorhanden");
        return;
    };

    ui.label(format!("Raum ID: {}", group_id));
    ui.label(format!(
        "Position: ({:.1}, {:.1})",
        group.position.x, group.position.y
    ));
    ui.label(format!("Größe: {:.0} × {:.0}", group.size.x, group.size.y));
    ui.label(format!("Mitglieder: {}", group.device_ids.len()));

    ui.separator();

    let current_name = group.name.clone();
    let draft = &mut state.ui.props_draft;

    ui.horizontal(|ui| {
        ui.label("Name:");
        let response = ui.text_edit_singleline(&mut draft.name);
        if text_committed(&response) && draft.name != current_name {
            events.push(AppIntent::UpdateGroupPropsRequested {
                group_id,
                patch: GroupPatch {
                    name: Some(draft.name.clone()),
                },
            });
        }
    });
}

fn render_connection_props(
    ui: &mut egui::Ui,
    state: &mut AppState,
    connection_id: u64,
    events: &mut Vec<AppIntent>,
) {
    let Some(conn) = state.graph.connection(connection_id) else {
        ui.label("Verbindung nicht mehr vorhanden");
        return;
    };

    ui.label(format!("Verbindung ID: {}", connection_id));
    ui.label(format!(
        "Endpunkte: Gerät {} Port {} ↔ Gerät {} Port {}",
        conn.source.device_id, conn.source.port_id, conn.target.device_id, conn.target.port_id
    ));

    ui.separator();

    let current = conn.bandwidth;
    let mut selected = current;
    egui::ComboBox::from_id_salt(format!("conn_bw_{}", connection_id))
        .selected_text(format!("{} Mbit/s", selected.mbps()))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, Bandwidth::Mbps100, "100 Mbit/s");
            ui.selectable_value(&mut selected, Bandwidth::Mbps1000, "1000 Mbit/s");
            ui.selectable_value(&mut selected, Bandwidth::Mbps10000, "10000 Mbit/s");
        });

    if selected != current {
        events.push(AppIntent::UpdateConnectionPropsRequested {
            connection_id,
            patch: ConnectionPatch {
                bandwidth: Some(selected),
            },
        });
    }
}

fn status_label(status: PortStatus) -> &'static str {
    match status {
        PortStatus::Up => "Up",
        PortStatus::Down => "Down",
    }
}
