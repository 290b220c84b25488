//! Canvas-Rendering: Räume, Verbindungen, Geräte, Ports und
//! provisorischer Draht, gezeichnet mit dem egui-Painter.

use glam::Vec2;

use crate::app::{AppState, Interaction, Selection};
use crate::core::{rotate_vec2, Camera2D, Device, PortStatus};
use crate::shared::EditorOptions;

/// Zeichen-Reihenfolge: Räume unten, dann Verbindungen, dann Geräte
/// mit Ports, zuoberst der provisorische Draht.
pub fn render_canvas(ui: &egui::Ui, rect: egui::Rect, state: &AppState) {
    let painter = ui.painter_at(rect);
    let camera = &state.view.camera;
    let opts = &state.options;

    draw_groups(&painter, rect, camera, state, opts);
    draw_connections(&painter, rect, camera, state, opts);
    draw_devices(&painter, rect, camera, state, opts);
    draw_wire_preview(&painter, rect, camera, state, opts);
}

/// Welt → absolute Screen-Position (Canvas-Ursprung = rect.min).
fn to_screen(rect: egui::Rect, camera: &Camera2D, world: Vec2) -> egui::Pos2 {
    let local = camera.world_to_screen(world);
    egui::pos2(rect.min.x + local.x, rect.min.y + local.y)
}

fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

fn draw_groups(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    state: &AppState,
    opts: &EditorOptions,
) {
    let fill = color32(opts.group_fill_color);
    let outline = color32(opts.group_outline_color);
    let selected_outline = color32(opts.device_color_selected);

    for group in state.graph.groups_iter() {
        let min = to_screen(rect, camera, group.position);
        let max = to_screen(rect, camera, group.max());
        let group_rect = egui::Rect::from_min_max(min, max);

        let is_selected = state.selection.current == Selection::Group(group.id);
        let stroke_color = if is_selected { selected_outline } else { outline };

        painter.rect_filled(group_rect, egui::CornerRadius::same(2), fill);
        painter.rect_stroke(
            group_rect,
            egui::CornerRadius::same(2),
            egui::Stroke::new(1.5, stroke_color),
            egui::StrokeKind::Inside,
        );

        painter.text(
            min + egui::vec2(4.0, 2.0),
            egui::Align2::LEFT_TOP,
            &group.name,
            egui::FontId::proportional(12.0),
            stroke_color,
        );

        // Resize-Griff rechte untere Ecke
        painter.circle_filled(max, opts.port_radius_px, stroke_color);
    }
}

fn draw_connections(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    state: &AppState,
    opts: &EditorOptions,
) {
    let normal = color32(opts.connection_color);
    let selected = color32(opts.connection_color_selected);

    for conn in state.graph.connections_iter() {
        let Some((a_world, b_world)) = state.graph.connection_endpoints(conn.id) else {
            continue;
        };
        let a = to_screen(rect, camera, a_world);
        let b = to_screen(rect, camera, b_world);

        let is_selected = state.selection.current == Selection::Connection(conn.id);
        let color = if is_selected { selected } else { normal };

        painter.line_segment([a, b], egui::Stroke::new(opts.connection_thickness_px, color));

        // Bandbreiten-Label am Mittelpunkt
        let mid = egui::pos2((a.x + b.x) * 0.5, (a.y + b.y) * 0.5);
        painter.text(
            mid + egui::vec2(0.0, -6.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{}", conn.bandwidth.mbps()),
            egui::FontId::proportional(10.0),
            color,
        );
    }
}

fn draw_devices(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    state: &AppState,
    opts: &EditorOptions,
) {
    let default_fill = color32(opts.device_color_default);
    let selected_fill = color32(opts.device_color_selected);
    let alarm_color = color32(opts.device_color_alarm);
    let port_up = color32(opts.port_color_up);
    let port_down = color32(opts.port_color_down);

    for device in state.graph.devices_iter() {
        let is_selected = state.selection.current == Selection::Device(device.id);
        let fill = if is_selected { selected_fill } else { default_fill };

        let corners = device_corners_screen(rect, camera, device);
        painter.add(egui::Shape::convex_polygon(
            corners.to_vec(),
            fill,
            egui::Stroke::new(1.0, egui::Color32::from_gray(30)),
        ));

        // Alarm: roter Rahmen über der Füllung
        if device.alarm {
            painter.add(egui::Shape::closed_line(
                corners.to_vec(),
                egui::Stroke::new(2.5, alarm_color),
            ));
        }

        let center = to_screen(rect, camera, device.center());
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            &device.name,
            egui::FontId::proportional(11.0),
            egui::Color32::WHITE,
        );

        // Port-Anker
        for (index, port) in device.ports.iter().enumerate() {
            let anchor = to_screen(rect, camera, device.port_anchor(index));
            let color = match port.status {
                PortStatus::Up => port_up,
                PortStatus::Down => port_down,
            };
            painter.circle_filled(anchor, opts.port_radius_px, color);
        }
    }
}

/// Die vier Eckpunkte eines (ggf. rotierten) Geräts in Screen-Koordinaten.
fn device_corners_screen(rect: egui::Rect, camera: &Camera2D, device: &Device) -> [egui::Pos2; 4] {
    let center = device.center();
    let half = device.size * 0.5;
    let angle = device.rotation.to_radians();

    let local = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ];

    let mut out = [egui::Pos2::ZERO; 4];
    for (i, corner) in local.iter().enumerate() {
        let world = center + rotate_vec2(*corner, angle);
        out[i] = to_screen(rect, camera, world);
    }
    out
}

fn draw_wire_preview(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &Camera2D,
    state: &AppState,
    opts: &EditorOptions,
) {
    let Interaction::Wiring {
        source,
        pointer_world,
    } = state.interaction.current
    else {
        return;
    };
    let Some(anchor_world) = state.graph.port_anchor(source) else {
        return;
    };

    let a = to_screen(rect, camera, anchor_world);
    let b = to_screen(rect, camera, pointer_world);
    let color = color32(opts.connection_color_selected);

    painter.line_segment([a, b], egui::Stroke::new(opts.connection_thickness_px, color));
    painter.circle_stroke(b, opts.port_radius_px, egui::Stroke::new(1.5, color));
}
