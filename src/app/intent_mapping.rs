//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Das Pointer-Routing lebt vollständig hier: Hit-Tests entscheiden beim
//! Drücken der Primärtaste, welche Interaktion beginnt; Bewegung und
//! Loslassen werden anhand der laufenden Interaktion übersetzt.

use glam::Vec2;

use super::state::Interaction;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveFile { path: Some(path) }],

        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::PointerPressed { screen_pos } => map_pointer_pressed(state, screen_pos),
        AppIntent::PointerMoved { screen_pos } => map_pointer_moved(state, screen_pos),
        AppIntent::PointerReleased { screen_pos } => map_pointer_released(state, screen_pos),

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::AddDeviceRequested { kind } => {
            // Palette platziert mittig im sichtbaren Ausschnitt
            let center = state.view.viewport_center_world();
            let world_pos = center - kind.footprint() * 0.5;
            vec![AppCommand::AddDeviceAt { kind, world_pos }]
        }
        AppIntent::AddGroupRequested => {
            let size = Vec2::from(state.options.group_default_size);
            let world_pos = state.view.viewport_center_world() - size * 0.5;
            vec![AppCommand::AddGroupAt { world_pos }]
        }
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],

        AppIntent::UpdateDevicePropsRequested { device_id, patch } => {
            vec![AppCommand::UpdateDeviceProps { device_id, patch }]
        }
        AppIntent::UpdateGroupPropsRequested { group_id, patch } => {
            vec![AppCommand::UpdateGroupProps { group_id, patch }]
        }
        AppIntent::UpdateConnectionPropsRequested {
            connection_id,
            patch,
        } => vec![AppCommand::UpdateConnectionProps {
            connection_id,
            patch,
        }],

        AppIntent::ClearCanvasRequested => vec![AppCommand::RequestClearConfirm],
        AppIntent::ClearCanvasConfirmed => {
            vec![AppCommand::ClearCanvas, AppCommand::DismissClearConfirm]
        }
        AppIntent::ClearCanvasCancelled => vec![AppCommand::DismissClearConfirm],
    }
}

/// Hit-Test-Routing beim Drücken der Primärtaste.
///
/// Prioritätsreihenfolge: Port > Gerät > Gruppen-Griff > Gruppenfläche >
/// Verbindung > Leerraum (Pan).
fn map_pointer_pressed(state: &AppState, screen_pos: Vec2) -> Vec<AppCommand> {
    let camera = &state.view.camera;
    let world = camera.screen_to_world(screen_pos);
    let graph = &state.graph;
    let opts = &state.options;

    if let Some(source) = graph.pick_port(world, camera.pick_radius_world(opts.port_pick_radius_px))
    {
        return vec![
            AppCommand::SelectDevice {
                device_id: source.device_id,
            },
            AppCommand::BeginWiring { source },
        ];
    }

    if let Some(device_id) = graph.pick_device(world) {
        if let Some(device) = graph.device(device_id) {
            return vec![
                AppCommand::SelectDevice { device_id },
                AppCommand::BeginDeviceDrag {
                    device_id,
                    grab_offset: world - device.position,
                },
            ];
        }
    }

    let handle_tolerance = camera.pick_radius_world(opts.group_handle_radius_px);
    if let Some(group_id) = graph.pick_group_handle(world, handle_tolerance) {
        return vec![
            AppCommand::SelectGroup { group_id },
            AppCommand::BeginGroupResize { group_id },
        ];
    }

    if let Some(group_id) = graph.pick_group(world) {
        if let Some(group) = graph.group(group_id) {
            return vec![
                AppCommand::SelectGroup { group_id },
                AppCommand::BeginGroupDrag {
                    group_id,
                    grab_offset: world - group.position,
                },
            ];
        }
    }

    let conn_tolerance = camera.pick_radius_world(opts.connection_pick_radius_px);
    if let Some(connection_id) = graph.pick_connection(world, conn_tolerance) {
        return vec![AppCommand::SelectConnection { connection_id }];
    }

    vec![
        AppCommand::ClearSelection,
        AppCommand::BeginCanvasDrag { screen_pos },
    ]
}

/// Übersetzt Zeigerbewegung anhand der laufenden Interaktion.
fn map_pointer_moved(state: &AppState, screen_pos: Vec2) -> Vec<AppCommand> {
    let world = state.view.camera.screen_to_world(screen_pos);

    match state.interaction.current {
        Interaction::Idle => vec![],
        Interaction::DraggingCanvas { last_screen } => vec![AppCommand::PanCamera {
            delta_screen: screen_pos - last_screen,
        }],
        Interaction::DraggingDevice {
            device_id,
            grab_offset,
        } => vec![AppCommand::DragDeviceTo {
            device_id,
            world_pos: world - grab_offset,
        }],
        Interaction::DraggingGroup {
            group_id,
            grab_offset,
        } => vec![AppCommand::DragGroupTo {
            group_id,
            world_pos: world - grab_offset,
        }],
        Interaction::ResizingGroup { group_id } => {
            let size = state
                .graph
                .group(group_id)
                .map(|g| world - g.position)
                .unwrap_or(Vec2::ZERO);
            vec![AppCommand::ResizeGroupTo { group_id, size }]
        }
        Interaction::Wiring { .. } => vec![AppCommand::UpdateWirePointer { world_pos: world }],
    }
}

/// Übersetzt das Loslassen der Primärtaste anhand der laufenden Interaktion.
fn map_pointer_released(state: &AppState, screen_pos: Vec2) -> Vec<AppCommand> {
    let camera = &state.view.camera;
    let world = camera.screen_to_world(screen_pos);

    match state.interaction.current {
        Interaction::Idle => vec![],
        Interaction::DraggingCanvas { .. } => vec![AppCommand::EndInteraction],
        Interaction::DraggingDevice { .. }
        | Interaction::DraggingGroup { .. }
        | Interaction::ResizingGroup { .. } => vec![AppCommand::CommitDrag],
        Interaction::Wiring { .. } => {
            let target = state.graph.pick_port(
                world,
                camera.pick_radius_world(state.options.port_pick_radius_px),
            );
            vec![AppCommand::CompleteWiring { target }]
        }
    }
}
