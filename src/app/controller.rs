//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path),
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::RequestExit => handlers::file_io::request_exit(state),

            // === Kamera & Viewport ===
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_screen } => handlers::view::pan(state, delta_screen),

            // === Selektion ===
            AppCommand::SelectDevice { device_id } => {
                handlers::editing::select_device(state, device_id)
            }
            AppCommand::SelectGroup { group_id } => {
                handlers::editing::select_group(state, group_id)
            }
            AppCommand::SelectConnection { connection_id } => {
                handlers::editing::select_connection(state, connection_id)
            }
            AppCommand::ClearSelection => handlers::editing::clear_selection(state),

            // === Pointer-Lifecycle ===
            AppCommand::BeginCanvasDrag { screen_pos } => {
                handlers::pointer::begin_canvas_drag(state, screen_pos)
            }
            AppCommand::BeginDeviceDrag {
                device_id,
                grab_offset,
            } => handlers::pointer::begin_device_drag(state, device_id, grab_offset),
            AppCommand::BeginGroupDrag {
                group_id,
                grab_offset,
            } => handlers::pointer::begin_group_drag(state, group_id, grab_offset),
            AppCommand::BeginGroupResize { group_id } => {
                handlers::pointer::begin_group_resize(state, group_id)
            }
            AppCommand::BeginWiring { source } => handlers::pointer::begin_wiring(state, source),
            AppCommand::DragDeviceTo {
                device_id,
                world_pos,
            } => handlers::pointer::drag_device_to(state, device_id, world_pos),
            AppCommand::DragGroupTo {
                group_id,
                world_pos,
            } => handlers::pointer::drag_group_to(state, group_id, world_pos),
            AppCommand::ResizeGroupTo { group_id, size } => {
                handlers::pointer::resize_group_to(state, group_id, size)
            }
            AppCommand::UpdateWirePointer { world_pos } => {
                handlers::pointer::update_wire_pointer(state, world_pos)
            }
            AppCommand::CommitDrag => handlers::pointer::commit_drag(state),
            AppCommand::CompleteWiring { target } => {
                handlers::pointer::complete_wiring(state, target)
            }
            AppCommand::EndInteraction => handlers::pointer::end_interaction(state),

            // === Editing ===
            AppCommand::AddDeviceAt { kind, world_pos } => {
                handlers::editing::add_device(state, kind, world_pos)
            }
            AppCommand::AddGroupAt { world_pos } => handlers::editing::add_group(state, world_pos),
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),
            AppCommand::UpdateDeviceProps { device_id, patch } => {
                handlers::editing::update_device_props(state, device_id, patch)
            }
            AppCommand::UpdateGroupProps { group_id, patch } => {
                handlers::editing::update_group_props(state, group_id, patch)
            }
            AppCommand::UpdateConnectionProps {
                connection_id,
                patch,
            } => handlers::editing::update_connection_props(state, connection_id, patch),
            AppCommand::RequestClearConfirm => handlers::editing::request_clear_confirm(state),
            AppCommand::DismissClearConfirm => handlers::editing::dismiss_clear_confirm(state),
            AppCommand::ClearCanvas => handlers::editing::clear_canvas(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}
