//! Integrationstests für den Intent→Command→Use-Case-Fluss:
//! Datei-Intents, Pointer-Lifecycle (Pan, Drag, Draht-Ziehen) und
//! History über den Controller.

use glam::Vec2;
use net_topo_editor::{AppCommand, AppController, AppIntent, AppState};
use net_topo_editor::{DeviceKind, Selection};

/// Controller + State mit gesetzter Viewport-Größe (800×600, Kamera 1:1).
fn setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("ViewportResized");
    (controller, state)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Fügt ein Gerät hinzu und verschiebt es an eine feste Position.
fn add_device_at(
    controller: &mut AppController,
    state: &mut AppState,
    kind: DeviceKind,
    position: Vec2,
) -> u64 {
    send(controller, state, AppIntent::AddDeviceRequested { kind });
    let device_id = state
        .selection
        .selected_device()
        .expect("Neues Gerät sollte selektiert sein");

    // Per Pointer-Drag an die Zielposition ziehen
    let device = state.graph.device(device_id).expect("Gerät");
    let press = device.center();
    let offset = press - device.position;
    send(
        controller,
        state,
        AppIntent::PointerPressed { screen_pos: press },
    );
    send(
        controller,
        state,
        AppIntent::PointerMoved {
            screen_pos: position + offset,
        },
    );
    send(
        controller,
        state,
        AppIntent::PointerReleased {
            screen_pos: position + offset,
        },
    );

    device_id
}

#[test]
fn test_save_requested_without_path_opens_save_dialog() {
    let (mut controller, mut state) = setup();

    send(&mut controller, &mut state, AppIntent::SaveRequested);

    assert!(state.ui.show_save_file_dialog);

    let has_save_command = state
        .command_log
        .iter()
        .any(|c| matches!(c, AppCommand::SaveFile { path: None }));
    assert!(has_save_command);
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let (mut controller, mut state) = setup();

    assert!(!state.should_exit);
    send(&mut controller, &mut state, AppIntent::ExitRequested);
    assert!(state.should_exit);
}

#[test]
fn test_add_device_places_at_viewport_center_and_selects() {
    let (mut controller, mut state) = setup();

    send(
        &mut controller,
        &mut state,
        AppIntent::AddDeviceRequested {
            kind: DeviceKind::Host,
        },
    );

    assert_eq!(state.device_count(), 1);
    let device_id = state.selection.selected_device().expect("Selektion");
    let device = state.graph.device(device_id).expect("Gerät");

    // Host (40×40) mittig im 800×600-Viewport → linke obere Ecke (380, 280)
    assert_eq!(device.position, Vec2::new(380.0, 280.0));
    assert!(state.can_undo());
}

#[test]
fn test_canvas_pan_flow_moves_camera_without_history() {
    let (mut controller, mut state) = setup();
    let history_before = state.history.len();

    // Leerraum greifen und ziehen
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(100.0, 100.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(130.0, 90.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            screen_pos: Vec2::new(130.0, 90.0),
        },
    );

    assert_eq!(state.view.camera.pan, Vec2::new(30.0, -10.0));
    assert!(state.interaction.is_idle());
    assert_eq!(state.history.len(), history_before);
    assert!(!state.can_undo());
}

#[test]
fn test_device_drag_flow_creates_single_history_entry() {
    let (mut controller, mut state) = setup();

    send(
        &mut controller,
        &mut state,
        AppIntent::AddDeviceRequested {
            kind: DeviceKind::Host,
        },
    );
    let device_id = state.selection.selected_device().expect("Selektion");
    let history_after_add = state.history.len();

    // Gerät am Zentrum greifen, über mehrere Moves ziehen, loslassen
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(400.0, 300.0),
        },
    );
    for step in 1..=4 {
        send(
            &mut controller,
            &mut state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(400.0 + step as f32 * 10.0, 300.0),
            },
        );
    }
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            screen_pos: Vec2::new(440.0, 300.0),
        },
    );

    let device = state.graph.device(device_id).expect("Gerät");
    assert_eq!(device.position, Vec2::new(420.0, 280.0));

    // Mehrere Moves, genau ein History-Eintrag
    assert_eq!(state.history.len(), history_after_add + 1);

    // Undo stellt die Position vor dem Drag wieder her
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    let device = state.graph.device(device_id).expect("Gerät");
    assert_eq!(device.position, Vec2::new(380.0, 280.0));
}

#[test]
fn test_wiring_flow_creates_connection_and_undo_removes_it() {
    let (mut controller, mut state) = setup();

    let a = add_device_at(&mut controller, &mut state, DeviceKind::Host, Vec2::new(100.0, 100.0));
    let b = add_device_at(&mut controller, &mut state, DeviceKind::Host, Vec2::new(300.0, 100.0));

    // Host-Port-Anker: Unterkante mittig → (pos.x + 20, pos.y + 40)
    let anchor_a = Vec2::new(120.0, 140.0);
    let anchor_b = Vec2::new(320.0, 140.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: anchor_a,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(200.0, 160.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            screen_pos: anchor_b,
        },
    );

    assert_eq!(state.connection_count(), 1);
    let conn = state.graph.connections_iter().next().expect("Verbindung");
    assert!(conn.touches_device(a));
    assert!(conn.touches_device(b));

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.connection_count(), 0);

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.connection_count(), 1);
}

#[test]
fn test_wiring_released_over_empty_space_is_discarded() {
    let (mut controller, mut state) = setup();

    add_device_at(&mut controller, &mut state, DeviceKind::Host, Vec2::new(100.0, 100.0));
    let history_before = state.history.len();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(120.0, 140.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            screen_pos: Vec2::new(600.0, 500.0),
        },
    );

    assert_eq!(state.connection_count(), 0);
    assert!(state.interaction.is_idle());
    assert_eq!(state.history.len(), history_before);
}

#[test]
fn test_clear_canvas_flow_with_confirm_and_undo() {
    let (mut controller, mut state) = setup();

    add_device_at(&mut controller, &mut state, DeviceKind::Router, Vec2::new(50.0, 50.0));
    send(&mut controller, &mut state, AppIntent::AddGroupRequested);
    assert_eq!(state.device_count(), 1);
    assert_eq!(state.group_count(), 1);

    // Anfrage öffnet nur den Dialog
    send(&mut controller, &mut state, AppIntent::ClearCanvasRequested);
    assert!(state.ui.show_clear_confirm);
    assert_eq!(state.device_count(), 1);

    // Abbrechen schließt den Dialog ohne Änderung
    send(&mut controller, &mut state, AppIntent::ClearCanvasCancelled);
    assert!(!state.ui.show_clear_confirm);
    assert_eq!(state.device_count(), 1);

    // Bestätigen leert den Canvas und schließt den Dialog
    send(&mut controller, &mut state, AppIntent::ClearCanvasRequested);
    send(&mut controller, &mut state, AppIntent::ClearCanvasConfirmed);
    assert!(!state.ui.show_clear_confirm);
    assert!(state.graph.is_empty());

    // Ein einziger Undo-Schritt stellt alles wieder her
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.device_count(), 1);
    assert_eq!(state.group_count(), 1);
}

#[test]
fn test_reset_view_restores_default_camera_without_history() {
    let (mut controller, mut state) = setup();

    // Ansicht verstellen: zoomen und per Leerraum-Drag pannen
    send(&mut controller, &mut state, AppIntent::ZoomInRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(100.0, 100.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(160.0, 140.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            screen_pos: Vec2::new(160.0, 140.0),
        },
    );
    assert_ne!(state.view.camera.pan, Vec2::ZERO);

    send(&mut controller, &mut state, AppIntent::ResetViewRequested);

    assert_eq!(state.view.camera.pan, Vec2::ZERO);
    assert!((state.view.camera.scale - 1.0).abs() < 1e-5);
    assert!(!state.can_undo());
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let (mut controller, mut state) = setup();

    assert!(!state.can_undo());
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(&mut controller, &mut state, AppIntent::RedoRequested);

    assert!(state.graph.is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn test_edit_after_undo_truncates_redo_branch() {
    let (mut controller, mut state) = setup();

    send(
        &mut controller,
        &mut state,
        AppIntent::AddDeviceRequested {
            kind: DeviceKind::Host,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::AddDeviceRequested {
            kind: DeviceKind::Router,
        },
    );
    assert_eq!(state.device_count(), 2);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.device_count(), 1);
    assert!(state.can_redo());

    // Neue Mutation kappt den Redo-Zweig
    send(
        &mut controller,
        &mut state,
        AppIntent::AddDeviceRequested {
            kind: DeviceKind::Firewall,
        },
    );
    assert!(!state.can_redo());
    assert_eq!(state.device_count(), 2);
}

#[test]
fn test_load_missing_file_sets_status_and_keeps_state() {
    let (mut controller, mut state) = setup();

    add_device_at(&mut controller, &mut state, DeviceKind::Host, Vec2::new(10.0, 10.0));

    send(
        &mut controller,
        &mut state,
        AppIntent::FileSelected {
            path: "/nonexistent/topology.json".to_string(),
        },
    );

    assert!(state.ui.status_message.is_some());
    assert_eq!(state.device_count(), 1);
    assert!(state.ui.current_file_path.is_none());
}

#[test]
fn test_pointer_press_on_empty_space_clears_selection() {
    let (mut controller, mut state) = setup();

    add_device_at(&mut controller, &mut state, DeviceKind::Host, Vec2::new(100.0, 100.0));
    assert_ne!(state.selection.current, Selection::None);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(700.0, 500.0),
        },
    );

    assert_eq!(state.selection.current, Selection::None);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerReleased {
            screen_pos: Vec2::new(700.0, 500.0),
        },
    );
    assert!(state.interaction.is_idle());
}
