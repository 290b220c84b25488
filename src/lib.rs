//! Network Topology Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, Selection, UiState, ViewState};
pub use core::{
    Bandwidth, Camera2D, Connection, Device, DeviceKind, Group, Port, PortRef, PortStatus,
    TopoError, TopologyGraph, TopologySnapshot,
};
pub use shared::EditorOptions;
