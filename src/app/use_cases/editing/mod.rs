//! Use-Case-Funktionen für Topologie-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_device` — Neues Gerät aus der Palette platzieren
//! - `add_group` — Neue Gruppe ("Raum") platzieren
//! - `delete` — Selektierte Entity löschen (mit Kaskaden im Modell)
//! - `update_props` — Property-Patches aus dem Properties-Panel
//! - `clear` — Canvas vollständig leeren

mod add_device;
mod add_group;
mod clear;
mod delete;
mod update_props;

pub use add_device::add_device_at;
pub use add_group::add_group_at;
pub use clear::clear_canvas;
pub use delete::delete_selected;
pub use update_props::{update_connection_props, update_device_props, update_group_props};
