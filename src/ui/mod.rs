//! UI-Komponenten: Menü, Toolbar, Canvas, Properties, Input-Handling, Dialoge.

pub mod canvas;
pub mod dialogs;
pub mod input;
mod keyboard;
pub mod menu;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use canvas::render_canvas;
pub use dialogs::{handle_file_dialogs, show_clear_confirm_dialog};
pub use input::collect_viewport_events;
pub use menu::render_menu;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
