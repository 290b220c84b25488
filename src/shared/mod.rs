//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, die zwischen `app` und `ui` geteilt wird,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::{CAMERA_ZOOM_STEP, HISTORY_CAPACITY, PORT_PICK_RADIUS_PX};
