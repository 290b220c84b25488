//! Application State — zentrale Datenhaltung.

mod app_state;
mod interaction;
mod selection;
mod ui_state;
mod view;

pub use app_state::AppState;
pub use interaction::{Interaction, InteractionState};
pub use selection::{Selection, SelectionState};
pub use ui_state::{PropsDraft, UiState};
pub use view::ViewState;
