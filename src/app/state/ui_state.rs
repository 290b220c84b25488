use super::Selection;

/// Editier-Puffer des Properties-Panels.
///
/// Textfelder schreiben erst beim Commit (Fokusverlust/Enter) in den Graph,
/// damit nicht jeder Tastendruck einen History-Eintrag erzeugt.
#[derive(Default)]
pub struct PropsDraft {
    /// Entity, für die der Puffer gerade gilt (Reseed bei Selektionswechsel)
    pub entity: Selection,
    /// Name-Entwurf (Gerät oder Gruppe)
    pub name: String,
    /// IP-Entwurf (Gerät)
    pub ip: String,
    /// Rotations-Entwurf in Grad (Gerät)
    pub rotation: f32,
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Ob der Canvas-Leeren-Bestätigungsdialog angezeigt wird
    pub show_clear_confirm: bool,
    /// Pfad der aktuell geladenen Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. Lade-Fehler)
    pub status_message: Option<String>,
    /// Editier-Puffer des Properties-Panels
    pub props_draft: PropsDraft,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
