/// Aktuell selektierte Entity (höchstens eine zugleich).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nichts selektiert
    #[default]
    None,
    Device(u64),
    Group(u64),
    Connection(u64),
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuelle Selektion (Basis für Properties-Panel und Entf-Taste)
    pub current: Selection,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            current: Selection::None,
        }
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.current = Selection::None;
    }

    /// Selektierte Geräte-ID, falls ein Gerät selektiert ist.
    pub fn selected_device(&self) -> Option<u64> {
        match self.current {
            Selection::Device(id) => Some(id),
            _ => None,
        }
    }

    /// Selektierte Gruppen-ID, falls eine Gruppe selektiert ist.
    pub fn selected_group(&self) -> Option<u64> {
        match self.current {
            Selection::Group(id) => Some(id),
            _ => None,
        }
    }

    /// Selektierte Verbindungs-ID, falls eine Verbindung selektiert ist.
    pub fn selected_connection(&self) -> Option<u64> {
        match self.current {
            Selection::Connection(id) => Some(id),
            _ => None,
        }
    }
}
