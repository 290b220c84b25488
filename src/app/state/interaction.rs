use crate::core::PortRef;
use glam::Vec2;

/// Zustandsmaschine der laufenden Zeiger-Interaktion.
///
/// Genau eine Interaktion zur Zeit; jede wird durch `PointerReleased`
/// beendet. Drags mutieren den Graphen live (die Vorschau ist der echte
/// Zustand), erzeugen aber erst beim Commit einen History-Eintrag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// Keine Interaktion aktiv
    Idle,
    /// Canvas-Pan (Leerraum gegriffen)
    DraggingCanvas { last_screen: Vec2 },
    /// Gerät gegriffen; grab_offset = Weltpunkt minus Geräteposition
    DraggingDevice { device_id: u64, grab_offset: Vec2 },
    /// Gruppe gegriffen (verschiebt Mitglieder mit)
    DraggingGroup { group_id: u64, grab_offset: Vec2 },
    /// Resize-Griff der Gruppe gegriffen
    ResizingGroup { group_id: u64 },
    /// Draht-Ziehen von einem Quell-Port; pointer_world für die Vorschau
    Wiring { source: PortRef, pointer_world: Vec2 },
}

/// Interaktions-State mit Dirty-Flag für die Commit-Entscheidung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    /// Laufende Interaktion
    pub current: Interaction,
    /// Ob der laufende Drag den Graphen tatsächlich verändert hat
    /// (Zero-Move-Drags erzeugen keinen History-Eintrag)
    pub drag_dirty: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionState {
    /// Erstellt den Ruhe-Zustand.
    pub fn new() -> Self {
        Self {
            current: Interaction::Idle,
            drag_dirty: false,
        }
    }

    /// Startet eine neue Interaktion (setzt das Dirty-Flag zurück).
    pub fn begin(&mut self, interaction: Interaction) {
        self.current = interaction;
        self.drag_dirty = false;
    }

    /// Beendet die laufende Interaktion.
    pub fn finish(&mut self) {
        self.current = Interaction::Idle;
        self.drag_dirty = false;
    }

    /// Gibt `true` zurück, wenn gerade keine Interaktion läuft.
    pub fn is_idle(&self) -> bool {
        matches!(self.current, Interaction::Idle)
    }
}
