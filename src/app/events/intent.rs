use crate::core::{ConnectionPatch, DeviceKind, DevicePatch, GroupPatch};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },

    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Ansicht auf Ausgangszustand zurücksetzen (Pan 0, Maßstab 1.0)
    ResetViewRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    /// Primärtaste gedrückt (Screen-Koordinaten)
    PointerPressed { screen_pos: glam::Vec2 },
    /// Zeiger bewegt (Screen-Koordinaten)
    PointerMoved { screen_pos: glam::Vec2 },
    /// Primärtaste losgelassen (Screen-Koordinaten)
    PointerReleased { screen_pos: glam::Vec2 },

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Neues Gerät aus der Palette hinzufügen (Platzierung: Viewport-Mitte)
    AddDeviceRequested { kind: DeviceKind },
    /// Neue Gruppe hinzufügen (Platzierung: Viewport-Mitte)
    AddGroupRequested,
    /// Selektierte Entity löschen
    DeleteSelectedRequested,

    /// Geräte-Eigenschaften ändern (Properties-Panel)
    UpdateDevicePropsRequested { device_id: u64, patch: DevicePatch },
    /// Gruppen-Eigenschaften ändern
    UpdateGroupPropsRequested { group_id: u64, patch: GroupPatch },
    /// Verbindungs-Eigenschaften ändern
    UpdateConnectionPropsRequested {
        connection_id: u64,
        patch: ConnectionPatch,
    },

    /// Canvas leeren angefordert (öffnet Bestätigungsdialog)
    ClearCanvasRequested,
    /// Canvas leeren bestätigt
    ClearCanvasConfirmed,
    /// Canvas leeren abgebrochen
    ClearCanvasCancelled,
}
