use crate::core::{ConnectionPatch, DeviceKind, DevicePatch, GroupPatch, PortRef};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Datei-I/O ===
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// JSON-Datei laden
    LoadFile { path: String },
    /// Datei speichern (None = aktueller Pfad, Some(p) = neuer Pfad)
    SaveFile { path: Option<String> },
    /// Anwendung beenden
    RequestExit,

    // === Kamera & Viewport ===
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf Ausgangszustand zurücksetzen
    ResetView,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Screen-Pixel-Delta verschieben
    PanCamera { delta_screen: glam::Vec2 },

    // === Selektion ===
    /// Gerät selektieren
    SelectDevice { device_id: u64 },
    /// Gruppe selektieren
    SelectGroup { group_id: u64 },
    /// Verbindung selektieren
    SelectConnection { connection_id: u64 },
    /// Selektion aufheben
    ClearSelection,

    // === Pointer-Lifecycle ===
    /// Canvas-Pan beginnen
    BeginCanvasDrag { screen_pos: glam::Vec2 },
    /// Geräte-Drag beginnen (Grab-Offset in Welteinheiten)
    BeginDeviceDrag {
        device_id: u64,
        grab_offset: glam::Vec2,
    },
    /// Gruppen-Drag beginnen (Grab-Offset in Welteinheiten)
    BeginGroupDrag {
        group_id: u64,
        grab_offset: glam::Vec2,
    },
    /// Gruppen-Resize am Griff beginnen
    BeginGroupResize { group_id: u64 },
    /// Verbindungs-Ziehen an einem Quell-Port beginnen
    BeginWiring { source: PortRef },

    /// Gerät während Drag an Weltposition führen
    DragDeviceTo { device_id: u64, world_pos: glam::Vec2 },
    /// Gruppe während Drag an Weltposition führen
    DragGroupTo { group_id: u64, world_pos: glam::Vec2 },
    /// Gruppengröße während Resize setzen
    ResizeGroupTo { group_id: u64, size: glam::Vec2 },
    /// Provisorischen Draht-Endpunkt nachführen
    UpdateWirePointer { world_pos: glam::Vec2 },

    /// Drag abschließen (Device/Group/Resize: ggf. History-Eintrag)
    CommitDrag,
    /// Verbindungs-Ziehen abschließen (target = Port unter dem Zeiger)
    CompleteWiring { target: Option<PortRef> },
    /// Interaktion ohne History-Eintrag beenden (Canvas-Pan)
    EndInteraction,

    // === Editing ===
    /// Gerät an Weltposition hinzufügen
    AddDeviceAt {
        kind: DeviceKind,
        world_pos: glam::Vec2,
    },
    /// Gruppe an Weltposition hinzufügen
    AddGroupAt { world_pos: glam::Vec2 },
    /// Selektierte Entity löschen
    DeleteSelected,
    /// Geräte-Eigenschaften patchen
    UpdateDeviceProps { device_id: u64, patch: DevicePatch },
    /// Gruppen-Eigenschaften patchen
    UpdateGroupProps { group_id: u64, patch: GroupPatch },
    /// Verbindungs-Eigenschaften patchen
    UpdateConnectionProps {
        connection_id: u64,
        patch: ConnectionPatch,
    },
    /// Bestätigungsdialog für Canvas-Leeren öffnen
    RequestClearConfirm,
    /// Bestätigungsdialog schließen
    DismissClearConfirm,
    /// Canvas leeren (ein History-Eintrag)
    ClearCanvas,

    // === History ===
    Undo,
    Redo,
}
