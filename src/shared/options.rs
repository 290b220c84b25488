//! Zentrale Konfiguration für den Netzwerk-Topologie-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Additiver Zoom-Schritt (Mausrad und Toolbar-Buttons).
pub const CAMERA_ZOOM_STEP: f32 = 0.1;

// ── Selektion / Hit-Tests ───────────────────────────────────────────

/// Pick-Radius für Port-Anker in Screen-Pixeln.
pub const PORT_PICK_RADIUS_PX: f32 = 8.0;
/// Pick-Toleranz für Verbindungs-Kanten in Screen-Pixeln.
pub const CONNECTION_PICK_RADIUS_PX: f32 = 6.0;
/// Pick-Toleranz für den Gruppen-Resize-Griff in Screen-Pixeln.
pub const GROUP_HANDLE_RADIUS_PX: f32 = 10.0;

// ── Gruppen ─────────────────────────────────────────────────────────

/// Standardgröße neu erstellter Gruppen in Welteinheiten.
pub const GROUP_DEFAULT_SIZE: [f32; 2] = [300.0, 200.0];

// ── Rendering ───────────────────────────────────────────────────────

/// Füllfarbe normaler Geräte (RGBA).
pub const DEVICE_COLOR_DEFAULT: [f32; 4] = [0.22, 0.45, 0.75, 1.0];
/// Füllfarbe selektierter Geräte (RGBA).
pub const DEVICE_COLOR_SELECTED: [f32; 4] = [0.95, 0.55, 0.1, 1.0];
/// Rahmenfarbe für Geräte im Alarm-Zustand (RGBA: Rot).
pub const DEVICE_COLOR_ALARM: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe der Port-Anker (RGBA).
pub const PORT_COLOR_UP: [f32; 4] = [0.2, 0.8, 0.3, 1.0];
/// Farbe für Ports im Down-Zustand (RGBA).
pub const PORT_COLOR_DOWN: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Linienfarbe von Verbindungen (RGBA).
pub const CONNECTION_COLOR: [f32; 4] = [0.45, 0.45, 0.5, 1.0];
/// Linienfarbe der selektierten Verbindung (RGBA).
pub const CONNECTION_COLOR_SELECTED: [f32; 4] = [0.95, 0.55, 0.1, 1.0];
/// Füllfarbe von Gruppen (RGBA, stark transparent).
pub const GROUP_FILL_COLOR: [f32; 4] = [0.3, 0.5, 0.4, 0.12];
/// Rahmenfarbe von Gruppen (RGBA).
pub const GROUP_OUTLINE_COLOR: [f32; 4] = [0.3, 0.6, 0.45, 1.0];
/// Radius der gezeichneten Port-Anker in Screen-Pixeln.
pub const PORT_RADIUS_PX: f32 = 4.0;
/// Linienstärke von Verbindungen in Screen-Pixeln.
pub const CONNECTION_THICKNESS_PX: f32 = 2.0;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl gehaltener History-Snapshots.
pub const HISTORY_CAPACITY: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `net_topo_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Additiver Zoom-Schritt (Mausrad und Toolbar)
    pub camera_zoom_step: f32,

    // ── Hit-Tests ───────────────────────────────────────────────
    /// Pick-Radius für Port-Anker in Screen-Pixeln
    pub port_pick_radius_px: f32,
    /// Pick-Toleranz für Verbindungs-Kanten in Screen-Pixeln
    pub connection_pick_radius_px: f32,
    /// Pick-Toleranz für den Gruppen-Resize-Griff in Screen-Pixeln
    pub group_handle_radius_px: f32,

    // ── Gruppen ─────────────────────────────────────────────────
    /// Standardgröße neu erstellter Gruppen in Welteinheiten
    pub group_default_size: [f32; 2],

    // ── Rendering ───────────────────────────────────────────────
    /// Füllfarbe normaler Geräte
    pub device_color_default: [f32; 4],
    /// Füllfarbe selektierter Geräte
    pub device_color_selected: [f32; 4],
    /// Rahmenfarbe für Geräte im Alarm-Zustand
    pub device_color_alarm: [f32; 4],
    /// Farbe der Port-Anker (Status Up)
    pub port_color_up: [f32; 4],
    /// Farbe der Port-Anker (Status Down)
    pub port_color_down: [f32; 4],
    /// Linienfarbe von Verbindungen
    pub connection_color: [f32; 4],
    /// Linienfarbe der selektierten Verbindung
    pub connection_color_selected: [f32; 4],
    /// Füllfarbe von Gruppen
    pub group_fill_color: [f32; 4],
    /// Rahmenfarbe von Gruppen
    pub group_outline_color: [f32; 4],
    /// Radius der gezeichneten Port-Anker in Screen-Pixeln
    pub port_radius_px: f32,
    /// Linienstärke von Verbindungen in Screen-Pixeln
    pub connection_thickness_px: f32,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl gehaltener History-Snapshots
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_zoom_step: CAMERA_ZOOM_STEP,

            port_pick_radius_px: PORT_PICK_RADIUS_PX,
            connection_pick_radius_px: CONNECTION_PICK_RADIUS_PX,
            group_handle_radius_px: GROUP_HANDLE_RADIUS_PX,

            group_default_size: GROUP_DEFAULT_SIZE,

            device_color_default: DEVICE_COLOR_DEFAULT,
            device_color_selected: DEVICE_COLOR_SELECTED,
            device_color_alarm: DEVICE_COLOR_ALARM,
            port_color_up: PORT_COLOR_UP,
            port_color_down: PORT_COLOR_DOWN,
            connection_color: CONNECTION_COLOR,
            connection_color_selected: CONNECTION_COLOR_SELECTED,
            group_fill_color: GROUP_FILL_COLOR,
            group_outline_color: GROUP_OUTLINE_COLOR,
            port_radius_px: PORT_RADIUS_PX,
            connection_thickness_px: CONNECTION_THICKNESS_PX,

            history_capacity: HISTORY_CAPACITY,
        }
    }
}

/// Serde-Default für `history_capacity` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_history_capacity() -> usize {
    HISTORY_CAPACITY
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("net_topo_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("net_topo_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.camera_zoom_step, CAMERA_ZOOM_STEP);
        assert_eq!(opts.history_capacity, HISTORY_CAPACITY);
        assert_eq!(opts.group_default_size, GROUP_DEFAULT_SIZE);
    }

    #[test]
    fn toml_roundtrip() {
        let mut opts = EditorOptions::default();
        opts.camera_zoom_step = 0.25;
        opts.history_capacity = 50;
        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let parsed: EditorOptions = toml::from_str(&text).expect("Parsen");
        assert_eq!(parsed.camera_zoom_step, 0.25);
        assert_eq!(parsed.history_capacity, 50);
    }

    #[test]
    fn missing_history_capacity_falls_back_to_default() {
        let mut opts_text = toml::to_string_pretty(&EditorOptions::default()).expect("TOML");
        opts_text = opts_text
            .lines()
            .filter(|l| !l.starts_with("history_capacity"))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: EditorOptions = toml::from_str(&opts_text).expect("Parsen");
        assert_eq!(parsed.history_capacity, HISTORY_CAPACITY);
    }
}
