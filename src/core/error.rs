//! Typisierte Fehler des Editor-Kerns.
//!
//! Kein Fehler hier ist fatal: entweder wird er lokal verschluckt
//! (Wiring bricht still ab, Undo-Button bleibt grau) oder als typisiertes
//! Ergebnis an den Aufrufer gereicht (Snapshot-Laden).

use thiserror::Error;

/// Fehlerarten des Topologie-Kerns.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopoError {
    /// Connect auf fehlende Ports, Self-Loop oder bereits bestehendes Port-Paar.
    #[error("Ungültiger Verbindungs-Endpunkt: {reason}")]
    InvalidEndpoint { reason: String },

    /// Undo/Redo an der History-Grenze.
    #[error("Kein History-Eintrag in dieser Richtung vorhanden")]
    NoHistory,

    /// Snapshot-Validierung beim Laden fehlgeschlagen; der letzte gültige
    /// Zustand bleibt installiert.
    #[error("Snapshot fehlerhaft: {reason}")]
    MalformedSnapshot { reason: String },

    /// Property-Patch verletzt Form-Invarianten (z.B. doppelte Port-IDs).
    #[error("Ungültiger Property-Patch: {reason}")]
    InvalidPatch { reason: String },
}

impl TopoError {
    pub(crate) fn invalid_endpoint(reason: impl Into<String>) -> Self {
        TopoError::InvalidEndpoint {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        TopoError::MalformedSnapshot {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_patch(reason: impl Into<String>) -> Self {
        TopoError::InvalidPatch {
            reason: reason.into(),
        }
    }
}
