//! Ringpuffer über zuletzt ausgeführte Commands.
//!
//! Dient der Diagnose (Status-Bar zeigt den jüngsten Command) und den
//! Controller-Tests, die den ausgeführten Command-Fluss prüfen.

use std::collections::VecDeque;

use super::AppCommand;

/// Hält die letzten ausgeführten Commands in Ausführungsreihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    /// Obergrenze des Ringpuffers; der älteste Eintrag fällt heraus.
    const CAPACITY: usize = 256;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Hängt einen ausgeführten Command an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Iteriert alle gehaltenen Commands, ältester zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }

    /// Die letzten `n` Commands, ältester zuerst.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    /// Der zuletzt ausgeführte Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Gibt die Anzahl der gehaltenen Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
