//! Protokoll der zuletzt ausgeführten Commands (Diagnose und Tests).

use super::AppCommand;

/// Ausgeführte Commands in Ausführungsreihenfolge, höchstens `MAX_ENTRIES`.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Kopie des Commands an. Ist das Log voll, fällt die ältere
    /// Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Anzahl der Klickpunkt-Commands im Protokoll.
    pub fn click_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|c| matches!(c, AppCommand::AddClickPoint { .. }))
            .count()
    }
}
