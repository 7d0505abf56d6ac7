//! Canned-response table: trigger substring → fixed answer, no backend involved.

use tracing::debug;

/// A single trigger phrase and its fixed response.
#[derive(Debug, Clone)]
pub struct CannedEntry {
    pub trigger: String,
    pub response: String,
}

impl CannedEntry {
    /// Triggers are lowercased at construction; lookup lowercases only the
    /// message, so a mixed-case trigger would otherwise never match.
    pub fn new(trigger: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into().to_lowercase(),
            response: response.into(),
        }
    }
}

/// Static table of canned responses. Pure lookup; scan order is declaration
/// order and the first matching trigger wins.
#[derive(Debug, Clone, Default)]
pub struct CannedTable {
    entries: Vec<CannedEntry>,
}

impl CannedTable {
    pub fn new(entries: Vec<CannedEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the response of the first entry whose trigger is a substring of
    /// the lowercased message, or `None` if no trigger matches. No side effects.
    pub fn lookup(&self, message: &str) -> Option<&str> {
        let lowered = message.to_lowercase();
        for entry in &self.entries {
            if lowered.contains(&entry.trigger) {
                debug!(trigger = %entry.trigger, "canned table hit");
                return Some(&entry.response);
            }
        }
        None
    }
}
