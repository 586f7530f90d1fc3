use ansi_term::Colour;
use chrono::Local;

/// One mutation recorded during the session.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub seq: usize,
    pub at: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append-only trail of the mutations performed in the current session.
/// Like the ledger itself it lives in memory only.
#[derive(Debug, Clone, Default)]
pub struct SessionJournal {
    entries: Vec<JournalEntry>,
}

impl SessionJournal {
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        self.entries.push(JournalEntry {
            seq: self.entries.len() + 1,
            at: Local::now().format("%FT%T").to_string(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }
}

/// Color used for an operation tag in the journal listing.
pub fn color_for_operation(operation: &str) -> Colour {
    match operation {
        "add" => Colour::Green,
        "name" | "host" => Colour::Yellow,
        "worktype" => Colour::Cyan,
        "export" | "chart" => Colour::Blue,
        _ => Colour::White,
    }
}
