use chrono::Utc;

use super::{Cents, Entry, EntryId};

/// The ordered collection of entries for one session.
///
/// The ledger owns its entries and the next-id counter; ids are assigned
/// sequentially from 0 in insertion order and never reused. There is no
/// internal synchronization - a multi-threaded host must serialize access.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
    next_id: EntryId,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new entry. The id and timestamp are assigned here; amount,
    /// category and kind are stored verbatim without validation.
    pub fn append(
        &mut self,
        amount_cents: Cents,
        category: impl Into<String>,
        kind: impl Into<String>,
    ) -> &Entry {
        let entry = Entry::new(
            self.next_id,
            amount_cents,
            category.into(),
            Utc::now(),
            kind.into(),
        );
        self.next_id += 1;
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of amounts over entries whose kind matches exactly
    /// (case-sensitive). An unmatched kind yields 0, not an error.
    pub fn total(&self, kind: &str) -> Cents {
        self.entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.amount_cents)
            .sum()
    }
}
