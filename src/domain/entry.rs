use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Cents;

pub type EntryId = u64;

/// Conventional kind tags. The ledger stores any tag verbatim; these are just
/// the labels the shell and the totals use.
pub const KIND_INCOME: &str = "income";
pub const KIND_EXPENSES: &str = "expenses";

/// A single income or expense record.
/// Entries are immutable once recorded and only the [`Ledger`](super::Ledger)
/// creates them - the id and timestamp are assigned at append time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Entry {
    /// Sequential id, unique within one ledger, starting at 0
    pub id: EntryId,
    /// Amount in cents; sign carries the direction, zero is allowed
    pub amount_cents: Cents,
    /// Free-form label (e.g., "Groceries"); may be empty
    pub category: String,
    /// When this entry was recorded in the session
    pub recorded_at: DateTime<Utc>,
    /// Open-ended tag, "income" or "expenses" by convention
    pub kind: String,
}

impl Entry {
    pub(crate) fn new(
        id: EntryId,
        amount_cents: Cents,
        category: String,
        recorded_at: DateTime<Utc>,
        kind: String,
    ) -> Self {
        Self {
            id,
            amount_cents,
            category,
            recorded_at,
            kind,
        }
    }

    /// Returns true if this entry carries the conventional income tag.
    pub fn is_income(&self) -> bool {
        self.kind == KIND_INCOME
    }

    /// Returns true if this entry carries the conventional expenses tag.
    pub fn is_expense(&self) -> bool {
        self.kind == KIND_EXPENSES
    }
}
