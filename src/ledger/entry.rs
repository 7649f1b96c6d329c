use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded transaction. Immutable once created; the only way an entry
/// leaves the ledger is removal by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    /// Signed amount in whole currency units. Negative is an expense,
    /// non-negative is income.
    pub amount: i64,
    pub occurred_at: NaiveDate,
    pub label: String,
    /// Display-only time string (e.g. "12:00 AM"); never used in computation.
    pub time_of_day: String,
    /// Optional attached image, carried opaquely through persistence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
}

impl Entry {
    /// Builds an entry with a freshly generated id. No validation happens
    /// here; label emptiness and amount parsing are the caller's concern.
    pub fn new(
        amount: i64,
        occurred_at: NaiveDate,
        label: impl Into<String>,
        time_of_day: impl Into<String>,
        photo: Option<Vec<u8>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            occurred_at,
            label: label.into(),
            time_of_day: time_of_day.into(),
            photo,
        }
    }

    pub fn kind(&self) -> EntryKind {
        EntryKind::of(self.amount)
    }
}

/// Category an entry falls into, derived from the sign of its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    /// Negative amounts are expenses; zero and positive amounts are income.
    /// Zero landing on the income side keeps the category filter consistent
    /// with the totals, where a zero entry contributes nothing either way.
    pub fn of(amount: i64) -> Self {
        if amount < 0 {
            Self::Expense
        } else {
            Self::Income
        }
    }
}
