//! Pure queries over an entry snapshot. Nothing here mutates or touches I/O;
//! the controller recomputes these on every state change.

use serde::Serialize;

use super::{
    entry::{Entry, EntryKind},
    period::Period,
};

/// Derived view of the ledger for one period and category filter — what the
/// view layer renders as the entry list, the totals, and the remainder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Entries matching the period and category filter, input order preserved.
    pub visible_entries: Vec<Entry>,
    /// Absolute sum of the period's negative amounts. Never negative.
    pub total_expense: i64,
    /// Sum of the period's non-negative amounts. Never negative.
    pub total_income: i64,
    /// `budget + income - expense`; may go below zero, no clamping.
    pub remainder: i64,
    /// Drives the view's empty-state placeholder.
    pub is_empty: bool,
}

/// Sign-split totals for one period, ignoring the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub expense: i64,
    pub income: i64,
}

/// Entries whose date falls inside `period` and whose sign matches `kind`.
pub fn entries_for(entries: &[Entry], period: Period, kind: EntryKind) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| period.contains(entry.occurred_at) && entry.kind() == kind)
        .cloned()
        .collect()
}

pub fn totals_for(entries: &[Entry], period: Period) -> Totals {
    let mut totals = Totals::default();
    for entry in entries.iter().filter(|e| period.contains(e.occurred_at)) {
        if entry.amount < 0 {
            totals.expense += entry.amount.abs();
        } else {
            totals.income += entry.amount;
        }
    }
    totals
}

pub fn remainder(budget: i64, totals: Totals) -> i64 {
    budget + totals.income - totals.expense
}

pub fn summarize(entries: &[Entry], budget: i64, period: Period, kind: EntryKind) -> Summary {
    let visible_entries = entries_for(entries, period, kind);
    let totals = totals_for(entries, period);
    Summary {
        is_empty: visible_entries.is_empty(),
        visible_entries,
        total_expense: totals.expense,
        total_income: totals.income,
        remainder: remainder(budget, totals),
    }
}
