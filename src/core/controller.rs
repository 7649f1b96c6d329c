use uuid::Uuid;

use crate::{
    ledger::{summarize, Entry, EntryKind, Ledger, Period, Summary},
    storage::StorageBackend,
};

/// Notification raised after the entry list changes, so the view can
/// re-render without polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEvent {
    EntryAdded(Uuid),
    EntryRemoved(Uuid),
}

type Listener = Box<dyn FnMut(&LedgerEvent)>;

/// Owns the in-memory ledger and the session category filter, and funnels
/// every mutation through a persist step. Everything runs synchronously on
/// the caller's thread; there is exactly one writer.
///
/// Persistence failures never escape: a save that goes wrong is logged and
/// the in-memory state carries on as the source of truth.
pub struct LedgerController {
    ledger: Ledger,
    category: EntryKind,
    store: Box<dyn StorageBackend>,
    listeners: Vec<Listener>,
}

impl LedgerController {
    /// Loads the persisted state and takes ownership of it. Construction is
    /// initialization — there is no operable-but-unloaded controller, and
    /// re-initializing means building a fresh controller.
    pub fn initialize(store: Box<dyn StorageBackend>) -> Self {
        let ledger = store.load_or_default();
        tracing::info!(
            entries = ledger.entry_count(),
            budget = ledger.budget,
            "ledger loaded"
        );
        Self {
            ledger,
            category: EntryKind::Expense,
            store,
            listeners: Vec::new(),
        }
    }

    /// Registers an observer for entry-list changes. Listeners run after the
    /// mutation has been applied and persisted.
    pub fn subscribe(&mut self, listener: impl FnMut(&LedgerEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn add_entry(&mut self, entry: Entry) -> Summary {
        let id = self.ledger.add_entry(entry);
        tracing::debug!(%id, "entry added");
        self.persist();
        self.notify(LedgerEvent::EntryAdded(id));
        self.current_summary()
    }

    /// Removes the entry with the given id. Unknown ids are a silent no-op:
    /// no save, no event, state unchanged.
    pub fn remove_entry(&mut self, id: Uuid) -> Summary {
        match self.ledger.remove_entry(id) {
            Some(_) => {
                tracing::debug!(%id, "entry removed");
                self.persist();
                self.notify(LedgerEvent::EntryRemoved(id));
            }
            None => tracing::debug!(%id, "remove requested for unknown entry"),
        }
        self.current_summary()
    }

    /// Sets the budget, clamping negative values to 0 (unset).
    pub fn set_budget(&mut self, value: i64) -> Summary {
        self.ledger.budget = value.max(0);
        self.persist();
        self.current_summary()
    }

    /// Coerces raw user text into a budget. The view reformats the field as
    /// `$1,234`, so the currency symbol and separators are stripped before
    /// parsing; empty or unparseable text means no budget. Bad input never
    /// surfaces as an error.
    pub fn set_budget_text(&mut self, raw: &str) -> Summary {
        self.set_budget(coerce_budget(raw))
    }

    /// Changes the displayed period. Persisted, so the app reopens on the
    /// month the user was looking at.
    pub fn set_period(&mut self, period: Period) -> Summary {
        self.ledger.selected_period = period;
        self.persist();
        self.current_summary()
    }

    /// Session-only filter; deliberately not persisted.
    pub fn set_category(&mut self, category: EntryKind) -> Summary {
        self.category = category;
        self.current_summary()
    }

    pub fn budget(&self) -> i64 {
        self.ledger.budget
    }

    pub fn period(&self) -> Period {
        self.ledger.selected_period
    }

    pub fn category(&self) -> EntryKind {
        self.category
    }

    pub fn entries(&self) -> &[Entry] {
        &self.ledger.entries
    }

    /// Recomputes the derived view for the current period and category.
    pub fn current_summary(&self) -> Summary {
        summarize(
            &self.ledger.entries,
            self.ledger.budget,
            self.ledger.selected_period,
            self.category,
        )
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.ledger) {
            tracing::warn!(error = %err, "ledger save failed, keeping in-memory state");
        }
    }

    fn notify(&mut self, event: LedgerEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

fn coerce_budget(raw: &str) -> i64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    cleaned.parse::<i64>().map(|v| v.max(0)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_strips_formatting() {
        assert_eq!(coerce_budget("$1,234"), 1234);
        assert_eq!(coerce_budget(" 500 "), 500);
        assert_eq!(coerce_budget("100000"), 100_000);
    }

    #[test]
    fn coerce_defaults_bad_input_to_zero() {
        assert_eq!(coerce_budget(""), 0);
        assert_eq!(coerce_budget("abc"), 0);
        assert_eq!(coerce_budget("$-250"), 0);
    }
}
