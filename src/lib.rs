#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger is the persistence, aggregation, and intent-handling core of
//! a personal expense/income tracker. The rendering layer lives elsewhere and
//! talks to [`core::LedgerController`]; this crate owns the entries, the
//! budget, and everything derived from them.

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocket Ledger tracing initialized.");
    });
}
