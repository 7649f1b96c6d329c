//! Orchestration layer: the controller the view layer talks to.

pub mod controller;

pub use controller::{LedgerController, LedgerEvent};
