#![doc(test(attr(deny(warnings))))]

//! Finance Core keeps an in-memory ledger of income and expense transactions,
//! enforces its invariants on every mutation, and answers the derived queries
//! (filtered lists, totals, category and monthly breakdowns) that views render.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod ledger;
pub mod utils;

pub use crate::core::errors::{InvalidField, LedgerError};
pub use crate::core::services::{CategoryService, SummaryService, TransactionService};
pub use crate::ledger::Ledger;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
