//! Ledger state: the ordered transaction and category collections.

pub mod defaults;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use ledger::Ledger;
