//! Ledger engine: invariant-enforcing services, errors, and the clock seam.

pub mod errors;
pub mod services;
pub mod time;
