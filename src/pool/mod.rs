//! UTXO Pool Module
//! 
//! This module defines the read-only lookup the validator consumes and an
//! in-memory snapshot implementing it. Spending and committing outputs is
//! the owning ledger's job, not this crate's.

mod utxo_pool;

pub use utxo_pool::{UtxoLookup, UtxoPool};
