//! This crate validates a single ledger transaction against a snapshot of the
//! unspent transaction output (UTXO) pool. Validation is a pure, stateless
//! pipeline that reports every violated rule, not just the first one.

pub mod types; // Defines the transaction, UTXO and validation result data model.
pub mod encoding; // Produces the canonical unsigned bytes that signatures cover.
pub mod pool; // UTXO lookup capability and an in-memory snapshot.
pub mod signature; // Signature verification capability and secp256k1 implementation.
pub mod validation; // The transaction validator itself.
pub mod config; // Defines and loads configuration.
pub mod logging; // Installs a tracing subscriber from configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use pool::{UtxoLookup, UtxoPool};
pub use signature::{EcdsaVerifier, SignatureScheme, SignatureVerifier};
pub use validation::{validate, Validator};
