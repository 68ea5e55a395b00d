//! Canonical Encoding Module
//! 
//! This module produces the bytes that input signatures cover.
//! Signer and verifier must derive identical bytes independently, so the
//! layout is fixed and versioned rather than derived from serde.

mod canonical;
pub use canonical::{encode_unsigned, signing_hash, ENCODING_MAGIC, ENCODING_VERSION};
