//! Signature Verification Module
//! 
//! This module defines the verification capability the validator consumes
//! and a secp256k1 implementation built on the ethers signature primitives.

mod verifier;
pub use verifier::{EcdsaVerifier, SignatureScheme, SignatureVerifier};
