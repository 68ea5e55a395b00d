//! Transaction Validation Module
//! 
//! This module validates a transaction against a UTXO pool snapshot before it
//! is accepted into a block or relayed. Performs zero-amount, existence,
//! balance, signature and double-spend checks, reporting every violation.

mod validator;


pub use validator::{validate, Validator};
