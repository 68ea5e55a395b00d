//! UTXO Snapshot Module
//!
//! This module implements an in-memory snapshot of unspent outputs.
//! Entries are keyed by their composite `UtxoId` and read by the validator
//! through the `UtxoLookup` trait.

use crate::{Utxo, UtxoId};
use std::collections::HashMap;

/// Read access to a set of currently-unspent outputs
///
/// Implementations must be pure reads: absence is an ordinary answer, and a
/// lookup must not mutate the pool. The validator calls this once per input.
pub trait UtxoLookup {
    /// Look up an unspent output by producing transaction id and output index
    ///
    /// # Returns
    /// `Some(Utxo)` if the output is unspent in this snapshot, `None` otherwise
    fn get_utxo(&self, tx_id: &str, output_index: u32) -> Option<Utxo>;
}

impl<T: UtxoLookup + ?Sized> UtxoLookup for &T {
    fn get_utxo(&self, tx_id: &str, output_index: u32) -> Option<Utxo> {
        (**self).get_utxo(tx_id, output_index)
    }
}

impl UtxoLookup for HashMap<UtxoId, Utxo> {
    fn get_utxo(&self, tx_id: &str, output_index: u32) -> Option<Utxo> {
        self.get(&UtxoId::new(tx_id, output_index)).cloned()
    }
}

/// In-memory snapshot of unspent outputs
///
/// Built once by the caller and then only read. Uses a HashMap keyed by
/// `UtxoId`, so each output appears at most once.
#[derive(Debug, Clone, Default)]
pub struct UtxoPool {
    /// Unspent outputs, indexed by producing transaction id and output index
    utxos: HashMap<UtxoId, Utxo>,
}

impl UtxoPool {
    /// Creates a new empty snapshot
    pub fn new() -> Self {
        Self {
            utxos: HashMap::new(),
        }
    }

    /// Add an output while assembling the snapshot
    ///
    /// # Arguments
    /// * `id` - Key of the output
    /// * `utxo` - Amount and owner of the output
    ///
    /// # Returns
    /// The entry previously stored under `id`, if any
    pub fn insert(&mut self, id: UtxoId, utxo: Utxo) -> Option<Utxo> {
        self.utxos.insert(id, utxo)
    }

    pub fn get(&self, id: &UtxoId) -> Option<&Utxo> {
        self.utxos.get(id)
    }

    pub fn contains(&self, id: &UtxoId) -> bool {
        self.utxos.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }
}

impl FromIterator<(UtxoId, Utxo)> for UtxoPool {
    fn from_iter<I: IntoIterator<Item = (UtxoId, Utxo)>>(iter: I) -> Self {
        Self {
            utxos: iter.into_iter().collect(),
        }
    }
}

impl UtxoLookup for UtxoPool {
    fn get_utxo(&self, tx_id: &str, output_index: u32) -> Option<Utxo> {
        self.utxos.get(&UtxoId::new(tx_id, output_index)).cloned()
    }
}
