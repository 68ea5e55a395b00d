use crate::{
    config::ValidationConfig,
    pool::UtxoLookup,
    signature::{EcdsaVerifier, SignatureVerifier},
    Transaction, Utxo, UtxoId, ValidationError, ValidationResult,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Transaction validator
///
/// Holds only the signature verification capability. The UTXO pool is passed
/// into every call, so one validator can be shared across threads and used
/// against any number of snapshots.
pub struct Validator<V> {
    verifier: V,
}

impl Validator<EcdsaVerifier> {
    /// Build a secp256k1 validator from configuration
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(EcdsaVerifier::new(config.signature_scheme))
    }
}

impl<V: SignatureVerifier> Validator<V> {
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    /// Validate a transaction against a UTXO pool snapshot
    ///
    /// Every rule runs, in a fixed order, and every violation is recorded:
    /// 1. Zero-amount outputs
    /// 2. UTXO existence
    /// 3. Balance conservation
    /// 4. Signature authorization
    /// 5. Double spending within the transaction
    ///
    /// # Arguments
    /// * `tx` - The candidate transaction
    /// * `pool` - Read-only view of unspent outputs for the duration of the call
    ///
    /// # Returns
    /// A `ValidationResult` listing all findings; valid iff the list is empty
    pub fn validate<P>(&self, tx: &Transaction, pool: &P) -> ValidationResult
    where
        P: UtxoLookup + ?Sized,
    {
        debug!("Validating transaction {} ({:?})", tx.id, tx.signing_hash());

        // One pool read per input, shared by every rule below
        let resolved: Vec<Option<Utxo>> = tx
            .inputs
            .iter()
            .map(|input| pool.get_utxo(&input.utxo_id.tx_id, input.utxo_id.output_index))
            .collect();

        let mut errors = Vec::new();

        // 1. Reject outputs carrying no value
        self.check_zero_amount_outputs(tx, &mut errors);

        // 2. Every input must reference an unspent output
        self.check_utxos_exist(tx, &resolved, &mut errors);

        // 3. Inputs must equal outputs exactly
        self.check_balance(tx, &resolved, &mut errors);

        // 4. Every input must be signed by its claimed owner
        self.verify_signatures(tx, &resolved, &mut errors);

        // 5. No output may be spent twice by the same transaction
        self.check_double_spending(tx, &mut errors);

        let result = ValidationResult::from_errors(errors);
        debug!(
            "Transaction {} validation finished: valid={}, errors={}",
            tx.id,
            result.is_valid(),
            result.errors().len()
        );
        result
    }

    fn check_zero_amount_outputs(&self, tx: &Transaction, errors: &mut Vec<ValidationError>) {
        for output in tx.outputs.iter().filter(|output| output.amount == 0) {
            warn!("Transaction {}: zero-amount output to {}", tx.id, output.recipient);
            errors.push(ValidationError::ZeroAmountOutput {
                recipient: output.recipient.clone(),
                amount: output.amount,
            });
        }
    }

    /// One error per missing occurrence, duplicates included
    fn check_utxos_exist(
        &self,
        tx: &Transaction,
        resolved: &[Option<Utxo>],
        errors: &mut Vec<ValidationError>,
    ) {
        for (input, utxo) in tx.inputs.iter().zip(resolved) {
            if utxo.is_none() {
                let id = &input.utxo_id;
                warn!("Transaction {}: UTXO {} not found", tx.id, id);
                errors.push(ValidationError::UtxoNotFound { utxo_id: id.clone() });
            }
        }
    }

    /// Missing UTXOs contribute zero; they are already reported by the existence check
    fn check_balance(
        &self,
        tx: &Transaction,
        resolved: &[Option<Utxo>],
        errors: &mut Vec<ValidationError>,
    ) {
        let input_total: u128 = resolved
            .iter()
            .flatten()
            .map(|utxo| u128::from(utxo.amount))
            .sum();

        let output_total: u128 = tx
            .outputs
            .iter()
            .map(|output| u128::from(output.amount))
            .sum();

        if input_total != output_total {
            warn!(
                "Transaction {}: amount mismatch, inputs {} outputs {}",
                tx.id, input_total, output_total
            );
            errors.push(ValidationError::AmountMismatch {
                input_total,
                output_total,
            });
        }
    }

    /// Checks the signature against the claimed owner only.
    /// Whether that owner holds the referenced UTXO is left to the pool layer.
    fn verify_signatures(
        &self,
        tx: &Transaction,
        resolved: &[Option<Utxo>],
        errors: &mut Vec<ValidationError>,
    ) {
        let message = tx.signing_bytes();

        for (input, utxo) in tx.inputs.iter().zip(resolved) {
            if let Some(utxo) = utxo {
                if utxo.owner != input.owner {
                    debug!(
                        "Transaction {}: input claims owner {} but UTXO {} is owned by {}",
                        tx.id, input.owner, input.utxo_id, utxo.owner
                    );
                }
            }

            if !self.verifier.verify(&message, &input.signature, &input.owner) {
                warn!(
                    "Transaction {}: signature verification failed for owner {}",
                    tx.id, input.owner
                );
                errors.push(ValidationError::InvalidSignature {
                    owner: input.owner.clone(),
                    signature: input.signature.clone(),
                });
            }
        }
    }

    /// Every repeat occurrence of a key is reported, not just the first repeat
    fn check_double_spending(&self, tx: &Transaction, errors: &mut Vec<ValidationError>) {
        let mut seen: HashSet<&UtxoId> = HashSet::new();

        for input in &tx.inputs {
            if !seen.insert(&input.utxo_id) {
                warn!("Transaction {}: UTXO {} spent more than once", tx.id, input.utxo_id);
                errors.push(ValidationError::DoubleSpending {
                    utxo_id: input.utxo_id.clone(),
                });
            }
        }
    }
}

/// Validate a transaction with an explicitly supplied verifier
///
/// Equivalent to `Validator::new(verifier).validate(tx, pool)`.
pub fn validate<P, V>(tx: &Transaction, pool: &P, verifier: V) -> ValidationResult
where
    P: UtxoLookup + ?Sized,
    V: SignatureVerifier,
{
    Validator::new(verifier).validate(tx, pool)
}
