use ethers::types::H256;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::encoding;

/// Key of a single unspent output: the producing transaction and the output's position in it
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UtxoId {
    pub tx_id: String,
    pub output_index: u32,
}

impl UtxoId {
    pub fn new(tx_id: impl Into<String>, output_index: u32) -> Self {
        Self {
            tx_id: tx_id.into(),
            output_index,
        }
    }
}

impl fmt::Display for UtxoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tx_id, self.output_index)
    }
}

/// Unspent output as recorded in the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    pub amount: u64,
    pub owner: String,
}

/// Input spending a previously created output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub utxo_id: UtxoId,
    /// Claimed owner identity, checked against `signature`
    pub owner: String,
    /// Signature over the transaction's canonical unsigned bytes
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub recipient: String,
    pub amount: u64,
}

/// Candidate ledger transaction submitted for validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    /// Creation time, seconds since the Unix epoch
    pub timestamp: u64,
}

impl Transaction {
    /// Bytes that input signatures are computed and verified over
    pub fn signing_bytes(&self) -> Vec<u8> {
        encoding::encode_unsigned(self)
    }

    /// Keccak256 of [`Transaction::signing_bytes`]
    pub fn signing_hash(&self) -> H256 {
        encoding::signing_hash(self)
    }
}

/// Tag of a validation finding, one per rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    ZeroAmountOutput,
    UtxoNotFound,
    AmountMismatch,
    InvalidSignature,
    DoubleSpending,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::ZeroAmountOutput => "ZERO_AMOUNT_OUTPUT",
            ValidationErrorKind::UtxoNotFound => "UTXO_NOT_FOUND",
            ValidationErrorKind::AmountMismatch => "AMOUNT_MISMATCH",
            ValidationErrorKind::InvalidSignature => "INVALID_SIGNATURE",
            ValidationErrorKind::DoubleSpending => "DOUBLE_SPENDING",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors
///
/// These are findings about the transaction, not failures of the validator.
/// Serialized as `{ kind, message, ..details }`; see the `Serialize` impl below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Output to {recipient} has zero amount ({amount})")]
    ZeroAmountOutput { recipient: String, amount: u64 },

    #[error("UTXO not found: {utxo_id}")]
    UtxoNotFound { utxo_id: UtxoId },

    #[error("Amount mismatch: inputs total {input_total}, outputs total {output_total}")]
    AmountMismatch { input_total: u128, output_total: u128 },

    #[error("Invalid signature {signature} for owner {owner}")]
    InvalidSignature { owner: String, signature: String },

    #[error("Double spending of UTXO {utxo_id}")]
    DoubleSpending { utxo_id: UtxoId },
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::ZeroAmountOutput { .. } => ValidationErrorKind::ZeroAmountOutput,
            ValidationError::UtxoNotFound { .. } => ValidationErrorKind::UtxoNotFound,
            ValidationError::AmountMismatch { .. } => ValidationErrorKind::AmountMismatch,
            ValidationError::InvalidSignature { .. } => ValidationErrorKind::InvalidSignature,
            ValidationError::DoubleSpending { .. } => ValidationErrorKind::DoubleSpending,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Writes the taxonomy tag and rendered message, followed by the variant's details.
/// Totals are decimal strings since they may exceed what JSON numbers carry.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let details = match self {
            ValidationError::ZeroAmountOutput { .. } => 2,
            ValidationError::UtxoNotFound { .. } => 1,
            ValidationError::AmountMismatch { .. } => 2,
            ValidationError::InvalidSignature { .. } => 2,
            ValidationError::DoubleSpending { .. } => 1,
        };

        let mut state = serializer.serialize_struct("ValidationError", 2 + details)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("message", &self.message())?;

        match self {
            ValidationError::ZeroAmountOutput { recipient, amount } => {
                state.serialize_field("recipient", recipient)?;
                state.serialize_field("amount", amount)?;
            }
            ValidationError::UtxoNotFound { utxo_id } | ValidationError::DoubleSpending { utxo_id } => {
                state.serialize_field("utxo_id", utxo_id)?;
            }
            ValidationError::AmountMismatch { input_total, output_total } => {
                state.serialize_field("input_total", &input_total.to_string())?;
                state.serialize_field("output_total", &output_total.to_string())?;
            }
            ValidationError::InvalidSignature { owner, signature } => {
                state.serialize_field("owner", owner)?;
                state.serialize_field("signature", signature)?;
            }
        }

        state.end()
    }
}

/// Verdict of one validation call
///
/// `valid` is derived from `errors` at construction and cannot disagree with it.
/// Errors are ordered by rule, then by input/output declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Number of findings of the given kind
    pub fn count(&self, kind: ValidationErrorKind) -> usize {
        self.errors.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn kinds(&self) -> Vec<ValidationErrorKind> {
        self.errors.iter().map(ValidationError::kind).collect()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
