use crate::Transaction;
use ethers::types::H256;
use ethers::utils::keccak256;

/// Prefix of every encoded transaction
pub const ENCODING_MAGIC: &[u8; 6] = b"UTXOTX";

/// Layout version, bumped on any change to field order or formatting
pub const ENCODING_VERSION: u8 = 1;

/// Encode the transaction without its input signatures
///
/// # Layout (version 1)
/// All integers are big-endian. Strings are a `u64` byte length followed by
/// the UTF-8 bytes. Sequences are a `u64` element count followed by the elements.
///
/// ```text
/// magic "UTXOTX" | version u8
/// id
/// inputs:  count, then (utxo_id.tx_id, utxo_id.output_index u32, owner) per input
/// outputs: count, then (recipient, amount u64) per output
/// timestamp u64
/// ```
pub fn encode_unsigned(tx: &Transaction) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(ENCODING_MAGIC);
    data.push(ENCODING_VERSION);

    put_str(&mut data, &tx.id);

    // Signatures are left out so they do not cover themselves
    put_len(&mut data, tx.inputs.len());
    for input in &tx.inputs {
        put_str(&mut data, &input.utxo_id.tx_id);
        data.extend_from_slice(&input.utxo_id.output_index.to_be_bytes());
        put_str(&mut data, &input.owner);
    }

    put_len(&mut data, tx.outputs.len());
    for output in &tx.outputs {
        put_str(&mut data, &output.recipient);
        data.extend_from_slice(&output.amount.to_be_bytes());
    }

    data.extend_from_slice(&tx.timestamp.to_be_bytes());
    data
}

/// Keccak256 of the canonical unsigned encoding
pub fn signing_hash(tx: &Transaction) -> H256 {
    H256::from(keccak256(encode_unsigned(tx)))
}

fn put_len(data: &mut Vec<u8>, len: usize) {
    data.extend_from_slice(&(len as u64).to_be_bytes());
}

fn put_str(data: &mut Vec<u8>, value: &str) {
    put_len(data, value.len());
    data.extend_from_slice(value.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TransactionInput, TransactionOutput, UtxoId};

    fn sample_tx() -> Transaction {
        Transaction {
            id: "tx1".to_string(),
            inputs: vec![TransactionInput {
                utxo_id: UtxoId::new("tx0", 0),
                owner: "alice".to_string(),
                signature: "sig-a".to_string(),
            }],
            outputs: vec![TransactionOutput {
                recipient: "bob".to_string(),
                amount: 100,
            }],
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_encoding_layout_is_fixed() {
        let bytes = encode_unsigned(&sample_tx());

        let mut expected = Vec::new();
        expected.extend_from_slice(b"UTXOTX");
        expected.push(1);
        expected.extend_from_slice(&3u64.to_be_bytes());
        expected.extend_from_slice(b"tx1");
        expected.extend_from_slice(&1u64.to_be_bytes());
        expected.extend_from_slice(&3u64.to_be_bytes());
        expected.extend_from_slice(b"tx0");
        expected.extend_from_slice(&0u32.to_be_bytes());
        expected.extend_from_slice(&5u64.to_be_bytes());
        expected.extend_from_slice(b"alice");
        expected.extend_from_slice(&1u64.to_be_bytes());
        expected.extend_from_slice(&3u64.to_be_bytes());
        expected.extend_from_slice(b"bob");
        expected.extend_from_slice(&100u64.to_be_bytes());
        expected.extend_from_slice(&1_700_000_000u64.to_be_bytes());

        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_signatures_are_excluded() {
        let tx = sample_tx();
        let mut resigned = tx.clone();
        resigned.inputs[0].signature = "something-else".to_string();

        assert_eq!(encode_unsigned(&tx), encode_unsigned(&resigned));
        assert_eq!(signing_hash(&tx), signing_hash(&resigned));
    }

    #[test]
    fn test_signed_fields_change_encoding() {
        let tx = sample_tx();
        let original = encode_unsigned(&tx);

        let mut amount_changed = tx.clone();
        amount_changed.outputs[0].amount = 99;
        assert_ne!(original, encode_unsigned(&amount_changed));

        let mut owner_changed = tx.clone();
        owner_changed.inputs[0].owner = "mallory".to_string();
        assert_ne!(original, encode_unsigned(&owner_changed));

        let mut timestamp_changed = tx.clone();
        timestamp_changed.timestamp += 1;
        assert_ne!(original, encode_unsigned(&timestamp_changed));

        let mut index_changed = tx;
        index_changed.inputs[0].utxo_id.output_index = 1;
        assert_ne!(original, encode_unsigned(&index_changed));
    }

    #[test]
    fn test_length_prefix_prevents_field_shifting() {
        // "ab" + "c" and "a" + "bc" must not collide
        let mut left = sample_tx();
        left.outputs = vec![
            TransactionOutput { recipient: "ab".to_string(), amount: 1 },
            TransactionOutput { recipient: "c".to_string(), amount: 1 },
        ];
        let mut right = left.clone();
        right.outputs[0].recipient = "a".to_string();
        right.outputs[1].recipient = "bc".to_string();

        assert_ne!(encode_unsigned(&left), encode_unsigned(&right));
    }
}
