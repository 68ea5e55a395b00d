use ethers::types::{Address, Signature, H256};
use ethers::utils::keccak256;
use serde::Deserialize;
use tracing::debug;

/// Checks that a signature over a message was produced by the claimed owner
///
/// Must be deterministic and side-effect-free. Any failure, including
/// malformed signature or identity strings, is reported as `false`.
pub trait SignatureVerifier {
    fn verify(&self, message: &[u8], signature: &str, owner: &str) -> bool;
}

impl<F> SignatureVerifier for F
where
    F: Fn(&[u8], &str, &str) -> bool,
{
    fn verify(&self, message: &[u8], signature: &str, owner: &str) -> bool {
        self(message, signature, owner)
    }
}

/// What digest of the message the signer committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureScheme {
    /// EIP-191 personal message hash of the message bytes (wallet `sign_message`)
    #[default]
    PersonalMessage,
    /// Keccak256 of the message bytes, signed directly
    RawHash,
}

/// secp256k1 verifier for Ethereum-style identities
///
/// Owners are 20-byte addresses and signatures are 65-byte recoverable
/// signatures, both hex encoded with an optional `0x` prefix. The signer is
/// recovered from the signature and compared with the owner address.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdsaVerifier {
    scheme: SignatureScheme,
}

impl EcdsaVerifier {
    pub fn new(scheme: SignatureScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }
}

impl SignatureVerifier for EcdsaVerifier {
    fn verify(&self, message: &[u8], signature: &str, owner: &str) -> bool {
        let signature = match signature.parse::<Signature>() {
            Ok(signature) => signature,
            Err(e) => {
                debug!("Malformed signature {}: {}", signature, e);
                return false;
            }
        };

        let owner = match owner.parse::<Address>() {
            Ok(address) => address,
            Err(e) => {
                debug!("Malformed owner identity {}: {}", owner, e);
                return false;
            }
        };

        let result = match self.scheme {
            SignatureScheme::PersonalMessage => signature.verify(message.to_vec(), owner),
            SignatureScheme::RawHash => signature.verify(H256::from(keccak256(message)), owner),
        };

        result.is_ok()
    }
}
