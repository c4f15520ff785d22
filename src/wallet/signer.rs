//! Signer handle and account metadata.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::wallet::provider::ProviderError;

/// Signature scheme an account's key uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningAlgorithm {
    Secp256k1,
    Ed25519,
    Sr25519,
}

/// One account exposed by a signer: address, public key and key algorithm.
///
/// Read-only; refreshed on demand by asking the signer again. Private key
/// material never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Bech32 account address.
    pub address: String,

    /// Compressed public key bytes, hex-encoded on the wire.
    #[serde(with = "hex::serde")]
    pub public_key: Vec<u8>,

    /// Signature scheme of the key.
    pub algo: SigningAlgorithm,
}

/// Capability able to produce signatures and account metadata for one chain.
///
/// Borrowed by the session client for connection setup only; the wallet
/// provider retains ownership.
#[async_trait]
pub trait OfflineSigner: Send + Sync {
    /// The accounts this signer controls.
    async fn accounts(&self) -> Result<Vec<AccountRecord>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_record_serializes_key_as_hex() {
        let record = AccountRecord {
            address: "archway1example".to_string(),
            public_key: vec![0x02, 0xab, 0xcd],
            algo: SigningAlgorithm::Secp256k1,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["public_key"], "02abcd");
        assert_eq!(json["algo"], "secp256k1");

        let back: AccountRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
