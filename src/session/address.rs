//! Bech32 address validation against a chain's prefix scheme.

use thiserror::Error;

/// Why an address was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid bech32 address '{address}': {reason}")]
    Malformed { address: String, reason: String },

    #[error("address '{address}' has prefix '{actual}', expected '{expected}'")]
    WrongPrefix {
        address: String,
        expected: String,
        actual: String,
    },
}

/// Check that an address is well-formed bech32 with the expected prefix.
pub fn validate_address(address: &str, expected_prefix: &str) -> Result<(), AddressError> {
    let (hrp, _data) = bech32::decode(address).map_err(|e| AddressError::Malformed {
        address: address.to_string(),
        reason: e.to_string(),
    })?;

    if hrp.as_str() != expected_prefix {
        return Err(AddressError::WrongPrefix {
            address: address.to_string(),
            expected: expected_prefix.to_string(),
            actual: hrp.as_str().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{CW721_CONTRACT, REGISTRY_CONTRACT};

    #[test]
    fn test_mainnet_contract_addresses_validate() {
        assert_eq!(validate_address(REGISTRY_CONTRACT, "archway"), Ok(()));
        assert_eq!(validate_address(CW721_CONTRACT, "archway"), Ok(()));
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        let err = validate_address(REGISTRY_CONTRACT, "cosmos").unwrap_err();
        assert!(matches!(err, AddressError::WrongPrefix { actual, .. } if actual == "archway"));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            validate_address("not-an-address", "archway"),
            Err(AddressError::Malformed { .. })
        ));
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let mut corrupted = REGISTRY_CONTRACT.to_string();
        corrupted.pop();
        corrupted.push('q');
        // Either checksum failure or character error; both are malformed.
        assert!(matches!(
            validate_address(&corrupted, "archway"),
            Err(AddressError::Malformed { .. })
        ));
    }
}
