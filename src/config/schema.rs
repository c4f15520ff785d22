//! Chain descriptor schema definitions.
//!
//! This module defines the network identity a session is established against.
//! All types derive Serde traits for deserialization from config files; every
//! field has a default so a minimal config only overrides what it needs.

use serde::{Deserialize, Serialize};

/// Tendermint RPC endpoint for Archway mainnet.
pub const ARCHWAY_RPC_URL: &str = "https://rpc.mainnet.archway.io";

/// Static descriptor of a chain's identity, address scheme and fee model.
///
/// Immutable once loaded; defined once at process start and shared via `Arc`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChainConfig {
    /// Chain identifier (e.g., "archway-1").
    pub chain_id: String,

    /// Human-readable display name.
    pub chain_name: String,

    /// Tendermint RPC endpoint URL.
    pub rpc_url: String,

    /// Bech32 address prefix scheme for this chain.
    pub bech32: Bech32Prefixes,

    /// Currency used for staking.
    pub stake_currency: CurrencyInfo,

    /// All currencies known on this chain.
    pub currencies: Vec<CurrencyInfo>,

    /// Currencies accepted for fees, with gas price steps.
    pub fee_currencies: Vec<FeeCurrency>,

    /// Feature flags advertised to the wallet provider (e.g., "cosmwasm").
    pub features: Vec<String>,

    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::archway_mainnet()
    }
}

impl ChainConfig {
    /// Built-in descriptor for Archway mainnet.
    ///
    /// `aarch` is atto-ARCH, so every currency entry carries 18 decimals.
    pub fn archway_mainnet() -> Self {
        let arch = CurrencyInfo {
            denom: "ARCH".to_string(),
            minimal_denom: "aarch".to_string(),
            decimals: 18,
        };
        Self {
            chain_id: "archway-1".to_string(),
            chain_name: "Archway".to_string(),
            rpc_url: ARCHWAY_RPC_URL.to_string(),
            bech32: Bech32Prefixes::with_account_prefix("archway"),
            stake_currency: arch.clone(),
            currencies: vec![arch.clone()],
            fee_currencies: vec![FeeCurrency {
                currency: arch,
                gas_price_step: GasPriceStep {
                    low: 0.0,
                    average: 0.1,
                    high: 0.2,
                },
            }],
            features: vec!["cosmwasm".to_string()],
            rpc_timeout_secs: 10,
        }
    }

    /// The account address prefix queries and accounts are validated against.
    pub fn account_prefix(&self) -> &str {
        &self.bech32.account
    }
}

/// Bech32 prefix scheme for account, validator and consensus addresses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Bech32Prefixes {
    pub account: String,
    pub account_pub: String,
    pub validator: String,
    pub validator_pub: String,
    pub consensus: String,
    pub consensus_pub: String,
}

impl Bech32Prefixes {
    /// Derive the full prefix set from the account prefix, Cosmos convention.
    pub fn with_account_prefix(prefix: &str) -> Self {
        Self {
            account: prefix.to_string(),
            account_pub: format!("{prefix}pub"),
            validator: format!("{prefix}valoper"),
            validator_pub: format!("{prefix}valoperpub"),
            consensus: format!("{prefix}valcons"),
            consensus_pub: format!("{prefix}valconspub"),
        }
    }
}

impl Default for Bech32Prefixes {
    fn default() -> Self {
        Self::with_account_prefix("archway")
    }
}

/// A currency denomination and its display scale.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// Display denomination (e.g., "ARCH").
    pub denom: String,

    /// Minimal on-chain denomination (e.g., "aarch").
    pub minimal_denom: String,

    /// Number of decimals between minimal and display denomination.
    pub decimals: u32,
}

impl Default for CurrencyInfo {
    fn default() -> Self {
        Self {
            denom: "ARCH".to_string(),
            minimal_denom: "aarch".to_string(),
            decimals: 18,
        }
    }
}

/// A fee currency with its suggested gas price range.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct FeeCurrency {
    #[serde(flatten)]
    pub currency: CurrencyInfo,

    pub gas_price_step: GasPriceStep,
}

/// Suggested gas prices in minimal denomination, low ≤ average ≤ high.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GasPriceStep {
    pub low: f64,
    pub average: f64,
    pub high: f64,
}

impl Default for GasPriceStep {
    fn default() -> Self {
        Self {
            low: 0.0,
            average: 0.1,
            high: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archway_mainnet_descriptor() {
        let config = ChainConfig::archway_mainnet();
        assert_eq!(config.chain_id, "archway-1");
        assert_eq!(config.account_prefix(), "archway");
        assert_eq!(config.bech32.validator, "archwayvaloper");
        // All entries for aarch agree on 18 decimals.
        assert_eq!(config.stake_currency.decimals, 18);
        for c in &config.currencies {
            assert_eq!(c.decimals, 18);
        }
        assert!(config.features.iter().any(|f| f == "cosmwasm"));
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: ChainConfig = toml::from_str("chain_id = \"constantine-3\"").unwrap();
        assert_eq!(config.chain_id, "constantine-3");
        assert_eq!(config.rpc_url, ARCHWAY_RPC_URL);
        assert_eq!(config.rpc_timeout_secs, 10);
    }

    #[test]
    fn test_fee_currency_flattens() {
        let config = ChainConfig::archway_mainnet();
        let json = serde_json::to_value(&config.fee_currencies[0]).unwrap();
        assert_eq!(json["minimal_denom"], "aarch");
        assert_eq!(json["gas_price_step"]["average"], 0.1);
    }
}
