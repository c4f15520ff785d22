//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the RPC URL parses and uses an http(s) scheme
//! - Require a consistent decimal scale per denomination
//! - Require gas price steps to be ordered and non-negative
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ChainConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;

use crate::config::schema::ChainConfig;

/// A single semantic problem found in a [`ChainConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyChainId,
    EmptyAccountPrefix,
    InvalidRpcUrl { url: String, reason: String },
    NoCurrencies,
    InconsistentDecimals { denom: String, seen: u32, conflicting: u32 },
    UnorderedGasPriceStep { denom: String },
    NegativeGasPrice { denom: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyChainId => write!(f, "chain_id must not be empty"),
            ValidationError::EmptyAccountPrefix => {
                write!(f, "bech32 account prefix must not be empty")
            }
            ValidationError::InvalidRpcUrl { url, reason } => {
                write!(f, "invalid rpc_url '{}': {}", url, reason)
            }
            ValidationError::NoCurrencies => write!(f, "at least one currency is required"),
            ValidationError::InconsistentDecimals {
                denom,
                seen,
                conflicting,
            } => write!(
                f,
                "denom '{}' declared with {} decimals in one place and {} in another",
                denom, seen, conflicting
            ),
            ValidationError::UnorderedGasPriceStep { denom } => write!(
                f,
                "gas price step for '{}' must satisfy low <= average <= high",
                denom
            ),
            ValidationError::NegativeGasPrice { denom } => {
                write!(f, "gas price step for '{}' must be non-negative", denom)
            }
        }
    }
}

/// Validate a chain descriptor, collecting every problem found.
pub fn validate_config(config: &ChainConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.chain_id.trim().is_empty() {
        errors.push(ValidationError::EmptyChainId);
    }

    if config.bech32.account.trim().is_empty() {
        errors.push(ValidationError::EmptyAccountPrefix);
    }

    match url::Url::parse(&config.rpc_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidRpcUrl {
            url: config.rpc_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidRpcUrl {
            url: config.rpc_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.currencies.is_empty() {
        errors.push(ValidationError::NoCurrencies);
    }

    // Every mention of a minimal denom must agree on its decimal scale.
    let mut decimals_by_denom: HashMap<&str, u32> = HashMap::new();
    let mentions = std::iter::once(&config.stake_currency)
        .chain(config.currencies.iter())
        .chain(config.fee_currencies.iter().map(|fc| &fc.currency));
    for currency in mentions {
        match decimals_by_denom.entry(currency.minimal_denom.as_str()) {
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(currency.decimals);
            }
            std::collections::hash_map::Entry::Occupied(e) => {
                let seen = *e.get();
                if seen != currency.decimals {
                    errors.push(ValidationError::InconsistentDecimals {
                        denom: currency.minimal_denom.clone(),
                        seen,
                        conflicting: currency.decimals,
                    });
                }
            }
        }
    }

    for fee in &config.fee_currencies {
        let step = &fee.gas_price_step;
        if step.low < 0.0 || step.average < 0.0 || step.high < 0.0 {
            errors.push(ValidationError::NegativeGasPrice {
                denom: fee.currency.minimal_denom.clone(),
            });
        }
        if step.low > step.average || step.average > step.high {
            errors.push(ValidationError::UnorderedGasPriceStep {
                denom: fee.currency.minimal_denom.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
