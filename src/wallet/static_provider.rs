//! In-process wallet provider with fixed account metadata.
//!
//! Lets headless runs and tests drive the session flow without a browser
//! wallet. Holds no key material; every in-scope operation is read-only.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::ChainConfig;
use crate::wallet::provider::{ProviderError, SignOptions, WalletProvider};
use crate::wallet::signer::{AccountRecord, OfflineSigner};

/// Wallet provider backed by a static account list.
#[derive(Debug, Default)]
pub struct StaticProvider {
    accounts: Vec<AccountRecord>,
    registered: Mutex<HashSet<String>>,
    enabled: Mutex<HashSet<String>>,
    options: Mutex<SignOptions>,
}

impl StaticProvider {
    /// Create a provider exposing the given accounts on any suggested chain.
    pub fn new(accounts: Vec<AccountRecord>) -> Self {
        tracing::debug!(accounts = accounts.len(), "static wallet provider created");
        Self {
            accounts,
            registered: Mutex::new(HashSet::new()),
            enabled: Mutex::new(HashSet::new()),
            options: Mutex::new(SignOptions::default()),
        }
    }

    /// Provider with no accounts; queries work, account listing is empty.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Chain ids registered so far via `suggest_chain`.
    pub fn registered_chains(&self) -> Vec<String> {
        let registered = self.registered.lock().unwrap_or_else(|e| e.into_inner());
        registered.iter().cloned().collect()
    }

    /// The signing defaults most recently applied.
    pub fn default_options(&self) -> SignOptions {
        *self.options.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl WalletProvider for StaticProvider {
    async fn suggest_chain(&self, config: &ChainConfig) -> Result<(), ProviderError> {
        let mut registered = self.registered.lock().unwrap_or_else(|e| e.into_inner());
        if registered.insert(config.chain_id.clone()) {
            tracing::info!(chain_id = %config.chain_id, "chain registered with provider");
        }
        Ok(())
    }

    async fn enable(&self, chain_id: &str) -> Result<(), ProviderError> {
        let mut enabled = self.enabled.lock().unwrap_or_else(|e| e.into_inner());
        enabled.insert(chain_id.to_string());
        Ok(())
    }

    async fn set_default_options(&self, options: SignOptions) -> Result<(), ProviderError> {
        *self.options.lock().unwrap_or_else(|e| e.into_inner()) = options;
        Ok(())
    }

    async fn offline_signer(
        &self,
        chain_id: &str,
    ) -> Result<Arc<dyn OfflineSigner>, ProviderError> {
        let enabled = self.enabled.lock().unwrap_or_else(|e| e.into_inner());
        if !enabled.contains(chain_id) {
            tracing::debug!(chain_id, "signer requested for chain not yet enabled");
        }
        Ok(Arc::new(StaticSigner {
            accounts: self.accounts.clone(),
        }))
    }
}

/// Signer returning a fixed account list.
#[derive(Debug, Clone)]
struct StaticSigner {
    accounts: Vec<AccountRecord>,
}

#[async_trait]
impl OfflineSigner for StaticSigner {
    async fn accounts(&self) -> Result<Vec<AccountRecord>, ProviderError> {
        Ok(self.accounts.clone())
    }
}
