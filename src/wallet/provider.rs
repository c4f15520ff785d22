//! Wallet provider capability.
//!
//! # Responsibilities
//! - Define the four operations a session needs from a wallet
//! - Keep the capability an explicit object, never ambient global state
//! - Surface user rejection distinctly from an absent provider
//!
//! # Design Decisions
//! - Async trait objects so tests substitute a mock without patching anything
//! - `suggest_chain` and `enable` are required to be idempotent: repeating
//!   them for an already-authorized chain must not prompt the user again

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ChainConfig;
use crate::wallet::signer::OfflineSigner;

/// Session-wide signing defaults applied after authorization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignOptions {
    /// Ask the wallet not to override fees set by the application.
    pub prefer_no_set_fee: bool,
}

/// Errors raised by a wallet provider.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// No wallet capability is reachable in this environment.
    #[error("wallet provider unavailable: {0}")]
    Unavailable(String),

    /// The user interactively declined authorization.
    #[error("user rejected authorization: {0}")]
    Rejected(String),
}

/// A wallet capability that custodies keys and authorizes chains.
///
/// The provider owns all key material; callers only ever see a signer
/// handle and the account metadata it is willing to share.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Register a chain descriptor with the provider. Idempotent.
    async fn suggest_chain(&self, config: &ChainConfig) -> Result<(), ProviderError>;

    /// Request user authorization for a chain id.
    ///
    /// May suspend pending user interaction. Must not prompt again for a
    /// chain that is already authorized.
    async fn enable(&self, chain_id: &str) -> Result<(), ProviderError>;

    /// Apply session-wide default signing options.
    async fn set_default_options(&self, options: SignOptions) -> Result<(), ProviderError>;

    /// Obtain a signer bound to an authorized chain.
    async fn offline_signer(
        &self,
        chain_id: &str,
    ) -> Result<Arc<dyn OfflineSigner>, ProviderError>;
}
