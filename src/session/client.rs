//! Session establishment against a wallet provider and RPC endpoint.

use std::sync::Arc;

use crate::config::ChainConfig;
use crate::rpc::{HttpRpcTransport, RpcTransport};
use crate::session::connection::ConnectionHandle;
use crate::session::types::{SessionError, SessionResult};
use crate::wallet::{AccountRecord, SignOptions, WalletProvider};

/// Mediates between a wallet provider capability and the chain's RPC
/// interface.
///
/// The provider is passed in explicitly; nothing here touches ambient
/// global state, so tests construct a client around a mock provider and a
/// scripted transport.
pub struct ChainSessionClient {
    config: Arc<ChainConfig>,
    provider: Arc<dyn WalletProvider>,
    sign_options: SignOptions,
    transport_override: Option<Arc<dyn RpcTransport>>,
}

impl ChainSessionClient {
    /// Create a client that opens HTTP transports against `config.rpc_url`.
    pub fn new(config: ChainConfig, provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
            sign_options: SignOptions {
                prefer_no_set_fee: true,
            },
            transport_override: None,
        }
    }

    /// Create a client with an injected transport (used by tests and
    /// non-HTTP deployments).
    pub fn with_transport(
        config: ChainConfig,
        provider: Arc<dyn WalletProvider>,
        transport: Arc<dyn RpcTransport>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            provider,
            sign_options: SignOptions {
                prefer_no_set_fee: true,
            },
            transport_override: Some(transport),
        }
    }

    /// The chain descriptor this client targets.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Establish a session: register the chain, obtain authorization, apply
    /// signing defaults, bind a signer and open the RPC connection.
    ///
    /// Idempotent with respect to provider registration: `suggest_chain`
    /// and `enable` are required to be repeat-safe, so calling `connect`
    /// again on an authorized chain never re-prompts the user.
    pub async fn connect(&self) -> SessionResult<ConnectionHandle> {
        self.provider.suggest_chain(&self.config).await?;
        self.provider.enable(&self.config.chain_id).await?;
        self.provider.set_default_options(self.sign_options).await?;
        let signer = self.provider.offline_signer(&self.config.chain_id).await?;

        let transport: Arc<dyn RpcTransport> = match &self.transport_override {
            Some(transport) => Arc::clone(transport),
            None => Arc::new(HttpRpcTransport::new(
                &self.config.rpc_url,
                self.config.rpc_timeout_secs,
            )?),
        };

        tracing::info!(
            chain_id = %self.config.chain_id,
            rpc_url = %self.config.rpc_url,
            "chain session established"
        );

        Ok(ConnectionHandle::new(
            Arc::clone(&self.config),
            transport,
            signer,
        ))
    }

    /// List the signer's accounts.
    ///
    /// Requires only signer negotiation with the provider; no RPC
    /// connection is opened.
    pub async fn list_accounts(&self) -> SessionResult<Vec<AccountRecord>> {
        let signer = self.provider.offline_signer(&self.config.chain_id).await?;
        let accounts = signer.accounts().await.map_err(SessionError::from)?;

        tracing::debug!(count = accounts.len(), "accounts listed");
        Ok(accounts)
    }
}

impl std::fmt::Debug for ChainSessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainSessionClient")
            .field("chain_id", &self.config.chain_id)
            .field("rpc_url", &self.config.rpc_url)
            .field("transport_injected", &self.transport_override.is_some())
            .finish()
    }
}
