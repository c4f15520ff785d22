//! Open RPC session bound to a signer.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::ChainConfig;
use crate::rpc::{wire, RpcError, RpcTransport, WireError, SMART_QUERY_PATH};
use crate::session::address::{validate_address, AddressError};
use crate::session::types::QueryOutcome;
use crate::wallet::{AccountRecord, OfflineSigner, ProviderError};

/// An established session: transport plus the signer it was opened with.
///
/// Read-only after creation. Clones share the same transport and signer, so
/// concurrent queries multiplex over one connection without coordination.
#[derive(Clone)]
pub struct ConnectionHandle {
    config: Arc<ChainConfig>,
    transport: Arc<dyn RpcTransport>,
    signer: Arc<dyn OfflineSigner>,
}

/// Internal failure of one query attempt; always captured, never returned.
#[derive(Debug, Error)]
enum QueryFailure {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("payload encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("malformed contract response: {0}")]
    MalformedResponse(String),
}

impl ConnectionHandle {
    pub(crate) fn new(
        config: Arc<ChainConfig>,
        transport: Arc<dyn RpcTransport>,
        signer: Arc<dyn OfflineSigner>,
    ) -> Self {
        Self {
            config,
            transport,
            signer,
        }
    }

    /// The chain descriptor this connection was opened against.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Accounts of the signer this connection is bound to.
    pub async fn accounts(&self) -> Result<Vec<AccountRecord>, ProviderError> {
        self.signer.accounts().await
    }

    /// Perform a read-only smart-contract query.
    ///
    /// The contract address is validated against the chain's bech32 prefix
    /// before any network traffic. Every failure — bad address, transport,
    /// contract-side rejection, undecodable response — is returned as the
    /// [`QueryOutcome::Error`] variant; this method never fails the caller.
    pub async fn query_contract<M: Serialize>(
        &self,
        contract_address: &str,
        payload: &M,
    ) -> QueryOutcome {
        let result = self.try_query(contract_address, payload).await;
        if let Err(e) = &result {
            tracing::debug!(contract = contract_address, error = %e, "contract query failed");
        }
        QueryOutcome::capture(result)
    }

    async fn try_query<M: Serialize>(
        &self,
        contract_address: &str,
        payload: &M,
    ) -> Result<serde_json::Value, QueryFailure> {
        validate_address(contract_address, self.config.account_prefix())?;

        let payload_bytes =
            serde_json::to_vec(payload).map_err(|e| QueryFailure::Encode(e.to_string()))?;
        let frame = wire::encode_smart_query(contract_address, &payload_bytes);

        let raw = self.transport.abci_query(SMART_QUERY_PATH, &frame).await?;
        let data = wire::decode_smart_response(&raw)?;

        serde_json::from_slice(&data)
            .map_err(|e| QueryFailure::MalformedResponse(e.to_string()))
    }
}

impl std::fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("chain_id", &self.config.chain_id)
            .field("rpc_url", &self.config.rpc_url)
            .finish()
    }
}
