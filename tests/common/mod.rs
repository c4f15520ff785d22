//! Shared doubles for session integration tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use archid_client::config::ChainConfig;
use archid_client::rpc::{RpcError, RpcTransport, SMART_QUERY_PATH};
use archid_client::wallet::{
    AccountRecord, OfflineSigner, ProviderError, SignOptions, SigningAlgorithm, WalletProvider,
};

/// Valid bech32 account address with the `archway` prefix (20-byte payload).
pub const TEST_ACCOUNT: &str = "archway1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc52fs6vt";

pub fn test_account_record() -> AccountRecord {
    AccountRecord {
        address: TEST_ACCOUNT.to_string(),
        public_key: vec![0x02; 33],
        algo: SigningAlgorithm::Secp256k1,
    }
}

/// Wallet provider double that counts user prompts.
///
/// Registration and authorization prompt only the first time a chain id is
/// seen, mirroring the idempotence the provider contract requires.
#[derive(Default)]
pub struct MockProvider {
    accounts: Vec<AccountRecord>,
    registered: Mutex<HashSet<String>>,
    authorized: Mutex<HashSet<String>>,
    pub registration_prompts: AtomicUsize,
    pub authorization_prompts: AtomicUsize,
    pub reject_authorization: bool,
    pub unavailable: bool,
}

impl MockProvider {
    pub fn with_accounts(accounts: Vec<AccountRecord>) -> Self {
        Self {
            accounts,
            ..Default::default()
        }
    }

    pub fn rejecting() -> Self {
        Self {
            reject_authorization: true,
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    fn check_available(&self) -> Result<(), ProviderError> {
        if self.unavailable {
            Err(ProviderError::Unavailable(
                "no wallet extension installed".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn suggest_chain(&self, config: &ChainConfig) -> Result<(), ProviderError> {
        self.check_available()?;
        let mut registered = self.registered.lock().unwrap();
        if registered.insert(config.chain_id.clone()) {
            self.registration_prompts.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    async fn enable(&self, chain_id: &str) -> Result<(), ProviderError> {
        self.check_available()?;
        if self.reject_authorization {
            return Err(ProviderError::Rejected(chain_id.to_string()));
        }
        let mut authorized = self.authorized.lock().unwrap();
        if authorized.insert(chain_id.to_string()) {
            self.authorization_prompts.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    async fn set_default_options(&self, _options: SignOptions) -> Result<(), ProviderError> {
        self.check_available()
    }

    async fn offline_signer(
        &self,
        _chain_id: &str,
    ) -> Result<Arc<dyn OfflineSigner>, ProviderError> {
        self.check_available()?;
        Ok(Arc::new(FixedSigner {
            accounts: self.accounts.clone(),
        }))
    }
}

struct FixedSigner {
    accounts: Vec<AccountRecord>,
}

#[async_trait]
impl OfflineSigner for FixedSigner {
    async fn accounts(&self) -> Result<Vec<AccountRecord>, ProviderError> {
        Ok(self.accounts.clone())
    }
}

/// What the scripted transport should do for queries against one contract.
#[derive(Clone)]
pub enum Scripted {
    /// Answer with this JSON, framed the way the node frames it.
    Success(serde_json::Value),
    /// Contract-side rejection (non-zero ABCI code).
    ContractError(String),
    /// Endpoint unreachable.
    NetworkFailure(String),
    /// Answer after a delay, for concurrency tests.
    SlowSuccess(Duration, serde_json::Value),
}

/// RPC transport double scripted per contract address.
pub struct ScriptedTransport {
    entries: Vec<(String, Scripted)>,
    pub calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(entries: Vec<(&str, Scripted)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(addr, s)| (addr.to_string(), s))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Frame a contract's JSON response the way the query path returns it
    /// (protobuf field 1, length-delimited).
    fn frame_response(value: &serde_json::Value) -> Vec<u8> {
        let bytes = serde_json::to_vec(value).unwrap();
        assert!(bytes.len() < 128, "test fixture exceeds one-byte length");
        let mut frame = vec![0x0a, bytes.len() as u8];
        frame.extend_from_slice(&bytes);
        frame
    }
}

#[async_trait]
impl RpcTransport for ScriptedTransport {
    async fn abci_query(&self, path: &str, data: &[u8]) -> Result<Vec<u8>, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(path, SMART_QUERY_PATH, "unexpected query path");

        for (address, behavior) in &self.entries {
            let needle = address.as_bytes();
            let hit = data.windows(needle.len()).any(|w| w == needle);
            if !hit {
                continue;
            }
            return match behavior {
                Scripted::Success(value) => Ok(Self::frame_response(value)),
                Scripted::ContractError(log) => Err(RpcError::Contract(log.clone())),
                Scripted::NetworkFailure(detail) => Err(RpcError::Network(detail.clone())),
                Scripted::SlowSuccess(delay, value) => {
                    tokio::time::sleep(*delay).await;
                    Ok(Self::frame_response(value))
                }
            };
        }

        Err(RpcError::Contract("code 6: contract not found".to_string()))
    }
}
