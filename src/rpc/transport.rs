//! Tendermint RPC transport with timeout and error handling.
//!
//! # Responsibilities
//! - POST `abci_query` requests to the chain's JSON-RPC endpoint
//! - Enforce a per-request timeout
//! - Map JSON-RPC and ABCI failures onto the transport error taxonomy
//!
//! # Design Decisions
//! - The transport is a trait so tests substitute a scripted double for
//!   the network; `HttpRpcTransport` is the production implementation
//! - Non-zero ABCI codes carry the node's `log` string, which is where
//!   contract-side rejections ("not found", revert messages) surface

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::timeout;

/// Errors raised by the RPC transport.
#[derive(Debug, Clone, Error)]
pub enum RpcError {
    /// Endpoint unreachable or HTTP-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// The node answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The contract (or the wasm module) rejected the query.
    #[error("contract query failed: {0}")]
    Contract(String),

    /// The node's response could not be decoded.
    #[error("malformed rpc response: {0}")]
    Decode(String),
}

/// Read-only query path into the chain, mockable for tests.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Perform an ABCI query and return the raw response value bytes.
    async fn abci_query(&self, path: &str, data: &[u8]) -> Result<Vec<u8>, RpcError>;
}

/// Production transport speaking Tendermint JSON-RPC over HTTP.
#[derive(Clone)]
pub struct HttpRpcTransport {
    http: reqwest::Client,
    endpoint: url::Url,
    timeout_duration: Duration,
}

impl HttpRpcTransport {
    /// Create a transport for the given RPC endpoint.
    pub fn new(rpc_url: &str, timeout_secs: u64) -> Result<Self, RpcError> {
        let endpoint: url::Url = rpc_url
            .parse()
            .map_err(|e| RpcError::Network(format!("invalid RPC URL '{}': {}", rpc_url, e)))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            timeout_duration: Duration::from_secs(timeout_secs),
        })
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_duration.as_secs()
    }
}

impl std::fmt::Debug for HttpRpcTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRpcTransport")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout_secs", &self.timeout_secs())
            .finish()
    }
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'static str,
    params: AbciQueryParams<'a>,
}

#[derive(Serialize)]
struct AbciQueryParams<'a> {
    path: &'a str,
    /// Hex-encoded request frame, per the Tendermint RPC convention.
    data: String,
    prove: bool,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<AbciQueryResult>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<String>,
}

#[derive(Deserialize)]
struct AbciQueryResult {
    response: AbciResponse,
}

#[derive(Deserialize)]
struct AbciResponse {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    /// Base64-encoded response frame; absent on failures.
    #[serde(default)]
    value: Option<String>,
}

#[async_trait]
impl RpcTransport for HttpRpcTransport {
    async fn abci_query(&self, path: &str, data: &[u8]) -> Result<Vec<u8>, RpcError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "abci_query",
            params: AbciQueryParams {
                path,
                data: hex::encode(data),
                prove: false,
            },
        };

        let send = async {
            let http_response = self
                .http
                .post(self.endpoint.clone())
                .json(&request)
                .send()
                .await
                .map_err(|e| RpcError::Network(e.to_string()))?;
            let status = http_response.status();
            if !status.is_success() {
                return Err(RpcError::Network(format!(
                    "endpoint returned HTTP {}",
                    status
                )));
            }
            http_response
                .json::<RpcResponse>()
                .await
                .map_err(|e| RpcError::Decode(e.to_string()))
        };

        let response = match timeout(self.timeout_duration, send).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(endpoint = %self.endpoint, path, "RPC timeout");
                return Err(RpcError::Timeout(self.timeout_secs()));
            }
        };

        if let Some(err) = response.error {
            tracing::warn!(code = err.code, message = %err.message, "JSON-RPC error");
            return Err(RpcError::Rpc {
                code: err.code,
                message: match err.data {
                    Some(detail) if !detail.is_empty() => {
                        format!("{}: {}", err.message, detail)
                    }
                    _ => err.message,
                },
            });
        }

        let abci = response
            .result
            .ok_or_else(|| RpcError::Decode("response carried neither result nor error".into()))?
            .response;

        if abci.code != 0 {
            return Err(RpcError::Contract(format!(
                "code {}: {}",
                abci.code, abci.log
            )));
        }

        match abci.value {
            Some(value) => BASE64
                .decode(value.as_bytes())
                .map_err(|e| RpcError::Decode(format!("invalid base64 value: {}", e))),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_rejected() {
        let result = HttpRpcTransport::new("not a url", 10);
        assert!(matches!(result, Err(RpcError::Network(_))));
    }

    #[test]
    fn test_valid_url_accepted() {
        let transport = HttpRpcTransport::new("https://rpc.mainnet.archway.io", 10).unwrap();
        assert_eq!(transport.timeout_secs(), 10);
    }

    #[test]
    fn test_abci_error_response_decodes() {
        // Shape returned by a node when a contract rejects a smart query.
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "response": {
                    "code": 6,
                    "log": "ArchID::Registry::ResolveRecord Not found: query wasm contract failed",
                    "value": null
                }
            }
        }"#;
        let parsed: RpcResponse = serde_json::from_str(raw).unwrap();
        let abci = parsed.result.unwrap().response;
        assert_eq!(abci.code, 6);
        assert!(abci.log.contains("Not found"));
        assert!(abci.value.is_none());
    }

    #[test]
    fn test_success_response_decodes() {
        let raw = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"response": {"code": 0, "log": "", "value": "eyJvayI6dHJ1ZX0="}}
        }"#;
        let parsed: RpcResponse = serde_json::from_str(raw).unwrap();
        let abci = parsed.result.unwrap().response;
        assert_eq!(abci.code, 0);
        let bytes = BASE64.decode(abci.value.unwrap()).unwrap();
        assert_eq!(bytes, br#"{"ok":true}"#);
    }
}
