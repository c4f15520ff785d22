//! Session error taxonomy and query outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rpc::RpcError;
use crate::wallet::ProviderError;

/// Errors that can occur while establishing or using a session.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// No wallet capability is reachable in this environment.
    #[error("wallet provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The user interactively declined authorization.
    #[error("user rejected authorization: {0}")]
    UserRejected(String),

    /// RPC endpoint unreachable, timed out, or answered garbage.
    #[error("network error: {0}")]
    Network(String),
}

impl From<ProviderError> for SessionError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable(detail) => SessionError::ProviderUnavailable(detail),
            ProviderError::Rejected(detail) => SessionError::UserRejected(detail),
        }
    }
}

impl From<RpcError> for SessionError {
    fn from(err: RpcError) -> Self {
        SessionError::Network(err.to_string())
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Error detail returned as data from a contract query.
///
/// Serializes as `{"error": <detail>}`, so an outcome rendered to JSON is
/// either the contract's response or this wrapper, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryError {
    pub error: String,
}

/// Outcome of a read-only contract query: the decoded response, or the
/// failure captured as data.
///
/// `query_contract` never propagates a failure to its caller; a caller that
/// holds a `QueryOutcome` can always render something.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    /// Contract response passed through unchanged.
    Response(serde_json::Value),

    /// Transport, encoding or contract-side failure, as data.
    Error(QueryError),
}

impl QueryOutcome {
    /// Capture a fallible query result, converting any failure into data.
    pub fn capture<E: std::fmt::Display>(result: Result<serde_json::Value, E>) -> Self {
        match result {
            Ok(value) => QueryOutcome::Response(value),
            Err(e) => QueryOutcome::Error(QueryError {
                error: e.to_string(),
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryOutcome::Error(_))
    }

    /// The successful response, if any.
    pub fn response(&self) -> Option<&serde_json::Value> {
        match self {
            QueryOutcome::Response(value) => Some(value),
            QueryOutcome::Error(_) => None,
        }
    }

    /// The captured error detail, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            QueryOutcome::Response(_) => None,
            QueryOutcome::Error(e) => Some(&e.error),
        }
    }

    /// Decode a successful response into a typed view.
    ///
    /// Returns `None` for error outcomes or responses of a different shape.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.response()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}
