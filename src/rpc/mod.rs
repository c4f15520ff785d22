//! RPC transport subsystem.
//!
//! # Data Flow
//! ```text
//! typed entrypoint payload (JSON bytes)
//!     → wire.rs (protobuf frame for the wasm query path)
//!     → transport.rs (Tendermint JSON-RPC abci_query over HTTP)
//!     → wire.rs (unframe the contract's JSON response)
//! ```
//!
//! All calls carry a per-request timeout; failures map onto [`RpcError`]
//! and never panic.

pub mod transport;
pub mod wire;

pub use transport::{HttpRpcTransport, RpcError, RpcTransport};
pub use wire::{WireError, SMART_QUERY_PATH};
