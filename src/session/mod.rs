//! Chain session subsystem.
//!
//! # Data Flow
//! ```text
//! ChainConfig + Arc<dyn WalletProvider>
//!     → client.rs (suggest chain → enable → sign options → signer)
//!     → connection.rs (transport bound to the signer)
//!     → query_contract (address check → frame → abci_query → JSON)
//! ```
//!
//! # Design Decisions
//! - Session establishment failures propagate as `Err(SessionError)`;
//!   the caller decides how to surface them
//! - Per-query failures are captured at the `query_contract` boundary and
//!   returned as `QueryOutcome::Error` data, so independent flows can
//!   render partial results
//! - The `ConnectionHandle` is read-only after creation and safe to share
//!   across concurrent queries

pub mod address;
pub mod client;
pub mod connection;
pub mod types;

pub use address::{validate_address, AddressError};
pub use client::ChainSessionClient;
pub use connection::ConnectionHandle;
pub use types::{QueryError, QueryOutcome, SessionError, SessionResult};
