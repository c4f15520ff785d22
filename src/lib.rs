//! Wallet-session and contract-query client for the Archway network.
//!
//! Establishes a signing-capable session with a chain through an explicit
//! wallet provider capability, lists the signer's accounts, and performs
//! read-only CosmWasm smart-contract queries whose failures come back as
//! data instead of errors.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use archid_client::config::ChainConfig;
//! use archid_client::contracts::{RegistryQuery, REGISTRY_CONTRACT};
//! use archid_client::session::ChainSessionClient;
//! use archid_client::wallet::StaticProvider;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(StaticProvider::empty());
//! let client = ChainSessionClient::new(ChainConfig::archway_mainnet(), provider);
//!
//! let connection = client.connect().await?;
//! let outcome = connection
//!     .query_contract(REGISTRY_CONTRACT, &RegistryQuery::resolve_record("archid.arch"))
//!     .await;
//! println!("{}", serde_json::to_string(&outcome)?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contracts;
pub mod rpc;
pub mod session;
pub mod wallet;

pub use config::ChainConfig;
pub use session::{ChainSessionClient, ConnectionHandle, QueryOutcome, SessionError};
pub use wallet::{AccountRecord, StaticProvider, WalletProvider};
