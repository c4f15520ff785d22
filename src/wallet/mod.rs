//! Wallet capability subsystem.
//!
//! # Data Flow
//! ```text
//! WalletProvider (browser extension, remote custodian, or static/test)
//!     → provider.rs (chain registration, authorization, sign options)
//!     → signer.rs (account metadata behind an opaque signer handle)
//!     → session client (connection setup borrows the signer)
//! ```
//!
//! # Security Constraints
//! - Private keys never cross this boundary; only addresses, public keys
//!   and algorithm identifiers do
//! - The provider is always passed explicitly, never read from globals

pub mod provider;
pub mod signer;
pub mod static_provider;

pub use provider::{ProviderError, SignOptions, WalletProvider};
pub use signer::{AccountRecord, OfflineSigner, SigningAlgorithm};
pub use static_provider::StaticProvider;
