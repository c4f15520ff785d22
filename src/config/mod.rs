//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or ChainConfig::archway_mainnet()
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ChainConfig (validated, immutable)
//!     → shared via Arc with the session client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the chain descriptor never changes
//!   for the lifetime of a session
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{Bech32Prefixes, ChainConfig, CurrencyInfo, FeeCurrency, GasPriceStep};
pub use validation::{validate_config, ValidationError};
