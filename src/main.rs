//! Headless demo for the Archway session client.
//!
//! Establishes a session through a static wallet provider, then runs three
//! independent flows concurrently — account listing, ArchID name resolution
//! and CW721 metadata lookup — each filling its own result slot, and prints
//! every slot as a JSON line. Query failures are rendered as
//! `{"error": …}` rather than aborting the run.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archid_client::config::{load_config, ChainConfig};
use archid_client::contracts::{Cw721Query, RegistryQuery, CW721_CONTRACT, REGISTRY_CONTRACT};
use archid_client::session::{ChainSessionClient, QueryOutcome, SessionError};
use archid_client::wallet::{AccountRecord, SigningAlgorithm, StaticProvider};

#[derive(Parser)]
#[command(name = "archid-client")]
#[command(about = "Query ArchID name records and NFT metadata on Archway", long_about = None)]
struct Cli {
    /// Name to resolve against the registry contract.
    #[arg(long, default_value = "archid.arch")]
    name: String,

    /// Token id to look up on the CW721 contract.
    #[arg(long, default_value = "arsalaan.arch")]
    token_id: String,

    /// Optional chain descriptor TOML; defaults to Archway mainnet.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Account address the static provider should expose.
    #[arg(long)]
    account: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "archid_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ChainConfig::archway_mainnet(),
    };

    tracing::info!(
        chain_id = %config.chain_id,
        rpc_url = %config.rpc_url,
        "chain descriptor loaded"
    );

    let accounts = match cli.account {
        Some(address) => vec![AccountRecord {
            address,
            public_key: Vec::new(),
            algo: SigningAlgorithm::Secp256k1,
        }],
        None => Vec::new(),
    };
    let provider = Arc::new(StaticProvider::new(accounts));
    let client = Arc::new(ChainSessionClient::new(config, provider));

    // Three independent flows, one result slot each. No ordering between
    // them; each runs to completion or failure on its own.
    let accounts_slot = tokio::spawn({
        let client = Arc::clone(&client);
        async move { client.list_accounts().await }
    });

    let record_slot = tokio::spawn({
        let client = Arc::clone(&client);
        let name = cli.name.clone();
        async move {
            let connection = client.connect().await?;
            Ok::<QueryOutcome, SessionError>(
                connection
                    .query_contract(REGISTRY_CONTRACT, &RegistryQuery::resolve_record(name))
                    .await,
            )
        }
    });

    let token_slot = tokio::spawn({
        let client = Arc::clone(&client);
        let token_id = cli.token_id.clone();
        async move {
            let connection = client.connect().await?;
            Ok::<QueryOutcome, SessionError>(
                connection
                    .query_contract(CW721_CONTRACT, &Cw721Query::nft_info(token_id))
                    .await,
            )
        }
    });

    println!("chain: {}", client.config().chain_id);

    match accounts_slot.await? {
        Ok(accounts) => println!("accounts: {}", serde_json::to_string(&accounts)?),
        Err(e) => println!("accounts: unavailable ({})", e),
    }

    match record_slot.await? {
        Ok(outcome) => println!("resolved record: {}", serde_json::to_string(&outcome)?),
        Err(e) => println!("resolved record: session failed ({})", e),
    }

    match token_slot.await? {
        Ok(outcome) => println!("token metadata: {}", serde_json::to_string(&outcome)?),
        Err(e) => println!("token metadata: session failed ({})", e),
    }

    Ok(())
}
