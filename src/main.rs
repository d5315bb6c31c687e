//! Rental Asset dApp command-line client.
//!
//! Binds to the configured chain, optionally attaches a wallet from the
//! environment, and drives the rental contract operations.

use std::path::PathBuf;

use alloy::primitives::U256;
use clap::{Parser, Subcommand};
use serde::Serialize;

use rental_dapp::config::loader::load_config;
use rental_dapp::observability::init_logging;
use rental_dapp::{Connector, DappConfig, RentalInvoker};

#[derive(Parser)]
#[command(name = "rental-dapp")]
#[command(about = "Client for the rental asset manager on Base", long_about = None)]
struct Cli {
    /// Path to a TOML config file; built-in Base mainnet defaults apply
    /// otherwise.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a rental request with the fixed fee
    RequestRental,
    /// Look up the owner of a token
    OwnerOf { token_id: u64 },
    /// Approve pending rental requests (owner only)
    BatchApprove {
        #[arg(required = true)]
        request_ids: Vec<u64>,
    },
    /// Withdraw collected fees (owner only)
    WithdrawFees,
    /// Show chain connectivity status
    Status,
}

#[derive(Serialize)]
struct ChainStatus {
    configured_chain_id: u64,
    reported_chain_id: Option<u64>,
    latest_block: Option<u64>,
    healthy: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DappConfig::default(),
    };

    tracing::info!(
        chain_id = config.chain.default_chain_id,
        rpc_url = config
            .chain
            .default_endpoint()
            .map(|e| e.url.as_str())
            .unwrap_or(""),
        app = %config.connector.metadata.name,
        "Configuration loaded"
    );

    let mut connector = Connector::new(config).await?;

    match cli.command {
        Commands::RequestRental => {
            if let Err(e) = connector.connect() {
                tracing::warn!(error = %e, "No wallet available, request will be skipped");
            }
            let invoker = RentalInvoker::new(&connector);
            if let Some(tx_hash) = invoker.request_rental().await {
                println!("{tx_hash}");
            }
        }
        Commands::OwnerOf { token_id } => {
            let invoker = RentalInvoker::new(&connector);
            let owner = invoker.owner_of(U256::from(token_id)).await?;
            println!("{owner}");
        }
        Commands::BatchApprove { request_ids } => {
            connector.connect()?;
            let invoker = RentalInvoker::new(&connector);
            let ids = request_ids.into_iter().map(U256::from).collect();
            let tx_hash = invoker.batch_approve_rental(ids).await?;
            println!("{tx_hash}");
        }
        Commands::WithdrawFees => {
            connector.connect()?;
            let invoker = RentalInvoker::new(&connector);
            let tx_hash = invoker.withdraw_all_fees().await?;
            println!("{tx_hash}");
        }
        Commands::Status => {
            let client = connector.client();
            let status = ChainStatus {
                configured_chain_id: connector.config().chain.default_chain_id,
                reported_chain_id: client.get_chain_id().await.map(u64::from).ok(),
                latest_block: client.get_block_number().await.ok(),
                healthy: client.is_healthy().await,
            };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}
