//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the single configured JSON-RPC endpoint
//! - Query chain state (block number, receipts, view calls)
//! - Handle timeouts and network errors gracefully
//! - Provide health check for blockchain connectivity

use alloy::primitives::{Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::config::ChainConfig;

/// Blockchain RPC client wrapper bound to one chain.
#[derive(Clone)]
pub struct BlockchainClient {
    /// Provider for the configured endpoint.
    provider: Arc<dyn Provider + Send + Sync>,
    /// Configuration.
    config: ChainConfig,
    /// Resolved RPC URL, kept for diagnostics.
    rpc_url: String,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client for the configured default chain.
    ///
    /// The connected node's chain ID is checked against the configuration;
    /// a mismatch is logged but does not fail initialization, and the
    /// configured chain ID remains authoritative for every transaction.
    pub async fn new(config: ChainConfig) -> BlockchainResult<Self> {
        let endpoint = config.default_endpoint().ok_or_else(|| {
            BlockchainError::NotAvailable(format!(
                "No RPC endpoint configured for chain {}",
                config.default_chain_id
            ))
        })?;

        let rpc_url = endpoint.url.clone();
        let parsed: url::Url = rpc_url
            .parse()
            .map_err(|e| BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;

        let provider =
            Arc::new(ProviderBuilder::new().connect_http(parsed)) as Arc<dyn Provider + Send + Sync>;

        let client = Self {
            provider,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            rpc_url,
            config,
        };

        // Verify chain ID matches configuration
        match client.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    rpc_url = %client.rpc_url,
                    chain_id = client.config.default_chain_id,
                    "Blockchain client initialized"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Blockchain client initialized but chain verification failed"
                );
                // Don't fail initialization - allow graceful degradation
            }
        }

        Ok(client)
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.config.default_chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.config.default_chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        let fut = self.provider.get_chain_id();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(ChainId(result)),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("eth_chainId failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BlockchainResult<u64> {
        let fut = self.provider.get_block_number();
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("eth_blockNumber failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> BlockchainResult<Option<TransactionReceipt>> {
        let fut = self.provider.get_transaction_receipt(tx_hash);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!(
                "eth_getTransactionReceipt failed: {}",
                e
            ))),
            Err(_) => Err(BlockchainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Execute a read-only call (eth_call) against the latest block.
    pub async fn call(&self, tx: TransactionRequest) -> BlockchainResult<Bytes> {
        let fut = self.provider.call(tx);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("eth_call failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Check if the blockchain is reachable and healthy.
    ///
    /// Returns true if we can query the block number.
    pub async fn is_healthy(&self) -> bool {
        self.get_block_number().await.is_ok()
    }

    /// Get the configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Get the number of confirmation blocks required.
    pub fn confirmation_blocks(&self) -> u32 {
        self.config.confirmation_blocks
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.config.default_chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
