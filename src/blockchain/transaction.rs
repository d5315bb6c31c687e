//! Transaction submission and confirmation monitoring.
//!
//! # Responsibilities
//! - Broadcast signed transactions through a wallet-backed provider
//! - Monitor confirmations
//!
//! Gas and nonce filling are delegated to the provider layer.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult, ConfirmationStatus};
use crate::blockchain::wallet::Wallet;

/// Sends transactions signed by one wallet and tracks their confirmation.
#[derive(Clone)]
pub struct TxSender {
    /// Wallet-backed provider used for broadcasting.
    provider: DynProvider,
    /// Read client used for receipt polling.
    client: BlockchainClient,
    /// Sender address.
    from: Address,
    /// Chain ID stamped on every transaction.
    chain_id: u64,
}

impl TxSender {
    /// Create a sender from a read client and a wallet.
    ///
    /// Builds a second provider against the same endpoint with the wallet
    /// attached, so nonce and gas filling happen at the provider layer.
    pub fn new(client: BlockchainClient, wallet: &Wallet) -> BlockchainResult<Self> {
        let endpoint = client.config().default_endpoint().ok_or_else(|| {
            BlockchainError::NotAvailable(format!(
                "No RPC endpoint configured for chain {}",
                client.config().default_chain_id
            ))
        })?;

        let url: url::Url = endpoint.url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", endpoint.url, e))
        })?;

        let provider = ProviderBuilder::new()
            .wallet(wallet.signer())
            .connect_http(url)
            .erased();

        Ok(Self {
            provider,
            client,
            from: wallet.address(),
            chain_id: wallet.chain_id(),
        })
    }

    /// Sign and broadcast a transaction, returning its hash.
    ///
    /// # Arguments
    /// * `to` - Destination address
    /// * `value` - Amount of native token to attach, in wei
    /// * `calldata` - ABI-encoded call data (empty for simple transfers)
    pub async fn send(&self, to: Address, value: U256, calldata: Bytes) -> BlockchainResult<TxHash> {
        let tx = self.build_request(to, value, calldata);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| BlockchainError::Rpc(format!("Broadcast failed: {}", e)))?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(tx_hash = %tx_hash, from = %self.from, "Transaction broadcast");
        Ok(tx_hash)
    }

    /// Assemble the request that `send` broadcasts.
    ///
    /// Only destination, value, calldata, and the configured chain ID are
    /// set here; nonce and gas come from the provider fillers.
    pub fn build_request(&self, to: Address, value: U256, calldata: Bytes) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.from)
            .with_to(to)
            .with_value(value)
            .with_input(calldata)
            .with_chain_id(self.chain_id)
    }

    /// Wait for a transaction to be confirmed.
    ///
    /// # Arguments
    /// * `tx_hash` - Transaction hash to monitor
    /// * `timeout_secs` - Maximum time to wait for confirmation
    pub async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
        timeout_secs: u64,
    ) -> BlockchainResult<ConfirmationStatus> {
        let required_confirmations = self.client.confirmation_blocks();
        let timeout_duration = Duration::from_secs(timeout_secs);
        let poll_interval = Duration::from_secs(2);

        let result = timeout(timeout_duration, async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                // Get the receipt
                let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                // Check if transaction succeeded
                if !receipt.status() {
                    return Ok(ConfirmationStatus::Failed(
                        "Transaction reverted".to_string(),
                    ));
                }

                // Get current block number
                let current_block = self.client.get_block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = current_block.saturating_sub(tx_block) as u32;

                if confirmations >= required_confirmations {
                    return Ok(ConfirmationStatus::Confirmed {
                        block_number: tx_block,
                    });
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations = confirmations,
                    required = required_confirmations,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(BlockchainError::ConfirmationTimeout(required_confirmations)),
        }
    }

    /// Get the sender address.
    pub fn address(&self) -> Address {
        self.from
    }
}

impl std::fmt::Debug for TxSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxSender")
            .field("from", &self.from)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChainConfig, RpcEndpoint};

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn test_config() -> ChainConfig {
        ChainConfig {
            default_chain_id: 31337,
            rpc_endpoints: vec![RpcEndpoint {
                chain_id: 31337,
                url: "http://localhost:8545".to_string(),
            }],
            rpc_timeout_secs: 5,
            confirmation_blocks: 1,
            confirmation_timeout_secs: 30,
        }
    }

    #[test]
    fn test_confirmation_status() {
        let status = ConfirmationStatus::Confirming {
            current: 2,
            required: 3,
        };
        assert!(matches!(status, ConfirmationStatus::Confirming { .. }));

        let status = ConfirmationStatus::Confirmed { block_number: 100 };
        assert!(matches!(status, ConfirmationStatus::Confirmed { .. }));
    }

    #[tokio::test]
    async fn test_sender_creation() {
        let client = BlockchainClient::new(test_config()).await.unwrap();
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337).unwrap();

        let sender = TxSender::new(client, &wallet).unwrap();
        assert_eq!(sender.address(), wallet.address());
    }

    #[tokio::test]
    async fn test_build_request_pins_configured_values() {
        use alloy::primitives::TxKind;

        let client = BlockchainClient::new(test_config()).await.unwrap();
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337).unwrap();
        let sender = TxSender::new(client, &wallet).unwrap();

        let to = Address::repeat_byte(0x42);
        let calldata = Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]);
        let tx = sender.build_request(to, U256::from(1000u64), calldata.clone());

        assert_eq!(tx.to, Some(TxKind::Call(to)));
        assert_eq!(tx.value, Some(U256::from(1000u64)));
        assert_eq!(tx.chain_id, Some(31337));
        assert_eq!(tx.from, Some(wallet.address()));
        assert_eq!(tx.input.input, Some(calldata));
    }

    #[tokio::test]
    async fn test_send_against_unreachable_rpc_errors() {
        let client = BlockchainClient::new(test_config()).await.unwrap();
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337).unwrap();
        let sender = TxSender::new(client, &wallet).unwrap();

        let result = sender
            .send(Address::ZERO, U256::from(1u64), Bytes::new())
            .await;
        assert!(result.is_err());
    }
}
