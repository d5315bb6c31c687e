//! Rental request invocation.
//!
//! The public rental entry point is fire-and-log: a missing signer is a
//! silent no-op, and any failure during submission or confirmation is
//! logged and swallowed rather than surfaced to the caller. The caller has
//! no compensating action to take. Owner-side helpers propagate errors
//! normally.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;

use crate::blockchain::{
    BlockchainClient, BlockchainError, BlockchainResult, ConfirmationStatus, TxSender,
};
use crate::connector::Connector;
use crate::rental::contract::{self, ownerOfCall, RENTAL_CONTRACT_ADDRESS};

/// Invokes operations on the rental asset manager contract.
#[derive(Debug, Clone)]
pub struct RentalInvoker {
    client: BlockchainClient,
    sender: Option<TxSender>,
    confirmation_timeout_secs: u64,
}

impl RentalInvoker {
    /// Build an invoker from a connector, picking up its signer if one is
    /// attached.
    pub fn new(connector: &Connector) -> Self {
        Self {
            client: connector.client().clone(),
            sender: connector.tx_sender().cloned(),
            confirmation_timeout_secs: connector.config().chain.confirmation_timeout_secs,
        }
    }

    /// Submit one rental request carrying the fixed fee.
    ///
    /// Returns the transaction hash once confirmed, or `None` when no
    /// signer is connected or the submission failed. Never errors.
    pub async fn request_rental(&self) -> Option<TxHash> {
        let sender = match &self.sender {
            Some(s) => s,
            None => {
                tracing::info!("No signer connected, skipping rental request");
                return None;
            }
        };

        match self
            .send_and_confirm(sender, contract::rental_fee(), contract::request_rental_calldata())
            .await
        {
            Ok(tx_hash) => {
                tracing::info!(tx_hash = %tx_hash, "Rental request successful");
                Some(tx_hash)
            }
            Err(e) => {
                tracing::error!(error = %e, "Rental request failed");
                None
            }
        }
    }

    /// Approve pending rental requests in bulk.
    ///
    /// The owner restriction is enforced on-chain; a non-owner caller sees
    /// a revert.
    pub async fn batch_approve_rental(&self, request_ids: Vec<U256>) -> BlockchainResult<TxHash> {
        let sender = self.require_sender()?;
        self.send_and_confirm(sender, U256::ZERO, contract::batch_approve_calldata(request_ids))
            .await
    }

    /// Withdraw all collected fees to the contract owner.
    pub async fn withdraw_all_fees(&self) -> BlockchainResult<TxHash> {
        let sender = self.require_sender()?;
        self.send_and_confirm(sender, U256::ZERO, contract::withdraw_all_fees_calldata())
            .await
    }

    /// Look up the owner of a token.
    pub async fn owner_of(&self, token_id: U256) -> BlockchainResult<Address> {
        let tx = TransactionRequest::default()
            .with_to(RENTAL_CONTRACT_ADDRESS)
            .with_input(contract::owner_of_calldata(token_id));

        let output = self.client.call(tx).await?;

        ownerOfCall::abi_decode_returns(&output)
            .map_err(|e| BlockchainError::Rpc(format!("Failed to decode ownerOf return: {}", e)))
    }

    async fn send_and_confirm(
        &self,
        sender: &TxSender,
        value: U256,
        calldata: Bytes,
    ) -> BlockchainResult<TxHash> {
        let tx_hash = sender.send(RENTAL_CONTRACT_ADDRESS, value, calldata).await?;

        match sender
            .wait_for_confirmation(tx_hash, self.confirmation_timeout_secs)
            .await?
        {
            ConfirmationStatus::Failed(reason) => Err(BlockchainError::Reverted(reason)),
            _ => Ok(tx_hash),
        }
    }

    fn require_sender(&self) -> BlockchainResult<&TxSender> {
        self.sender
            .as_ref()
            .ok_or_else(|| BlockchainError::NotAvailable("No signer connected".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::Wallet;
    use crate::config::{ChainConfig, DappConfig, RpcEndpoint};

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn test_config() -> DappConfig {
        let mut config = DappConfig::default();
        config.chain = ChainConfig {
            default_chain_id: 31337,
            rpc_endpoints: vec![RpcEndpoint {
                chain_id: 31337,
                url: "http://localhost:8545".to_string(),
            }],
            rpc_timeout_secs: 2,
            confirmation_blocks: 1,
            confirmation_timeout_secs: 10,
        };
        config
    }

    async fn connected_invoker() -> RentalInvoker {
        let mut connector = Connector::new(test_config()).await.unwrap();
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337).unwrap();
        connector.attach(wallet).unwrap();
        RentalInvoker::new(&connector)
    }

    #[tokio::test]
    async fn test_request_rental_without_signer_is_noop() {
        let connector = Connector::new(test_config()).await.unwrap();
        let invoker = RentalInvoker::new(&connector);

        assert_eq!(invoker.request_rental().await, None);
    }

    #[tokio::test]
    async fn test_request_rental_swallows_submission_failure() {
        // Signer attached but the endpoint is unreachable: the failure is
        // logged and the caller sees None, never an error or panic.
        let invoker = connected_invoker().await;

        assert_eq!(invoker.request_rental().await, None);
    }

    #[tokio::test]
    async fn test_owner_of_propagates_rpc_failure() {
        let connector = Connector::new(test_config()).await.unwrap();
        let invoker = RentalInvoker::new(&connector);

        let result = invoker.owner_of(U256::from(1u64)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_owner_ops_require_signer() {
        let connector = Connector::new(test_config()).await.unwrap();
        let invoker = RentalInvoker::new(&connector);

        let approve = invoker.batch_approve_rental(vec![U256::from(1u64)]).await;
        assert!(matches!(approve, Err(BlockchainError::NotAvailable(_))));

        let withdraw = invoker.withdraw_all_fees().await;
        assert!(matches!(withdraw, Err(BlockchainError::NotAvailable(_))));
    }
}
