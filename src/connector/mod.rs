//! Wallet-connection layer.
//!
//! # Data Flow
//! ```text
//! DappConfig (chain + relay project id + app metadata)
//!     → Connector::new (RPC client bound to the single configured chain)
//!     → connect() (signer attach from environment)
//!     → signer() / tx_sender() (available once connected)
//! ```
//!
//! The pairing handshake with the wallet-connection relay is owned by the
//! external service; this layer carries its project identifier and the app
//! metadata presented during pairing, and exposes the signer once attached.

use alloy::primitives::Address;

use crate::blockchain::{BlockchainClient, BlockchainError, BlockchainResult, TxSender, Wallet};
use crate::config::DappConfig;

/// Client bound to one chain, one RPC endpoint, and one relay project id.
#[derive(Debug, Clone)]
pub struct Connector {
    config: DappConfig,
    client: BlockchainClient,
    wallet: Option<Wallet>,
    sender: Option<TxSender>,
}

impl Connector {
    /// Build a ready-to-use client from a validated configuration.
    ///
    /// No signer is attached yet; read-only operations work immediately.
    pub async fn new(config: DappConfig) -> BlockchainResult<Self> {
        let client = BlockchainClient::new(config.chain.clone()).await?;

        tracing::info!(
            project_id = %config.connector.project_id,
            app = %config.connector.metadata.name,
            chain_id = config.chain.default_chain_id,
            "Connector initialized"
        );

        Ok(Self {
            config,
            client,
            wallet: None,
            sender: None,
        })
    }

    /// Attach a signer loaded from the environment.
    ///
    /// Returns the connected account address.
    pub fn connect(&mut self) -> BlockchainResult<Address> {
        let wallet = Wallet::from_env(self.config.chain.default_chain_id)?;
        self.attach(wallet)
    }

    /// Attach an already-constructed wallet.
    ///
    /// The wallet must be bound to the configured chain.
    pub fn attach(&mut self, wallet: Wallet) -> BlockchainResult<Address> {
        if wallet.chain_id() != self.config.chain.default_chain_id {
            return Err(BlockchainError::ChainMismatch {
                expected: self.config.chain.default_chain_id,
                actual: wallet.chain_id(),
            });
        }

        let sender = TxSender::new(self.client.clone(), &wallet)?;
        let address = wallet.address();

        tracing::info!(address = %address, "Wallet connected");

        self.wallet = Some(wallet);
        self.sender = Some(sender);
        Ok(address)
    }

    /// The connected signer, if any.
    pub fn signer(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    /// The transaction sender, available once a signer is attached.
    pub fn tx_sender(&self) -> Option<&TxSender> {
        self.sender.as_ref()
    }

    /// Whether a signer is currently attached.
    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    /// The read-only chain client.
    pub fn client(&self) -> &BlockchainClient {
        &self.client
    }

    /// The configuration this connector was built from.
    pub fn config(&self) -> &DappConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChainConfig, RpcEndpoint};

    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn test_config() -> DappConfig {
        let mut config = DappConfig::default();
        config.chain = ChainConfig {
            default_chain_id: 31337,
            rpc_endpoints: vec![RpcEndpoint {
                chain_id: 31337,
                url: "http://localhost:8545".to_string(),
            }],
            rpc_timeout_secs: 5,
            confirmation_blocks: 1,
            confirmation_timeout_secs: 30,
        };
        config
    }

    #[tokio::test]
    async fn test_connector_starts_without_signer() {
        let connector = Connector::new(test_config()).await.unwrap();
        assert!(!connector.is_connected());
        assert!(connector.signer().is_none());
        assert!(connector.tx_sender().is_none());
    }

    #[tokio::test]
    async fn test_attach_wallet() {
        let mut connector = Connector::new(test_config()).await.unwrap();
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337).unwrap();
        let expected = wallet.address();

        let address = connector.attach(wallet).unwrap();
        assert_eq!(address, expected);
        assert!(connector.is_connected());
        assert_eq!(connector.signer().map(|w| w.address()), Some(expected));
    }

    #[tokio::test]
    async fn test_attach_rejects_wrong_chain() {
        let mut connector = Connector::new(test_config()).await.unwrap();
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 8453).unwrap();

        let result = connector.attach(wallet);
        assert!(matches!(
            result,
            Err(BlockchainError::ChainMismatch {
                expected: 31337,
                actual: 8453
            })
        ));
        assert!(!connector.is_connected());
    }
}
