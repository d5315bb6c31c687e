//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the dApp
//! client. All types derive Serde traits for deserialization from config
//! files, and all defaults are the production Base mainnet values so the
//! client is usable with no config file at all.

use serde::{Deserialize, Serialize};

/// Base mainnet chain ID.
pub const BASE_MAINNET_ID: u64 = 8453;

/// Public Base mainnet JSON-RPC endpoint.
pub const BASE_RPC_URL: &str = "https://mainnet.base.org/";

/// Root configuration for the dApp client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DappConfig {
    /// Chain and RPC settings.
    pub chain: ChainConfig,

    /// Wallet-connection settings.
    pub connector: ConnectorConfig,
}

/// Chain configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// The chain every transaction is bound to.
    pub default_chain_id: u64,

    /// Known RPC endpoints, one per chain.
    pub rpc_endpoints: Vec<RpcEndpoint>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Number of block confirmations required for finality.
    pub confirmation_blocks: u32,

    /// Maximum time to wait for a transaction to confirm, in seconds.
    pub confirmation_timeout_secs: u64,
}

/// A single chain-to-endpoint mapping.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RpcEndpoint {
    /// Chain ID served by this endpoint.
    pub chain_id: u64,

    /// HTTPS JSON-RPC URL.
    pub url: String,
}

impl ChainConfig {
    /// The endpoint mapped to the default chain, if configured.
    pub fn default_endpoint(&self) -> Option<&RpcEndpoint> {
        self.rpc_endpoints
            .iter()
            .find(|e| e.chain_id == self.default_chain_id)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            default_chain_id: BASE_MAINNET_ID,
            rpc_endpoints: vec![RpcEndpoint {
                chain_id: BASE_MAINNET_ID,
                url: BASE_RPC_URL.to_string(),
            }],
            rpc_timeout_secs: 10,
            confirmation_blocks: 1,
            confirmation_timeout_secs: 120,
        }
    }
}

/// Wallet-connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Project key for the wallet-connection relay service.
    pub project_id: String,

    /// Application metadata shown to the wallet during pairing.
    pub metadata: AppMetadata,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            project_id: "a5f9260bc9bca570190d3b01f477fc45".to_string(),
            metadata: AppMetadata::default(),
        }
    }
}

/// Application identity presented to wallets.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    pub icons: Vec<String>,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "Decentralized Rental Asset DApp".to_string(),
            description: "NFT Rental Manager on Base Network.".to_string(),
            url: "https://your-dapp-domain.com".to_string(),
            icons: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_base_mainnet() {
        let config = DappConfig::default();
        assert_eq!(config.chain.default_chain_id, 8453);
        // Exactly one supported chain mapping out of the box.
        assert_eq!(config.chain.rpc_endpoints.len(), 1);
        assert_eq!(
            config.chain.default_endpoint().map(|e| e.url.as_str()),
            Some("https://mainnet.base.org/")
        );
        assert!(!config.connector.project_id.is_empty());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: DappConfig = toml::from_str("").unwrap();
        assert_eq!(config.chain.default_chain_id, BASE_MAINNET_ID);
        assert_eq!(config.chain.confirmation_blocks, 1);
    }

    #[test]
    fn test_toml_override() {
        let config: DappConfig = toml::from_str(
            r#"
            [chain]
            default_chain_id = 31337
            rpc_timeout_secs = 2

            [[chain.rpc_endpoints]]
            chain_id = 31337
            url = "http://localhost:8545"
            "#,
        )
        .unwrap();
        assert_eq!(config.chain.default_chain_id, 31337);
        assert_eq!(config.chain.rpc_timeout_secs, 2);
        assert_eq!(
            config.chain.default_endpoint().map(|e| e.url.as_str()),
            Some("http://localhost:8545")
        );
        // Connector section falls back to defaults.
        assert_eq!(config.connector.metadata.name, "Decentralized Rental Asset DApp");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DappConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let decoded: DappConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(decoded.chain.rpc_endpoints, config.chain.rpc_endpoints);
        assert_eq!(decoded.connector.project_id, config.connector.project_id);
    }
}
