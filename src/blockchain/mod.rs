//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variables (private key)
//!     → wallet.rs (key loading)
//!     → client.rs (RPC connection with timeouts)
//!     → transaction.rs (broadcast, confirm)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC reads have configurable timeouts
//! - Graceful degradation when blockchain unreachable

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use transaction::TxSender;
pub use types::{BlockchainError, BlockchainResult, ChainId, ConfirmationStatus};
pub use wallet::Wallet;
