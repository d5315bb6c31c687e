//! Rental Asset dApp Client Library
//!
//! Thin integration layer over one deployed rental-asset contract on Base
//! mainnet: a wallet connector bound to a single chain, RPC endpoint, and
//! relay project id, plus an invoker for the payable rental request and
//! the owner-side contract surface.

pub mod blockchain;
pub mod config;
pub mod connector;
pub mod observability;
pub mod rental;

pub use config::DappConfig;
pub use connector::Connector;
pub use rental::RentalInvoker;
