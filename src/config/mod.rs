//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DappConfig (validated, immutable)
//!     → handed to the connector at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the client reads it once at startup
//! - All fields have defaults so running without a config file works
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ChainConfig;
pub use schema::ConnectorConfig;
pub use schema::DappConfig;
pub use schema::RpcEndpoint;
