//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the endpoint table covers the default chain
//! - Validate value ranges (timeouts > 0, URLs well-formed)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DappConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use thiserror::Error;

use crate::config::schema::DappConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no RPC endpoint configured for default chain {0}")]
    MissingDefaultEndpoint(u64),

    #[error("duplicate RPC endpoint for chain {0}")]
    DuplicateEndpoint(u64),

    #[error("invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("RPC URL '{url}' uses scheme '{scheme}', expected http or https")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("wallet connector project id must not be empty")]
    EmptyProjectId,

    #[error("rpc_timeout_secs must be greater than zero")]
    ZeroRpcTimeout,

    #[error("confirmation_timeout_secs must be greater than zero")]
    ZeroConfirmationTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &DappConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.chain.default_endpoint().is_none() {
        errors.push(ValidationError::MissingDefaultEndpoint(
            config.chain.default_chain_id,
        ));
    }

    let mut seen = HashSet::new();
    for endpoint in &config.chain.rpc_endpoints {
        if !seen.insert(endpoint.chain_id) {
            errors.push(ValidationError::DuplicateEndpoint(endpoint.chain_id));
        }

        match endpoint.url.parse::<url::Url>() {
            Ok(parsed) => {
                let scheme = parsed.scheme();
                if scheme != "http" && scheme != "https" {
                    errors.push(ValidationError::UnsupportedScheme {
                        url: endpoint.url.clone(),
                        scheme: scheme.to_string(),
                    });
                }
            }
            Err(e) => {
                errors.push(ValidationError::InvalidRpcUrl {
                    url: endpoint.url.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if config.connector.project_id.trim().is_empty() {
        errors.push(ValidationError::EmptyProjectId);
    }

    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRpcTimeout);
    }

    if config.chain.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConfirmationTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
