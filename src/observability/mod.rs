//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//! ```
//!
//! # Design Decisions
//! - Structured logging with field-annotated events
//! - Swallowed errors in the rental path are still reported here

pub mod logging;

pub use logging::init_logging;
