//! Rental contract integration.

pub mod contract;
pub mod invoker;

pub use contract::{RENTAL_CONTRACT_ADDRESS, RENTAL_FEE_WEI};
pub use invoker::RentalInvoker;
