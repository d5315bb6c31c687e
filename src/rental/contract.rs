//! Fixed reference to the deployed rental asset manager contract.
//!
//! The address and ABI surface are trusted as-is; no check is made that
//! they match the deployed bytecode.

use alloy::primitives::{address, Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

sol! {
    /// Open a rental request, paying the fixed fee.
    function requestRental() external payable;

    /// Approve pending rental requests in bulk (owner only).
    function batchApproveRental(uint256[] calldata requestIds) external;

    /// Withdraw accumulated fees (owner only).
    function withdrawAllFees() external;

    /// Current owner of a token.
    function ownerOf(uint256 tokenId) external view returns (address);
}

/// Deployed RentalAssetManager contract on Base mainnet.
pub const RENTAL_CONTRACT_ADDRESS: Address =
    address!("e8e86cfc428036165d19418fdc7b322aac542699");

/// Fee attached to every rental request, in wei.
pub const RENTAL_FEE_WEI: u64 = 6_666_666_666_666;

/// The fixed rental fee as a transaction value.
pub fn rental_fee() -> U256 {
    U256::from(RENTAL_FEE_WEI)
}

/// Calldata for `requestRental()`.
pub fn request_rental_calldata() -> Bytes {
    requestRentalCall {}.abi_encode().into()
}

/// Calldata for `batchApproveRental(uint256[])`.
pub fn batch_approve_calldata(request_ids: Vec<U256>) -> Bytes {
    batchApproveRentalCall {
        requestIds: request_ids,
    }
    .abi_encode()
    .into()
}

/// Calldata for `withdrawAllFees()`.
pub fn withdraw_all_fees_calldata() -> Bytes {
    withdrawAllFeesCall {}.abi_encode().into()
}

/// Calldata for `ownerOf(uint256)`.
pub fn owner_of_calldata(token_id: U256) -> Bytes {
    ownerOfCall { tokenId: token_id }.abi_encode().into()
}
