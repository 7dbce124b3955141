//! Error types for registry operations.

use thiserror::Error;

use crate::types::{AccountId, Amount, StarId};

/// Errors that can occur during registry operations.
///
/// Every failure aborts the whole operation with no partial state mutation;
/// these are the only outcomes besides success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The star id is not minted.
    #[error("star {0} not found")]
    NotFound(StarId),

    /// Mint attempted on an id that is already minted.
    #[error("star {0} is already minted")]
    DuplicateId(StarId),

    /// The caller does not own the star the operation requires.
    #[error("account {caller} does not own star {star}")]
    NotOwner { star: StarId, caller: AccountId },

    /// Buy or price lookup on a star with no listing.
    #[error("star {0} is not for sale")]
    NotForSale(StarId),

    /// The attached payment is below the listed price.
    #[error("payment {offered} is below the listed price {required} for star {star}")]
    InsufficientPayment {
        star: StarId,
        required: Amount,
        offered: Amount,
    },

    /// Buy attempted by the current owner.
    #[error("account {caller} already owns star {star}")]
    SelfPurchase { star: StarId, caller: AccountId },

    /// The payout to the seller failed; the sale was not performed.
    #[error("settlement error: {0}")]
    Settlement(#[from] SettlementError),
}

/// Errors from the external payout primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// Crediting the recipient failed. The enclosing operation is rolled
    /// back (no partial payment).
    #[error("payout of {amount} to {recipient} failed: {reason}")]
    PayoutFailed {
        recipient: AccountId,
        amount: Amount,
        reason: String,
    },
}
