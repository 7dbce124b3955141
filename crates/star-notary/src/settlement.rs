//! Settlement: the external payout primitive.
//!
//! The hosting environment escrows the full attached payment into registry
//! custody before an operation runs. During a sale the registry moves the
//! listed price from custody to the seller through this trait. The credit
//! must fully succeed or the enclosing operation is aborted unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use star_notary_core::{AccountId, Amount, SettlementError};

/// The payout primitive the registry requires from its environment.
pub trait Settlement {
    /// Transfer `amount` from registry custody to `recipient`.
    ///
    /// On error, nothing may have been transferred; the registry rolls the
    /// whole operation back.
    fn credit(&mut self, recipient: &AccountId, amount: Amount) -> Result<(), SettlementError>;
}

/// In-memory settlement implementation.
///
/// This is primarily for testing and embedding. It keeps a balance per
/// account with no notion of custody limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryBank {
    balances: BTreeMap<AccountId, Amount>,
}

impl MemoryBank {
    /// Create a new empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance of an account (zero if never credited).
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }
}

impl Settlement for MemoryBank {
    fn credit(&mut self, recipient: &AccountId, amount: Amount) -> Result<(), SettlementError> {
        let balance = self.balance_of(recipient);
        let new_balance =
            balance
                .checked_add(amount)
                .ok_or_else(|| SettlementError::PayoutFailed {
                    recipient: *recipient,
                    amount,
                    reason: "balance overflow".to_string(),
                })?;
        self.balances.insert(*recipient, new_balance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_accumulates() {
        let mut bank = MemoryBank::new();
        let account = AccountId::from_bytes([0x01; 32]);

        bank.credit(&account, Amount::new(10)).unwrap();
        bank.credit(&account, Amount::new(5)).unwrap();

        assert_eq!(bank.balance_of(&account), Amount::new(15));
    }

    #[test]
    fn test_unknown_account_has_zero_balance() {
        let bank = MemoryBank::new();
        assert_eq!(bank.balance_of(&AccountId::ZERO), Amount::ZERO);
    }

    #[test]
    fn test_credit_overflow_fails_cleanly() {
        let mut bank = MemoryBank::new();
        let account = AccountId::from_bytes([0x02; 32]);

        bank.credit(&account, Amount::new(u128::MAX)).unwrap();
        let err = bank.credit(&account, Amount::new(1)).unwrap_err();

        assert!(matches!(err, SettlementError::PayoutFailed { .. }));
        // Balance unchanged by the failed credit.
        assert_eq!(bank.balance_of(&account), Amount::new(u128::MAX));
    }
}
