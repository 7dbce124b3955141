//! Proptest generators for property-based testing.

use proptest::prelude::*;

use star_notary::{AccountId, Amount, StarId};

/// Generate a random StarId.
pub fn star_id() -> impl Strategy<Value = StarId> {
    any::<u64>().prop_map(StarId::new)
}

/// Generate a random AccountId.
pub fn account_id() -> impl Strategy<Value = AccountId> {
    any::<[u8; 32]>().prop_map(AccountId::from_bytes)
}

/// Generate an amount up to `max`.
pub fn amount(max: u128) -> impl Strategy<Value = Amount> {
    (0u128..=max).prop_map(Amount::new)
}

/// Generate a star description (possibly empty).
pub fn description() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 !]{0,40}".prop_map(String::from)
}
