//! Test fixtures and helpers.
//!
//! Common setup code for integration and property tests.

use star_notary::{AccountId, Amount, MemoryBank, Registry, StarId};

/// A test fixture with a default-config registry backed by a memory bank.
pub struct TestFixture {
    pub registry: Registry<MemoryBank>,
}

impl TestFixture {
    /// Create a new fixture with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(MemoryBank::new()),
        }
    }

    /// Mint a star for `owner`, panicking on failure.
    pub fn mint(&mut self, owner: AccountId, id: u64, description: &str) -> StarId {
        let star_id = StarId::new(id);
        self.registry
            .mint(owner, star_id, description)
            .expect("fixture mint failed");
        star_id
    }

    /// Mint a star and immediately list it at `price`.
    pub fn mint_listed(&mut self, owner: AccountId, id: u64, price: Amount) -> StarId {
        let star_id = self.mint(owner, id, "fixture star");
        self.registry
            .list_for_sale(owner, star_id, price)
            .expect("fixture listing failed");
        star_id
    }

    /// Bank balance of an account.
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.registry.settlement().balance_of(account)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic accounts for multi-party tests.
///
/// Account `i` has the byte `i` in the first position of its id, so the
/// parties are distinct and stable across runs.
pub fn multi_party_accounts(count: usize) -> Vec<AccountId> {
    (0..count)
        .map(|i| {
            let mut bytes = [0u8; 32];
            bytes[0] = i as u8;
            AccountId::from_bytes(bytes)
        })
        .collect()
}
