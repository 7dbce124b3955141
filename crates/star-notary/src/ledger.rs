//! The ledger: the authoritative in-memory store for records and listings.
//!
//! Two key-unique mappings, `StarId -> Star` and `StarId -> Amount`. The
//! ledger is an explicitly owned value injected into (or created by) a
//! [`Registry`](crate::Registry), so independent registries can coexist.
//!
//! The ledger enforces the structural invariants; authorization and payment
//! rules live in the registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use star_notary_core::{AccountId, Amount, RegistryError, Star, StarId};

use crate::Result;

/// In-memory record and listing tables.
///
/// Invariants maintained here:
/// - a star id is minted at most once, and records are never removed;
/// - every listed id is a minted id;
/// - any ownership change clears the listing for that id, so a price set by
///   a previous owner never survives them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Records indexed by id.
    stars: BTreeMap<StarId, Star>,

    /// Sale listings: present only while a record is for sale.
    listings: BTreeMap<StarId, Amount>,
}

impl Ledger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly minted record.
    ///
    /// Fails with [`RegistryError::DuplicateId`] if the id is already
    /// minted. Ids are never reused.
    pub fn mint(&mut self, star: Star) -> Result<()> {
        if self.stars.contains_key(&star.id) {
            return Err(RegistryError::DuplicateId(star.id));
        }
        self.stars.insert(star.id, star);
        Ok(())
    }

    /// Get a record by id.
    pub fn star(&self, id: StarId) -> Result<&Star> {
        self.stars.get(&id).ok_or(RegistryError::NotFound(id))
    }

    /// Get a record by id, `None` if unminted.
    pub fn get(&self, id: StarId) -> Option<&Star> {
        self.stars.get(&id)
    }

    /// Whether the id is minted.
    pub fn contains(&self, id: StarId) -> bool {
        self.stars.contains_key(&id)
    }

    /// Current owner of a record.
    pub fn owner_of(&self, id: StarId) -> Result<AccountId> {
        Ok(self.star(id)?.owner)
    }

    /// Reassign ownership of a record.
    ///
    /// Clears any listing for the id: an ownership change invalidates the
    /// price set by the previous owner.
    pub fn set_owner(&mut self, id: StarId, owner: AccountId) -> Result<()> {
        let star = self
            .stars
            .get_mut(&id)
            .ok_or(RegistryError::NotFound(id))?;
        star.owner = owner;
        self.listings.remove(&id);
        Ok(())
    }

    /// Create or overwrite the listing for a minted record.
    pub fn list(&mut self, id: StarId, price: Amount) -> Result<()> {
        if !self.stars.contains_key(&id) {
            return Err(RegistryError::NotFound(id));
        }
        self.listings.insert(id, price);
        Ok(())
    }

    /// The listed price, `None` if not for sale.
    pub fn listing(&self, id: StarId) -> Option<Amount> {
        self.listings.get(&id).copied()
    }

    /// All current listings, ordered by id.
    pub fn listings(&self) -> impl Iterator<Item = (StarId, Amount)> + '_ {
        self.listings.iter().map(|(&id, &price)| (id, price))
    }

    /// All records owned by `owner`, ordered by id.
    pub fn stars_owned_by<'a>(
        &'a self,
        owner: &'a AccountId,
    ) -> impl Iterator<Item = &'a Star> + 'a {
        self.stars.values().filter(move |s| s.is_owned_by(owner))
    }

    /// Number of minted records.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether no records have been minted.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
