//! The Registry: the authoritative rule-enforcer for star records.
//!
//! All mutating operations take `&mut self`: the hosting environment
//! executes operations as serialized atomic units, and the exclusive borrow
//! encodes that contract in the type system. Every operation either fully
//! completes or fails with no state mutation. Mutations follow a
//! check-then-commit shape: every fallible step, including the settlement
//! payout, runs before the first ledger write.

use star_notary_core::{AccountId, Amount, RegistryError, Star, StarId};

use crate::ledger::Ledger;
use crate::settlement::Settlement;
use crate::Result;

/// Configuration for a registry instance.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Collection name, fixed at construction.
    pub name: String,
    /// Collection symbol, fixed at construction.
    pub symbol: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: "UStarTokens".to_string(),
            symbol: "UST".to_string(),
        }
    }
}

/// The star notary registry.
///
/// Owns the record and listing tables and enforces authorization and
/// payment rules. The settlement collaborator pays sellers out of registry
/// custody; the environment has already escrowed the attached payment
/// before an operation runs.
pub struct Registry<S: Settlement> {
    config: RegistryConfig,
    ledger: Ledger,
    settlement: S,
    /// Surplus payments kept by the registry: a buyer who overpays is not
    /// refunded, and the seller receives exactly the listed price.
    retained: Amount,
}

impl<S: Settlement> Registry<S> {
    /// Create a registry with an empty ledger and default configuration.
    pub fn new(settlement: S) -> Self {
        Self::with_ledger(Ledger::new(), settlement, RegistryConfig::default())
    }

    /// Create a registry from an existing ledger.
    pub fn with_ledger(ledger: Ledger, settlement: S, config: RegistryConfig) -> Self {
        Self {
            config,
            ledger,
            settlement,
            retained: Amount::ZERO,
        }
    }

    /// Collection name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Collection symbol.
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// The underlying ledger, read-only.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The settlement collaborator, read-only.
    pub fn settlement(&self) -> &S {
        &self.settlement
    }

    /// Total surplus payment retained across all sales.
    pub fn retained(&self) -> Amount {
        self.retained
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutating Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Mint a new star owned by `caller`.
    ///
    /// Anyone may mint; no payment is required. Fails with
    /// [`RegistryError::DuplicateId`] if the id is already minted.
    pub fn mint(
        &mut self,
        caller: AccountId,
        id: StarId,
        description: impl Into<String>,
    ) -> Result<()> {
        self.ledger.mint(Star::new(id, description, caller))
    }

    /// Put a star up for sale at a fixed price.
    ///
    /// Only the current owner may list. Overwrites any existing listing;
    /// a zero price is a valid (free) listing.
    pub fn list_for_sale(&mut self, caller: AccountId, id: StarId, price: Amount) -> Result<()> {
        let star = self.ledger.star(id)?;
        if !star.is_owned_by(&caller) {
            return Err(RegistryError::NotOwner { star: id, caller });
        }
        self.ledger.list(id, price)
    }

    /// Buy a listed star.
    ///
    /// The seller is credited exactly the listed price; any surplus in
    /// `payment` is retained by the registry, not refunded. On success the
    /// listing is removed and ownership moves to the caller. If the payout
    /// fails, nothing is mutated.
    pub fn buy(&mut self, caller: AccountId, id: StarId, payment: Amount) -> Result<()> {
        let seller = self.ledger.owner_of(id)?;
        let price = self
            .ledger
            .listing(id)
            .ok_or(RegistryError::NotForSale(id))?;

        if payment < price {
            return Err(RegistryError::InsufficientPayment {
                star: id,
                required: price,
                offered: payment,
            });
        }
        if seller == caller {
            return Err(RegistryError::SelfPurchase { star: id, caller });
        }

        // Last fallible step; the ledger commit below cannot fail.
        if let Err(e) = self.settlement.credit(&seller, price) {
            tracing::warn!("payout for star {} aborted the sale: {}", id, e);
            return Err(e.into());
        }

        let surplus = payment.checked_sub(price).unwrap_or(Amount::ZERO);
        self.retained = self.retained.saturating_add(surplus);
        self.ledger.set_owner(id, caller)?;

        tracing::debug!("star {} sold to {} for {}", id, caller, price);
        Ok(())
    }

    /// Swap the owners of two stars.
    ///
    /// The caller must own at least one of the two. No payment is involved.
    /// Listings on both stars are cleared: a price set by a previous owner
    /// must not survive the swap. Exchanging a star with itself is a no-op.
    pub fn exchange_stars(&mut self, caller: AccountId, a: StarId, b: StarId) -> Result<()> {
        let owner_a = self.ledger.owner_of(a)?;
        let owner_b = self.ledger.owner_of(b)?;

        if owner_a != caller && owner_b != caller {
            return Err(RegistryError::NotOwner { star: a, caller });
        }
        if a == b {
            return Ok(());
        }

        self.ledger.set_owner(a, owner_b)?;
        self.ledger.set_owner(b, owner_a)?;
        Ok(())
    }

    /// Transfer a star to another identity unconditionally.
    ///
    /// Only the current owner may transfer. No payment, no price check;
    /// any listing is cleared. The recipient may be any identity.
    pub fn transfer_star(
        &mut self,
        caller: AccountId,
        recipient: AccountId,
        id: StarId,
    ) -> Result<()> {
        let owner = self.ledger.owner_of(id)?;
        if owner != caller {
            return Err(RegistryError::NotOwner { star: id, caller });
        }
        self.ledger.set_owner(id, recipient)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Look up the description of a star.
    pub fn look_up(&self, id: StarId) -> Result<&str> {
        Ok(self.ledger.star(id)?.description.as_str())
    }

    /// Current owner of a star.
    pub fn owner_of(&self, id: StarId) -> Result<AccountId> {
        self.ledger.owner_of(id)
    }

    /// Listed price of a star. Fails with [`RegistryError::NotForSale`] if
    /// the star is minted but unlisted.
    pub fn price_of(&self, id: StarId) -> Result<Amount> {
        self.ledger.star(id)?;
        self.ledger
            .listing(id)
            .ok_or(RegistryError::NotForSale(id))
    }

    /// Full record for a star.
    pub fn star(&self, id: StarId) -> Result<&Star> {
        self.ledger.star(id)
    }

    /// All stars owned by an account, ordered by id.
    pub fn stars_of<'a>(&'a self, owner: &'a AccountId) -> impl Iterator<Item = &'a Star> + 'a {
        self.ledger.stars_owned_by(owner)
    }

    /// All current listings, ordered by id.
    pub fn for_sale(&self) -> impl Iterator<Item = (StarId, Amount)> + '_ {
        self.ledger.listings()
    }

    /// Number of minted stars.
    pub fn minted(&self) -> usize {
        self.ledger.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settlement::MemoryBank;

    fn account(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    fn registry() -> Registry<MemoryBank> {
        Registry::new(MemoryBank::new())
    }

    #[test]
    fn test_default_name_and_symbol() {
        let registry = registry();
        assert_eq!(registry.name(), "UStarTokens");
        assert_eq!(registry.symbol(), "UST");
    }

    #[test]
    fn test_price_of_distinguishes_unminted_from_unlisted() {
        let mut registry = registry();
        let id = StarId::new(1);

        assert_eq!(
            registry.price_of(id).unwrap_err(),
            RegistryError::NotFound(id)
        );

        registry.mint(account(1), id, "star").unwrap();
        assert_eq!(
            registry.price_of(id).unwrap_err(),
            RegistryError::NotForSale(id)
        );
    }

    #[test]
    fn test_exchange_with_self_is_noop() {
        let mut registry = registry();
        let owner = account(1);
        let id = StarId::new(1);
        registry.mint(owner, id, "star").unwrap();
        registry.list_for_sale(owner, id, Amount::new(5)).unwrap();

        registry.exchange_stars(owner, id, id).unwrap();

        assert_eq!(registry.owner_of(id).unwrap(), owner);
        // The no-op leaves the listing in place.
        assert_eq!(registry.price_of(id).unwrap(), Amount::new(5));
    }

    #[test]
    fn test_exchange_with_self_still_checks_ownership() {
        let mut registry = registry();
        let id = StarId::new(1);
        registry.mint(account(1), id, "star").unwrap();

        let err = registry.exchange_stars(account(2), id, id).unwrap_err();
        assert!(matches!(err, RegistryError::NotOwner { .. }));
    }

    #[test]
    fn test_buy_retains_surplus() {
        let mut registry = registry();
        let seller = account(1);
        let buyer = account(2);
        let id = StarId::new(1);

        registry.mint(seller, id, "star").unwrap();
        registry.list_for_sale(seller, id, Amount::new(100)).unwrap();
        registry.buy(buyer, id, Amount::new(500)).unwrap();

        assert_eq!(registry.retained(), Amount::new(400));
        assert_eq!(registry.settlement().balance_of(&seller), Amount::new(100));
    }
}
