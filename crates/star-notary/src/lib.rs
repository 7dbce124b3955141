//! # Star Notary
//!
//! A single registry for minting, listing, buying, exchanging, and
//! transferring uniquely identified star records.
//!
//! ## Overview
//!
//! The [`Registry`] owns the record and listing tables and enforces every
//! rule:
//!
//! - **Mint**: anyone may create a record with a fresh id; ids are never
//!   reused and records are never destroyed.
//! - **List**: only the owner may put a record up for sale at a fixed price.
//! - **Buy**: pays the seller exactly the listed price out of escrowed
//!   custody, retains any surplus, and moves ownership to the buyer.
//! - **Exchange**: an owner of either side swaps the owners of two records.
//! - **Transfer**: the owner gifts a record to any identity.
//!
//! Caller identity and attached payment are supplied per call by the
//! hosting environment, which also serializes operations; each operation
//! either fully completes or fails with no state change.
//!
//! ## Usage
//!
//! ```rust
//! use star_notary::{MemoryBank, Registry};
//! use star_notary::core::{AccountId, Amount, StarId};
//!
//! let mut registry = Registry::new(MemoryBank::new());
//!
//! let alice = AccountId::generate();
//! let bob = AccountId::generate();
//!
//! registry.mint(alice, StarId::new(1), "Awesome Star!").unwrap();
//! registry.list_for_sale(alice, StarId::new(1), Amount::new(100)).unwrap();
//! registry.buy(bob, StarId::new(1), Amount::new(100)).unwrap();
//!
//! assert_eq!(registry.owner_of(StarId::new(1)).unwrap(), bob);
//! assert_eq!(registry.settlement().balance_of(&alice), Amount::new(100));
//! ```

pub mod ledger;
pub mod registry;
pub mod settlement;

// Re-export the core primitives crate
pub use star_notary_core as core;

// Re-export main types for convenience
pub use ledger::Ledger;
pub use registry::{Registry, RegistryConfig};
pub use settlement::{MemoryBank, Settlement};

// Re-export commonly used core types
pub use star_notary_core::{AccountId, Amount, RegistryError, SettlementError, Star, StarId};

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
