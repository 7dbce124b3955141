//! # Star Notary Testkit
//!
//! Testing utilities for the star notary registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: registry + memory bank setups and deterministic
//!   multi-party accounts
//! - **Generators**: proptest strategies for ids, accounts, amounts, and
//!   descriptions
//!
//! ## Test Fixtures
//!
//! Quickly set up a sale scenario:
//!
//! ```rust
//! use star_notary::Amount;
//! use star_notary_testkit::fixtures::{multi_party_accounts, TestFixture};
//!
//! let mut fixture = TestFixture::new();
//! let parties = multi_party_accounts(2);
//! let star = fixture.mint_listed(parties[0], 1, Amount::new(100));
//! fixture.registry.buy(parties[1], star, Amount::new(100)).unwrap();
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use star_notary_testkit::generators::{account_id, star_id};
//!
//! proptest! {
//!     #[test]
//!     fn minted_star_has_its_minter(owner in account_id(), id in star_id()) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{multi_party_accounts, TestFixture};
