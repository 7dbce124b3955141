//! # Star Notary Core
//!
//! Pure primitives for the star notary registry: identifiers, amounts, the
//! star record, and the operation error vocabulary.
//!
//! This crate contains no I/O and no storage. It is pure data.
//!
//! ## Key Types
//!
//! - [`StarId`] - Unique record identifier, assigned at mint time
//! - [`AccountId`] - Opaque authenticated caller/owner identity
//! - [`Amount`] - Non-negative payment/price unit with checked arithmetic
//! - [`Star`] - The tradable record: id, description, owner
//! - [`RegistryError`] - All ways a registry operation can fail

pub mod error;
pub mod star;
pub mod types;

pub use error::{RegistryError, SettlementError};
pub use star::Star;
pub use types::{AccountId, Amount, StarId};
