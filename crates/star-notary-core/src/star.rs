//! The star record: the tradable unit of the registry.

use serde::{Deserialize, Serialize};

use crate::types::{AccountId, StarId};

/// A uniquely identified, owned record.
///
/// Created once by mint. The description is immutable thereafter; only the
/// owner changes, through buy, transfer, or exchange. Records are never
/// destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    /// The unique record identifier.
    pub id: StarId,

    /// Human-readable description, fixed at mint time. Not required unique,
    /// may be empty.
    pub description: String,

    /// The current owner.
    pub owner: AccountId,
}

impl Star {
    /// Create a new star record owned by `owner`.
    pub fn new(id: StarId, description: impl Into<String>, owner: AccountId) -> Self {
        Self {
            id,
            description: description.into(),
            owner,
        }
    }

    /// Whether `account` is the current owner.
    pub fn is_owned_by(&self, account: &AccountId) -> bool {
        &self.owner == account
    }
}
