//! Strong type definitions for the star notary registry.
//!
//! All identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The unique identifier of a star record.
///
/// Assigned once at mint time and never reused. The registry rejects a mint
/// for an id that is already present.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StarId(pub u64);

impl StarId {
    /// Create a new StarId from a raw integer.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StarId({})", self.0)
    }
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StarId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A 32-byte opaque identity reference.
///
/// The hosting environment authenticates callers and attributes one of these
/// to every operation invocation; the registry trusts it without
/// re-verification.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// Create a new AccountId from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Generate a random AccountId (test identities).
    pub fn generate() -> Self {
        Self(rand::random())
    }

    /// The zero account (used as a sentinel in tests).
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// A non-negative payment or price amount, in the environment's smallest
/// custody unit.
///
/// Wide enough for wei-scale values. Arithmetic is checked; the registry
/// never wraps.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(pub u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a new Amount from a raw integer.
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Get the raw integer value.
    pub const fn value(&self) -> u128 {
        self.0
    }

    /// Whether this amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Saturating addition.
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_hex_roundtrip() {
        let id = AccountId::from_bytes([0x42; 32]);
        let hex = id.to_hex();
        let recovered = AccountId::from_hex(&hex).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn test_account_id_rejects_short_hex() {
        assert!(AccountId::from_hex("abcd").is_err());
    }

    #[test]
    fn test_account_id_display() {
        let id = AccountId::from_bytes([0xab; 32]);
        let display = format!("{}", id);
        assert_eq!(display, "abababababababab");
    }

    #[test]
    fn test_account_id_generate_unique() {
        assert_ne!(AccountId::generate(), AccountId::generate());
    }

    #[test]
    fn test_star_id_display() {
        let id = StarId::new(42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(format!("{:?}", id), "StarId(42)");
    }

    #[test]
    fn test_amount_checked_math() {
        let a = Amount::new(u128::MAX);
        assert_eq!(a.checked_add(Amount::new(1)), None);
        assert_eq!(a.saturating_add(Amount::new(1)), a);
        assert_eq!(Amount::ZERO.checked_sub(Amount::new(1)), None);
        assert_eq!(
            Amount::new(5).checked_sub(Amount::new(2)),
            Some(Amount::new(3))
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_account_id_hex_roundtrip(bytes in proptest::prelude::any::<[u8; 32]>()) {
            let id = AccountId::from_bytes(bytes);
            let recovered = AccountId::from_hex(&id.to_hex()).unwrap();
            proptest::prop_assert_eq!(recovered, id);
        }
    }
}
