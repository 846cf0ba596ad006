//! # Identity Types
//!
//! Opaque identities for parties (owners, facilities, administrators) and
//! ledger-assigned container tokens.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a party: a container owner, a facility, or the
/// platform administrator.
///
/// 20 bytes, equality-comparable and hashable. Nothing in this workspace
/// derives meaning from the bytes; a substrate adapter is free to map them
/// to whatever key scheme it uses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PartyId([u8; 20]);

impl PartyId {
    /// The all-zero identity. Used as the "nobody" default inside
    /// pending-handoff slots before the first initiate.
    pub const ZERO: PartyId = PartyId([0u8; 20]);

    /// Wrap raw identity bytes.
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// True for the all-zero "nobody" identity.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw)
            .map_err(|_| ValidationError::MalformedPartyId(s.to_string()))?;
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| ValidationError::MalformedPartyId(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; 20]> for PartyId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartyId({self})")
    }
}

/// Ledger-assigned container token.
///
/// Assigned by a strictly increasing counter starting at 1 and never
/// reused. `TokenId::ZERO` is reserved as the "not found" sentinel
/// returned by unit-number resolution.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct TokenId(u64);

impl TokenId {
    /// The "not found" sentinel.
    pub const ZERO: TokenId = TokenId(0);

    /// Wrap a raw token value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw token value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// True for the "not found" sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.0)
    }
}
