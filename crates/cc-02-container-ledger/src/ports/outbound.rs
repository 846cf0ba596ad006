//! # Outbound Ports
//!
//! Traits for external dependencies: the transactional commit store (the
//! ledger substrate), the facility directory, and the event sink.

use crate::domain::{Container, LedgerError};
use crate::events::LedgerEvent;
use async_trait::async_trait;
use shared_types::{PartyId, Timestamp, TokenId, UnitNumber};
use std::collections::HashSet;

/// A container record paired with the substrate version it was read at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionedContainer {
    /// Substrate version of this record.
    pub version: u64,
    /// The record itself.
    pub container: Container,
}

/// Durability acknowledgment for a committed mutation.
///
/// A receipt is only ever produced after the substrate reports the
/// mutation durable; holding one means the write happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Container the mutation applied to.
    pub token_id: TokenId,
    /// Record version after the commit.
    pub version: u64,
}

/// What a registration writes. The store assigns the token atomically
/// with the unit-number uniqueness check.
#[derive(Clone, Debug)]
pub struct RegistrationRecord {
    /// ISO 6346 identifier; must be unique.
    pub unit_number: UnitNumber,
    /// ISO 6346 size/type code.
    pub iso_type: String,
    /// Owner prefix code.
    pub owner_code: String,
    /// Empty weight in kg.
    pub tare_weight: u64,
    /// Maximum gross weight in kg.
    pub max_gross_weight: u64,
    /// Registration instant.
    pub registered_at: Timestamp,
    /// Legal owner. Immutable afterwards.
    pub owner: PartyId,
}

/// Transactional store - outbound port.
///
/// The substrate behind this trait may be a chain client, an embedded
/// database with optimistic concurrency, or an in-memory map for tests;
/// the ledger rules never change. Two guarantees are required:
///
/// 1. `apply_if_current` is a single indivisible step relative to other
///    mutations on the same container (per-container serialization).
/// 2. A returned [`CommitReceipt`] means the mutation is durable.
#[async_trait]
pub trait CommitStore: Send + Sync {
    /// Atomically check unit-number uniqueness, assign the next token
    /// (count + 1), and persist a fresh record with no possessor and an
    /// untouched pending slot.
    async fn register(&self, record: RegistrationRecord) -> Result<CommitReceipt, LedgerError>;

    /// Read a container with its current version.
    async fn load(&self, token_id: TokenId) -> Result<Option<VersionedContainer>, LedgerError>;

    /// Resolve a unit number; `TokenId::ZERO` when absent.
    async fn resolve_unit(&self, unit_number: &UnitNumber) -> Result<TokenId, LedgerError>;

    /// Replace the record iff its version still equals `expected_version`.
    /// A lost race fails with `CommitConflict` and changes nothing.
    async fn apply_if_current(
        &self,
        token_id: TokenId,
        expected_version: u64,
        container: Container,
    ) -> Result<CommitReceipt, LedgerError>;

    /// Number of containers ever registered.
    async fn count(&self) -> Result<u64, LedgerError>;
}

/// Facility directory - outbound port.
///
/// The ledger consults it when validating transfer destinations.
pub trait FacilityDirectory: Send + Sync {
    /// True iff `address` is registered AND active.
    fn is_active_facility(&self, address: PartyId) -> bool;

    /// True iff `address` was ever registered, regardless of the active
    /// flag.
    fn is_registered_facility(&self, address: PartyId) -> bool;
}

/// Event sink - outbound port.
///
/// Observers only; sinks never feed back into authoritative state.
pub trait EventSink: Send + Sync {
    /// Publish a ledger event.
    fn publish(&self, event: LedgerEvent);
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Fixed facility directory for tests.
#[derive(Clone, Default)]
pub struct StaticFacilityDirectory {
    /// Registered and active.
    pub active: HashSet<PartyId>,
    /// Registered but deactivated.
    pub inactive: HashSet<PartyId>,
}

impl StaticFacilityDirectory {
    /// Directory where every listed address is active.
    pub fn with_active(addresses: &[PartyId]) -> Self {
        Self {
            active: addresses.iter().copied().collect(),
            inactive: HashSet::new(),
        }
    }

    /// Move an address to the deactivated set.
    pub fn deactivate(&mut self, address: PartyId) {
        if self.active.remove(&address) {
            self.inactive.insert(address);
        }
    }
}

impl FacilityDirectory for StaticFacilityDirectory {
    fn is_active_facility(&self, address: PartyId) -> bool {
        self.active.contains(&address)
    }

    fn is_registered_facility(&self, address: PartyId) -> bool {
        self.active.contains(&address) || self.inactive.contains(&address)
    }
}
