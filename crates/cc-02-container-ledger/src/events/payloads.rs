//! Payload structs for ledger events. External indexers subscribe to
//! these; the ledger itself keeps no event history.

use serde::{Deserialize, Serialize};
use shared_types::{PartyId, Timestamp, TokenId, UnitNumber};

/// Published after a container registration commits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRegisteredPayload {
    /// Assigned token.
    pub token_id: TokenId,
    /// ISO 6346 identifier.
    pub unit_number: UnitNumber,
    /// Owner prefix code.
    pub owner_code: String,
    /// Legal owner.
    pub owner: PartyId,
}

/// Published after an initiate commits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffInitiatedPayload {
    /// Container in transfer.
    pub token_id: TokenId,
    /// Initiating holder.
    pub from: PartyId,
    /// Facility that must confirm.
    pub to: PartyId,
    /// End of the possession window, once confirmed.
    pub expires: Timestamp,
}

/// Published after a confirm commits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossessionConfirmedPayload {
    /// Container that changed hands.
    pub token_id: TokenId,
    /// New possessor.
    pub possessor: PartyId,
    /// Free-text receiving location, audit-only.
    pub location: String,
    /// End of the possession window.
    pub expires: Timestamp,
}

/// Published when a re-initiate overwrites a still-pending slot and the
/// ledger is configured to announce discards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffDiscardedPayload {
    /// Container whose slot was overwritten.
    pub token_id: TokenId,
    /// Holder that had initiated the discarded handoff.
    pub from: PartyId,
    /// Facility that never confirmed it.
    pub to: PartyId,
    /// When the discarded handoff had been initiated.
    pub initiated_at: Timestamp,
}

/// Every event the ledger can publish.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A container registration committed.
    ContainerRegistered(ContainerRegisteredPayload),
    /// A possession transfer was initiated.
    HandoffInitiated(HandoffInitiatedPayload),
    /// A possession transfer was confirmed.
    PossessionConfirmed(PossessionConfirmedPayload),
    /// A still-pending handoff was discarded by a re-initiate.
    HandoffDiscarded(HandoffDiscardedPayload),
}
