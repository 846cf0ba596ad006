//! # Domain Entities
//!
//! The container record, its single pending-handoff slot, and the handoff
//! state machine.

use serde::{Deserialize, Serialize};
use shared_types::{PartyId, Timestamp, TokenId, UnitNumber};

/// Handoff state machine for the single per-container slot.
///
/// `initiate` may fire from any state (last-initiate-wins overwrite);
/// `confirm` only advances a `Pending` slot. There is no path back to
/// `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandoffStatus {
    /// No handoff was ever initiated for this container.
    #[default]
    None,
    /// Initiated by the current holder, awaiting the receiving facility.
    Pending,
    /// Confirmed by the receiving facility; kept as a historical marker
    /// until the next initiate overwrites the slot.
    Confirmed,
}

impl HandoffStatus {
    /// Check if a transition is valid.
    pub fn can_transition_to(&self, next: HandoffStatus) -> bool {
        match (self, next) {
            // A new initiate overwrites the slot regardless of its state.
            (_, Self::Pending) => true,
            (Self::Pending, Self::Confirmed) => true,
            _ => false,
        }
    }

    /// True while a handoff awaits confirmation.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// The single in-flight (or most recently resolved) transfer record per
/// container. Overwritten whole by each new initiate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingHandoff {
    /// Holder who initiated the transfer.
    pub from: PartyId,
    /// Facility that must confirm.
    pub to: PartyId,
    /// When the possession window ends, once confirmed.
    pub expires: Timestamp,
    /// When the transfer was initiated.
    pub initiated_at: Timestamp,
    /// Slot state.
    pub status: HandoffStatus,
}

impl PendingHandoff {
    /// Build a fresh `Pending` slot.
    pub fn pending(from: PartyId, to: PartyId, expires: Timestamp, initiated_at: Timestamp) -> Self {
        Self {
            from,
            to,
            expires,
            initiated_at,
            status: HandoffStatus::Pending,
        }
    }

    /// True once the possession window has passed.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires
    }
}

/// Authoritative per-container record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Ledger-assigned token, strictly increasing from 1, never reused.
    pub token_id: TokenId,
    /// ISO 6346 identifier, unique across the ledger.
    pub unit_number: UnitNumber,
    /// ISO 6346 size/type code (e.g. `22G1`).
    pub iso_type: String,
    /// Owner prefix code (e.g. `MSK`).
    pub owner_code: String,
    /// Empty weight in kg.
    pub tare_weight: u64,
    /// Maximum gross weight in kg.
    pub max_gross_weight: u64,
    /// When the container was registered.
    pub registered_at: Timestamp,
    /// Legal owner. Immutable after registration.
    pub owner: PartyId,
    /// Facility currently in physical custody, if any.
    pub possessor: Option<PartyId>,
    /// End of the possession window. Meaningful only while `possessor`
    /// is set.
    pub possession_expires: Timestamp,
    /// The single pending-handoff slot.
    pub pending: PendingHandoff,
}

impl Container {
    /// The identity entitled to initiate a transfer: the possessor if one
    /// is set, otherwise the legal owner. This single rule is what permits
    /// a multi-hop custody chain without the owner mediating every hop.
    pub fn holder(&self) -> PartyId {
        self.possessor.unwrap_or(self.owner)
    }
}

/// Read view answering "who owns / who holds / until when".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossessionInfo {
    /// Legal owner.
    pub owner: PartyId,
    /// Current possessor, if any.
    pub possessor: Option<PartyId>,
    /// End of the possession window while a possessor is set.
    pub possession_expires: Timestamp,
}

/// Ledger policy knobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Minimum handoff duration accepted by initiate.
    pub min_handoff_duration_secs: u64,
    /// Treat a confirm after `pending.expires` as a hard failure. The
    /// reference behavior leaves the window open, so this defaults off.
    pub enforce_expiry_on_confirm: bool,
    /// Publish a `HandoffDiscarded` event when a re-initiate overwrites a
    /// still-pending slot. Off by default; auditors that need visibility
    /// into never-confirmed handoffs opt in.
    pub announce_discarded_handoffs: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            min_handoff_duration_secs: 3600,
            enforce_expiry_on_confirm: false,
            announce_discarded_handoffs: false,
        }
    }
}
