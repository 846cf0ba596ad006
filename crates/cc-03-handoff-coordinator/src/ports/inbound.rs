//! # Inbound Port
//!
//! API trait defining what the Handoff Coordinator can do. All
//! operations are keyed by unit number, the identifier humans actually
//! handle.

use crate::domain::CoordinatorError;
use async_trait::async_trait;
use cc_02_container_ledger::HandoffStatus;
use serde::{Deserialize, Serialize};
use shared_types::{PartyId, Timestamp, TokenId};

/// Result of a committed initiate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiatedHandoff {
    /// Container the handoff applies to.
    pub token_id: TokenId,
    /// The reference to quote on confirmation. Never returned for a
    /// transfer the ledger rejected.
    pub booking_reference: String,
}

/// The pending-handoff slot enriched with the live booking reference,
/// when one is still held. The reference is best-effort: omitted, not an
/// error, if the correlation entry is gone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffStatusView {
    /// Container the slot belongs to.
    pub token_id: TokenId,
    /// Initiating holder.
    pub from: PartyId,
    /// Facility that must confirm.
    pub to: PartyId,
    /// End of the possession window.
    pub expires: Timestamp,
    /// When the transfer was initiated.
    pub initiated_at: Timestamp,
    /// Slot state.
    pub status: HandoffStatus,
    /// Live booking reference, if the correlation entry survives.
    pub booking_reference: Option<String>,
}

/// Handoff Coordinator API - inbound port.
#[async_trait]
pub trait HandoffCoordinatorApi: Send + Sync {
    /// Initiate a possession transfer for `unit_number`.
    ///
    /// Derives a booking reference when none is supplied. The correlation
    /// entry is recorded only after the ledger acknowledges the commit,
    /// so callers never receive a reference for a rejected transfer.
    async fn initiate(
        &self,
        caller: PartyId,
        unit_number: &str,
        to_facility: PartyId,
        duration_secs: u64,
        booking_reference: Option<String>,
    ) -> Result<InitiatedHandoff, CoordinatorError>;

    /// Confirm a pending transfer.
    ///
    /// When a correlation entry exists for the container, the presented
    /// reference must match it exactly (case-sensitive). When none exists
    /// (e.g. the process restarted), confirmation proceeds without
    /// reference validation: availability over strict correlation.
    async fn confirm(
        &self,
        caller: PartyId,
        unit_number: &str,
        presented_reference: &str,
        location: &str,
    ) -> Result<TokenId, CoordinatorError>;

    /// The pending-handoff slot for `unit_number`, or `None` when no
    /// handoff was ever initiated.
    async fn status(&self, unit_number: &str)
        -> Result<Option<HandoffStatusView>, CoordinatorError>;
}
