//! # Inbound Port
//!
//! API trait defining what the Container Ledger can do.

use crate::domain::{Container, LedgerError, PendingHandoff, PossessionInfo};
use crate::ports::outbound::CommitReceipt;
use async_trait::async_trait;
use shared_types::{PartyId, TokenId, UnitNumber};

/// Container Ledger API - inbound port.
///
/// Write operations resolve only after the substrate acknowledges a
/// durable commit; that wait is the sole suspension point in the system.
#[async_trait]
pub trait ContainerLedgerApi: Send + Sync {
    /// Register a new container for `owner`.
    ///
    /// Requires registrar authority. Fails with a conflict if the unit
    /// number already exists. Returns the assigned token.
    #[allow(clippy::too_many_arguments)]
    async fn register_container(
        &self,
        caller: PartyId,
        owner: PartyId,
        unit_number: UnitNumber,
        iso_type: &str,
        owner_code: &str,
        tare_weight: u64,
        max_gross_weight: u64,
    ) -> Result<TokenId, LedgerError>;

    /// Fetch the full container record.
    async fn get_container(&self, token_id: TokenId) -> Result<Container, LedgerError>;

    /// Resolve a unit number to its token. Absence is signaled by the
    /// `TokenId::ZERO` sentinel, not an error.
    async fn token_id_by_unit_number(
        &self,
        unit_number: &UnitNumber,
    ) -> Result<TokenId, LedgerError>;

    /// Read `(owner, possessor-or-none, possession_expires)`.
    async fn possession_info(&self, token_id: TokenId) -> Result<PossessionInfo, LedgerError>;

    /// Initiate a possession transfer to `to_facility`.
    ///
    /// The caller must be the current holder; the destination must be a
    /// registered, active facility; `duration_secs` must meet the
    /// configured minimum. Overwrites the container's single pending slot,
    /// silently discarding any prior unconfirmed or confirmed handoff
    /// (last-initiate-wins).
    async fn initiate_possession_transfer(
        &self,
        caller: PartyId,
        token_id: TokenId,
        to_facility: PartyId,
        duration_secs: u64,
    ) -> Result<CommitReceipt, LedgerError>;

    /// Confirm a pending transfer.
    ///
    /// The caller must equal the slot's `to`; the slot must be `Pending`.
    /// `location` is an opaque audit annotation carried on the emitted
    /// event, not validated here.
    async fn confirm_possession(
        &self,
        caller: PartyId,
        token_id: TokenId,
        location: &str,
    ) -> Result<CommitReceipt, LedgerError>;

    /// Who physically holds the container now: possessor if set, else
    /// owner.
    async fn user_of(&self, token_id: TokenId) -> Result<PartyId, LedgerError>;

    /// Legal owner; unaffected by any handoff.
    async fn owner_of(&self, token_id: TokenId) -> Result<PartyId, LedgerError>;

    /// The container's pending-handoff slot as last written.
    async fn pending_handoff(&self, token_id: TokenId) -> Result<PendingHandoff, LedgerError>;

    /// Number of containers ever registered.
    async fn total_containers(&self) -> Result<u64, LedgerError>;
}
