//! # Outbound Ports
//!
//! The ledger submission client the coordinator orchestrates. Opaque by
//! design: it commits mutations transactionally and reports the durable
//! commit; whether a chain client, a database, or an in-process service
//! sits behind it is invisible here.

use async_trait::async_trait;
use cc_02_container_ledger::{CommitReceipt, LedgerError, PendingHandoff};
use shared_types::{PartyId, TokenId, UnitNumber};

/// Ledger submission client - outbound port.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Resolve a unit number; `TokenId::ZERO` when unregistered.
    async fn resolve_unit(&self, unit_number: &UnitNumber) -> Result<TokenId, LedgerError>;

    /// Submit an initiate and wait for the durable-commit acknowledgment.
    async fn initiate(
        &self,
        caller: PartyId,
        token_id: TokenId,
        to_facility: PartyId,
        duration_secs: u64,
    ) -> Result<CommitReceipt, LedgerError>;

    /// Submit a confirm and wait for the durable-commit acknowledgment.
    async fn confirm(
        &self,
        caller: PartyId,
        token_id: TokenId,
        location: &str,
    ) -> Result<CommitReceipt, LedgerError>;

    /// Read the pending-handoff slot.
    async fn pending_handoff(&self, token_id: TokenId) -> Result<PendingHandoff, LedgerError>;
}

/// Credentials under which the coordinator submits ledger mutations.
///
/// Constructed by the composition root when submission is configured.
/// A coordinator without one is read-only: `status` works, writes fail
/// fast.
#[derive(Clone, Debug)]
pub struct WriteAuthority {
    /// Identity the submissions are attributed to, for audit logs.
    pub submitter: PartyId,
}

impl WriteAuthority {
    /// Wrap a submitter identity.
    pub fn new(submitter: PartyId) -> Self {
        Self { submitter }
    }
}
