//! # Direct Ledger Gateway
//!
//! [`LedgerGateway`] over an in-process Container Ledger service. The
//! ledger's own `apply_if_current` commit is the durability boundary, so
//! the receipt passes straight through.

use crate::ports::outbound::LedgerGateway;
use async_trait::async_trait;
use cc_02_container_ledger::{CommitReceipt, ContainerLedgerApi, LedgerError, PendingHandoff};
use shared_types::{PartyId, TokenId, UnitNumber};
use std::sync::Arc;
use tracing::debug;

/// In-process gateway to the Container Ledger.
pub struct DirectLedgerGateway<L: ContainerLedgerApi> {
    ledger: Arc<L>,
}

impl<L: ContainerLedgerApi> DirectLedgerGateway<L> {
    /// Wrap a ledger handle.
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl<L: ContainerLedgerApi> LedgerGateway for DirectLedgerGateway<L> {
    async fn resolve_unit(&self, unit_number: &UnitNumber) -> Result<TokenId, LedgerError> {
        self.ledger.token_id_by_unit_number(unit_number).await
    }

    async fn initiate(
        &self,
        caller: PartyId,
        token_id: TokenId,
        to_facility: PartyId,
        duration_secs: u64,
    ) -> Result<CommitReceipt, LedgerError> {
        debug!(%token_id, to = %to_facility, "submitting initiate to ledger");
        self.ledger
            .initiate_possession_transfer(caller, token_id, to_facility, duration_secs)
            .await
    }

    async fn confirm(
        &self,
        caller: PartyId,
        token_id: TokenId,
        location: &str,
    ) -> Result<CommitReceipt, LedgerError> {
        debug!(%token_id, "submitting confirm to ledger");
        self.ledger.confirm_possession(caller, token_id, location).await
    }

    async fn pending_handoff(&self, token_id: TokenId) -> Result<PendingHandoff, LedgerError> {
        self.ledger.pending_handoff(token_id).await
    }
}
