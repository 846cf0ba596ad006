//! # Handoff Coordinator Service
//!
//! Implements [`HandoffCoordinatorApi`] over a [`LedgerGateway`].
//!
//! ## Correlation Discipline
//!
//! The correlation entry is written only after the gateway returns the
//! commit receipt, and keyed off that receipt — never off call order.
//! Concurrent initiates on the same container therefore leave the
//! reference of whichever ledger mutation actually committed last.
//!
//! ## Failure Semantics
//!
//! Ledger failures pass through unchanged. Nothing is written to the
//! correlation store on a failed submission, so callers never hold a
//! reference for a transfer that did not happen.

use crate::domain::{generate_booking_reference, CoordinatorError, CorrelationStore};
use crate::ports::inbound::{HandoffCoordinatorApi, HandoffStatusView, InitiatedHandoff};
use crate::ports::outbound::{LedgerGateway, WriteAuthority};
use async_trait::async_trait;
use cc_02_container_ledger::HandoffStatus;
use shared_types::{PartyId, TimeSource, TokenId, UnitNumber};
use std::sync::Arc;
use tracing::{debug, info};

/// Handoff Coordinator service.
pub struct HandoffCoordinatorService<G, T>
where
    G: LedgerGateway,
    T: TimeSource,
{
    /// Ledger submission client.
    gateway: Arc<G>,
    /// Lifecycle-scoped booking-reference store, injected at start.
    correlations: Arc<CorrelationStore>,
    /// Wall clock for reference timestamps.
    clock: Arc<T>,
    /// Submission credentials; `None` puts the coordinator in read-only
    /// degraded mode.
    authority: Option<WriteAuthority>,
}

impl<G, T> HandoffCoordinatorService<G, T>
where
    G: LedgerGateway,
    T: TimeSource,
{
    /// Create a coordinator.
    pub fn new(
        gateway: Arc<G>,
        correlations: Arc<CorrelationStore>,
        clock: Arc<T>,
        authority: Option<WriteAuthority>,
    ) -> Self {
        Self {
            gateway,
            correlations,
            clock,
            authority,
        }
    }

    fn require_authority(&self) -> Result<&WriteAuthority, CoordinatorError> {
        self.authority.as_ref().ok_or(CoordinatorError::Unconfigured)
    }

    async fn resolve(
        &self,
        unit_number: &str,
    ) -> Result<(UnitNumber, TokenId), CoordinatorError> {
        let unit_number = UnitNumber::parse(unit_number)?;
        let token_id = self.gateway.resolve_unit(&unit_number).await?;
        if token_id.is_zero() {
            return Err(CoordinatorError::ContainerNotFound { unit_number });
        }
        Ok((unit_number, token_id))
    }
}

#[async_trait]
impl<G, T> HandoffCoordinatorApi for HandoffCoordinatorService<G, T>
where
    G: LedgerGateway,
    T: TimeSource,
{
    async fn initiate(
        &self,
        caller: PartyId,
        unit_number: &str,
        to_facility: PartyId,
        duration_secs: u64,
        booking_reference: Option<String>,
    ) -> Result<InitiatedHandoff, CoordinatorError> {
        let authority = self.require_authority()?.clone();
        let (unit_number, token_id) = self.resolve(unit_number).await?;

        let booking_reference = booking_reference.unwrap_or_else(|| {
            generate_booking_reference(
                &unit_number,
                self.clock.now_millis(),
                &mut rand::thread_rng(),
            )
        });

        info!(%unit_number, to = %to_facility, booking_reference, "initiating handoff");
        let receipt = self
            .gateway
            .initiate(caller, token_id, to_facility, duration_secs)
            .await?;

        // Recorded only after the durable-commit acknowledgment, keyed
        // off the receipt.
        self.correlations
            .record(receipt.token_id, booking_reference.clone());
        debug!(
            submitter = %authority.submitter,
            version = receipt.version,
            "handoff initiate committed"
        );

        Ok(InitiatedHandoff {
            token_id,
            booking_reference,
        })
    }

    async fn confirm(
        &self,
        caller: PartyId,
        unit_number: &str,
        presented_reference: &str,
        location: &str,
    ) -> Result<TokenId, CoordinatorError> {
        self.require_authority()?;
        let (unit_number, token_id) = self.resolve(unit_number).await?;

        match self.correlations.reference_for(token_id) {
            Some(stored) if stored != presented_reference => {
                return Err(CoordinatorError::InvalidReference { token_id });
            }
            Some(_) => {}
            None => {
                // Correlation entry lost (e.g. restart): proceed without
                // reference validation. The ledger's `to`-address check is
                // the real authorization.
                debug!(%token_id, "no live correlation entry; skipping reference validation");
            }
        }

        info!(%unit_number, location, "confirming handoff");
        let receipt = self.gateway.confirm(caller, token_id, location).await?;
        self.correlations.clear(receipt.token_id);

        Ok(token_id)
    }

    async fn status(
        &self,
        unit_number: &str,
    ) -> Result<Option<HandoffStatusView>, CoordinatorError> {
        let (_, token_id) = self.resolve(unit_number).await?;
        let pending = self.gateway.pending_handoff(token_id).await?;

        if pending.status == HandoffStatus::None {
            return Ok(None);
        }

        Ok(Some(HandoffStatusView {
            token_id,
            from: pending.from,
            to: pending.to,
            expires: pending.expires,
            initiated_at: pending.initiated_at,
            status: pending.status,
            booking_reference: self.correlations.reference_for(token_id),
        }))
    }
}
