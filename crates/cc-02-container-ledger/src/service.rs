//! # Container Ledger Service
//!
//! Implements [`ContainerLedgerApi`] over the outbound ports.
//!
//! ## Commit Discipline
//!
//! Every mutation is a read-modify-write: load the versioned record,
//! validate the invariants against it, then `apply_if_current` at the
//! version the decision was based on. A lost race surfaces as the
//! retryable `CommitConflict`; the caller re-reads and re-validates, so
//! no decision ever rides on stale state.
//!
//! ## Event Ordering
//!
//! Events are published only after the store acknowledges the commit;
//! observers never see a handoff that did not happen.

use crate::domain::{
    invariant_confirm_addressee, invariant_confirmable, invariant_destination_active,
    invariant_duration_at_least, invariant_holder_initiates, invariant_within_expiry, Container,
    HandoffStatus, LedgerConfig, LedgerError, PendingHandoff, PossessionInfo,
};
use crate::events::{
    ContainerRegisteredPayload, HandoffDiscardedPayload, HandoffInitiatedPayload, LedgerEvent,
    PossessionConfirmedPayload,
};
use crate::ports::inbound::ContainerLedgerApi;
use crate::ports::outbound::{
    CommitReceipt, CommitStore, EventSink, FacilityDirectory, RegistrationRecord,
    VersionedContainer,
};
use async_trait::async_trait;
use shared_types::{PartyId, TimeSource, TokenId, UnitNumber};
use std::sync::Arc;
use tracing::{debug, info};

/// Container Ledger service.
///
/// ## Dependencies
///
/// - `S: CommitStore` - the transactional substrate
/// - `D: FacilityDirectory` - destination validation
/// - `E: EventSink` - committed-state observers
/// - `T: TimeSource` - wall clock for expiry windows
pub struct ContainerLedgerService<S, D, E, T>
where
    S: CommitStore,
    D: FacilityDirectory,
    E: EventSink,
    T: TimeSource,
{
    /// Identity allowed to register containers.
    registrar: PartyId,
    /// Policy knobs.
    config: LedgerConfig,
    /// Transactional substrate.
    store: Arc<S>,
    /// Facility directory.
    facilities: Arc<D>,
    /// Event observers.
    events: Arc<E>,
    /// Wall clock.
    clock: Arc<T>,
}

impl<S, D, E, T> ContainerLedgerService<S, D, E, T>
where
    S: CommitStore,
    D: FacilityDirectory,
    E: EventSink,
    T: TimeSource,
{
    /// Create a ledger service.
    pub fn new(
        registrar: PartyId,
        config: LedgerConfig,
        store: Arc<S>,
        facilities: Arc<D>,
        events: Arc<E>,
        clock: Arc<T>,
    ) -> Self {
        Self {
            registrar,
            config,
            store,
            facilities,
            events,
            clock,
        }
    }

    async fn load_required(&self, token_id: TokenId) -> Result<VersionedContainer, LedgerError> {
        self.store
            .load(token_id)
            .await?
            .ok_or(LedgerError::ContainerNotFound { token_id })
    }
}

#[async_trait]
impl<S, D, E, T> ContainerLedgerApi for ContainerLedgerService<S, D, E, T>
where
    S: CommitStore,
    D: FacilityDirectory,
    E: EventSink,
    T: TimeSource,
{
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
    ) -> Result<TokenId, LedgerError> {
        if caller != self.registrar {
            return Err(LedgerError::Unauthorized { caller });
        }

        let record = RegistrationRecord {
            unit_number: unit_number.clone(),
            iso_type: iso_type.to_string(),
            owner_code: owner_code.to_string(),
            tare_weight,
            max_gross_weight,
            registered_at: self.clock.now(),
            owner,
        };
        let receipt = self.store.register(record).await?;

        self.events
            .publish(LedgerEvent::ContainerRegistered(ContainerRegisteredPayload {
                token_id: receipt.token_id,
                unit_number: unit_number.clone(),
                owner_code: owner_code.to_string(),
                owner,
            }));
        info!(token_id = %receipt.token_id, %unit_number, %owner, "container registered");

        Ok(receipt.token_id)
    }

    async fn get_container(&self, token_id: TokenId) -> Result<Container, LedgerError> {
        Ok(self.load_required(token_id).await?.container)
    }

    async fn token_id_by_unit_number(
        &self,
        unit_number: &UnitNumber,
    ) -> Result<TokenId, LedgerError> {
        self.store.resolve_unit(unit_number).await
    }

    async fn possession_info(&self, token_id: TokenId) -> Result<PossessionInfo, LedgerError> {
        let container = self.load_required(token_id).await?.container;
        Ok(PossessionInfo {
            owner: container.owner,
            possessor: container.possessor,
            possession_expires: container.possession_expires,
        })
    }

    async fn initiate_possession_transfer(
        &self,
        caller: PartyId,
        token_id: TokenId,
        to_facility: PartyId,
        duration_secs: u64,
    ) -> Result<CommitReceipt, LedgerError> {
        let versioned = self.load_required(token_id).await?;
        let container = versioned.container;

        invariant_holder_initiates(&container, caller)?;
        invariant_destination_active(
            to_facility,
            self.facilities.is_active_facility(to_facility),
        )?;
        invariant_duration_at_least(duration_secs, self.config.min_handoff_duration_secs)?;

        let now = self.clock.now();
        let expires = now.saturating_add(duration_secs);

        // Last-initiate-wins: the slot is overwritten whole. A discarded
        // still-pending handoff is only announced when configured.
        let discarded = container
            .pending
            .status
            .is_pending()
            .then(|| container.pending.clone());

        let mut next = container;
        next.pending = PendingHandoff::pending(caller, to_facility, expires, now);

        let receipt = self
            .store
            .apply_if_current(token_id, versioned.version, next)
            .await?;

        if self.config.announce_discarded_handoffs {
            if let Some(previous) = discarded {
                self.events
                    .publish(LedgerEvent::HandoffDiscarded(HandoffDiscardedPayload {
                        token_id,
                        from: previous.from,
                        to: previous.to,
                        initiated_at: previous.initiated_at,
                    }));
            }
        }
        self.events
            .publish(LedgerEvent::HandoffInitiated(HandoffInitiatedPayload {
                token_id,
                from: caller,
                to: to_facility,
                expires,
            }));
        info!(%token_id, from = %caller, to = %to_facility, expires, "possession transfer initiated");

        Ok(receipt)
    }

    async fn confirm_possession(
        &self,
        caller: PartyId,
        token_id: TokenId,
        location: &str,
    ) -> Result<CommitReceipt, LedgerError> {
        let versioned = self.load_required(token_id).await?;
        let container = versioned.container;

        invariant_confirm_addressee(&container.pending, caller)?;
        invariant_confirmable(&container.pending, token_id)?;

        let now = self.clock.now();
        if self.config.enforce_expiry_on_confirm {
            invariant_within_expiry(&container.pending, token_id, now)?;
        } else if container.pending.is_expired(now) {
            // Reference behavior: the window stays open. Worth a trace.
            debug!(%token_id, expired_at = container.pending.expires, now, "confirming past expiry");
        }

        let expires = container.pending.expires;
        let mut next = container;
        next.possessor = Some(caller);
        next.possession_expires = expires;
        // The slot is kept as a historical marker until the next initiate.
        next.pending.status = HandoffStatus::Confirmed;

        let receipt = self
            .store
            .apply_if_current(token_id, versioned.version, next)
            .await?;

        self.events
            .publish(LedgerEvent::PossessionConfirmed(PossessionConfirmedPayload {
                token_id,
                possessor: caller,
                location: location.to_string(),
                expires,
            }));
        info!(%token_id, possessor = %caller, location, "possession confirmed");

        Ok(receipt)
    }

    async fn user_of(&self, token_id: TokenId) -> Result<PartyId, LedgerError> {
        Ok(self.load_required(token_id).await?.container.holder())
    }

    async fn owner_of(&self, token_id: TokenId) -> Result<PartyId, LedgerError> {
        Ok(self.load_required(token_id).await?.container.owner)
    }

    async fn pending_handoff(&self, token_id: TokenId) -> Result<PendingHandoff, LedgerError> {
        Ok(self.load_required(token_id).await?.container.pending)
    }

    async fn total_containers(&self) -> Result<u64, LedgerError> {
        self.store.count().await
    }
}
