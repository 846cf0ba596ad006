//! # Domain Invariants
//!
//! The authorization and validity rules checked before every handoff
//! commit. Kept as free functions so the rules stay independent of any
//! particular store substrate.

use super::entities::{Container, PendingHandoff};
use super::errors::LedgerError;
use shared_types::{PartyId, Timestamp, TokenId};

/// Invariant: only the current holder may initiate a transfer.
///
/// Holder means possessor if one is set, otherwise the legal owner.
pub fn invariant_holder_initiates(
    container: &Container,
    caller: PartyId,
) -> Result<(), LedgerError> {
    let holder = container.holder();
    if caller != holder {
        return Err(LedgerError::NotCurrentHolder { caller, holder });
    }
    Ok(())
}

/// Invariant: a transfer destination must be a registered, active
/// facility. Unregistered and deactivated destinations are rejected the
/// same way.
pub fn invariant_destination_active(
    destination: PartyId,
    is_active_facility: bool,
) -> Result<(), LedgerError> {
    if !is_active_facility {
        return Err(LedgerError::NotAuthorizedFacility {
            address: destination,
        });
    }
    Ok(())
}

/// Invariant: the requested possession window must meet the configured
/// minimum.
pub fn invariant_duration_at_least(
    requested_secs: u64,
    minimum_secs: u64,
) -> Result<(), LedgerError> {
    if requested_secs < minimum_secs {
        return Err(LedgerError::DurationBelowMinimum {
            requested_secs,
            minimum_secs,
        });
    }
    Ok(())
}

/// Invariant: only the addressed facility may confirm.
pub fn invariant_confirm_addressee(
    pending: &PendingHandoff,
    caller: PartyId,
) -> Result<(), LedgerError> {
    if caller != pending.to {
        return Err(LedgerError::NotAuthorizedFacility { address: caller });
    }
    Ok(())
}

/// Invariant: confirm only advances a `Pending` slot.
pub fn invariant_confirmable(
    pending: &PendingHandoff,
    token_id: TokenId,
) -> Result<(), LedgerError> {
    if !pending.status.is_pending() {
        return Err(LedgerError::NoPendingHandoff { token_id });
    }
    Ok(())
}

/// Invariant (policy-gated): the possession window must still be open at
/// confirmation time.
pub fn invariant_within_expiry(
    pending: &PendingHandoff,
    token_id: TokenId,
    now: Timestamp,
) -> Result<(), LedgerError> {
    if pending.is_expired(now) {
        return Err(LedgerError::HandoffExpired {
            token_id,
            expired_at: pending.expires,
            now,
        });
    }
    Ok(())
}
