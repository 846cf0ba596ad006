//! # Domain Errors
//!
//! Ledger error taxonomy. All semantic errors are terminal and reported
//! verbatim; `is_retryable` marks the transient class a caller may safely
//! retry (re-validation on each attempt plus single-slot overwrite make
//! retried submissions idempotent in effect).

use shared_types::{PartyId, Timestamp, TokenId, UnitNumber};
use thiserror::Error;

/// Errors produced by the Container Ledger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Token does not resolve to a container.
    #[error("container {token_id} not found")]
    ContainerNotFound {
        /// The unknown token.
        token_id: TokenId,
    },

    /// Unit number already registered; the first registration's token is
    /// unaffected.
    #[error("container {unit_number} already registered")]
    ContainerAlreadyExists {
        /// The duplicate unit number.
        unit_number: UnitNumber,
    },

    /// Initiate attempted by someone other than the current holder
    /// (possessor if set, else owner).
    #[error("caller {caller} is not the current holder {holder}")]
    NotCurrentHolder {
        /// The rejected caller.
        caller: PartyId,
        /// Who may actually initiate.
        holder: PartyId,
    },

    /// Destination is not a registered, active facility — or a confirm
    /// came from someone other than the addressed facility.
    #[error("{address} is not an authorized facility for this operation")]
    NotAuthorizedFacility {
        /// The rejected address.
        address: PartyId,
    },

    /// Confirm attempted while no `Pending` handoff exists.
    #[error("no pending handoff for container {token_id}")]
    NoPendingHandoff {
        /// The container in question.
        token_id: TokenId,
    },

    /// Confirm after the possession window closed, with expiry
    /// enforcement configured on.
    #[error("handoff for container {token_id} expired at {expired_at} (now {now})")]
    HandoffExpired {
        /// The container in question.
        token_id: TokenId,
        /// When the window closed.
        expired_at: Timestamp,
        /// The rejected confirmation instant.
        now: Timestamp,
    },

    /// Requested possession window shorter than the configured minimum.
    #[error("handoff duration {requested_secs}s below minimum {minimum_secs}s")]
    DurationBelowMinimum {
        /// What the caller asked for.
        requested_secs: u64,
        /// The configured floor.
        minimum_secs: u64,
    },

    /// Caller lacks registration authority.
    #[error("caller {caller} is not the container registrar")]
    Unauthorized {
        /// The rejected caller.
        caller: PartyId,
    },

    /// The apply-if-current commit lost a race on this container.
    /// Retryable: re-read and re-validate.
    #[error("commit conflict on container {token_id}: expected version {expected}, found {actual}")]
    CommitConflict {
        /// The contended container.
        token_id: TokenId,
        /// Version the mutation was based on.
        expected: u64,
        /// Version actually in the store.
        actual: u64,
    },

    /// Transient substrate failure while awaiting the durable-commit
    /// acknowledgment. Retryable.
    #[error("ledger store unavailable: {0}")]
    StoreUnavailable(String),
}

impl LedgerError {
    /// True for the transient class that is safe to retry; everything
    /// else is a terminal semantic failure.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::CommitConflict { .. } | Self::StoreUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let conflict = LedgerError::CommitConflict {
            token_id: TokenId::new(1),
            expected: 3,
            actual: 4,
        };
        assert!(conflict.is_retryable());
        assert!(LedgerError::StoreUnavailable("offline".into()).is_retryable());
        assert!(!LedgerError::NoPendingHandoff {
            token_id: TokenId::new(1)
        }
        .is_retryable());
    }

    #[test]
    fn test_error_messages_carry_cause() {
        let err = LedgerError::NotCurrentHolder {
            caller: PartyId::new([0x01; 20]),
            holder: PartyId::new([0x02; 20]),
        };
        let text = err.to_string();
        assert!(text.contains("not the current holder"));
        assert!(text.contains("0x0101"));
    }
}
