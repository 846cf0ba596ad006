//! Coordinator error taxonomy. Ledger failures pass through unchanged.

use cc_02_container_ledger::LedgerError;
use shared_types::{TokenId, UnitNumber, ValidationError};
use thiserror::Error;

/// Errors produced by the Handoff Coordinator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoordinatorError {
    /// Unit number does not resolve to a registered container.
    #[error("container {unit_number} not found")]
    ContainerNotFound {
        /// The unknown unit number.
        unit_number: UnitNumber,
    },

    /// Presented booking reference does not match the live correlation
    /// entry for this container.
    #[error("invalid booking reference for container {token_id}")]
    InvalidReference {
        /// The container in question.
        token_id: TokenId,
    },

    /// No ledger write authority configured; write operations fail fast
    /// while reads remain available.
    #[error("ledger write authority not configured; coordinator is read-only")]
    Unconfigured,

    /// Malformed input rejected before touching the ledger.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Ledger failure, propagated verbatim.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl CoordinatorError {
    /// True for the transient class that is safe to retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Ledger(e) if e.is_retryable())
    }
}
