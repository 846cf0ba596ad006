//! # In-Memory Commit Store
//!
//! [`CommitStore`] implementation backed by a process-local map. The
//! single write lock makes every `register` and `apply_if_current` an
//! indivisible step, which is exactly the per-container serialization
//! guarantee the port demands of real substrates.
//!
//! Commits are acknowledged synchronously; there is no separate
//! durability lag to model. `set_unavailable` simulates a substrate
//! outage for retry-path tests.

use crate::domain::{Container, LedgerError, PendingHandoff};
use crate::ports::outbound::{CommitReceipt, CommitStore, RegistrationRecord, VersionedContainer};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{TokenId, UnitNumber};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory implementation of [`CommitStore`].
#[derive(Default)]
pub struct InMemoryCommitStore {
    state: RwLock<StoreState>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct StoreState {
    containers: HashMap<TokenId, VersionedContainer>,
    unit_index: HashMap<UnitNumber, TokenId>,
}

impl InMemoryCommitStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a substrate outage: while set, every operation fails
    /// with the retryable `StoreUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), LedgerError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LedgerError::StoreUnavailable(
                "in-memory store marked offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CommitStore for InMemoryCommitStore {
    async fn register(&self, record: RegistrationRecord) -> Result<CommitReceipt, LedgerError> {
        self.check_available()?;

        let mut state = self.state.write();
        if state.unit_index.contains_key(&record.unit_number) {
            return Err(LedgerError::ContainerAlreadyExists {
                unit_number: record.unit_number,
            });
        }

        // Tokens count up from 1; records are never deleted, so the map
        // size is the registration count.
        let token_id = TokenId::new(state.containers.len() as u64 + 1);
        let container = Container {
            token_id,
            unit_number: record.unit_number.clone(),
            iso_type: record.iso_type,
            owner_code: record.owner_code,
            tare_weight: record.tare_weight,
            max_gross_weight: record.max_gross_weight,
            registered_at: record.registered_at,
            owner: record.owner,
            possessor: None,
            possession_expires: 0,
            pending: PendingHandoff::default(),
        };

        state.unit_index.insert(record.unit_number, token_id);
        state.containers.insert(
            token_id,
            VersionedContainer {
                version: 1,
                container,
            },
        );

        Ok(CommitReceipt {
            token_id,
            version: 1,
        })
    }

    async fn load(&self, token_id: TokenId) -> Result<Option<VersionedContainer>, LedgerError> {
        self.check_available()?;
        Ok(self.state.read().containers.get(&token_id).cloned())
    }

    async fn resolve_unit(&self, unit_number: &UnitNumber) -> Result<TokenId, LedgerError> {
        self.check_available()?;
        Ok(self
            .state
            .read()
            .unit_index
            .get(unit_number)
            .copied()
            .unwrap_or(TokenId::ZERO))
    }

    async fn apply_if_current(
        &self,
        token_id: TokenId,
        expected_version: u64,
        container: Container,
    ) -> Result<CommitReceipt, LedgerError> {
        self.check_available()?;

        let mut state = self.state.write();
        let entry = state
            .containers
            .get_mut(&token_id)
            .ok_or(LedgerError::ContainerNotFound { token_id })?;

        if entry.version != expected_version {
            return Err(LedgerError::CommitConflict {
                token_id,
                expected: expected_version,
                actual: entry.version,
            });
        }

        entry.version += 1;
        entry.container = container;

        Ok(CommitReceipt {
            token_id,
            version: entry.version,
        })
    }

    async fn count(&self) -> Result<u64, LedgerError> {
        self.check_available()?;
        Ok(self.state.read().containers.len() as u64)
    }
}
