//! # Correlation Store
//!
//! Token-to-booking-reference map. Explicitly owned and lifecycle-scoped:
//! the composition root constructs one at service start, injects it into
//! the coordinator, and tears it down at shutdown. It lives only in
//! process memory; losing it is tolerated (confirmation then proceeds
//! without reference validation).

use parking_lot::RwLock;
use shared_types::TokenId;
use std::collections::HashMap;

/// Volatile booking-reference store.
#[derive(Default)]
pub struct CorrelationStore {
    entries: RwLock<HashMap<TokenId, String>>,
}

impl CorrelationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the reference for a committed initiate. Overwrites any
    /// entry left by a previous initiate on the same container.
    pub fn record(&self, token_id: TokenId, reference: String) {
        self.entries.write().insert(token_id, reference);
    }

    /// The live reference for a container, if any.
    pub fn reference_for(&self, token_id: TokenId) -> Option<String> {
        self.entries.read().get(&token_id).cloned()
    }

    /// Drop the entry after a confirmed handoff.
    pub fn clear(&self, token_id: TokenId) {
        self.entries.write().remove(&token_id);
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when no entries are live.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
