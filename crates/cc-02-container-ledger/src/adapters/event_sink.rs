//! Event sink adapters: a no-op sink for deployments without an indexer
//! and a recording sink for tests.

use crate::events::LedgerEvent;
use crate::ports::outbound::EventSink;
use parking_lot::Mutex;
use tracing::debug;

/// Discards every event. Ledger correctness never depends on a sink.
#[derive(Default)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn publish(&self, event: LedgerEvent) {
        debug!(?event, "ledger event dropped (no sink configured)");
    }
}

/// Buffers every event in memory.
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<LedgerEvent>>,
}

impl RecordingEventSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    pub fn recorded(&self) -> Vec<LedgerEvent> {
        self.events.lock().clone()
    }
}

impl EventSink for RecordingEventSink {
    fn publish(&self, event: LedgerEvent) {
        self.events.lock().push(event);
    }
}
