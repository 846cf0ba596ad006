//! Event payloads published on every committed state change.

pub mod payloads;

pub use payloads::{
    ContainerRegisteredPayload, HandoffDiscardedPayload, HandoffInitiatedPayload, LedgerEvent,
    PossessionConfirmedPayload,
};
