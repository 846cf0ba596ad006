//! Domain layer: container entities, the handoff state machine, and the
//! invariants the service enforces before every commit.

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::{Container, HandoffStatus, LedgerConfig, PendingHandoff, PossessionInfo};
pub use errors::LedgerError;
pub use invariants::{
    invariant_confirm_addressee, invariant_confirmable, invariant_destination_active,
    invariant_duration_at_least, invariant_holder_initiates, invariant_within_expiry,
};
