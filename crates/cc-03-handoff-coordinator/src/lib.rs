//! # CC-03 Handoff Coordinator
//!
//! Orchestrates initiate/confirm calls against the Container Ledger and
//! maintains the ephemeral booking-reference correlation store.
//!
//! ## Role in System
//!
//! - **Orchestrator**: resolves unit numbers, forwards to the ledger,
//!   propagates ledger failures unchanged.
//! - **Correlation, not authority**: the booking reference is a
//!   human-facing convenience token. The real authorization is the
//!   `to`-address check inside the ledger; losing the correlation store
//!   (process restart) degrades gracefully to confirmation without
//!   reference validation.
//! - **Read-only degraded mode**: without configured write authority,
//!   `initiate`/`confirm` fail fast while `status` stays available.
//!
//! ## Module Structure
//!
//! ```text
//! cc-03-handoff-coordinator/
//! ├── domain/          # Booking references, correlation store, errors
//! ├── ports/           # HandoffCoordinatorApi, LedgerGateway
//! ├── adapters/        # In-process gateway over the ledger service
//! └── service.rs       # HandoffCoordinatorService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{generate_booking_reference, CoordinatorError, CorrelationStore};
pub use ports::{
    HandoffCoordinatorApi, HandoffStatusView, InitiatedHandoff, LedgerGateway, WriteAuthority,
};
pub use service::HandoffCoordinatorService;
