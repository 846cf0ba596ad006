//! # CC-02 Container Ledger
//!
//! The possession handoff state machine: the authoritative per-container
//! record of legal owner, temporary possessor, and the single pending
//! handoff slot.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: container identity, ownership, possession.
//! - **Two-step custody change**: the current holder initiates, the
//!   receiving facility confirms; possession changes only when both
//!   parties have acted.
//! - **Substrate-agnostic**: every mutation flows through the
//!   [`CommitStore`] outbound port, whose `apply_if_current` commit is the
//!   atomicity boundary. The same rules run against an in-memory store, an
//!   embedded database with optimistic concurrency, or a chain client.
//!
//! ## Handoff State Machine
//!
//! ```text
//! None --initiate(by holder)--> Pending
//! Pending --confirm(by `to`)--> Confirmed
//! Pending --initiate(by holder)--> Pending     (overwrite)
//! Confirmed --initiate(by new holder)--> Pending   (next leg)
//! ```
//!
//! There is no transition back to `None`; it exists only before the first
//! initiate on a freshly registered container.
//!
//! ## Module Structure
//!
//! ```text
//! cc-02-container-ledger/
//! ├── domain/          # Container, PendingHandoff, invariants, errors
//! ├── ports/           # ContainerLedgerApi, CommitStore, FacilityDirectory, EventSink
//! ├── events/          # Event payloads published on state changes
//! ├── adapters/        # In-memory store, registry directory, event sinks
//! └── service.rs       # ContainerLedgerService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

pub use domain::{
    Container, HandoffStatus, LedgerConfig, LedgerError, PendingHandoff, PossessionInfo,
};
pub use events::LedgerEvent;
pub use ports::{
    CommitReceipt, CommitStore, ContainerLedgerApi, EventSink, FacilityDirectory,
    RegistrationRecord, VersionedContainer,
};
pub use service::ContainerLedgerService;
