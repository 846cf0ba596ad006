//! Ports layer: the inbound ledger API and the outbound substrate,
//! directory, and event-sink dependencies.

pub mod inbound;
pub mod outbound;

pub use inbound::ContainerLedgerApi;
pub use outbound::{
    CommitReceipt, CommitStore, EventSink, FacilityDirectory, RegistrationRecord,
    StaticFacilityDirectory, VersionedContainer,
};
