//! Ports layer: the coordinator API and the opaque ledger submission
//! client.

pub mod inbound;
pub mod outbound;

pub use inbound::{HandoffCoordinatorApi, HandoffStatusView, InitiatedHandoff};
pub use outbound::{LedgerGateway, WriteAuthority};
