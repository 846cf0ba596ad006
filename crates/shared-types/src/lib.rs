//! # Shared Types Crate
//!
//! Domain identity and value types shared by all Custody-Chain subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Opaque Identity**: `PartyId` is an equality-comparable identity with
//!   no assumptions about how it was derived. Authorization rules in the
//!   ledger compare identities; they never inspect them.
//! - **Sentinel Resolution**: `TokenId::ZERO` is the "not found" result of
//!   unit-number resolution and is never assigned to a real container.

pub mod entities;
pub mod errors;
pub mod identity;
pub mod time;

pub use entities::*;
pub use errors::ValidationError;
pub use identity::{PartyId, TokenId};
pub use time::{ManualTimeSource, SystemTimeSource, TimeSource};
