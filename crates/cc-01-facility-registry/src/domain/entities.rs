//! # Facility Record
//!
//! The registry's per-facility record. `address` and `code` are each unique
//! across all facilities ever registered; records are never deleted.

use serde::{Deserialize, Serialize};
use shared_types::{FacilityType, PartyId, Timestamp};

/// A registered facility.
///
/// Two predicates matter downstream and are deliberately distinct:
/// registered (this record exists) and active (`is_active`). Possession
/// transfers may only target facilities that satisfy both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Identity the facility acts under.
    pub address: PartyId,
    /// Unique facility code (e.g. `USLAX-APM`).
    pub code: String,
    /// Kind of facility.
    pub facility_type: FacilityType,
    /// Human-readable name.
    pub name: String,
    /// Physical location.
    pub location: String,
    /// Whether the facility may currently receive possession.
    pub is_active: bool,
    /// When the facility was registered.
    pub registered_at: Timestamp,
}
