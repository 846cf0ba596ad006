//! # Inbound Port
//!
//! What the Facility Registry can do for the rest of the system.

use crate::domain::{Facility, RegistryError};
use shared_types::{FacilityType, PartyId};

/// Facility Registry API - inbound port.
pub trait FacilityRegistryApi: Send + Sync {
    /// Register a new facility under `address`.
    ///
    /// Requires administrative authority. Fails with a conflict if the
    /// address or code was ever registered before; there is no implicit
    /// update path.
    fn register_facility(
        &self,
        caller: PartyId,
        address: PartyId,
        code: &str,
        facility_type: FacilityType,
        name: &str,
        location: &str,
    ) -> Result<(), RegistryError>;

    /// Fetch the record for `address`.
    fn get_facility(&self, address: PartyId) -> Result<Facility, RegistryError>;

    /// True iff `address` is registered AND active.
    fn is_facility(&self, address: PartyId) -> bool;

    /// True iff `address` was ever registered, regardless of the active
    /// flag. Distinguishes "never existed" from "deactivated".
    fn is_registered(&self, address: PartyId) -> bool;

    /// Toggle the active flag without deleting the record.
    ///
    /// Requires administrative authority. Changes the outcome of
    /// `is_facility` but never of `is_registered`.
    fn set_active(&self, caller: PartyId, address: PartyId, active: bool)
        -> Result<(), RegistryError>;

    /// Every address ever registered, active and inactive, in
    /// registration order.
    fn all_facilities(&self) -> Vec<PartyId>;

    /// Full records for every facility ever registered.
    fn all_facility_records(&self) -> Vec<Facility>;

    /// Number of facilities ever registered.
    fn facility_count(&self) -> usize;
}
