//! # Registry-Backed Facility Directory
//!
//! Connects the ledger's destination checks to the live Facility
//! Registry (cc-01).

use crate::ports::outbound::FacilityDirectory;
use cc_01_facility_registry::FacilityRegistryApi;
use shared_types::PartyId;
use std::sync::Arc;

/// [`FacilityDirectory`] adapter over the Facility Registry.
pub struct RegistryDirectory<R: FacilityRegistryApi> {
    registry: Arc<R>,
}

impl<R: FacilityRegistryApi> RegistryDirectory<R> {
    /// Wrap a registry handle.
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }
}

impl<R: FacilityRegistryApi> FacilityDirectory for RegistryDirectory<R> {
    fn is_active_facility(&self, address: PartyId) -> bool {
        self.registry.is_facility(address)
    }

    fn is_registered_facility(&self, address: PartyId) -> bool {
        self.registry.is_registered(address)
    }
}
