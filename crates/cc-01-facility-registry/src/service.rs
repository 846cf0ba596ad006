//! # Facility Registry Service
//!
//! In-memory implementation of [`FacilityRegistryApi`].
//!
//! ## Thread Safety
//!
//! All records live behind a single `RwLock`, so the uniqueness checks in
//! `register_facility` and the insertion they guard are one atomic step.
//!
//! ## Authorization
//!
//! Registration and activation changes require the administrator identity
//! the service was constructed with. Read operations are unrestricted.

use crate::domain::{Facility, RegistryError};
use crate::ports::FacilityRegistryApi;
use parking_lot::RwLock;
use shared_types::{FacilityType, PartyId, TimeSource};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Facility Registry service.
pub struct FacilityRegistryService<T: TimeSource> {
    /// Administrator allowed to mutate the registry.
    admin: PartyId,
    /// Wall clock for `registered_at` stamps.
    clock: Arc<T>,
    /// All registry state, guarded as one unit.
    state: RwLock<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    /// Record per address ever registered.
    by_address: HashMap<PartyId, Facility>,
    /// Code uniqueness index.
    by_code: HashMap<String, PartyId>,
    /// Registration order, for enumeration.
    order: Vec<PartyId>,
}

impl<T: TimeSource> FacilityRegistryService<T> {
    /// Create an empty registry administered by `admin`.
    pub fn new(admin: PartyId, clock: Arc<T>) -> Self {
        Self {
            admin,
            clock,
            state: RwLock::new(RegistryState::default()),
        }
    }

    fn require_admin(&self, caller: PartyId) -> Result<(), RegistryError> {
        if caller != self.admin {
            return Err(RegistryError::Unauthorized { caller });
        }
        Ok(())
    }
}

impl<T: TimeSource> FacilityRegistryApi for FacilityRegistryService<T> {
    fn register_facility(
        &self,
        caller: PartyId,
        address: PartyId,
        code: &str,
        facility_type: FacilityType,
        name: &str,
        location: &str,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;

        let mut state = self.state.write();
        if state.by_address.contains_key(&address) {
            return Err(RegistryError::DuplicateAddress { address });
        }
        if state.by_code.contains_key(code) {
            return Err(RegistryError::DuplicateCode {
                code: code.to_string(),
            });
        }

        let facility = Facility {
            address,
            code: code.to_string(),
            facility_type,
            name: name.to_string(),
            location: location.to_string(),
            is_active: true,
            registered_at: self.clock.now(),
        };
        state.by_code.insert(code.to_string(), address);
        state.by_address.insert(address, facility);
        state.order.push(address);

        info!(%address, code, %facility_type, "facility registered");
        Ok(())
    }

    fn get_facility(&self, address: PartyId) -> Result<Facility, RegistryError> {
        self.state
            .read()
            .by_address
            .get(&address)
            .cloned()
            .ok_or(RegistryError::FacilityNotFound { address })
    }

    fn is_facility(&self, address: PartyId) -> bool {
        self.state
            .read()
            .by_address
            .get(&address)
            .map(|f| f.is_active)
            .unwrap_or(false)
    }

    fn is_registered(&self, address: PartyId) -> bool {
        self.state.read().by_address.contains_key(&address)
    }

    fn set_active(
        &self,
        caller: PartyId,
        address: PartyId,
        active: bool,
    ) -> Result<(), RegistryError> {
        self.require_admin(caller)?;

        let mut state = self.state.write();
        let facility = state
            .by_address
            .get_mut(&address)
            .ok_or(RegistryError::FacilityNotFound { address })?;
        facility.is_active = active;

        info!(%address, active, "facility active flag changed");
        Ok(())
    }

    fn all_facilities(&self) -> Vec<PartyId> {
        self.state.read().order.clone()
    }

    fn all_facility_records(&self) -> Vec<Facility> {
        let state = self.state.read();
        state
            .order
            .iter()
            .filter_map(|addr| state.by_address.get(addr).cloned())
            .collect()
    }

    fn facility_count(&self) -> usize {
        self.state.read().order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ManualTimeSource;

    const ADMIN: PartyId = PartyId::new([0x01; 20]);
    const TERMINAL_1: PartyId = PartyId::new([0x10; 20]);
    const TERMINAL_2: PartyId = PartyId::new([0x20; 20]);

    fn registry() -> FacilityRegistryService<ManualTimeSource> {
        FacilityRegistryService::new(
            ADMIN,
            Arc::new(ManualTimeSource::starting_at(1_700_000_000)),
        )
    }

    fn register_terminal_1(reg: &FacilityRegistryService<ManualTimeSource>) {
        reg.register_facility(
            ADMIN,
            TERMINAL_1,
            "USLAX-APM",
            FacilityType::Terminal,
            "APM Terminals Los Angeles",
            "Los Angeles, CA",
        )
        .unwrap();
    }

    #[test]
    fn test_register_and_lookup() {
        let reg = registry();
        register_terminal_1(&reg);

        let facility = reg.get_facility(TERMINAL_1).unwrap();
        assert_eq!(facility.code, "USLAX-APM");
        assert!(facility.is_active);
        assert_eq!(facility.registered_at, 1_700_000_000);
        assert!(reg.is_facility(TERMINAL_1));
        assert!(reg.is_registered(TERMINAL_1));
    }

    #[test]
    fn test_register_rejects_duplicate_address() {
        let reg = registry();
        register_terminal_1(&reg);

        let result = reg.register_facility(
            ADMIN,
            TERMINAL_1,
            "USLGB-TTI",
            FacilityType::Terminal,
            "Total Terminals International",
            "Long Beach, CA",
        );
        assert_eq!(
            result,
            Err(RegistryError::DuplicateAddress { address: TERMINAL_1 })
        );
    }

    #[test]
    fn test_register_rejects_duplicate_code() {
        let reg = registry();
        register_terminal_1(&reg);

        let result = reg.register_facility(
            ADMIN,
            TERMINAL_2,
            "USLAX-APM",
            FacilityType::Terminal,
            "Some Other Terminal",
            "Los Angeles, CA",
        );
        assert_eq!(
            result,
            Err(RegistryError::DuplicateCode {
                code: "USLAX-APM".to_string()
            })
        );
    }

    #[test]
    fn test_register_requires_admin() {
        let reg = registry();
        let result = reg.register_facility(
            TERMINAL_2,
            TERMINAL_1,
            "USLAX-APM",
            FacilityType::Terminal,
            "APM Terminals Los Angeles",
            "Los Angeles, CA",
        );
        assert_eq!(result, Err(RegistryError::Unauthorized { caller: TERMINAL_2 }));
        assert!(!reg.is_registered(TERMINAL_1));
    }

    #[test]
    fn test_deactivate_keeps_registration() {
        let reg = registry();
        register_terminal_1(&reg);

        reg.set_active(ADMIN, TERMINAL_1, false).unwrap();
        assert!(!reg.is_facility(TERMINAL_1));
        assert!(reg.is_registered(TERMINAL_1));

        reg.set_active(ADMIN, TERMINAL_1, true).unwrap();
        assert!(reg.is_facility(TERMINAL_1));
    }

    #[test]
    fn test_set_active_unknown_address_fails() {
        let reg = registry();
        assert_eq!(
            reg.set_active(ADMIN, TERMINAL_1, false),
            Err(RegistryError::FacilityNotFound { address: TERMINAL_1 })
        );
    }

    #[test]
    fn test_set_active_requires_admin() {
        let reg = registry();
        register_terminal_1(&reg);
        assert_eq!(
            reg.set_active(TERMINAL_1, TERMINAL_1, false),
            Err(RegistryError::Unauthorized { caller: TERMINAL_1 })
        );
    }

    #[test]
    fn test_enumeration_preserves_registration_order() {
        let reg = registry();
        register_terminal_1(&reg);
        reg.register_facility(
            ADMIN,
            TERMINAL_2,
            "USLGB-TTI",
            FacilityType::Terminal,
            "Total Terminals International",
            "Long Beach, CA",
        )
        .unwrap();
        reg.set_active(ADMIN, TERMINAL_1, false).unwrap();

        // Deactivated facilities are still enumerated.
        assert_eq!(reg.all_facilities(), vec![TERMINAL_1, TERMINAL_2]);
        assert_eq!(reg.facility_count(), 2);

        let records = reg.all_facility_records();
        assert_eq!(records.len(), 2);
        assert!(!records[0].is_active);
        assert!(records[1].is_active);
    }

    #[test]
    fn test_unknown_facility_lookup_fails() {
        let reg = registry();
        assert_eq!(
            reg.get_facility(TERMINAL_1),
            Err(RegistryError::FacilityNotFound { address: TERMINAL_1 })
        );
        assert!(!reg.is_facility(TERMINAL_1));
        assert!(!reg.is_registered(TERMINAL_1));
    }
}
