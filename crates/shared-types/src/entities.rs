//! # Core Domain Entities
//!
//! Value types shared across the registry, ledger, and coordinator
//! subsystems.
//!
//! ## Clusters
//!
//! - **Time**: `Timestamp` (Unix seconds)
//! - **Facilities**: `FacilityType`
//! - **Containers**: `UnitNumber` (ISO 6346 identifier)

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Kind of facility that may take possession of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityType {
    /// Container terminal within a port.
    Terminal,
    /// Port authority.
    Port,
    /// Inland container depot.
    Depot,
    /// Ocean-going vessel.
    Vessel,
    /// Rail ramp or rail operator.
    Rail,
    /// Trucking company.
    Truck,
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FacilityType::Terminal => "TERMINAL",
            FacilityType::Port => "PORT",
            FacilityType::Depot => "DEPOT",
            FacilityType::Vessel => "VESSEL",
            FacilityType::Rail => "RAIL",
            FacilityType::Truck => "TRUCK",
        };
        f.write_str(name)
    }
}

/// ISO 6346 container identifier: four uppercase letters (owner prefix +
/// equipment category) followed by seven digits (serial + check digit).
///
/// Validated at construction; a `UnitNumber` in hand is always well-formed.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitNumber(String);

impl UnitNumber {
    /// Parse and validate an ISO 6346 unit number (e.g. `MSCU1234567`).
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 11
            && bytes[..4].iter().all(u8::is_ascii_uppercase)
            && bytes[4..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(ValidationError::MalformedUnitNumber(value));
        }
        Ok(Self(value))
    }

    /// The full identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The four-letter owner prefix (e.g. `MSCU`).
    pub fn owner_prefix(&self) -> &str {
        &self.0[..4]
    }
}

impl fmt::Display for UnitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for UnitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitNumber({})", self.0)
    }
}
