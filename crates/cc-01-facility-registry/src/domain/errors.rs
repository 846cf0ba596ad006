//! Registry error taxonomy.

use shared_types::PartyId;
use thiserror::Error;

/// Errors produced by the Facility Registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Address already registered; re-registration is rejected, not merged.
    #[error("facility address {address} already registered")]
    DuplicateAddress {
        /// The conflicting address.
        address: PartyId,
    },

    /// Facility code already in use by another address.
    #[error("facility code {code:?} already in use")]
    DuplicateCode {
        /// The conflicting code.
        code: String,
    },

    /// No facility was ever registered under this address.
    #[error("facility {address} not found")]
    FacilityNotFound {
        /// The unknown address.
        address: PartyId,
    },

    /// Caller lacks administrative authority for this operation.
    #[error("caller {caller} is not the registry administrator")]
    Unauthorized {
        /// The rejected caller.
        caller: PartyId,
    },
}
