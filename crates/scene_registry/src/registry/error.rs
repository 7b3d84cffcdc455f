//! Registry error types

use crate::resources::ResourceKind;
use thiserror::Error;

/// Registry errors
///
/// Removal and detachment never produce these; they report absence through
/// their return value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A create or register call used a name that is already taken
    #[error("{kind} '{name}' already exists")]
    DuplicateName {
        /// Kind of the registry that rejected the name
        kind: ResourceKind,
        /// The rejected name
        name: String,
    },

    /// An operation referred to a name that is not registered
    #[error("{kind} '{name}' not found")]
    NotFound {
        /// Kind of the registry that was searched
        kind: ResourceKind,
        /// The unknown name
        name: String,
    },

    /// An operation referred to an id whose resource has been removed
    #[error("{kind} handle no longer refers to a live resource")]
    StaleHandle {
        /// Kind of the dead resource
        kind: ResourceKind,
    },

    /// The geometry already owns a component of this kind
    #[error("geometry already has a {kind} component")]
    SlotOccupied {
        /// Kind of the component that was rejected
        kind: ResourceKind,
    },
}

impl RegistryError {
    pub(crate) fn duplicate(kind: ResourceKind, name: &str) -> Self {
        Self::DuplicateName {
            kind,
            name: name.to_owned(),
        }
    }

    pub(crate) fn not_found(kind: ResourceKind, name: &str) -> Self {
        Self::NotFound {
            kind,
            name: name.to_owned(),
        }
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
