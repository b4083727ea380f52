//! Error types for the container subsystem

use brume_core::ItemTypeId;
use thiserror::Error;

/// Container subsystem errors
///
/// Every mutating failure is all-or-nothing: when an operation returns an
/// error, neither the container nor the item's custody has changed. Absent
/// query results are `Option::None`, not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    /// Insertion attempted on an item whose custody is not limbo
    #[error("Item already has an owner")]
    AlreadyOwned,

    /// Insertion would make a container a descendant of itself
    #[error("Insertion would create a containment cycle")]
    CyclicContainment,

    /// Capacity exhausted with no mergeable stack and no override
    #[error("Container is full")]
    ContainerFull,

    /// Explicit slot index out of range, or occupied without the force flag
    #[error("Invalid slot index: {0}")]
    InvalidIndex(u32),

    /// The item handle no longer resolves
    #[error("Item handle is stale")]
    StaleItem,

    /// The target item carries no slots
    #[error("Item is not a container")]
    NotAContainer,

    /// The id does not resolve in the catalog
    #[error("Unknown item type: {0}")]
    UnknownItemType(ItemTypeId),
}

/// Result type for container operations
pub type Result<T> = std::result::Result<T, ContainerError>;
