//! Brume Core - Shared primitives
//!
//! This crate provides the building blocks the container subsystem is
//! assembled from:
//!
//! - Generational arena storage (`Arena`, `Key`)
//! - Catalog and creature identifiers
//! - The typed attribute bag carried by items
//! - Slot capacity with an unbounded ("quiver-like") mode

pub mod arena;
pub mod attribute;
pub mod capacity;
pub mod id;

pub mod prelude {
    pub use crate::arena::{Arena, Key};
    pub use crate::attribute::{AttributeBag, AttributeKey, AttributeValue};
    pub use crate::capacity::Capacity;
    pub use crate::id::{CreatureId, ItemTypeId};
}

pub use prelude::*;
