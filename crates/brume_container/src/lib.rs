//! Brume Container - Hierarchical item containers
//!
//! This crate is the item-container core: capacity-bounded containers of
//! possibly-stacked items, single-owner custody transfer, depth-first
//! traversal across nested containers, and human-readable content
//! summaries.
//!
//! # Example
//!
//! ```
//! use brume_catalog::{ItemCatalog, ItemType};
//! use brume_container::{AddFlags, ItemWorld, SlotIndex};
//! use brume_core::ItemTypeId;
//!
//! let mut catalog = ItemCatalog::new();
//! catalog
//!     .register(ItemTypeId(1988), ItemType::new("backpack").with_capacity(20))
//!     .unwrap();
//! catalog
//!     .register(ItemTypeId(2148), ItemType::new("gold coin").stackable(100))
//!     .unwrap();
//!
//! let mut world = ItemWorld::new(catalog);
//! let pack = world.create_item(ItemTypeId(1988), 1).unwrap();
//! world
//!     .add_item(pack, ItemTypeId(2148), 30, SlotIndex::Wherever, AddFlags::NONE)
//!     .unwrap();
//!
//! assert_eq!(world.container_size(pack), Some(1));
//! assert_eq!(world.content_description(pack, true), Some("30 gold coins".into()));
//! ```

mod describe;

pub mod error;
pub mod item;
pub mod iter;
pub mod stacking;
pub mod world;

pub mod prelude {
    pub use crate::error::{ContainerError, Result};
    pub use crate::item::{ContainerState, Custody, Item, ItemKey};
    pub use crate::iter::ContainerIterator;
    pub use crate::stacking::{AddFlags, SlotIndex};
    pub use crate::world::ItemWorld;
}

pub use prelude::*;
