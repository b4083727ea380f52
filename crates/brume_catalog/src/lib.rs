//! Brume Catalog - Item type metadata
//!
//! The container subsystem consults an external catalog for per-type data:
//! stackability, stack limits, container capacity, display names, weight.
//! This crate defines the shape of that data (`ItemType`) and an in-memory
//! registry (`ItemCatalog`) indexed by id and by name.
//!
//! # Example
//!
//! ```
//! use brume_catalog::{ItemCatalog, ItemType};
//! use brume_core::ItemTypeId;
//!
//! let mut catalog = ItemCatalog::new();
//! catalog
//!     .register(
//!         ItemTypeId(2148),
//!         ItemType::new("gold coin").stackable(100).with_weight(0.1),
//!     )
//!     .unwrap();
//!
//! assert_eq!(catalog.id_by_name("Gold Coin"), Some(ItemTypeId(2148)));
//! ```

pub mod catalog;
pub mod item_type;

pub mod prelude {
    pub use crate::catalog::{CatalogError, ItemCatalog, Result};
    pub use crate::item_type::ItemType;
}

pub use prelude::*;
