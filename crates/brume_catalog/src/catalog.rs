//! In-memory item type registry

use crate::item_type::ItemType;
use brume_core::ItemTypeId;
use std::collections::HashMap;
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A type is already registered under this id
    #[error("Item type already registered: {0}")]
    DuplicateType(ItemTypeId),

    /// The id does not resolve to a registered type
    #[error("Unknown item type: {0}")]
    UnknownType(ItemTypeId),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Registry of item types, indexed by id and by name
///
/// Name lookups are case-insensitive. At most one registered type may be
/// designated as the reward container produced by reward registration.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    types: HashMap<ItemTypeId, ItemType>,
    by_name: HashMap<String, ItemTypeId>,
    reward_container: Option<ItemTypeId>,
}

impl ItemCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item type under an id
    pub fn register(&mut self, id: ItemTypeId, item_type: ItemType) -> Result<()> {
        if self.types.contains_key(&id) {
            return Err(CatalogError::DuplicateType(id));
        }

        self.by_name
            .entry(item_type.name.to_lowercase())
            .or_insert(id);
        self.types.insert(id, item_type);
        Ok(())
    }

    /// Look up a type by id
    pub fn get(&self, id: ItemTypeId) -> Option<&ItemType> {
        self.types.get(&id)
    }

    /// Resolve a type id by display name, case-insensitively
    pub fn id_by_name(&self, name: &str) -> Option<ItemTypeId> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if no types are registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Designate the type inserted by reward registration
    ///
    /// The id must already be registered and must be a container type.
    pub fn designate_reward_container(&mut self, id: ItemTypeId) -> Result<()> {
        if !self.types.contains_key(&id) {
            return Err(CatalogError::UnknownType(id));
        }
        self.reward_container = Some(id);
        Ok(())
    }

    /// The designated reward container type, if any
    pub fn reward_container(&self) -> Option<ItemTypeId> {
        self.reward_container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = ItemCatalog::new();
        catalog
            .register(ItemTypeId(2148), ItemType::new("gold coin").stackable(100))
            .unwrap();

        let coin = catalog.get(ItemTypeId(2148)).unwrap();
        assert_eq!(coin.name, "gold coin");
        assert!(catalog.get(ItemTypeId(9999)).is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = ItemCatalog::new();
        catalog
            .register(ItemTypeId(1), ItemType::new("sword"))
            .unwrap();

        let err = catalog
            .register(ItemTypeId(1), ItemType::new("other sword"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateType(ItemTypeId(1))));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_name_lookup_case_insensitive() {
        let mut catalog = ItemCatalog::new();
        catalog
            .register(ItemTypeId(2148), ItemType::new("gold coin"))
            .unwrap();

        assert_eq!(catalog.id_by_name("Gold Coin"), Some(ItemTypeId(2148)));
        assert_eq!(catalog.id_by_name("GOLD COIN"), Some(ItemTypeId(2148)));
        assert_eq!(catalog.id_by_name("platinum coin"), None);
    }

    #[test]
    fn test_reward_designation() {
        let mut catalog = ItemCatalog::new();
        assert_eq!(catalog.reward_container(), None);

        let err = catalog.designate_reward_container(ItemTypeId(7)).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownType(ItemTypeId(7))));

        catalog
            .register(ItemTypeId(7), ItemType::new("reward chest").with_capacity(32))
            .unwrap();
        catalog.designate_reward_container(ItemTypeId(7)).unwrap();
        assert_eq!(catalog.reward_container(), Some(ItemTypeId(7)));
    }
}
