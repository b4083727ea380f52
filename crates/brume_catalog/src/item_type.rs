//! Item type metadata records

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Static metadata for one item type
///
/// Container construction is catalog-driven: a type with a non-zero
/// `base_capacity` (or the unbounded flag) produces container items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemType {
    /// Display name
    pub name: String,
    /// Plural display name; `None` falls back to `name` + "s"
    pub plural: Option<String>,
    /// Whether instances of this type stack
    pub stackable: bool,
    /// Maximum units per stack (1 = not stackable)
    pub stack_size: u16,
    /// Top-level slot count when this type is a container (0 = not a container)
    pub base_capacity: u32,
    /// Quiver-like mode: container with no slot limit
    pub unbounded_capacity: bool,
    /// Weight per unit
    pub weight: f32,
}

impl ItemType {
    /// Create a new item type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plural: None,
            stackable: false,
            stack_size: 1,
            base_capacity: 0,
            unbounded_capacity: false,
            weight: 0.0,
        }
    }

    /// Mark as stackable with the given stack limit
    pub fn stackable(mut self, stack_size: u16) -> Self {
        self.stackable = true;
        self.stack_size = stack_size.max(1);
        self
    }

    /// Set the plural display name
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    /// Make this type a container with the given slot count
    pub fn with_capacity(mut self, base_capacity: u32) -> Self {
        self.base_capacity = base_capacity;
        self
    }

    /// Make this type an unbounded container
    pub fn unbounded(mut self) -> Self {
        self.unbounded_capacity = true;
        self
    }

    /// Set weight per unit
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    /// Check whether instances of this type carry slots
    pub fn is_container(&self) -> bool {
        self.base_capacity > 0 || self.unbounded_capacity
    }

    /// Plural display name, falling back to a naive "s" suffix
    pub fn plural_name(&self) -> Cow<'_, str> {
        match &self.plural {
            Some(plural) => Cow::Borrowed(plural),
            None => Cow::Owned(format!("{}s", self.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let coin = ItemType::new("gold coin")
            .stackable(100)
            .with_weight(0.1);

        assert!(coin.stackable);
        assert_eq!(coin.stack_size, 100);
        assert!(!coin.is_container());
    }

    #[test]
    fn test_stack_size_clamp() {
        let odd = ItemType::new("odd").stackable(0);
        assert_eq!(odd.stack_size, 1);
    }

    #[test]
    fn test_container_detection() {
        assert!(ItemType::new("backpack").with_capacity(20).is_container());
        assert!(ItemType::new("quiver").unbounded().is_container());
        assert!(!ItemType::new("sword").is_container());
    }

    #[test]
    fn test_plural_fallback() {
        let coin = ItemType::new("gold coin");
        assert_eq!(coin.plural_name(), "gold coins");

        let staff = ItemType::new("staff").with_plural("staves");
        assert_eq!(staff.plural_name(), "staves");
    }
}
