//! Identifier newtypes shared across the subsystem

use core::fmt;
use serde::{Deserialize, Serialize};

/// Catalog identifier for an item type.
///
/// Lookups keyed by this resolve to `Option` rather than a zero sentinel;
/// an absent type is `None`, never a magic id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemTypeId(pub u16);

impl ItemTypeId {
    /// Get the raw id
    #[inline]
    pub const fn raw(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ItemTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

/// Identifier of an external creature/entity.
///
/// Used for corpse first-loot rights; the creature itself lives outside
/// this subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

impl CreatureId {
    /// Get the raw id
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "creature#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ItemTypeId(2148).to_string(), "type#2148");
        assert_eq!(CreatureId(7).to_string(), "creature#7");
    }
}
