//! Item world - arena of items and the operations over them

use crate::describe;
use crate::error::{ContainerError, Result};
use crate::item::{ContainerState, Custody, Item, ItemKey};
use crate::iter::ContainerIterator;
use crate::stacking::{self, AddFlags, SlotIndex};
use brume_catalog::ItemCatalog;
use brume_core::{Arena, AttributeKey, AttributeValue, Capacity, CreatureId, ItemTypeId};
use std::time::{SystemTime, UNIX_EPOCH};

/// Owner of all items and containers
///
/// Items live in a generational arena and are addressed by [`ItemKey`]
/// handles. Handles are freely copyable; the authoritative custody record
/// lives inside the arena entry, and a destroyed item turns every
/// outstanding handle to it stale. All mutation goes through `&mut self` on
/// one logical simulation thread.
pub struct ItemWorld {
    catalog: ItemCatalog,
    items: Arena<Item>,
}

impl ItemWorld {
    /// Create a world consulting the given catalog
    pub fn new(catalog: ItemCatalog) -> Self {
        Self {
            catalog,
            items: Arena::new(),
        }
    }

    /// The catalog this world consults
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Resolve an item handle
    pub fn item(&self, key: ItemKey) -> Option<&Item> {
        self.items.get(key)
    }

    /// Check whether a handle still resolves
    pub fn contains(&self, key: ItemKey) -> bool {
        self.items.contains_key(key)
    }

    /// Total number of live items in the world
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // ==================== Factory & Custody ====================

    /// Create an item in limbo
    ///
    /// Stackable counts are clamped to `1..=stack_size`; for non-stackable
    /// types `count` is the variant/subtype and passes through unchanged.
    /// Types with slots produce container items.
    pub fn create_item(&mut self, type_id: ItemTypeId, count: u32) -> Result<ItemKey> {
        let item_type = self
            .catalog
            .get(type_id)
            .ok_or(ContainerError::UnknownItemType(type_id))?;

        let count = if item_type.stackable {
            count.clamp(1, u32::from(item_type.stack_size))
        } else {
            count
        };
        let container = item_type
            .is_container()
            .then(|| ContainerState::new(item_type.base_capacity, item_type.unbounded_capacity));

        let key = self.items.insert(Item::new(type_id, count, container));
        log::debug!("created {} as {:?}", type_id, key);
        Ok(key)
    }

    /// Detach an item from its holder, returning it to limbo
    ///
    /// Removing an item already in limbo is a no-op.
    pub fn remove_item(&mut self, item: ItemKey) -> Result<()> {
        let custody = self
            .items
            .get(item)
            .ok_or(ContainerError::StaleItem)?
            .custody();

        if let Custody::OwnedBy { holder, slot } = custody {
            if let Some(state) = self.items.get_mut(holder).and_then(Item::container_mut) {
                state.clear(slot);
            }
            if let Some(entry) = self.items.get_mut(item) {
                entry.custody = Custody::Limbo;
            }
            log::debug!("removed {:?} from {:?} slot {}", item, holder, slot);
        }
        Ok(())
    }

    /// Destroy an item, its contents included
    ///
    /// Detaches from any holder first, then frees the whole subtree. Every
    /// outstanding handle to a destroyed item goes stale.
    pub fn destroy_item(&mut self, item: ItemKey) -> Result<()> {
        self.items.get(item).ok_or(ContainerError::StaleItem)?;

        let subtree: Vec<ItemKey> = self.iter_container(item).collect();
        self.remove_item(item)?;
        self.items.remove(item);
        for key in subtree {
            self.items.remove(key);
        }
        log::debug!("destroyed {:?}", item);
        Ok(())
    }

    // ==================== Insertion ====================

    /// Catalog shortcut: create an item and insert it in one step
    ///
    /// The freshly created item is destroyed again when insertion fails, so
    /// a failed call leaks nothing into limbo.
    pub fn add_item(
        &mut self,
        container: ItemKey,
        type_id: ItemTypeId,
        count: u32,
        slot: SlotIndex,
        flags: AddFlags,
    ) -> Result<ItemKey> {
        let item = self.create_item(type_id, count)?;
        match self.add_existing(container, item, slot, flags) {
            Ok(result) => Ok(result),
            Err(err) => {
                self.items.remove(item);
                Err(err)
            }
        }
    }

    /// Transfer custody of an already constructed item into a container
    ///
    /// The item must be in limbo (`AlreadyOwned` otherwise) and must not be
    /// an ancestor of the container (`CyclicContainment`). Stackable items
    /// merge into the first same-type, attribute-free stack with room;
    /// overflow occupies a fresh slot unless `no_split` is set. On full
    /// absorption the source item is consumed and the merge target returned,
    /// so callers must not assume identity stability across a merge. Any
    /// failure leaves both the container and the item's custody unchanged.
    pub fn add_existing(
        &mut self,
        container: ItemKey,
        item: ItemKey,
        slot: SlotIndex,
        flags: AddFlags,
    ) -> Result<ItemKey> {
        let plan = stacking::plan_placement(&self.items, &self.catalog, container, item, slot, flags)?;

        // Commit phase: a validated plan cannot fail.
        let mut result = item;
        if let Some(merge) = &plan.merge {
            if let Some(target) = self.items.get_mut(merge.target) {
                target.count += merge.amount;
            }
            result = merge.target;
            log::debug!(
                "merged {} unit(s) of {:?} into {:?}",
                merge.amount,
                item,
                merge.target
            );
        }

        match plan.fresh {
            Some(index) => {
                if let Some(source) = self.items.get_mut(item) {
                    source.count = plan.remainder;
                    source.custody = Custody::OwnedBy {
                        holder: container,
                        slot: index,
                    };
                }
                if let Some(state) = self.items.get_mut(container).and_then(Item::container_mut) {
                    state.place(index, item);
                }
                result = item;
                log::debug!("placed {:?} into {:?} slot {}", item, container, index);
            }
            None => {
                // Fully absorbed by the merge target
                self.items.remove(item);
            }
        }

        Ok(result)
    }

    // ==================== Queries ====================

    /// Count of items held, top level only
    pub fn container_size(&self, container: ItemKey) -> Option<u32> {
        Some(self.item(container)?.container()?.size())
    }

    /// Effective slot limit
    pub fn capacity(&self, container: ItemKey) -> Option<Capacity> {
        Some(self.item(container)?.container()?.capacity())
    }

    /// Configured slot limit, regardless of unbounded mode
    pub fn max_capacity(&self, container: ItemKey) -> Option<u32> {
        Some(self.item(container)?.container()?.max_capacity())
    }

    /// Check whether the container holds nothing
    pub fn is_empty(&self, container: ItemKey) -> Option<bool> {
        Some(self.item(container)?.container()?.is_empty())
    }

    /// Free slots, optionally summed over every nested container
    ///
    /// Unbounded containers report the `u32::MAX` sentinel and the recursive
    /// sum saturates, so any unbounded container in the subtree makes the
    /// total `u32::MAX`.
    pub fn empty_slots(&self, container: ItemKey, recursive: bool) -> Option<u32> {
        let state = self.item(container)?.container()?;
        let mut slots = state.capacity().remaining(state.size());
        if recursive {
            for key in self.iter_container(container) {
                if let Some(sub) = self.item(key).and_then(Item::container) {
                    slots = slots.saturating_add(sub.capacity().remaining(sub.size()));
                }
            }
        }
        Some(slots)
    }

    /// Total number of items held across all nested containers
    ///
    /// Nested containers count as held items themselves, so this always
    /// equals the length of the sequence [`Self::iter_container`] yields.
    pub fn item_holding_count(&self, container: ItemKey) -> Option<u32> {
        self.item(container)?.container()?;
        Some(self.iter_container(container).count() as u32)
    }

    /// The item at a top-level slot index
    pub fn item_at(&self, container: ItemKey, index: u32) -> Option<ItemKey> {
        self.item(container)?.container()?.slot(index)
    }

    /// Check whether the item is held anywhere inside the container's
    /// subtree, at any depth
    pub fn is_holding_item(&self, container: ItemKey, item: ItemKey) -> bool {
        let mut current = item;
        while let Some(holder) = self
            .item(current)
            .and_then(|entry| entry.custody().holder())
        {
            if holder == container {
                return true;
            }
            current = holder;
        }
        false
    }

    /// Sum of matching item counts across the full subtree
    ///
    /// `subtype = None` matches regardless of the count/variant value.
    /// Stackable matches contribute their stack count, others contribute 1.
    pub fn item_type_count(
        &self,
        container: ItemKey,
        type_id: ItemTypeId,
        subtype: Option<u32>,
    ) -> Option<u32> {
        self.item(container)?.container()?;
        let stackable = self
            .catalog
            .get(type_id)
            .is_some_and(|item_type| item_type.stackable);

        let mut total = 0u32;
        for key in self.iter_container(container) {
            let Some(item) = self.item(key) else {
                continue;
            };
            if item.type_id != type_id {
                continue;
            }
            if let Some(wanted) = subtype {
                if item.count != wanted {
                    continue;
                }
            }
            total += if stackable { item.count } else { 1 };
        }
        Some(total)
    }

    /// Materialize the held items, top level only unless `recursive`
    pub fn items(&self, container: ItemKey, recursive: bool) -> Vec<ItemKey> {
        if recursive {
            self.iter_container(container).collect()
        } else {
            self.item(container)
                .and_then(Item::container)
                .map(|state| state.occupied().map(|(_, key)| key).collect())
                .unwrap_or_default()
        }
    }

    /// Total weight of an item: unit weight (× count for stackables) plus
    /// everything it holds, recursively
    pub fn total_weight(&self, item: ItemKey) -> Option<f32> {
        self.item(item)?;
        let mut total = self.unit_weight(item);
        for key in self.iter_container(item) {
            total += self.unit_weight(key);
        }
        Some(total)
    }

    fn unit_weight(&self, key: ItemKey) -> f32 {
        let Some(item) = self.item(key) else {
            return 0.0;
        };
        let Some(item_type) = self.catalog.get(item.type_id) else {
            return 0.0;
        };
        if item_type.stackable {
            item_type.weight * item.count as f32
        } else {
            item_type.weight
        }
    }

    /// Entity holding first-loot rights; `None` when unrestricted (or the
    /// handle does not resolve to a container)
    pub fn corpse_owner(&self, container: ItemKey) -> Option<CreatureId> {
        self.item(container)?.container()?.corpse_owner()
    }

    /// Restrict (or lift the restriction on) first-loot rights
    pub fn set_corpse_owner(&mut self, container: ItemKey, owner: Option<CreatureId>) -> Result<()> {
        let state = self
            .items
            .get_mut(container)
            .ok_or(ContainerError::StaleItem)?
            .container_mut()
            .ok_or(ContainerError::NotAContainer)?;
        state.set_corpse_owner(owner);
        Ok(())
    }

    // ==================== Attributes ====================

    /// Read an attribute off an item
    pub fn attribute(&self, item: ItemKey, key: AttributeKey) -> Option<&AttributeValue> {
        self.item(item)?.attributes.get(key)
    }

    /// Write an attribute, replacing any previous value under the key
    pub fn set_attribute(
        &mut self,
        item: ItemKey,
        key: AttributeKey,
        value: AttributeValue,
    ) -> Result<()> {
        let entry = self.items.get_mut(item).ok_or(ContainerError::StaleItem)?;
        entry.attributes.set(key, value);
        Ok(())
    }

    // ==================== Iteration & Description ====================

    /// Lazy depth-first pre-order walk over the container's subtree
    ///
    /// A stale handle or a slotless item yields an empty traversal.
    pub fn iter_container(&self, container: ItemKey) -> ContainerIterator<'_> {
        ContainerIterator::new(self, container)
    }

    /// Human-readable listing of the container's contents
    ///
    /// `legacy` selects the plain textual layout older clients expect.
    pub fn content_description(&self, container: ItemKey, legacy: bool) -> Option<String> {
        self.item(container)?.container()?;
        Some(describe::content_description(self, container, legacy))
    }

    // ==================== Reward Registration ====================

    /// Register the container as a timestamped reward receptacle
    ///
    /// Inserts the catalog's designated reward container (capacity check
    /// bypassed), stamps the `Date` attribute on both the new item and the
    /// container, and sets the reward flag. Returns false without mutating
    /// when the handle is stale, the target carries no slots, or no reward
    /// type is designated.
    ///
    /// Deliberately not idempotent: a repeated call inserts another reward
    /// item and overwrites the stamp.
    pub fn register_reward(&mut self, container: ItemKey) -> bool {
        self.register_reward_at(container, now_ms())
    }

    /// [`Self::register_reward`] with an explicit timestamp
    pub fn register_reward_at(&mut self, container: ItemKey, stamp_ms: i64) -> bool {
        let Some(holder) = self.items.get(container) else {
            log::warn!("register_reward: stale container handle {:?}", container);
            return false;
        };
        let Some(state) = holder.container() else {
            log::warn!("register_reward: {:?} is not a container", container);
            return false;
        };
        if state.is_reward_corpse() {
            log::warn!(
                "register_reward: {:?} is already registered, adding another reward container",
                container
            );
        }
        let Some(reward_type) = self.catalog.reward_container() else {
            log::warn!("register_reward: no reward container type designated");
            return false;
        };

        let nested = match self.add_item(
            container,
            reward_type,
            1,
            SlotIndex::Wherever,
            AddFlags::NONE.ignore_capacity(),
        ) {
            Ok(key) => key,
            Err(err) => {
                log::warn!("register_reward: insertion failed: {err}");
                return false;
            }
        };

        if let Some(item) = self.items.get_mut(nested) {
            item.attributes
                .set(AttributeKey::Date, AttributeValue::Int(stamp_ms));
        }
        if let Some(item) = self.items.get_mut(container) {
            item.attributes
                .set(AttributeKey::Date, AttributeValue::Int(stamp_ms));
            if let Some(state) = item.container_mut() {
                state.set_reward_corpse();
            }
        }
        true
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brume_catalog::ItemType;

    fn world() -> ItemWorld {
        let mut catalog = ItemCatalog::new();
        catalog
            .register(ItemTypeId(2148), ItemType::new("gold coin").stackable(100))
            .unwrap();
        catalog
            .register(ItemTypeId(1988), ItemType::new("backpack").with_capacity(8))
            .unwrap();
        ItemWorld::new(catalog)
    }

    #[test]
    fn test_create_in_limbo() {
        let mut world = world();
        let coin = world.create_item(ItemTypeId(2148), 30).unwrap();

        let item = world.item(coin).unwrap();
        assert!(item.custody().is_limbo());
        assert_eq!(item.count, 30);
        assert!(!item.is_container());
    }

    #[test]
    fn test_create_clamps_stack_count() {
        let mut world = world();
        let coin = world.create_item(ItemTypeId(2148), 250).unwrap();
        assert_eq!(world.item(coin).unwrap().count, 100);

        let zero = world.create_item(ItemTypeId(2148), 0).unwrap();
        assert_eq!(world.item(zero).unwrap().count, 1);
    }

    #[test]
    fn test_create_unknown_type() {
        let mut world = world();
        let err = world.create_item(ItemTypeId(9999), 1).unwrap_err();
        assert_eq!(err, ContainerError::UnknownItemType(ItemTypeId(9999)));
    }

    #[test]
    fn test_container_payload() {
        let mut world = world();
        let pack = world.create_item(ItemTypeId(1988), 1).unwrap();

        let item = world.item(pack).unwrap();
        assert!(item.is_container());
        assert_eq!(item.container().unwrap().max_capacity(), 8);
    }

    #[test]
    fn test_remove_limbo_is_noop() {
        let mut world = world();
        let coin = world.create_item(ItemTypeId(2148), 1).unwrap();

        world.remove_item(coin).unwrap();
        assert!(world.item(coin).unwrap().custody().is_limbo());
    }

    #[test]
    fn test_destroy_frees_subtree() {
        let mut world = world();
        let pack = world.create_item(ItemTypeId(1988), 1).unwrap();
        let coin = world
            .add_item(pack, ItemTypeId(2148), 10, SlotIndex::Wherever, AddFlags::NONE)
            .unwrap();
        assert_eq!(world.item_count(), 2);

        world.destroy_item(pack).unwrap();
        assert_eq!(world.item_count(), 0);
        assert!(!world.contains(pack));
        assert!(!world.contains(coin));
    }

    #[test]
    fn test_attribute_round_trip() {
        let mut world = world();
        let coin = world.create_item(ItemTypeId(2148), 1).unwrap();

        world
            .set_attribute(coin, AttributeKey::Label, AttributeValue::Text("tip".into()))
            .unwrap();
        assert_eq!(
            world
                .attribute(coin, AttributeKey::Label)
                .and_then(AttributeValue::as_text),
            Some("tip")
        );
    }
}
