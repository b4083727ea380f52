//! Items, custody, and container slot state

use brume_core::{AttributeBag, Capacity, CreatureId, ItemTypeId, Key};

/// Handle to an item stored in an [`crate::world::ItemWorld`]
pub type ItemKey = Key<Item>;

/// Where an item's authoritative owner record points
///
/// Every item is in exactly one custody state. Insertion requires limbo and
/// moves the item to `OwnedBy`; removal reverts it to limbo. An item is
/// never reachable from two containers at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Custody {
    /// Unowned, transient: freshly created or just removed
    Limbo,
    /// Held by a container at a specific slot
    OwnedBy {
        /// The holding container item
        holder: ItemKey,
        /// Slot index inside the holder
        slot: u32,
    },
}

impl Custody {
    /// Check for the unowned state
    #[inline]
    pub const fn is_limbo(&self) -> bool {
        matches!(self, Self::Limbo)
    }

    /// The holding container, if any
    #[inline]
    pub const fn holder(&self) -> Option<ItemKey> {
        match self {
            Self::Limbo => None,
            Self::OwnedBy { holder, .. } => Some(*holder),
        }
    }
}

/// A unit of game content; carries slots when its type is a container
#[derive(Debug)]
pub struct Item {
    /// Catalog identifier
    pub type_id: ItemTypeId,
    /// Stack quantity for stackable types, variant/subtype otherwise
    pub count: u32,
    /// Instance attributes; a non-empty bag blocks stack merging
    pub attributes: AttributeBag,
    pub(crate) custody: Custody,
    pub(crate) container: Option<ContainerState>,
}

impl Item {
    pub(crate) fn new(type_id: ItemTypeId, count: u32, container: Option<ContainerState>) -> Self {
        Self {
            type_id,
            count,
            attributes: AttributeBag::new(),
            custody: Custody::Limbo,
            container,
        }
    }

    /// Current custody state
    #[inline]
    pub fn custody(&self) -> Custody {
        self.custody
    }

    /// Check whether this item carries slots
    #[inline]
    pub fn is_container(&self) -> bool {
        self.container.is_some()
    }

    /// Slot state, when this item is a container
    #[inline]
    pub fn container(&self) -> Option<&ContainerState> {
        self.container.as_ref()
    }

    pub(crate) fn container_mut(&mut self) -> Option<&mut ContainerState> {
        self.container.as_mut()
    }
}

/// Slot state of a container item
///
/// Bounded containers materialize all slots up front; unbounded ones grow
/// on demand. Vacated indices become holes that automatic placement refills,
/// so iteration order over occupied slots is ascending index and stable; in
/// the append-only case it matches insertion order.
#[derive(Debug)]
pub struct ContainerState {
    max_capacity: u32,
    unbounded: bool,
    slots: Vec<Option<ItemKey>>,
    corpse_owner: Option<CreatureId>,
    reward_corpse: bool,
}

impl ContainerState {
    pub(crate) fn new(max_capacity: u32, unbounded: bool) -> Self {
        let slots = if unbounded {
            Vec::new()
        } else {
            vec![None; max_capacity as usize]
        };
        Self {
            max_capacity,
            unbounded,
            slots,
            corpse_owner: None,
            reward_corpse: false,
        }
    }

    /// Count of items currently held, top level only
    pub fn size(&self) -> u32 {
        self.slots.iter().filter(|slot| slot.is_some()).count() as u32
    }

    /// Effective slot limit
    pub fn capacity(&self) -> Capacity {
        if self.unbounded {
            Capacity::Unbounded
        } else {
            Capacity::Bounded(self.max_capacity)
        }
    }

    /// Configured slot limit, regardless of unbounded mode
    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    /// Check whether no items are held
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// The item at a slot index, if the index is materialized and occupied
    pub fn slot(&self, index: u32) -> Option<ItemKey> {
        self.slots.get(index as usize).copied().flatten()
    }

    /// Number of materialized slots (occupied or holes)
    pub fn slot_count(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Occupied slots in ascending index order
    pub fn occupied(&self) -> impl Iterator<Item = (u32, ItemKey)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|key| (i as u32, key)))
    }

    /// First index automatic placement would fill
    ///
    /// `None` means the container is full; unbounded containers always have
    /// a vacancy (possibly a fresh slot past the current end).
    pub(crate) fn vacant_index(&self) -> Option<u32> {
        let hole = self.slots.iter().position(|slot| slot.is_none());
        match hole {
            Some(index) => Some(index as u32),
            None if self.unbounded => Some(self.slots.len() as u32),
            None => None,
        }
    }

    pub(crate) fn place(&mut self, index: u32, key: ItemKey) {
        let index = index as usize;
        if index == self.slots.len() {
            self.slots.push(Some(key));
        } else {
            self.slots[index] = Some(key);
        }
    }

    pub(crate) fn clear(&mut self, index: u32) -> Option<ItemKey> {
        self.slots.get_mut(index as usize).and_then(Option::take)
    }

    /// Entity holding first-loot rights; `None` means unrestricted
    pub fn corpse_owner(&self) -> Option<CreatureId> {
        self.corpse_owner
    }

    pub(crate) fn set_corpse_owner(&mut self, owner: Option<CreatureId>) {
        self.corpse_owner = owner;
    }

    /// Whether this container has been registered as a reward receptacle
    pub fn is_reward_corpse(&self) -> bool {
        self.reward_corpse
    }

    pub(crate) fn set_reward_corpse(&mut self) {
        self.reward_corpse = true;
    }
}
