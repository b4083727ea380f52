//! Placement planning for the insertion engine
//!
//! Insertion runs in two phases: a read-only planning pass that validates
//! custody, containment, and capacity and resolves merges, then a commit
//! pass that applies the plan. A plan that validates cannot fail to commit,
//! which is what makes failed insertions leave no trace.

use crate::error::{ContainerError, Result};
use crate::item::{Item, ItemKey};
use brume_catalog::ItemCatalog;
use brume_core::Arena;

/// Requested placement slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotIndex {
    /// Engine picks: merge into an eligible stack, then first vacant slot
    #[default]
    Wherever,
    /// Explicit slot index; fails `InvalidIndex` when occupied or out of
    /// range unless the force flag is set
    At(u32),
}

/// Behavior flags for insertion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddFlags {
    /// Degrade an unusable explicit-index request (occupied or out of
    /// range) to automatic placement
    pub force: bool,
    /// Privileged insert: grow past the slot limit when full
    pub ignore_capacity: bool,
    /// Reject instead of spilling merge overflow into a fresh slot
    pub no_split: bool,
}

impl AddFlags {
    /// No flags set
    pub const NONE: Self = Self {
        force: false,
        ignore_capacity: false,
        no_split: false,
    };

    /// Set the force flag
    pub const fn force(mut self) -> Self {
        self.force = true;
        self
    }

    /// Set the ignore-capacity flag
    pub const fn ignore_capacity(mut self) -> Self {
        self.ignore_capacity = true;
        self
    }

    /// Set the no-split flag
    pub const fn no_split(mut self) -> Self {
        self.no_split = true;
        self
    }
}

/// Units to absorb into an existing stack
#[derive(Debug)]
pub(crate) struct Merge {
    pub target: ItemKey,
    pub amount: u32,
}

/// A fully resolved placement
///
/// `remainder` is what stays on the source item after the merge (its full
/// count when no merge applies); `fresh` is the slot the source occupies
/// when the remainder is non-zero. `fresh == None` means full absorption:
/// the source item is consumed.
#[derive(Debug)]
pub(crate) struct Plan {
    pub merge: Option<Merge>,
    pub fresh: Option<u32>,
    pub remainder: u32,
}

/// Resolve where and how an item lands in a container, without mutating
pub(crate) fn plan_placement(
    items: &Arena<Item>,
    catalog: &ItemCatalog,
    container: ItemKey,
    item: ItemKey,
    slot: SlotIndex,
    flags: AddFlags,
) -> Result<Plan> {
    let source = items.get(item).ok_or(ContainerError::StaleItem)?;
    let holder = items.get(container).ok_or(ContainerError::StaleItem)?;
    let state = holder.container().ok_or(ContainerError::NotAContainer)?;

    if !source.custody().is_limbo() {
        return Err(ContainerError::AlreadyOwned);
    }
    if would_cycle(items, container, item) {
        return Err(ContainerError::CyclicContainment);
    }

    let item_type = catalog
        .get(source.type_id)
        .ok_or(ContainerError::UnknownItemType(source.type_id))?;

    if let SlotIndex::At(index) = slot {
        if index < state.slot_count() && state.slot(index).is_none() {
            return Ok(Plan {
                merge: None,
                fresh: Some(index),
                remainder: source.count,
            });
        }
        // occupied or out of range
        if !flags.force {
            return Err(ContainerError::InvalidIndex(index));
        }
        // force degrades the request to automatic placement below
    }

    let mut merge = None;
    let mut remainder = source.count;
    if item_type.stackable && source.attributes.is_empty() {
        let stack_size = u32::from(item_type.stack_size);
        for (_, key) in state.occupied() {
            let Some(candidate) = items.get(key) else {
                continue;
            };
            if candidate.type_id == source.type_id
                && candidate.attributes.is_empty()
                && candidate.count < stack_size
            {
                let amount = remainder.min(stack_size - candidate.count);
                merge = Some(Merge {
                    target: key,
                    amount,
                });
                remainder -= amount;
                break;
            }
        }
    }

    if merge.is_some() {
        // count 0 only occurs on subtype-carrying items, which never merge
        if remainder == 0 {
            return Ok(Plan {
                merge,
                fresh: None,
                remainder,
            });
        }
        if flags.no_split {
            return Err(ContainerError::ContainerFull);
        }
    }

    let fresh = match state.vacant_index() {
        Some(index) => index,
        None if flags.ignore_capacity => state.slot_count(),
        None => return Err(ContainerError::ContainerFull),
    };

    Ok(Plan {
        merge,
        fresh: Some(fresh),
        remainder,
    })
}

/// Check whether placing `item` into `container` would close a containment
/// loop: true when `container` is `item` itself or any of its descendants.
fn would_cycle(items: &Arena<Item>, container: ItemKey, item: ItemKey) -> bool {
    let mut current = container;
    loop {
        if current == item {
            return true;
        }
        match items.get(current).map(|entry| entry.custody()) {
            Some(custody) => match custody.holder() {
                Some(holder) => current = holder,
                None => return false,
            },
            None => return false,
        }
    }
}
