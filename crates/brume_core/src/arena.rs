//! Arena - Generational index-based storage
//!
//! Provides O(1) insertion, removal, and lookup with use-after-free
//! detection. Vacant entries form an intrusive free list, so removal never
//! shifts other entries and indices stay stable for the lifetime of the
//! arena.

use core::marker::PhantomData;

/// Key for arena access with generation tracking
pub struct Key<T> {
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    /// Create a new key
    #[inline]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self {
            index,
            generation,
            _marker: PhantomData,
        }
    }

    /// Get the raw index
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Get the generation
    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Create a null/invalid key
    #[inline]
    pub const fn null() -> Self {
        Self::new(u32::MAX, 0)
    }

    /// Check if key is null
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

// Manual impls: derives would demand bounds on `T` even though the key
// never holds one.
impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T> PartialEq for Key<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Key<T> {}

impl<T> core::hash::Hash for Key<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> Default for Key<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> core::fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_null() {
            write!(f, "Key(null)")
        } else {
            write!(f, "Key({}v{})", self.index, self.generation)
        }
    }
}

/// Entry payload: occupied value or a link in the free list
enum Entry<T> {
    Occupied(T),
    Vacant { next_free: Option<u32> },
}

/// Arena slot with its current generation
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Arena - generational index storage
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    len: usize,
}

impl<T> Arena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Insert a value and get its key
    pub fn insert(&mut self, value: T) -> Key<T> {
        self.len += 1;

        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            self.free_head = match slot.entry {
                Entry::Vacant { next_free } => next_free,
                Entry::Occupied(_) => unreachable!("free list points at occupied slot"),
            };
            slot.entry = Entry::Occupied(value);
            Key::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                entry: Entry::Occupied(value),
            });
            Key::new(index, 0)
        }
    }

    /// Remove a value by key
    pub fn remove(&mut self, key: Key<T>) -> Option<T> {
        let slot = self.slots.get_mut(key.index as usize)?;

        if slot.generation != key.generation || matches!(slot.entry, Entry::Vacant { .. }) {
            return None;
        }

        slot.generation = slot.generation.wrapping_add(1);
        let entry = core::mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(key.index);
        self.len -= 1;

        match entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => unreachable!(),
        }
    }

    /// Get a reference to a value
    pub fn get(&self, key: Key<T>) -> Option<&T> {
        let slot = self.slots.get(key.index as usize)?;
        if slot.generation != key.generation {
            return None;
        }
        match &slot.entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    /// Get a mutable reference to a value
    pub fn get_mut(&mut self, key: Key<T>) -> Option<&mut T> {
        let slot = self.slots.get_mut(key.index as usize)?;
        if slot.generation != key.generation {
            return None;
        }
        match &mut slot.entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    /// Check if a key is valid
    pub fn contains_key(&self, key: Key<T>) -> bool {
        self.get(key).is_some()
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (Key<T>, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            match &slot.entry {
                Entry::Occupied(value) => Some((Key::new(i as u32, slot.generation), value)),
                Entry::Vacant { .. } => None,
            }
        })
    }

    /// Iterate over keys only
    pub fn keys(&self) -> impl Iterator<Item = Key<T>> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate over values only
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_inserts_extend_the_slot_vector() {
        let mut arena: Arena<&str> = Arena::new();

        // No free list yet, so keys land on consecutive fresh slots
        let a = arena.insert("sword");
        let b = arena.insert("shield");

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.get(a), Some(&"sword"));
        assert_eq!(arena.get(b), Some(&"shield"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_removed_slot_heads_the_free_list() {
        let mut arena: Arena<i32> = Arena::new();

        let first = arena.insert(1);
        let second = arena.insert(2);

        assert_eq!(arena.remove(first), Some(1));
        assert_eq!(arena.remove(first), None);
        assert_eq!(arena.len(), 1);

        // The vacated slot is the free head, so the next insert lands
        // there instead of growing the vector
        let reused = arena.insert(3);
        assert_eq!(reused.index(), first.index());
        assert_eq!(arena.get(second), Some(&2));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_reused_slot_bumps_generation() {
        let mut arena: Arena<i32> = Arena::new();

        let old = arena.insert(42);
        arena.remove(old);
        let new = arena.insert(100);

        // Same slot, newer generation: the old key is dead
        assert_eq!(old.index(), new.index());
        assert_ne!(old.generation(), new.generation());
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&100));
    }

    #[test]
    fn test_arena_free_list_reuse() {
        let mut arena: Arena<&str> = Arena::new();

        let a = arena.insert("a");
        let b = arena.insert("b");
        let c = arena.insert("c");
        arena.remove(a);
        arena.remove(c);

        // Most recently freed slot is reused first
        let d = arena.insert("d");
        assert_eq!(d.index(), c.index());
        let e = arena.insert("e");
        assert_eq!(e.index(), a.index());

        assert_eq!(arena.len(), 3);
        assert_eq!(arena.get(b), Some(&"b"));
    }

    #[test]
    fn test_arena_iter_order() {
        let mut arena: Arena<i32> = Arena::new();

        arena.insert(1);
        let mid = arena.insert(2);
        arena.insert(3);
        arena.remove(mid);

        let values: Vec<i32> = arena.values().copied().collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn test_null_key() {
        let arena: Arena<i32> = Arena::new();
        let null = Key::<i32>::null();

        assert!(null.is_null());
        assert_eq!(arena.get(null), None);
    }
}
