//! Depth-first traversal over nested containers

use crate::item::ItemKey;
use crate::world::ItemWorld;

/// One-shot depth-first cursor over a container and all nested containers
///
/// Visits each top-level slot in index order; when a visited item is itself
/// a container, its contents are visited (pre-order) before the next
/// sibling. The traversal is lazy and finite, bounded by the total nested
/// item count. Create a fresh iterator to traverse again.
///
/// The iterator borrows the world immutably, so structural mutation during
/// traversal is rejected at compile time.
pub struct ContainerIterator<'a> {
    world: &'a ItemWorld,
    stack: Vec<Frame>,
}

/// Pending position inside one container
struct Frame {
    container: ItemKey,
    cursor: u32,
}

impl<'a> ContainerIterator<'a> {
    pub(crate) fn new(world: &'a ItemWorld, root: ItemKey) -> Self {
        // A stale handle or a slotless item yields an empty traversal
        let stack = if world.item(root).is_some_and(|item| item.is_container()) {
            vec![Frame {
                container: root,
                cursor: 0,
            }]
        } else {
            Vec::new()
        };
        Self { world, stack }
    }
}

impl Iterator for ContainerIterator<'_> {
    type Item = ItemKey;

    fn next(&mut self) -> Option<ItemKey> {
        let world = self.world;
        loop {
            let frame = self.stack.last_mut()?;
            let Some(state) = world.item(frame.container).and_then(|item| item.container())
            else {
                self.stack.pop();
                continue;
            };

            let mut found = None;
            while frame.cursor < state.slot_count() {
                let slot = state.slot(frame.cursor);
                frame.cursor += 1;
                if let Some(key) = slot {
                    found = Some(key);
                    break;
                }
            }

            match found {
                Some(key) => {
                    if world.item(key).is_some_and(|item| item.is_container()) {
                        self.stack.push(Frame {
                            container: key,
                            cursor: 0,
                        });
                    }
                    return Some(key);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
