//! Content summaries
//!
//! Flattens the full subtree into one listing. Non-empty sub-containers are
//! skipped: their contents speak for them. Empty sub-containers and leaf
//! items are listed as "name × count". An empty subtree reads "nothing".
//!
//! The modern layout wraps each entry in `{type_id|text}` markers the client
//! turns into inspect links; the legacy layout is the plain comma-separated
//! text older clients expect.

use crate::item::{Item, ItemKey};
use crate::world::ItemWorld;
use brume_catalog::ItemType;
use std::fmt::Write;

pub(crate) fn content_description(world: &ItemWorld, container: ItemKey, legacy: bool) -> String {
    let mut out = String::new();
    let mut first = true;

    for key in world.iter_container(container) {
        let Some(item) = world.item(key) else {
            continue;
        };
        if item.container().is_some_and(|state| !state.is_empty()) {
            continue;
        }
        let Some(item_type) = world.catalog().get(item.type_id) else {
            continue;
        };

        if first {
            first = false;
        } else {
            out.push_str(", ");
        }
        if legacy {
            out.push_str(&name_description(item_type, item));
        } else {
            let _ = write!(
                out,
                "{{{}|{}}}",
                item.type_id.raw(),
                name_description(item_type, item)
            );
        }
    }

    if first {
        out.push_str("nothing");
    }
    out
}

fn name_description(item_type: &ItemType, item: &Item) -> String {
    if item_type.stackable && item.count > 1 {
        format!("{} {}", item.count, item_type.plural_name())
    } else {
        format!("a {}", item_type.name)
    }
}
