//! Sortable tag list adapter.
//!
//! Sequencing and animation belong to the external sortable library; this
//! module only supplies its options and turns the settled child order into a
//! `reorder-tags` notification.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

use serde::Serialize;

use crate::action::Action;
use crate::consts::{SORT_ANIMATION_MS, SORT_GHOST_CLASS, SORT_HANDLE_SELECTOR};
use crate::outbound::Outbound;

/// Options object handed to the sortable library's constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortableOptions {
    pub animation: u32,
    pub handle: String,
    pub ghost_class: String,
}

impl Default for SortableOptions {
    fn default() -> Self {
        Self {
            animation: SORT_ANIMATION_MS,
            handle: SORT_HANDLE_SELECTOR.to_owned(),
            ghost_class: SORT_GHOST_CLASS.to_owned(),
        }
    }
}

/// Report the list order after a drag ends.
///
/// `children` yields each child's `data-tag-id`, in DOM order. Children
/// without an id (placeholders, separators) are skipped.
pub fn on_end<I>(children: I) -> Vec<Action>
where
    I: IntoIterator<Item = Option<String>>,
{
    let tag_ids: Vec<String> = children.into_iter().flatten().collect();
    log::debug!("tags reordered: {} ids", tag_ids.len());
    vec![Action::Push(Outbound::ReorderTags { tag_ids })]
}
