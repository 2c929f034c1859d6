//! Range-aware selection over the visible library items.
//!
//! `SelectionState` holds the selected item ids plus an anchor: the id of the
//! most recent item that was *selected* (not deselected). A plain toggle adds
//! or removes one id. A range toggle (shift-click) on an unselected item adds
//! every item between the anchor and the clicked item, measured by position
//! in the collection the caller passes in, on top of whatever was already
//! selected.
//!
//! The collection is supplied per call rather than stored, because the panel
//! filters it (published items are hidden) and the filter can change between
//! clicks. When the anchor or the clicked id cannot be found in the current
//! collection the range toggle degrades to a plain add.
//!
//! Ids that are no longer part of the collection stay selected until they are
//! toggled off or the state is discarded.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::item::LibraryItemId;

/// Anything that occupies a slot in a selectable collection.
///
/// `None` marks an entry that has no id yet (the pending item) and can never
/// be selected.
pub trait Identified {
    fn item_id(&self) -> Option<&str>;
}

impl Identified for str {
    fn item_id(&self) -> Option<&str> {
        Some(self)
    }
}

impl Identified for String {
    fn item_id(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn item_id(&self) -> Option<&str> {
        (**self).item_id()
    }
}

impl<T: Identified> Identified for Option<T> {
    fn item_id(&self) -> Option<&str> {
        self.as_ref().and_then(Identified::item_id)
    }
}

/// What a call to [`SelectionState::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The id was added on its own.
    Selected,
    /// A range was added; `added` counts ids that were not selected before.
    RangeSelected { added: usize },
    /// A range was requested but the anchor or target was missing from the
    /// collection, so only the id was added.
    RangeFallback,
    /// The id was already selected and has been removed.
    Deselected,
}

/// Selected library item ids plus the range anchor.
///
/// Ids are unique and kept in a stable order: insertion order for plain
/// toggles, collection order after a range toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: Vec<LibraryItemId>,
    anchor: Option<LibraryItemId>,
}

impl SelectionState {
    /// Create an empty selection with no anchor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection pre-populated with `ids` (duplicates dropped) and no anchor.
    pub fn seeded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<LibraryItemId>,
    {
        let mut state = Self::new();
        for id in ids {
            let id = id.into();
            if !state.contains(&id) {
                state.selected.push(id);
            }
        }
        state
    }

    /// Selected ids in their stable order.
    #[must_use]
    pub fn selected(&self) -> &[LibraryItemId] {
        &self.selected
    }

    /// The anchor used as one end of the next range toggle.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether `id` is selected. An absent id is never selected.
    #[must_use]
    pub fn is_selected(&self, id: Option<&str>) -> bool {
        id.is_some_and(|id| self.contains(id))
    }

    fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Toggle `id`, optionally extending from the anchor over `collection`.
    ///
    /// - `id` already selected: remove it and clear the anchor.
    /// - `extend_range` with an anchor, both found in `collection`: add every
    ///   item between them (inclusive, either direction); nothing already
    ///   selected is dropped.
    /// - otherwise: add `id` alone.
    ///
    /// Every selecting branch moves the anchor to `id`.
    pub fn toggle<T: Identified>(&mut self, id: &str, extend_range: bool, collection: &[T]) -> ToggleOutcome {
        if self.contains(id) {
            self.selected.retain(|s| s != id);
            self.anchor = None;
            debug!(id, remaining = self.selected.len(), "library item deselected");
            return ToggleOutcome::Deselected;
        }

        let bounds = if extend_range {
            self.anchor
                .as_deref()
                .map(|anchor| (position(collection, anchor), position(collection, id)))
        } else {
            None
        };

        let outcome = match bounds {
            Some((Some(start), Some(end))) => {
                let added = self.extend(collection, start.min(end)..=start.max(end));
                ToggleOutcome::RangeSelected { added }
            }
            Some(_) => {
                debug!(id, anchor = ?self.anchor, "range anchor or target not visible, adding item alone");
                self.selected.push(id.to_owned());
                ToggleOutcome::RangeFallback
            }
            None => {
                self.selected.push(id.to_owned());
                ToggleOutcome::Selected
            }
        };

        self.anchor = Some(id.to_owned());
        debug!(id, selected = self.selected.len(), ?outcome, "library item selected");
        outcome
    }

    /// Reducer form of [`Self::toggle`]: consume the state and return the next one.
    #[must_use]
    pub fn toggled<T: Identified>(mut self, id: &str, extend_range: bool, collection: &[T]) -> Self {
        self.toggle(id, extend_range, collection);
        self
    }

    /// Drop every selected id and the anchor.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// Union the selection with the items whose index falls in `range`.
    ///
    /// Items found in `collection` end up in collection order; selected ids
    /// that are not part of `collection` follow in their previous order.
    fn extend<T: Identified>(&mut self, collection: &[T], range: RangeInclusive<usize>) -> usize {
        let before = self.selected.len();
        let mut next: Vec<LibraryItemId> = Vec::with_capacity(before + range.clone().count());

        for (idx, item) in collection.iter().enumerate() {
            let Some(item_id) = item.item_id() else {
                continue;
            };
            if (range.contains(&idx) || self.contains(item_id)) && !next.iter().any(|s| s == item_id) {
                next.push(item_id.to_owned());
            }
        }
        for id in &self.selected {
            if !next.contains(id) {
                next.push(id.clone());
            }
        }

        let added = next.len().saturating_sub(before);
        self.selected = next;
        added
    }
}

fn position<T: Identified>(collection: &[T], id: &str) -> Option<usize> {
    collection.iter().position(|item| item.item_id() == Some(id))
}
