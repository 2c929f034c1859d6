//! Library panel state: items, pending elements, selection, and host actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host UI renders the panel from [`LibraryPanel::layout`] and forwards
//! clicks and drags back into it. Clicks on an item's checkbox go through
//! [`LibraryPanel::on_item_select_toggle`]; clicks on the item body produce a
//! [`PanelAction`] the host applies to the canvas; drags produce a
//! [`DragPayload`]. The panel never touches the canvas itself.
//!
//! Only unpublished items are shown and selectable. Published items stay in
//! the library and can still be inserted if they were selected earlier.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use rand::Rng;
use serde_json::Value;
use tracing::{debug, warn};

use crate::batch::{RenderBatches, items_rendered_per_batch};
use crate::config::PanelConfig;
use crate::error::LibraryError;
use crate::export::DragPayload;
use crate::input::Modifiers;
use crate::item::{LibraryItem, unpublished_items};
use crate::selection::{Identified, SelectionState, ToggleOutcome};

/// Actions returned from click handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    /// Insert these items (already duplicated) onto the canvas.
    InsertItems(Vec<LibraryItem>),
    /// Save the pending canvas elements as a new library item.
    AddToLibrary(Vec<Value>),
}

/// One tile in the item grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionEntry<'a> {
    /// Item id; `None` for the pending tile.
    pub id: Option<&'a str>,
    pub elements: &'a [Value],
    pub selected: bool,
}

impl Identified for SectionEntry<'_> {
    fn item_id(&self) -> Option<&str> {
        self.id
    }
}

/// What the panel body shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent<'a> {
    /// Nothing pending and no unpublished items.
    NoItems,
    /// The item grid: an optional pending tile followed by the unpublished items.
    Grid {
        pending: Option<SectionEntry<'a>>,
        items: Vec<SectionEntry<'a>>,
    },
}

/// Render model for the whole panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout<'a> {
    /// Show the loading spinner.
    pub loading: bool,
    pub content: PanelContent<'a>,
}

/// State behind the library item picker.
#[derive(Debug, Clone, Default)]
pub struct LibraryPanel {
    items: Vec<LibraryItem>,
    pending_elements: Vec<Value>,
    selection: SelectionState,
    loading: bool,
    config: PanelConfig,
}

impl LibraryPanel {
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[must_use]
    pub fn with_items(items: Vec<LibraryItem>, config: PanelConfig) -> Self {
        Self { items, config, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the library contents. The selection is kept as is.
    pub fn set_items(&mut self, items: Vec<LibraryItem>) {
        self.items = items;
    }

    /// Set the canvas elements offered for saving as a new item.
    pub fn set_pending_elements(&mut self, elements: Vec<Value>) {
        self.pending_elements = elements;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Discard the selection, e.g. when switching to a different item view.
    pub fn reset_selection(&mut self) {
        self.selection.clear();
    }

    // --- Queries ---

    #[must_use]
    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    #[must_use]
    pub fn pending_elements(&self) -> &[Value] {
        &self.pending_elements
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Items visible in the grid, in library order.
    #[must_use]
    pub fn unpublished_items(&self) -> Vec<&LibraryItem> {
        unpublished_items(&self.items)
    }

    #[must_use]
    pub fn is_item_selected(&self, id: Option<&str>) -> bool {
        self.selection.is_selected(id)
    }

    // --- Selection ---

    /// Toggle an item's selection; shift extends from the last selected item
    /// over the visible items. Returns `None` for the pending tile.
    pub fn on_item_select_toggle(&mut self, id: Option<&str>, modifiers: Modifiers) -> Option<ToggleOutcome> {
        let id = id?;
        let visible = unpublished_items(&self.items);
        Some(self.selection.toggle(id, modifiers.extends_range(), &visible))
    }

    // --- Insert / drag ---

    /// Items that a click or drag on `id` carries, with duplicated elements.
    ///
    /// A selected `id` carries the whole selection in library order; an
    /// unselected one carries only itself.
    pub fn inserted_items<R: Rng + ?Sized>(&self, id: &str, rng: &mut R) -> Vec<LibraryItem> {
        let carries_selection = self.selection.is_selected(Some(id));
        self.items
            .iter()
            .filter(|item| {
                if carries_selection {
                    self.selection.is_selected(Some(&item.id))
                } else {
                    item.id == id
                }
            })
            .map(|item| item.duplicated(&mut *rng))
            .collect()
    }

    /// Click on an item body. The pending tile (no id) does nothing here.
    pub fn on_item_click<R: Rng + ?Sized>(&self, id: Option<&str>, rng: &mut R) -> Option<PanelAction> {
        let id = id?;
        let items = self.inserted_items(id, rng);
        debug!(id, count = items.len(), "inserting library items");
        Some(PanelAction::InsertItems(items))
    }

    /// Click on the pending tile.
    #[must_use]
    pub fn on_add_to_library_click(&self) -> PanelAction {
        PanelAction::AddToLibrary(self.pending_elements.clone())
    }

    /// Drag started on `id`: serialize what a click would insert.
    pub fn on_item_drag<R: Rng + ?Sized>(&self, id: &str, rng: &mut R) -> Result<DragPayload, LibraryError> {
        let items = self.inserted_items(id, rng);
        if items.is_empty() {
            warn!(id, "drag started on unknown library item");
            return Err(LibraryError::UnknownItem(id.to_owned()));
        }
        DragPayload::for_items(&items)
    }

    // --- Rendering ---

    #[must_use]
    pub fn layout(&self) -> PanelLayout<'_> {
        let visible = self.unpublished_items();
        let content = if self.pending_elements.is_empty() && visible.is_empty() {
            PanelContent::NoItems
        } else {
            let pending = (!self.pending_elements.is_empty()).then(|| SectionEntry {
                id: None,
                elements: &self.pending_elements,
                selected: false,
            });
            let items = visible
                .into_iter()
                .map(|item| SectionEntry {
                    id: Some(item.id.as_str()),
                    elements: &item.elements,
                    selected: self.selection.is_selected(Some(&item.id)),
                })
                .collect();
            PanelContent::Grid { pending, items }
        };
        PanelLayout { loading: self.loading, content }
    }

    /// Batch size given how many previews are cached, measured against the
    /// whole library.
    #[must_use]
    pub fn items_rendered_per_batch(&self, cached_previews: usize) -> usize {
        items_rendered_per_batch(&self.config, cached_previews, self.items.len())
    }

    /// Reveal cursor over the visible items.
    #[must_use]
    pub fn render_batches(&self, cached_previews: usize) -> RenderBatches {
        RenderBatches::new(self.unpublished_items().len(), self.items_rendered_per_batch(cached_previews))
    }
}
