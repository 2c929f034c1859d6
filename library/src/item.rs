//! Library item model and element duplication.
//!
//! A library item is a reusable group of scene elements. Elements are kept as
//! open-ended JSON objects: this crate only reads and rewrites the identity
//! and binding fields it needs to duplicate them safely, and passes every
//! other property through untouched.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::selection::Identified;

/// Unique identifier for a library item.
pub type LibraryItemId = String;

/// Publication status of a library item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryItemStatus {
    /// Shared to the public library; hidden from the personal item grid.
    Published,
    /// Local to this user's library.
    #[default]
    Unpublished,
}

/// A reusable set of scene elements stored in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryItem {
    /// Unique identifier for this item.
    pub id: LibraryItemId,
    /// Publication status.
    #[serde(default)]
    pub status: LibraryItemStatus,
    /// Scene elements, each a JSON object carrying at least an `id`.
    pub elements: Vec<Value>,
    /// Milliseconds since the Unix epoch when the item was added.
    #[serde(default)]
    pub created: i64,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LibraryItem {
    /// Create an unpublished item with a freshly generated id.
    #[must_use]
    pub fn new(elements: Vec<Value>, created: i64) -> Self {
        Self {
            id: new_id(),
            status: LibraryItemStatus::Unpublished,
            elements,
            created,
            name: None,
        }
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == LibraryItemStatus::Published
    }

    /// A copy of this item whose elements have been through [`duplicate_elements`].
    #[must_use]
    pub fn duplicated<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            elements: duplicate_elements(&self.elements, rng),
            ..self.clone()
        }
    }
}

impl Identified for LibraryItem {
    fn item_id(&self) -> Option<&str> {
        Some(self.id.as_str())
    }
}

/// Items shown in the personal grid: everything not published, in library order.
#[must_use]
pub fn unpublished_items(items: &[LibraryItem]) -> Vec<&LibraryItem> {
    items.iter().filter(|item| !item.is_published()).collect()
}

/// Duplicate a set of elements so the copy shares no identity with the source.
///
/// Every element gets a new id and a new random `seed`. Group ids are remapped
/// consistently across the set. References to elements inside the set
/// (`containerId`, `frameId`, `boundElements[].id`, `startBinding.elementId`,
/// `endBinding.elementId`) follow their targets to the new ids; references
/// to anything outside the set are left as they are.
pub fn duplicate_elements<R: Rng + ?Sized>(elements: &[Value], rng: &mut R) -> Vec<Value> {
    let ids: HashMap<String, String> = elements
        .iter()
        .filter_map(|el| el.get("id").and_then(Value::as_str))
        .map(|id| (id.to_owned(), new_id()))
        .collect();
    let mut groups: HashMap<String, String> = HashMap::new();

    elements
        .iter()
        .map(|el| duplicate_element(el, &ids, &mut groups, &mut *rng))
        .collect()
}

fn duplicate_element<R: Rng + ?Sized>(
    element: &Value,
    ids: &HashMap<String, String>,
    groups: &mut HashMap<String, String>,
    rng: &mut R,
) -> Value {
    let mut copy = element.clone();
    if let Value::Object(map) = &mut copy {
        remap_field(map, "id", ids);
        remap_field(map, "containerId", ids);
        remap_field(map, "frameId", ids);

        if let Some(Value::Array(bound)) = map.get_mut("boundElements") {
            for entry in bound.iter_mut() {
                if let Value::Object(entry) = entry {
                    remap_field(entry, "id", ids);
                }
            }
        }
        for key in ["startBinding", "endBinding"] {
            if let Some(Value::Object(binding)) = map.get_mut(key) {
                remap_field(binding, "elementId", ids);
            }
        }
        if let Some(Value::Array(group_ids)) = map.get_mut("groupIds") {
            for group_id in group_ids.iter_mut() {
                if let Value::String(group_id) = group_id {
                    let next = groups.entry(group_id.clone()).or_insert_with(new_id);
                    group_id.clone_from(next);
                }
            }
        }

        map.insert("seed".to_owned(), Value::from(rng.random_range(1..i32::MAX)));
    }
    copy
}

fn remap_field(map: &mut Map<String, Value>, key: &str, ids: &HashMap<String, String>) {
    if let Some(Value::String(current)) = map.get_mut(key) {
        if let Some(next) = ids.get(current.as_str()) {
            current.clone_from(next);
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
