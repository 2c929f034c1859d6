//! Library document codec.
//!
//! The same JSON document is used for library files on disk and for the drag
//! payload when items are dragged out of the panel:
//!
//! ```json
//! { "type": "excalidrawlib", "version": 2, "source": "…", "libraryItems": [ … ] }
//! ```
//!
//! Version 1 documents stored a bare `library` array of element arrays with
//! no item metadata; they are still readable and come back as unpublished
//! items with generated ids.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{LIBRARY_DOCUMENT_TYPE, LIBRARY_FORMAT_VERSION, LIBRARY_MIME_TYPE, LIBRARY_SOURCE};
use crate::error::LibraryError;
use crate::item::LibraryItem;

/// Data attached to a drag that carries library items out of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// MIME type the data is registered under.
    pub mime: &'static str,
    /// Serialized library document.
    pub data: String,
}

impl DragPayload {
    /// Serialize `items` into a payload under the library MIME type.
    pub fn for_items(items: &[LibraryItem]) -> Result<Self, LibraryError> {
        Ok(Self {
            mime: LIBRARY_MIME_TYPE,
            data: serialize_library(items)?,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LibraryDocumentOut<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u32,
    source: &'static str,
    library_items: &'a [LibraryItem],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibraryDocumentIn {
    #[serde(rename = "type")]
    kind: Option<String>,
    version: Option<u64>,
    library_items: Option<Vec<LibraryItem>>,
    library: Option<Vec<Vec<Value>>>,
}

/// Serialize items as a version 2 library document.
pub fn serialize_library(items: &[LibraryItem]) -> Result<String, LibraryError> {
    let doc = LibraryDocumentOut {
        kind: LIBRARY_DOCUMENT_TYPE,
        version: LIBRARY_FORMAT_VERSION,
        source: LIBRARY_SOURCE,
        library_items: items,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse a version 1 or version 2 library document.
///
/// A missing `type` is accepted; any other type is rejected. A missing
/// `version` is read as version 1.
pub fn parse_library(raw: &str) -> Result<Vec<LibraryItem>, LibraryError> {
    let doc: LibraryDocumentIn = serde_json::from_str(raw)?;

    if let Some(kind) = doc.kind {
        if kind != LIBRARY_DOCUMENT_TYPE {
            return Err(LibraryError::WrongType(kind));
        }
    }

    match doc.version.unwrap_or(1) {
        1 => {
            let library = doc.library.ok_or(LibraryError::MissingField("library"))?;
            Ok(library.into_iter().map(|elements| LibraryItem::new(elements, 0)).collect())
        }
        2 => doc.library_items.ok_or(LibraryError::MissingField("libraryItems")),
        other => Err(LibraryError::UnsupportedVersion(other)),
    }
}
