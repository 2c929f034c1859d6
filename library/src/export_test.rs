use serde_json::json;

use super::*;
use crate::item::LibraryItemStatus;

fn item(id: &str) -> LibraryItem {
    LibraryItem {
        id: id.to_owned(),
        status: LibraryItemStatus::Unpublished,
        elements: vec![json!({ "id": format!("{id}-el"), "type": "ellipse" })],
        created: 10,
        name: Some(format!("item {id}")),
    }
}

// =============================================================
// serialize_library
// =============================================================

#[test]
fn serialize_writes_version_two_envelope() {
    let raw = serialize_library(&[item("a")]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["type"], "excalidrawlib");
    assert_eq!(value["version"], 2);
    assert_eq!(value["source"], LIBRARY_SOURCE);
    assert_eq!(value["libraryItems"][0]["id"], "a");
    assert_eq!(value["libraryItems"][0]["status"], "unpublished");
}

#[test]
fn serialize_then_parse_preserves_items() {
    let items = vec![item("a"), item("b")];
    let parsed = parse_library(&serialize_library(&items).unwrap()).unwrap();
    assert_eq!(parsed, items);
}

#[test]
fn serialize_empty_library() {
    let raw = serialize_library(&[]).unwrap();
    assert!(parse_library(&raw).unwrap().is_empty());
}

// =============================================================
// parse_library
// =============================================================

#[test]
fn parse_version_one_generates_unpublished_items() {
    let raw = json!({
        "type": "excalidrawlib",
        "version": 1,
        "library": [[{ "id": "x" }], [{ "id": "y" }, { "id": "z" }]]
    })
    .to_string();
    let items = parse_library(&raw).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].elements.len(), 2);
    assert!(items.iter().all(|i| i.status == LibraryItemStatus::Unpublished));
    assert_ne!(items[0].id, items[1].id);
}

#[test]
fn parse_without_type_or_version_reads_version_one() {
    let raw = json!({ "library": [[{ "id": "x" }]] }).to_string();
    assert_eq!(parse_library(&raw).unwrap().len(), 1);
}

#[test]
fn parse_rejects_wrong_type() {
    let raw = json!({ "type": "excalidraw", "version": 2, "libraryItems": [] }).to_string();
    assert!(matches!(parse_library(&raw), Err(LibraryError::WrongType(t)) if t == "excalidraw"));
}

#[test]
fn parse_rejects_unknown_version() {
    let raw = json!({ "type": "excalidrawlib", "version": 9, "libraryItems": [] }).to_string();
    assert!(matches!(parse_library(&raw), Err(LibraryError::UnsupportedVersion(9))));
}

#[test]
fn parse_rejects_missing_items() {
    let raw = json!({ "type": "excalidrawlib", "version": 2 }).to_string();
    assert!(matches!(parse_library(&raw), Err(LibraryError::MissingField("libraryItems"))));
}

#[test]
fn parse_rejects_malformed_json() {
    assert!(matches!(parse_library("{ not json"), Err(LibraryError::Json(_))));
}

// =============================================================
// DragPayload
// =============================================================

#[test]
fn drag_payload_uses_library_mime_type() {
    let payload = DragPayload::for_items(&[item("a")]).unwrap();
    assert_eq!(payload.mime, "application/vnd.excalidrawlib+json");
    assert_eq!(parse_library(&payload.data).unwrap()[0].id, "a");
}
