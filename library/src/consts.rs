//! Shared constants for the library crate.

// ── Render batching ─────────────────────────────────────────────

/// Previews revealed per batch while previews are still being generated.
/// Odd on purpose so the grid fills in an irregular pattern.
pub const ITEMS_RENDERED_PER_BATCH: usize = 17;

/// Previews revealed per batch once every visible item has a cached preview.
pub const CACHED_ITEMS_RENDERED_PER_BATCH: usize = 64;

// ── Library file format ─────────────────────────────────────────

/// MIME type of a serialized library placed on a drag payload.
pub const LIBRARY_MIME_TYPE: &str = "application/vnd.excalidrawlib+json";

/// Value of the `type` field in a library document.
pub const LIBRARY_DOCUMENT_TYPE: &str = "excalidrawlib";

/// Library document version written by [`crate::export::serialize_library`].
pub const LIBRARY_FORMAT_VERSION: u32 = 2;

/// Value of the `source` field in documents this crate writes.
pub const LIBRARY_SOURCE: &str = "sketchshelf";
