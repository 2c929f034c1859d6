//! Error type shared by the library crate.

/// Error returned by library codec and configuration operations.
///
/// Selection itself never fails; see [`crate::selection`].
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid library JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document's `type` field names something other than a library.
    #[error("not a library document (type `{0}`)")]
    WrongType(String),
    /// The document's `version` is not one this crate can read.
    #[error("unsupported library version: {0}")]
    UnsupportedVersion(u64),
    /// A required top-level field is missing.
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),
    /// A drag or insert referenced an item that is not in the library.
    #[error("unknown library item: {0}")]
    UnknownItem(String),
    /// A configuration variable could not be parsed.
    #[error("invalid value for {var}: {value}")]
    Config { var: &'static str, value: String },
}
