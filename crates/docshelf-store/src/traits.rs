use std::path::Path;

use docshelf_types::ObjectKey;

use crate::error::StoreResult;

/// Pre-compression applied to an object's payload during ingest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    /// Store the payload byte-for-byte.
    #[default]
    None,
    /// Gzip the payload and record a content-encoding sidecar.
    Gzip,
}

/// Per-call ingest options.
#[derive(Clone, Copy, Debug, Default)]
pub struct IngestOptions {
    /// Pre-compression applied to the payload.
    pub compression: Compression,
    /// Remove the caller's source file once the object is stored.
    ///
    /// A plain ingest consumes the source via rename regardless; this flag
    /// matters when compression leaves the original source behind.
    pub delete_source: bool,
    /// The object is a preview rendition. Remote-mirror backends route
    /// previews to a separate mirror; the local backend carries the flag
    /// but does not act on it.
    pub preview: bool,
}

impl IngestOptions {
    /// Options requesting gzip pre-compression, everything else default.
    pub fn gzip() -> Self {
        Self {
            compression: Compression::Gzip,
            ..Self::default()
        }
    }
}

/// A storage backend for named objects.
///
/// All implementations must satisfy these invariants:
/// - Ingest's one mandatory side effect is that the object becomes stored
///   under its key; compression and sidecar metadata hang off it per
///   options.
/// - `exists` never mutates the store.
/// - Two concurrent ingests of the same key are last-write-wins; callers
///   needing at-most-once-per-key semantics must serialize externally.
pub trait ObjectStore: Send + Sync {
    /// Absorb the file at `source` into the store under `key`.
    fn ingest(&self, source: &Path, key: &ObjectKey, opts: &IngestOptions) -> StoreResult<()>;

    /// Check whether an object is stored under `key`.
    ///
    /// Returns `Ok(false)` for a genuinely absent object; I/O failures
    /// other than not-found propagate as `Err`.
    fn exists(&self, key: &ObjectKey) -> StoreResult<bool>;
}
