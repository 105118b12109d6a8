use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

use docshelf_types::ObjectKey;
use tracing::warn;

use crate::compress;
use crate::error::StoreResult;
use crate::sidecar::ContentEncoding;
use crate::traits::{Compression, IngestOptions, ObjectStore};

/// A stored object's bytes plus its recorded content encoding.
///
/// The encoding field stands in for the filesystem backend's sidecar file;
/// `None` means the bytes are stored as supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryEntry {
    pub data: Vec<u8>,
    pub encoding: Option<ContentEncoding>,
}

/// In-memory, HashMap-based backend.
///
/// Intended for tests and embedding. Entries live behind a std `RwLock`
/// for safe concurrent access and are cloned on read.
pub struct InMemoryStore {
    objects: RwLock<HashMap<ObjectKey, MemoryEntry>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Look up a stored entry by key.
    pub fn entry(&self, key: &ObjectKey) -> Option<MemoryEntry> {
        self.objects.read().expect("lock poisoned").get(key).cloned()
    }

    /// Remove all objects from the store.
    pub fn clear(&self) {
        self.objects.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryStore {
    fn ingest(&self, source: &Path, key: &ObjectKey, opts: &IngestOptions) -> StoreResult<()> {
        let bytes = fs::read(source)?;
        let (data, encoding) = match opts.compression {
            Compression::None => (bytes, None),
            Compression::Gzip => (compress::gzip(&bytes)?, Some(ContentEncoding::Gzip)),
        };

        self.objects
            .write()
            .expect("lock poisoned")
            .insert(key.clone(), MemoryEntry { data, encoding });

        // Mirror the filesystem backend: a plain ingest consumes the
        // source, a compressed one only on request.
        if opts.delete_source || opts.compression == Compression::None {
            if let Err(e) = fs::remove_file(source) {
                warn!(
                    source = %source.display(),
                    error = %e,
                    "failed to remove source after ingest"
                );
            }
        }
        Ok(())
    }

    fn exists(&self, key: &ObjectKey) -> StoreResult<bool> {
        Ok(self.objects.read().expect("lock poisoned").contains_key(key))
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("object_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn key(s: &str) -> ObjectKey {
        ObjectKey::new(s).unwrap()
    }

    fn write_source(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn plain_ingest_stores_bytes_and_consumes_source() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryStore::new();
        let k = key("abc123def456");
        let source = write_source(&dir, "upload.bin", b"payload");

        store.ingest(&source, &k, &IngestOptions::default()).unwrap();

        let entry = store.entry(&k).unwrap();
        assert_eq!(entry.data, b"payload");
        assert_eq!(entry.encoding, None);
        assert!(!source.exists());
    }

    #[test]
    fn gzip_ingest_records_encoding() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryStore::new();
        let k = key("abc123def456");
        let payload = b"compressible ".repeat(32);
        let source = write_source(&dir, "upload.bin", &payload);

        store.ingest(&source, &k, &IngestOptions::gzip()).unwrap();

        let entry = store.entry(&k).unwrap();
        assert_eq!(entry.encoding, Some(ContentEncoding::Gzip));
        let mut decoder = flate2::read::GzDecoder::new(entry.data.as_slice());
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, payload);
        // Without delete_source the compressed ingest keeps the original.
        assert!(source.exists());
    }

    #[test]
    fn gzip_ingest_honors_delete_source() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryStore::new();
        let source = write_source(&dir, "upload.bin", b"payload");

        let opts = IngestOptions {
            delete_source: true,
            ..IngestOptions::gzip()
        };
        store.ingest(&source, &key("abc123def456"), &opts).unwrap();
        assert!(!source.exists());
    }

    #[test]
    fn missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryStore::new();
        let missing = dir.path().join("nope.bin");
        assert!(store
            .ingest(&missing, &key("abc123def456"), &IngestOptions::default())
            .is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn exists_tracks_ingests() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryStore::new();
        let k = key("abc123def456");
        assert!(!store.exists(&k).unwrap());

        let source = write_source(&dir, "upload.bin", b"payload");
        store.ingest(&source, &k, &IngestOptions::default()).unwrap();
        assert!(store.exists(&k).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reingest_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryStore::new();
        let k = key("abc123def456");

        let first = write_source(&dir, "first.bin", b"first");
        store.ingest(&first, &k, &IngestOptions::default()).unwrap();
        let second = write_source(&dir, "second.bin", b"second");
        store.ingest(&second, &k, &IngestOptions::default()).unwrap();

        assert_eq!(store.entry(&k).unwrap().data, b"second");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_all() {
        let dir = TempDir::new().unwrap();
        let store = InMemoryStore::new();
        let source = write_source(&dir, "upload.bin", b"payload");
        store
            .ingest(&source, &key("abc123def456"), &IngestOptions::default())
            .unwrap();
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryStore::new();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryStore"));
        assert!(debug.contains("object_count"));
    }
}
