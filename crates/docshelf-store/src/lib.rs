//! Storage backends for docshelf documents.
//!
//! Every uploaded document lands in an object store under an opaque
//! [`ObjectKey`](docshelf_types::ObjectKey) — typically a content hash or a
//! generated filename. The higher-level upload workflow decides the key;
//! backends only persist and probe.
//!
//! # Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`LocalStore`] — sharded local-filesystem backend with private and
//!   public roots, optional gzip pre-compression, and a `.header` sidecar
//!   recording the content encoding
//! - [`InMemoryStore`] — `HashMap`-based store for tests and embedding
//!
//! # Design rules
//!
//! 1. The shard path of a key is a pure function of the key: identical key,
//!    identical path, across process restarts.
//! 2. Ingest's one mandatory side effect is the final move into the store;
//!    compression and the sidecar hang off it per [`IngestOptions`].
//! 3. A sidecar is only ever written for a compressed object. Its absence
//!    means "no special encoding".
//! 4. `exists` never mutates the store.

mod compress;
pub mod config;
pub mod error;
pub mod local;
pub mod memory;
pub mod optimize;
pub mod sidecar;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use local::LocalStore;
pub use memory::{InMemoryStore, MemoryEntry};
pub use optimize::VectorOptimizer;
pub use sidecar::{ContentEncoding, Sidecar, SIDECAR_SUFFIX};
pub use traits::{Compression, IngestOptions, ObjectStore};
