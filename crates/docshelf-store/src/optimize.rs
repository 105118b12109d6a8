use std::path::Path;

use crate::error::StoreResult;

/// External vector-image compaction collaborator.
///
/// Invoked on `.svg` sources before ingest when enabled by
/// [`StoreConfig::optimize_svg`](crate::StoreConfig). Implementations may
/// rewrite the file's bytes in place; the store only depends on the
/// success/failure signal.
pub trait VectorOptimizer: Send + Sync {
    fn optimize(&self, path: &Path) -> StoreResult<()>;
}
