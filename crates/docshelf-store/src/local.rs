use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use docshelf_types::{ObjectKey, Visibility};
use tracing::{debug, warn};

use crate::compress;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::optimize::VectorOptimizer;
use crate::sidecar::{Sidecar, SIDECAR_SUFFIX};
use crate::traits::{Compression, IngestOptions, ObjectStore};

/// Local-filesystem storage backend with character fan-out sharding.
///
/// Objects live at `{root}/{k0}/{k1}/{k2}/{k3}/{k4}/{key}`: the key's first
/// five characters become nested directory levels, bounding any single
/// directory's entry count as the object population grows. Shard paths are
/// pure functions of the key and survive process restarts unchanged.
///
/// Compressed payloads are written atomically: bytes go to a temporary file
/// in the shard directory first, then rename into place. A plain ingest is
/// a single rename of the caller's source file.
pub struct LocalStore {
    config: StoreConfig,
    visibility: Visibility,
    optimizer: Option<Arc<dyn VectorOptimizer>>,
}

impl LocalStore {
    /// Create a store with the default process-relative roots.
    pub fn new(visibility: Visibility) -> StoreResult<Self> {
        Self::with_config(StoreConfig::default(), visibility)
    }

    /// Create a store with an explicit configuration.
    ///
    /// Both roots are created (with parents) if missing. Failure to create
    /// either is fatal: the store is unusable without its roots.
    pub fn with_config(config: StoreConfig, visibility: Visibility) -> StoreResult<Self> {
        fs::create_dir_all(&config.private_root)?;
        fs::create_dir_all(&config.public_root)?;
        Ok(Self {
            config,
            visibility,
            optimizer: None,
        })
    }

    /// Attach the vector-optimizer collaborator.
    pub fn with_optimizer(mut self, optimizer: Arc<dyn VectorOptimizer>) -> Self {
        self.optimizer = Some(optimizer);
        self
    }

    /// The root this instance writes into.
    pub fn active_root(&self) -> &Path {
        if self.visibility.is_public() {
            &self.config.public_root
        } else {
            &self.config.private_root
        }
    }

    /// Shard directory for a key: one directory level per prefix character.
    ///
    /// Pure derivation — nothing is created on disk.
    pub fn shard_dir(&self, key: &ObjectKey) -> PathBuf {
        let mut dir = self.active_root().to_path_buf();
        for ch in key.shard_chars() {
            dir.push(ch.to_string());
        }
        dir
    }

    /// Final on-disk path of the object stored under `key`.
    pub fn object_path(&self, key: &ObjectKey) -> PathBuf {
        self.shard_dir(key).join(key.as_str())
    }

    /// On-disk path of the object's sidecar file.
    pub fn sidecar_path(&self, key: &ObjectKey) -> PathBuf {
        self.shard_dir(key)
            .join(format!("{}{}", key.as_str(), SIDECAR_SUFFIX))
    }

    fn optimize_if_svg(&self, source: &Path) -> StoreResult<()> {
        if !self.config.optimize_svg {
            return Ok(());
        }
        let is_svg = source
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            return Ok(());
        }
        match &self.optimizer {
            Some(optimizer) => optimizer.optimize(source),
            None => Ok(()),
        }
    }
}

impl ObjectStore for LocalStore {
    fn ingest(&self, source: &Path, key: &ObjectKey, opts: &IngestOptions) -> StoreResult<()> {
        self.optimize_if_svg(source)?;

        let shard = self.shard_dir(key);
        // Idempotent, safe to race with concurrent ingests into the same shard.
        fs::create_dir_all(&shard)?;
        let dest = shard.join(key.as_str());

        // Failing to read the source for compression is the one downgraded
        // condition: log it and fall through to the uncompressed path.
        let compressed = match opts.compression {
            Compression::None => None,
            Compression::Gzip => match fs::read(source) {
                Ok(bytes) => Some(compress::gzip(&bytes)?),
                Err(e) => {
                    warn!(
                        source = %source.display(),
                        error = %e,
                        "cannot read source for compression, storing uncompressed"
                    );
                    None
                }
            },
        };

        match compressed {
            Some(bytes) => {
                // Sidecar first: sidecar-without-object is the ignorable
                // partial state, while an object without its sidecar would
                // be served with the wrong encoding.
                let doc = Sidecar::gzip();
                let sidecar = self.sidecar_path(key);
                fs::write(&sidecar, doc.to_json()?)?;

                // Stage through a generated temp name: any fixed suffix on
                // the key would itself be a valid key sharding into this
                // same directory, and staging there would destroy that
                // neighbor. Dropping the handle on failure removes the
                // staged file.
                let moved = stage_payload(&shard, &bytes)
                    .and_then(|tmp| tmp.persist(&dest).map(|_| ()).map_err(|e| e.error));
                if let Err(e) = moved {
                    if let Err(cleanup) = fs::remove_file(&sidecar) {
                        warn!(
                            path = %sidecar.display(),
                            error = %cleanup,
                            "failed to remove orphaned sidecar"
                        );
                    }
                    return Err(e.into());
                }

                // The object is stored at this point; a leftover source is
                // not worth failing the ingest over.
                if opts.delete_source {
                    if let Err(e) = fs::remove_file(source) {
                        warn!(
                            source = %source.display(),
                            error = %e,
                            "failed to delete source after ingest"
                        );
                    }
                }

                debug!(
                    key = %key,
                    path = %dest.display(),
                    encoding = %doc.content_encoding,
                    "object ingested"
                );
            }
            None => {
                fs::rename(source, &dest)?;
                debug!(key = %key, path = %dest.display(), "object ingested");
            }
        }

        Ok(())
    }

    fn exists(&self, key: &ObjectKey) -> StoreResult<bool> {
        match fs::metadata(self.object_path(key)) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

/// Write a payload to a uniquely named temp file inside `dir`.
fn stage_payload(dir: &Path, bytes: &[u8]) -> std::io::Result<tempfile::NamedTempFile> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    Ok(tmp)
}
