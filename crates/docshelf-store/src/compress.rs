use std::io::Write;

use crate::error::StoreResult;

/// Gzip-compress a payload in memory.
pub(crate) fn gzip(bytes: &[u8]) -> StoreResult<Vec<u8>> {
    let mut encoder =
        flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}
