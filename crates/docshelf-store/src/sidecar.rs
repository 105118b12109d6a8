use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Suffix appended to an object's path to name its sidecar file.
pub const SIDECAR_SUFFIX: &str = ".header";

/// Content encodings a sidecar can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentEncoding {
    Gzip,
}

impl fmt::Display for ContentEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gzip => write!(f, "gzip"),
        }
    }
}

/// Response metadata stored next to a compressed object.
///
/// Serving layers read the sidecar to learn how the stored bytes must be
/// delivered; its absence means "no special encoding".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidecar {
    #[serde(rename = "content-encoding")]
    pub content_encoding: ContentEncoding,
}

impl Sidecar {
    /// Sidecar for a gzip-compressed object.
    pub fn gzip() -> Self {
        Self {
            content_encoding: ContentEncoding::Gzip,
        }
    }

    /// Minified JSON bytes, as written next to the object.
    pub fn to_json(&self) -> StoreResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse a sidecar document.
    pub fn from_json(bytes: &[u8]) -> StoreResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
