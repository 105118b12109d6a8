use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Number of leading key characters that become shard directory levels.
pub const SHARD_PREFIX_LEN: usize = 5;

/// Minimum key length, in characters.
///
/// A key must extend past its shard prefix so the stored filename is never
/// one of the shard segments itself.
pub const MIN_KEY_LEN: usize = SHARD_PREFIX_LEN + 1;

/// Opaque storage key for a single object.
///
/// Keys are caller-supplied — typically a content hash or a generated
/// filename. A key becomes a single path component inside its shard
/// directory, so path separators and NUL are rejected up front, and every
/// key must be long enough to yield a full shard prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Validate and wrap a raw key string.
    pub fn new(key: impl Into<String>) -> Result<Self, TypeError> {
        let key = key.into();
        let len = key.chars().count();
        if len < MIN_KEY_LEN {
            return Err(TypeError::KeyTooShort {
                len,
                min: MIN_KEY_LEN,
            });
        }
        if let Some(ch) = key.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
            return Err(TypeError::InvalidKeyChar { ch });
        }
        Ok(Self(key))
    }

    /// The raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading characters that form the shard prefix, one directory
    /// level each.
    pub fn shard_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().take(SHARD_PREFIX_LEN)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ObjectKey {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ObjectKey {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ObjectKey> for String {
    fn from(key: ObjectKey) -> Self {
        key.0
    }
}
