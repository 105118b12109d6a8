use thiserror::Error;

/// Errors produced by type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("object key too short: {len} characters, minimum is {min}")]
    KeyTooShort { len: usize, min: usize },

    #[error("object key contains forbidden character {ch:?}")]
    InvalidKeyChar { ch: char },
}
