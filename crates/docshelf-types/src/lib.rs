//! Foundation types for the docshelf storage layer.
//!
//! Every storage backend depends on these types:
//!
//! - [`ObjectKey`] — validated, opaque name of a stored object
//! - [`Visibility`] — selects the private or public storage root
//!
//! Keys are validated once, at construction; backends can then treat them
//! as safe path components and derive shard paths without further checks.

pub mod error;
pub mod key;
pub mod visibility;

pub use error::TypeError;
pub use key::{ObjectKey, MIN_KEY_LEN, SHARD_PREFIX_LEN};
pub use visibility::Visibility;
