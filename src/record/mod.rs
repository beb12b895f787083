//! Records - identity-bearing values kept in an owned, ordered collection.
//!
//! ## Example
//!
//! ```ignore
//! use asset_tracker::{Collection, Record};
//!
//! #[derive(Clone, Record)]
//! #[record(collection = "licenses")]
//! struct License {
//!     id: u64,
//!     seats: u32,
//! }
//!
//! let mut licenses = Collection::new();
//! licenses.try_insert(License { id: 1, seats: 5 }).ok();
//! assert_eq!(licenses.get(1).map(|l| l.seats), Some(5));
//! ```

mod collection;

/// Trait for types that can be kept in a [`Collection`].
pub trait Record: Clone {
    /// The collection name for this record type (e.g. "assets"), used to
    /// label records in logs and debug output.
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this record.
    fn id(&self) -> u64;
}

pub use asset_tracker_macros::Record;
pub use collection::Collection;
