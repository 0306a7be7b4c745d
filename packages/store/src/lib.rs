//! tagstore record stores: ordered typed records with an injected durability seam.
//!
//! A [`RecordStore`] is an ordered sequence of `(key, tag, value)` records in
//! one [`Namespace`]. Lookup and mutation are scoped to the `(key, tag)`
//! pair, so the same key may hold values under distinct types without
//! collision. Every mutation flushes synchronously through the store's
//! [`PersistenceSink`] before the call returns.
//!
//! # Example
//!
//! ```rust
//! use tagstore_store::{Namespace, RecordStore};
//!
//! let mut store = RecordStore::in_memory(Namespace::Prefs);
//! store.set("volume", &0.8f32).unwrap();
//!
//! let volume: Option<f32> = store.get("volume").unwrap();
//! assert_eq!(volume, Some(0.8));
//! ```

mod error;
mod record;
mod sink;
mod store;

pub use error::StoreError;
pub use record::{Namespace, Record};
pub use sink::{NoPersistence, PersistError, PersistenceSink};
pub use store::RecordStore;

// Re-export codec types for convenience
pub use tagstore_codec::{CodecError, Storable, TypeTag};
