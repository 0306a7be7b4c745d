//! tagstore: typed, dual-namespace key-value persistence with a validation pass.
//!
//! Two independent record stores - a transient, preference-like namespace
//! and a durable, file-backed one - hold ordered `(key, tag, value)`
//! records. Every stored value carries a type discriminant assigned at
//! write time, lookups are scoped to the `(key, type)` pair, and an
//! on-demand validation pass detects corruption introduced by external
//! edits to the persisted documents.
//!
//! [`Depot`] is the front door over both namespaces; the layers underneath
//! (`tagstore-codec`, `tagstore-store`, `tagstore-validate`,
//! `tagstore-json-store`) are re-exported here and usable on their own.
//!
//! # Example
//!
//! ```rust
//! use tagstore::Depot;
//!
//! let mut depot = Depot::in_memory();
//! depot.set_pref("volume", &0.8f32).unwrap();
//! depot.set_file("slots", &3u8).unwrap();
//!
//! assert_eq!(depot.get_pref::<f32>("volume").unwrap(), Some(0.8));
//! assert!(!depot.has_pref_key::<f32>("slots"));
//! ```

mod depot;

pub use depot::Depot;

pub use tagstore_codec::{storable_struct, verify, CodecError, Storable, TypeTag};
pub use tagstore_json_store::JsonDiskStore;
pub use tagstore_store::{
    Namespace, NoPersistence, PersistError, PersistenceSink, Record, RecordStore, StoreError,
};
pub use tagstore_validate::{
    validate_store, ErrorReporter, LogReporter, RecordingReporter, Rule, Violation,
};
