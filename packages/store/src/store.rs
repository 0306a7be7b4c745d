//! The ordered record store.

use std::fmt;

use tagstore_codec::Storable;

use crate::error::StoreError;
use crate::record::{Namespace, Record};
use crate::sink::{NoPersistence, PersistenceSink};

/// An ordered sequence of `(key, tag, value)` records in one namespace.
///
/// Lookup and mutation are scoped to the `(key, tag)` pair, not the key
/// alone: the same key may simultaneously hold values under distinct
/// declared types. This intentionally diverges from the type-blind
/// key-uniqueness rule the validation pass enforces (see the
/// `tagstore-validate` crate).
///
/// Order is significant: overwriting an existing record replaces its value
/// at the same index. Every mutating call flushes through the injected
/// [`PersistenceSink`] before returning, so a successful return means the
/// write is durable.
///
/// The store is a synchronous, single-writer/single-reader abstraction; no
/// operation defers work or blocks on external input.
pub struct RecordStore {
    namespace: Namespace,
    records: Vec<Record>,
    sink: Box<dyn PersistenceSink>,
}

impl RecordStore {
    /// An empty store flushing through `sink`.
    pub fn new(namespace: Namespace, sink: Box<dyn PersistenceSink>) -> RecordStore {
        RecordStore {
            namespace,
            records: Vec::new(),
            sink,
        }
    }

    /// An empty store with no durability.
    pub fn in_memory(namespace: Namespace) -> RecordStore {
        RecordStore::new(namespace, Box::new(NoPersistence))
    }

    /// Reopen a store from previously persisted records.
    ///
    /// The records are taken as-is and in order: externally corrupted data
    /// is accepted here and surfaced by the validation pass, not rejected
    /// at construction.
    pub fn with_records(
        namespace: Namespace,
        records: Vec<Record>,
        sink: Box<dyn PersistenceSink>,
    ) -> RecordStore {
        RecordStore {
            namespace,
            records,
            sink,
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// The store's full ordered contents, for validation and inspection.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Store `value` under `(key, T)`.
    ///
    /// If a record with the same key and tag exists, its value is replaced
    /// in place and its position is preserved; otherwise a new record is
    /// appended. An encode failure aborts before any mutation.
    pub fn set<T: Storable>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let tag = T::tag();
        let encoded = value.encode().map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;

        match self.position(key, tag.as_str()) {
            Some(index) => self.records[index].value = encoded,
            None => self.records.push(Record::new(key, tag.as_str(), encoded)),
        }

        self.persist()
    }

    /// Look up `(key, T)` and decode the stored value.
    ///
    /// Returns `Ok(None)` when no record matches. A matching record whose
    /// value does not parse as `T` is a fatal [`StoreError::Decode`].
    pub fn get<T: Storable>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let tag = T::tag();
        let Some(index) = self.position(key, tag.as_str()) else {
            return Ok(None);
        };

        let value = T::decode(&self.records[index].value).map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })?;

        Ok(Some(value))
    }

    /// Get-and-delete: decode the record, then remove it and persist.
    ///
    /// A decode failure aborts before the record is touched, so a corrupt
    /// record is never silently dropped.
    pub fn take<T: Storable>(&mut self, key: &str) -> Result<Option<T>, StoreError> {
        let tag = T::tag();
        let Some(index) = self.position(key, tag.as_str()) else {
            return Ok(None);
        };

        let value = T::decode(&self.records[index].value).map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })?;

        self.records.remove(index);
        self.persist()?;

        Ok(Some(value))
    }

    /// Remove every record matching `(key, T)` - normally zero or one.
    ///
    /// Persists regardless of whether anything was removed.
    pub fn delete<T: Storable>(&mut self, key: &str) -> Result<(), StoreError> {
        let tag = T::tag();
        self.records.retain(|record| !record.matches(key, tag.as_str()));
        self.persist()
    }

    /// Clear the store.
    pub fn delete_all(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        self.persist()
    }

    /// Whether a record matching `(key, T)` exists.
    pub fn has_key<T: Storable>(&self, key: &str) -> bool {
        let tag = T::tag();
        self.position(key, tag.as_str()).is_some()
    }

    fn position(&self, key: &str, tag: &str) -> Option<usize> {
        self.records.iter().position(|record| record.matches(key, tag))
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.sink.persist(self.namespace, &self.records)?;
        Ok(())
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("namespace", &self.namespace)
            .field("records", &self.records.len())
            .finish()
    }
}
