//! The two-namespace front door.

use std::path::Path;

use tagstore_codec::Storable;
use tagstore_json_store::JsonDiskStore;
use tagstore_store::{Namespace, PersistError, RecordStore, StoreError};
use tagstore_validate::{validate_store, ErrorReporter};

/// Both record namespaces behind one surface.
///
/// A `Depot` owns the preference-like store and the file-backed store. The
/// namespaces share logic but never records: setting a key in one leaves
/// the other untouched, and each flushes through its own sink.
pub struct Depot {
    prefs: RecordStore,
    files: RecordStore,
}

impl Depot {
    /// A depot with no durability, for tools and tests.
    pub fn in_memory() -> Depot {
        Depot {
            prefs: RecordStore::in_memory(Namespace::Prefs),
            files: RecordStore::in_memory(Namespace::Files),
        }
    }

    /// Assemble a depot from two already-constructed stores.
    pub fn new(prefs: RecordStore, files: RecordStore) -> Depot {
        Depot { prefs, files }
    }

    /// Open a disk-backed depot rooted at `root`.
    ///
    /// Missing namespace documents start empty; corrupted ones fail here.
    /// Each namespace gets its own [`JsonDiskStore`] sink.
    pub fn open(root: &Path) -> Result<Depot, PersistError> {
        let prefs_disk = JsonDiskStore::new(root.to_path_buf())?;
        let files_disk = JsonDiskStore::new(root.to_path_buf())?;

        let prefs = RecordStore::with_records(
            Namespace::Prefs,
            prefs_disk.load(Namespace::Prefs)?,
            Box::new(prefs_disk),
        );
        let files = RecordStore::with_records(
            Namespace::Files,
            files_disk.load(Namespace::Files)?,
            Box::new(files_disk),
        );

        Ok(Depot { prefs, files })
    }

    // === Preference namespace ===

    pub fn set_pref<T: Storable>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        self.prefs.set(key, value)
    }

    pub fn get_pref<T: Storable>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.prefs.get(key)
    }

    /// Get-and-delete from the preference namespace.
    pub fn take_pref<T: Storable>(&mut self, key: &str) -> Result<Option<T>, StoreError> {
        self.prefs.take(key)
    }

    pub fn delete_pref<T: Storable>(&mut self, key: &str) -> Result<(), StoreError> {
        self.prefs.delete::<T>(key)
    }

    pub fn delete_all_prefs(&mut self) -> Result<(), StoreError> {
        self.prefs.delete_all()
    }

    pub fn has_pref_key<T: Storable>(&self, key: &str) -> bool {
        self.prefs.has_key::<T>(key)
    }

    // === File namespace ===

    pub fn set_file<T: Storable>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        self.files.set(key, value)
    }

    pub fn get_file<T: Storable>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.files.get(key)
    }

    /// Get-and-delete from the file namespace.
    pub fn take_file<T: Storable>(&mut self, key: &str) -> Result<Option<T>, StoreError> {
        self.files.take(key)
    }

    pub fn delete_file<T: Storable>(&mut self, key: &str) -> Result<(), StoreError> {
        self.files.delete::<T>(key)
    }

    pub fn delete_all_files(&mut self) -> Result<(), StoreError> {
        self.files.delete_all()
    }

    pub fn has_file_key<T: Storable>(&self, key: &str) -> bool {
        self.files.has_key::<T>(key)
    }

    // === Whole depot ===

    /// Clear both namespaces.
    pub fn delete_all(&mut self) -> Result<(), StoreError> {
        self.prefs.delete_all()?;
        self.files.delete_all()
    }

    /// Run the validation pass over both namespaces.
    ///
    /// Both stores are always fully checked, even when the first has
    /// already failed; the result is the conjunction.
    pub fn validate(&self, reporter: &mut dyn ErrorReporter) -> bool {
        let prefs_valid = validate_store(&self.prefs, reporter);
        let files_valid = validate_store(&self.files, reporter);
        prefs_valid && files_valid
    }

    pub fn prefs(&self) -> &RecordStore {
        &self.prefs
    }

    pub fn prefs_mut(&mut self) -> &mut RecordStore {
        &mut self.prefs
    }

    pub fn files(&self) -> &RecordStore {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut RecordStore {
        &mut self.files
    }
}
