use std::{fs, io, path};

use tagstore_store::{Namespace, PersistError, PersistenceSink, Record};

/// File-backed persistence rooted at a directory.
///
/// Writes one JSON document per namespace under the root. A store owns one
/// `JsonDiskStore` as its [`PersistenceSink`]; reopening goes through
/// [`JsonDiskStore::load`].
pub struct JsonDiskStore {
    root: path::PathBuf,
}

impl JsonDiskStore {
    /// Open a disk store rooted at an existing, writable directory.
    pub fn new(root: path::PathBuf) -> Result<JsonDiskStore, PersistError> {
        let attr = fs::metadata(&root).map_err(|error| {
            PersistError::with_source(
                format!("root path {} is not accessible", root.display()),
                error,
            )
        })?;

        if !attr.is_dir() {
            return Err(PersistError::new(format!(
                "root path {} must be a directory",
                root.display()
            )));
        }

        if attr.permissions().readonly() {
            return Err(PersistError::new(format!(
                "root directory {} must be writable",
                root.display()
            )));
        }

        match root.canonicalize() {
            Ok(root) => Ok(JsonDiskStore { root }),
            Err(error) => Err(PersistError::with_source(
                format!("failed to canonicalize root path {}", root.display()),
                error,
            )),
        }
    }

    /// Read a namespace document back into records, preserving order.
    ///
    /// A missing document is an empty store. A malformed document fails
    /// loudly so corruption surfaces at load time rather than being
    /// papered over with an empty store.
    pub fn load(&self, namespace: Namespace) -> Result<Vec<Record>, PersistError> {
        let file_path = self.document_path(namespace);
        log::debug!("Reading {}...", file_path.display());

        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&file_path).map_err(|error| {
            PersistError::with_source(format!("failed to open {}", file_path.display()), error)
        })?;
        let reader = io::BufReader::new(file);

        serde_json::from_reader(reader).map_err(|error| {
            PersistError::with_source(
                format!("malformed document {}", file_path.display()),
                error,
            )
        })
    }

    fn document_path(&self, namespace: Namespace) -> path::PathBuf {
        self.root.join(format!("{}.json", namespace.as_str()))
    }
}

impl PersistenceSink for JsonDiskStore {
    fn persist(&mut self, namespace: Namespace, records: &[Record]) -> Result<(), PersistError> {
        let file_path = self.document_path(namespace);
        log::debug!("Writing {}...", file_path.display());

        let document = serde_json::to_string_pretty(records).map_err(|error| {
            PersistError::with_source(
                format!("failed to serialize the {} namespace", namespace),
                error,
            )
        })?;

        fs::write(&file_path, document).map_err(|error| {
            PersistError::with_source(format!("failed to write {}", file_path.display()), error)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tagstore_store::RecordStore;

    use super::*;

    #[test]
    fn rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(JsonDiskStore::new(missing).is_err());
    }

    #[test]
    fn rejects_file_as_root() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("a_file");
        fs::File::create(&file_path).unwrap();

        assert!(JsonDiskStore::new(file_path).is_err());
    }

    #[test]
    fn missing_document_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let disk = JsonDiskStore::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(disk.load(Namespace::Prefs).unwrap(), Vec::new());
    }

    #[test]
    fn persist_then_load_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut disk = JsonDiskStore::new(dir.path().to_path_buf()).unwrap();

        let records = vec![
            Record::new("b", "i32", "2"),
            Record::new("a", "string", "hello"),
        ];
        disk.persist(Namespace::Files, &records).unwrap();

        assert_eq!(disk.load(Namespace::Files).unwrap(), records);
        // The other namespace's document is untouched.
        assert_eq!(disk.load(Namespace::Prefs).unwrap(), Vec::new());
    }

    #[test]
    fn malformed_document_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let disk = JsonDiskStore::new(dir.path().to_path_buf()).unwrap();

        let mut f = fs::File::create(dir.path().join("prefs.json")).unwrap();
        f.write_all(b"{not json").unwrap();
        f.sync_all().unwrap();

        assert!(disk.load(Namespace::Prefs).is_err());
    }

    #[test]
    fn store_mutations_land_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let disk = JsonDiskStore::new(dir.path().to_path_buf()).unwrap();
        let mut store = RecordStore::new(Namespace::Prefs, Box::new(disk));

        store.set("volume", &0.8f32).unwrap();
        store.set("muted", &false).unwrap();

        let reopened = JsonDiskStore::new(dir.path().to_path_buf()).unwrap();
        let records = reopened.load(Namespace::Prefs).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "volume");
        assert_eq!(records[1].key, "muted");
    }

    #[test]
    fn reopened_store_sees_persisted_data() {
        let dir = tempfile::tempdir().unwrap();

        {
            let disk = JsonDiskStore::new(dir.path().to_path_buf()).unwrap();
            let mut store = RecordStore::new(Namespace::Files, Box::new(disk));
            store.set("count", &41i64).unwrap();
        }

        let disk = JsonDiskStore::new(dir.path().to_path_buf()).unwrap();
        let records = disk.load(Namespace::Files).unwrap();
        let store = RecordStore::with_records(Namespace::Files, records, Box::new(disk));

        assert_eq!(store.get::<i64>("count").unwrap(), Some(41));
    }
}
