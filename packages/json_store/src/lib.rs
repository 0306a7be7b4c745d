//! JSON-document persistence for tagstore namespaces.
//!
//! Each namespace is persisted as one JSON document under a root directory:
//! `prefs.json` for the preference store and `files.json` for the file
//! store, holding the ordered array of `{key, tag, value}` records. The
//! documents are plain text on purpose - external tools (and humans) edit
//! them, and the validation pass exists to catch what those edits break.

mod local_disk;

pub use local_disk::JsonDiskStore;
