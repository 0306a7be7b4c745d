//! The validation pass.

use std::collections::HashMap;

use tagstore_codec::{verify, TypeTag};
use tagstore_store::RecordStore;

use crate::reporter::ErrorReporter;

/// Validate every record in `store` against the key, type and value rules.
///
/// A single pass checks every record against all three rule classes - a
/// record may trigger several violations, and the pass never stops early.
/// Each violation is reported through `reporter` the moment it is found.
/// Returns true iff no violation was found anywhere in the store.
///
/// The rules:
/// - **Key**: the key is empty, or equals the key of at least one other
///   record in the same store regardless of that record's tag.
/// - **Type**: the tag is empty.
/// - **Value**: the value does not decode under its tag; a record with an
///   empty tag is unconditionally a value violation as well, independent of
///   its type violation.
pub fn validate_store(store: &RecordStore, reporter: &mut dyn ErrorReporter) -> bool {
    let file_namespace = store.namespace().is_file();
    let records = store.records();

    // Key multiplicity across the whole store, blind to tags. Replaces a
    // per-record rescan while flagging exactly the same records: every one
    // whose key occurs more than once.
    let mut multiplicity: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *multiplicity.entry(record.key.as_str()).or_insert(0) += 1;
    }

    let mut valid = true;

    for (index, record) in records.iter().enumerate() {
        if record.key.is_empty() {
            reporter.on_key_error(&record.key, index, file_namespace, false);
            valid = false;
        }
        if multiplicity[record.key.as_str()] > 1 {
            reporter.on_key_error(&record.key, index, file_namespace, true);
            valid = false;
        }

        match TypeTag::parse(&record.tag) {
            None => {
                // Empty tag: a type violation, and independently a value
                // violation since nothing could ever decode the value.
                reporter.on_type_error(&record.key, index, file_namespace);
                reporter.on_value_error(&record.key, index, file_namespace);
                valid = false;
            }
            Some(tag) => {
                if verify(&tag, &record.value).is_err() {
                    reporter.on_value_error(&record.key, index, file_namespace);
                    valid = false;
                }
            }
        }
    }

    valid
}
