//! The persisted record triple and its namespaces.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One stored `(key, tag, value)` triple.
///
/// `key` is a caller-chosen identifier. `tag` is the type discriminant
/// assigned at write time; `value` is either a directly-stringified
/// primitive or a structured JSON serialization, depending on the tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub tag: String,
    pub value: String,
}

impl Record {
    pub fn new(
        key: impl Into<String>,
        tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Record {
        Record {
            key: key.into(),
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Whether this record answers a lookup for `(key, tag)`.
    ///
    /// Both fields compare by exact string equality. The same key may
    /// coexist under distinct tags; validation applies a stricter,
    /// type-blind key-uniqueness rule on top of this.
    pub fn matches(&self, key: &str, tag: &str) -> bool {
        self.key == key && self.tag == tag
    }
}

/// Which of the two independent record stores a record lives in.
///
/// The namespaces share logic but never records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// The transient, preference-like store.
    Prefs,
    /// The durable, file-backed store.
    Files,
}

impl Namespace {
    /// True for the file-backed namespace. Validation reporting carries
    /// this flag with every violation.
    pub fn is_file(self) -> bool {
        matches!(self, Namespace::Files)
    }

    /// Stable name, used for logging and on-disk document naming.
    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Prefs => "prefs",
            Namespace::Files => "files",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
