//! Violation sinks for validation passes.

use log::warn;

/// Receives per-violation callbacks during a validation pass.
///
/// Callbacks fire synchronously at the point each violation is detected,
/// never batched or deferred. They are purely observational: a reporter
/// must not alter store state, and the pass continues regardless of what
/// the reporter does.
///
/// `file_namespace` is true when the violating record lives in the
/// file-backed store rather than the preference store.
pub trait ErrorReporter {
    /// A record's value failed to decode under its tag, or its tag was
    /// empty (an empty tag can never decode anything).
    fn on_value_error(&mut self, key: &str, index: usize, file_namespace: bool);

    /// A record's key is empty (`duplicate` false), or shared with at least
    /// one other record in the same store regardless of tag (`duplicate`
    /// true).
    fn on_key_error(&mut self, key: &str, index: usize, file_namespace: bool, duplicate: bool);

    /// A record's tag is empty.
    fn on_type_error(&mut self, key: &str, index: usize, file_namespace: bool);
}

/// Which rule class a violation came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Key,
    Type,
    Value,
}

/// One violation captured by a [`RecordingReporter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub rule: Rule,
    pub key: String,
    pub index: usize,
    pub file_namespace: bool,
    /// Only meaningful for key violations.
    pub duplicate: bool,
}

/// Collects violations in the order they were reported.
///
/// The inspection tooling and the test suites read the captured sequence
/// back out of `violations`.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub violations: Vec<Violation>,
}

impl RecordingReporter {
    pub fn new() -> RecordingReporter {
        RecordingReporter::default()
    }

    /// Violations of one rule class, in report order.
    pub fn of_rule(&self, rule: Rule) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.rule == rule).collect()
    }
}

impl ErrorReporter for RecordingReporter {
    fn on_value_error(&mut self, key: &str, index: usize, file_namespace: bool) {
        self.violations.push(Violation {
            rule: Rule::Value,
            key: key.to_string(),
            index,
            file_namespace,
            duplicate: false,
        });
    }

    fn on_key_error(&mut self, key: &str, index: usize, file_namespace: bool, duplicate: bool) {
        self.violations.push(Violation {
            rule: Rule::Key,
            key: key.to_string(),
            index,
            file_namespace,
            duplicate,
        });
    }

    fn on_type_error(&mut self, key: &str, index: usize, file_namespace: bool) {
        self.violations.push(Violation {
            rule: Rule::Type,
            key: key.to_string(),
            index,
            file_namespace,
            duplicate: false,
        });
    }
}

/// Logs each violation through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn on_value_error(&mut self, key: &str, index: usize, file_namespace: bool) {
        warn!(
            "value for key '{}' at index {} in the {} store does not decode under its tag",
            key,
            index,
            namespace_label(file_namespace)
        );
    }

    fn on_key_error(&mut self, key: &str, index: usize, file_namespace: bool, duplicate: bool) {
        if duplicate {
            warn!(
                "key '{}' at index {} in the {} store duplicates another record's key",
                key,
                index,
                namespace_label(file_namespace)
            );
        } else {
            warn!(
                "record at index {} in the {} store has an empty key",
                index,
                namespace_label(file_namespace)
            );
        }
    }

    fn on_type_error(&mut self, key: &str, index: usize, file_namespace: bool) {
        warn!(
            "record '{}' at index {} in the {} store has an empty type tag",
            key,
            index,
            namespace_label(file_namespace)
        );
    }
}

fn namespace_label(file_namespace: bool) -> &'static str {
    if file_namespace {
        "files"
    } else {
        "prefs"
    }
}
