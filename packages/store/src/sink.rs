//! The durability seam invoked after every mutation.

use crate::record::{Namespace, Record};

/// Error from a persistence sink.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct PersistError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PersistError {
    pub fn new(message: impl Into<String>) -> PersistError {
        PersistError {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> PersistError {
        PersistError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Receives a store's records after every mutating call.
///
/// The store invokes `persist` exactly once per mutation (`set`, `delete`,
/// `delete_all`, and the removal half of `take`), never after reads. The
/// call is synchronous: when a mutating operation returns successfully, the
/// sink has already completed. A sink failure fails the mutating call.
///
/// `records` is the store's full ordered contents at the time of the call.
pub trait PersistenceSink: Send {
    fn persist(&mut self, namespace: Namespace, records: &[Record]) -> Result<(), PersistError>;
}

/// A sink that persists nothing.
///
/// Useful for purely in-memory stores and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPersistence;

impl PersistenceSink for NoPersistence {
    fn persist(&mut self, _namespace: Namespace, _records: &[Record]) -> Result<(), PersistError> {
        Ok(())
    }
}

impl<S: PersistenceSink + ?Sized> PersistenceSink for Box<S> {
    fn persist(&mut self, namespace: Namespace, records: &[Record]) -> Result<(), PersistError> {
        self.as_mut().persist(namespace, records)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use super::*;

    #[test]
    fn persist_error_display() {
        let e = PersistError::new("disk full");
        assert_eq!(format!("{}", e), "disk full");
        assert!(StdError::source(&e).is_none());
    }

    #[test]
    fn persist_error_carries_source() {
        let io = std::io::Error::other("device gone");
        let e = PersistError::with_source("flush failed", io);

        assert_eq!(format!("{}", e), "flush failed");
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn no_persistence_always_succeeds() {
        let mut sink = NoPersistence;
        assert!(sink.persist(Namespace::Prefs, &[]).is_ok());
    }
}
