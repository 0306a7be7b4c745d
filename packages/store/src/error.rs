//! Error types for the store layer.

use tagstore_codec::CodecError;

use crate::sink::PersistError;

/// Errors from record store operations.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// A stored value could not be decoded as the requested type.
    ///
    /// Fatal to the triggering call: the caller asked for an incompatible
    /// type, so no recovery is attempted.
    #[error("failed to decode record '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: CodecError,
    },

    /// A value could not be encoded for storage.
    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: CodecError,
    },

    /// The persistence sink failed to flush a mutation.
    #[error("persistence failed: {0}")]
    Persist(#[from] PersistError),
}
