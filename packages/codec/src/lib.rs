//! tagstore codec: typed values to and from their stored string form.
//!
//! Every value in a tagstore record is a string, paired with a [`TypeTag`]
//! naming the type that must be used to decode it. This crate owns that
//! conversion:
//! - [`TypeTag`]: the closed set of persisted type discriminants
//! - [`Storable`]: encode/decode for a concrete Rust type
//! - [`storable_struct!`]: opt a serde type into structured (JSON) storage
//! - [`verify`]: decode probe used by the validation pass
//!
//! Primitives use their canonical, locale-invariant string forms; structured
//! types are stored as pretty-printed JSON.

mod error;
mod storable;
mod tag;

pub use error::CodecError;
pub use storable::{decode_structured, encode_structured, verify, Storable};
pub use tag::TypeTag;
