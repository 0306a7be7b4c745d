//! The `Storable` trait and its implementations.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;
use crate::tag::TypeTag;

/// A type that can be stored as a tagged string value.
///
/// Callers always name `T` explicitly at the call site; the tag is derived
/// from the type here, never inferred from stored data.
///
/// Implementations exist for the built-in primitives (booleans, the numeric
/// family, `char`, `String`), for the pointer-sized integers, and - via
/// [`storable_struct!`](crate::storable_struct) - for any serde type.
///
/// # Example
///
/// ```rust
/// use tagstore_codec::{Storable, TypeTag};
///
/// assert_eq!(u16::tag(), TypeTag::U16);
/// assert_eq!(42u16.encode().unwrap(), "42");
/// assert_eq!(u16::decode("42").unwrap(), 42);
/// ```
pub trait Storable: Sized {
    /// The tag recorded next to values of this type.
    fn tag() -> TypeTag;

    /// Produce the stored string form.
    fn encode(&self) -> Result<String, CodecError>;

    /// Parse the stored string form.
    fn decode(raw: &str) -> Result<Self, CodecError>;
}

macro_rules! primitive_storable {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Storable for $ty {
                fn tag() -> TypeTag {
                    TypeTag::$variant
                }

                fn encode(&self) -> Result<String, CodecError> {
                    Ok(self.to_string())
                }

                fn decode(raw: &str) -> Result<Self, CodecError> {
                    raw.parse()
                        .map_err(|e| CodecError::decode(TypeTag::$variant, e))
                }
            }
        )*
    };
}

primitive_storable! {
    bool => Bool,
    char => Char,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
}

/// Pointer-sized integers persist with 32-bit range semantics: the value is
/// narrowed through `i32`/`u32` on encode and widened back on decode, so the
/// stored form is portable across platforms. On 64-bit platforms values
/// outside the 32-bit range lose precision. This limitation is inherited
/// from the persisted data format and kept for compatibility.
impl Storable for isize {
    fn tag() -> TypeTag {
        TypeTag::Isize
    }

    fn encode(&self) -> Result<String, CodecError> {
        Ok((*self as i32).to_string())
    }

    fn decode(raw: &str) -> Result<Self, CodecError> {
        raw.parse::<i32>()
            .map(|v| v as isize)
            .map_err(|e| CodecError::decode(TypeTag::Isize, e))
    }
}

/// See the `isize` impl for the 32-bit range semantics.
impl Storable for usize {
    fn tag() -> TypeTag {
        TypeTag::Usize
    }

    fn encode(&self) -> Result<String, CodecError> {
        Ok((*self as u32).to_string())
    }

    fn decode(raw: &str) -> Result<Self, CodecError> {
        raw.parse::<u32>()
            .map(|v| v as usize)
            .map_err(|e| CodecError::decode(TypeTag::Usize, e))
    }
}

/// Serialize a structured value to its stored JSON form.
///
/// Used by the [`storable_struct!`](crate::storable_struct) expansion.
pub fn encode_structured<T: Serialize>(tag: &TypeTag, value: &T) -> Result<String, CodecError> {
    serde_json::to_string_pretty(value).map_err(|e| CodecError::encode(tag.clone(), e))
}

/// Parse a structured value from its stored JSON form.
///
/// Used by the [`storable_struct!`](crate::storable_struct) expansion.
pub fn decode_structured<T: DeserializeOwned>(tag: &TypeTag, raw: &str) -> Result<T, CodecError> {
    serde_json::from_str(raw).map_err(|e| CodecError::decode(tag.clone(), e))
}

/// Opt a serde type into structured storage.
///
/// The type must implement `Serialize` and `DeserializeOwned`. Its stored
/// form is pretty-printed JSON of its public fields, and its tag is the
/// type's name (or an explicit second argument, for types whose persisted
/// name must differ from the Rust spelling).
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use tagstore_codec::{storable_struct, Storable, TypeTag};
///
/// #[derive(Serialize, Deserialize)]
/// struct SaveData {
///     level: u32,
///     name: String,
/// }
///
/// storable_struct!(SaveData);
///
/// assert_eq!(SaveData::tag(), TypeTag::Struct("SaveData".to_string()));
/// ```
#[macro_export]
macro_rules! storable_struct {
    ($ty:ty) => {
        $crate::storable_struct!($ty, stringify!($ty));
    };
    ($ty:ty, $name:expr) => {
        impl $crate::Storable for $ty {
            fn tag() -> $crate::TypeTag {
                $crate::TypeTag::Struct(($name).to_string())
            }

            fn encode(&self) -> ::std::result::Result<::std::string::String, $crate::CodecError> {
                $crate::encode_structured(&<Self as $crate::Storable>::tag(), self)
            }

            fn decode(raw: &str) -> ::std::result::Result<Self, $crate::CodecError> {
                $crate::decode_structured(&<Self as $crate::Storable>::tag(), raw)
            }
        }
    };
}

/// Probe whether `raw` decodes under `tag`.
///
/// This is the validation-time counterpart of [`Storable::decode`]: the
/// concrete Rust type behind a `Struct` tag is not known during a validation
/// pass, so structured values are only required to be well-formed JSON.
/// Primitive tags attempt a full typed decode.
pub fn verify(tag: &TypeTag, raw: &str) -> Result<(), CodecError> {
    match tag {
        TypeTag::Bool => bool::decode(raw).map(drop),
        TypeTag::Char => char::decode(raw).map(drop),
        TypeTag::I8 => i8::decode(raw).map(drop),
        TypeTag::U8 => u8::decode(raw).map(drop),
        TypeTag::I16 => i16::decode(raw).map(drop),
        TypeTag::U16 => u16::decode(raw).map(drop),
        TypeTag::I32 => i32::decode(raw).map(drop),
        TypeTag::U32 => u32::decode(raw).map(drop),
        TypeTag::I64 => i64::decode(raw).map(drop),
        TypeTag::U64 => u64::decode(raw).map(drop),
        TypeTag::Isize => isize::decode(raw).map(drop),
        TypeTag::Usize => usize::decode(raw).map(drop),
        TypeTag::F32 => f32::decode(raw).map(drop),
        TypeTag::F64 => f64::decode(raw).map(drop),
        TypeTag::String => String::decode(raw).map(drop),
        TypeTag::Struct(_) => serde_json::from_str::<serde_json::Value>(raw)
            .map(drop)
            .map_err(|e| CodecError::decode(tag.clone(), e)),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct SaveData {
        level: u32,
        name: String,
    }

    storable_struct!(SaveData);

    #[test]
    fn primitive_round_trips() {
        assert_eq!(bool::decode(&true.encode().unwrap()).unwrap(), true);
        assert_eq!(char::decode(&'x'.encode().unwrap()).unwrap(), 'x');
        assert_eq!(i8::decode(&(-7i8).encode().unwrap()).unwrap(), -7);
        assert_eq!(u64::decode(&u64::MAX.encode().unwrap()).unwrap(), u64::MAX);
        assert_eq!(f64::decode(&1.25f64.encode().unwrap()).unwrap(), 1.25);
        assert_eq!(
            String::decode(&"hello".to_string().encode().unwrap()).unwrap(),
            "hello"
        );
    }

    #[test]
    fn primitive_decode_rejects_garbage() {
        assert!(bool::decode("yes").is_err());
        assert!(i32::decode("abc").is_err());
        assert!(char::decode("ab").is_err());
        assert!(f32::decode("").is_err());
    }

    #[test]
    fn string_decode_never_fails() {
        assert_eq!(String::decode("").unwrap(), "");
        assert_eq!(String::decode("not json at all").unwrap(), "not json at all");
    }

    #[test]
    fn pointer_sized_uses_32_bit_range() {
        assert_eq!((-5isize).encode().unwrap(), "-5");
        assert_eq!(isize::decode("2147483647").unwrap(), i32::MAX as isize);
        // Out of 32-bit range: rejected on decode, not silently wrapped.
        assert!(isize::decode("2147483648").is_err());
        assert!(usize::decode("-1").is_err());
        assert_eq!(usize::decode("4294967295").unwrap(), u32::MAX as usize);
    }

    #[test]
    fn structured_round_trip() {
        let data = SaveData {
            level: 3,
            name: "slot-a".to_string(),
        };

        let encoded = data.encode().unwrap();
        assert!(encoded.contains("\"level\": 3"));

        let decoded = SaveData::decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn structured_tag_is_type_name() {
        assert_eq!(SaveData::tag(), TypeTag::Struct("SaveData".to_string()));
    }

    #[test]
    fn structured_decode_rejects_malformed_payload() {
        assert!(SaveData::decode("{not json").is_err());
    }

    #[test]
    fn verify_matches_decode_for_primitives() {
        assert!(verify(&TypeTag::I32, "41").is_ok());
        assert!(verify(&TypeTag::I32, "abc").is_err());
        assert!(verify(&TypeTag::Bool, "true").is_ok());
        assert!(verify(&TypeTag::Bool, "1").is_err());
        assert!(verify(&TypeTag::String, "anything").is_ok());
    }

    #[test]
    fn verify_requires_well_formed_json_for_structs() {
        let tag = TypeTag::Struct("SaveData".to_string());
        assert!(verify(&tag, "{\"level\": 1, \"name\": \"a\"}").is_ok());
        // Shape is not checked - only well-formedness.
        assert!(verify(&tag, "{\"unrelated\": true}").is_ok());
        assert!(verify(&tag, "{broken").is_err());
    }
}
