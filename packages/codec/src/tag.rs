//! The persisted type discriminant.

use std::fmt;

/// Discriminant recorded next to every stored value, naming the type that
/// must be used to decode it.
///
/// Lookup and validation compare tags by their exact string spelling; since
/// each variant owns exactly one spelling, comparing `TypeTag` values is
/// equivalent. External edits can introduce spellings no Rust type claims,
/// which land in [`TypeTag::Struct`], and empty spellings, which do not
/// parse at all.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bool,
    Char,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    /// Pointer-sized signed integer, persisted with 32-bit range semantics.
    Isize,
    /// Pointer-sized unsigned integer, persisted with 32-bit range semantics.
    Usize,
    F32,
    F64,
    String,
    /// A structured type, named by the spelling recorded at encode time.
    Struct(std::string::String),
}

impl TypeTag {
    /// Parse a persisted tag spelling.
    ///
    /// Returns `None` for the empty string - an empty tag is never valid.
    /// Known primitive spellings map to their variants; any other non-empty
    /// spelling names a structured type.
    pub fn parse(s: &str) -> Option<TypeTag> {
        match s {
            "" => None,
            "bool" => Some(TypeTag::Bool),
            "char" => Some(TypeTag::Char),
            "i8" => Some(TypeTag::I8),
            "u8" => Some(TypeTag::U8),
            "i16" => Some(TypeTag::I16),
            "u16" => Some(TypeTag::U16),
            "i32" => Some(TypeTag::I32),
            "u32" => Some(TypeTag::U32),
            "i64" => Some(TypeTag::I64),
            "u64" => Some(TypeTag::U64),
            "isize" => Some(TypeTag::Isize),
            "usize" => Some(TypeTag::Usize),
            "f32" => Some(TypeTag::F32),
            "f64" => Some(TypeTag::F64),
            "string" => Some(TypeTag::String),
            other => Some(TypeTag::Struct(other.to_string())),
        }
    }

    /// The canonical persisted spelling.
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Char => "char",
            TypeTag::I8 => "i8",
            TypeTag::U8 => "u8",
            TypeTag::I16 => "i16",
            TypeTag::U16 => "u16",
            TypeTag::I32 => "i32",
            TypeTag::U32 => "u32",
            TypeTag::I64 => "i64",
            TypeTag::U64 => "u64",
            TypeTag::Isize => "isize",
            TypeTag::Usize => "usize",
            TypeTag::F32 => "f32",
            TypeTag::F64 => "f64",
            TypeTag::String => "string",
            TypeTag::Struct(name) => name.as_str(),
        }
    }

    /// Whether this tag names a structured (JSON-serialized) type.
    pub fn is_struct(&self) -> bool {
        matches!(self, TypeTag::Struct(_))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_spellings_round_trip() {
        for tag in [
            TypeTag::Bool,
            TypeTag::Char,
            TypeTag::I8,
            TypeTag::U8,
            TypeTag::I16,
            TypeTag::U16,
            TypeTag::I32,
            TypeTag::U32,
            TypeTag::I64,
            TypeTag::U64,
            TypeTag::Isize,
            TypeTag::Usize,
            TypeTag::F32,
            TypeTag::F64,
            TypeTag::String,
        ] {
            assert_eq!(TypeTag::parse(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn empty_spelling_does_not_parse() {
        assert_eq!(TypeTag::parse(""), None);
    }

    #[test]
    fn unknown_spelling_is_a_struct_name() {
        let tag = TypeTag::parse("SaveData").unwrap();
        assert_eq!(tag, TypeTag::Struct("SaveData".to_string()));
        assert_eq!(tag.as_str(), "SaveData");
        assert!(tag.is_struct());
    }

    #[test]
    fn display_matches_spelling() {
        assert_eq!(format!("{}", TypeTag::U16), "u16");
        assert_eq!(
            format!("{}", TypeTag::Struct("SaveData".to_string())),
            "SaveData"
        );
    }
}
