//! Error types for the codec layer.

use std::fmt;

use crate::tag::TypeTag;

/// Errors produced while converting values to or from their stored form.
#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    /// A stored value could not be parsed as the requested type.
    #[error("failed to decode '{tag}' value: {message}")]
    Decode { tag: TypeTag, message: String },

    /// A value could not be serialized for storage.
    #[error("failed to encode '{tag}' value: {message}")]
    Encode { tag: TypeTag, message: String },
}

impl CodecError {
    /// A decode failure for `tag`, with the parser's message.
    pub fn decode(tag: TypeTag, cause: impl fmt::Display) -> Self {
        CodecError::Decode {
            tag,
            message: cause.to_string(),
        }
    }

    /// An encode failure for `tag`, with the serializer's message.
    pub fn encode(tag: TypeTag, cause: impl fmt::Display) -> Self {
        CodecError::Encode {
            tag,
            message: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display() {
        let e = CodecError::decode(TypeTag::I32, "invalid digit");
        let display = format!("{}", e);
        assert!(display.contains("decode"));
        assert!(display.contains("i32"));
        assert!(display.contains("invalid digit"));
    }

    #[test]
    fn encode_error_display() {
        let e = CodecError::encode(TypeTag::Struct("SaveData".to_string()), "oops");
        let display = format!("{}", e);
        assert!(display.contains("encode"));
        assert!(display.contains("SaveData"));
    }
}
