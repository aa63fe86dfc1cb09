//! Field kinds and the text encodings used by byte fields.

use crate::{Field, ValueObjectError, ValueObjectResult, ValueObjectType};

/// The closed set of field variants.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    /// JSON-compatible value stored as-is.
    Primitive,
    /// Byte string stored as text in the declared encoding.
    Bytes {
        /// Encoding used between stored text and bytes.
        encoding: TextEncoding,
    },
    /// Calendar date.
    Date,
    /// UTC timestamp.
    Datetime,
    /// Exact decimal number.
    Decimal,
    /// Keyed collection whose entries all share one sub-field.
    Collection(Box<Field>),
    /// Nested value object of the given type.
    Nested(ValueObjectType),
}

impl FieldKind {
    /// Short name of the kind, used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Bytes { .. } => "bytes",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Decimal => "decimal",
            Self::Collection(_) => "collection",
            Self::Nested(_) => "nested value object",
        }
    }

    /// Whether a [`crate::Visibility::Only`] policy is meaningful for this kind.
    #[must_use]
    pub const fn has_entries(&self) -> bool {
        matches!(self, Self::Collection(_) | Self::Nested(_))
    }
}

/// Text encoding of a byte field's stored form.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TextEncoding {
    /// UTF-8.
    #[default]
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
    /// 7-bit US-ASCII.
    Ascii,
}

impl TextEncoding {
    /// Resolve an encoding label such as `utf-8` or `latin-1`.
    ///
    /// Labels are matched case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_object::TextEncoding;
    /// assert_eq!(TextEncoding::from_label("UTF-8"), Some(TextEncoding::Utf8));
    /// assert_eq!(TextEncoding::from_label("iso-8859-1"), Some(TextEncoding::Latin1));
    /// assert_eq!(TextEncoding::from_label("ebcdic"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        // Mirrored by `Encoding::parse` in value_object_macros.
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Self::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Some(Self::Latin1),
            "ascii" | "us-ascii" => Some(Self::Ascii),
            _ => None,
        }
    }

    /// Encode stored text into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::MalformedValue`] when the text holds a
    /// character the encoding cannot represent.
    pub fn encode(self, text: &str) -> ValueObjectResult<Vec<u8>> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Latin1 | Self::Ascii => text
                .chars()
                .map(|ch| self.narrow(ch))
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| {
                    ValueObjectError::malformed(self.text_description(), format!("{text:?}"))
                }),
        }
    }

    /// Decode bytes into text.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::UnexpectedValue`] when the bytes are not
    /// valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> ValueObjectResult<String> {
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|_| self.undecodable()),
            Self::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
            Self::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().copied().map(char::from).collect())
                } else {
                    Err(self.undecodable())
                }
            }
        }
    }

    /// Decode bytes, replacing anything undecodable.
    pub(crate) fn decode_lossy(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Latin1 => bytes.iter().copied().map(char::from).collect(),
            Self::Ascii => bytes
                .iter()
                .map(|&byte| {
                    if byte.is_ascii() {
                        char::from(byte)
                    } else {
                        char::REPLACEMENT_CHARACTER
                    }
                })
                .collect(),
        }
    }

    fn narrow(self, ch: char) -> Option<u8> {
        let limit = match self {
            Self::Ascii => 0x7F,
            Self::Utf8 | Self::Latin1 => 0xFF,
        };
        u8::try_from(u32::from(ch)).ok().filter(|byte| u32::from(*byte) <= limit)
    }

    pub(crate) const fn text_description(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8 text",
            Self::Latin1 => "text encodable as latin-1",
            Self::Ascii => "text encodable as ascii",
        }
    }

    fn undecodable(self) -> ValueObjectError {
        let expected = match self {
            Self::Utf8 => "bytes decodable as utf-8",
            Self::Latin1 => "bytes decodable as latin-1",
            Self::Ascii => "bytes decodable as ascii",
        };
        ValueObjectError::unexpected(expected, "undecodable bytes")
    }
}
