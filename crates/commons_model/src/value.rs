//! Dynamic field value type.

use thiserror::Error;

/// Result type for value rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur when rendering a field value to text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A byte-string field does not hold valid UTF-8.
    #[error("byte field is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// A dynamic field value.
///
/// This type represents any value a record field can hold. Records
/// expose their fields as `FieldValue` so that one serialization
/// routine works across every record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Absent value (SQL NULL equivalent).
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer (supports full i64 range).
    Integer(i64),
    /// Text string (UTF-8).
    Text(String),
    /// Byte string. Rendering requires the bytes to be valid UTF-8.
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a text value from an optional string, mapping `None` to `Null`.
    #[must_use]
    pub fn opt_text(value: &Option<String>) -> Self {
        match value {
            Some(text) => Self::Text(text.clone()),
            None => Self::Null,
        }
    }

    /// Creates an integer value from an optional integer, mapping `None` to `Null`.
    #[must_use]
    pub fn opt_int(value: Option<i64>) -> Self {
        match value {
            Some(n) => Self::Integer(n),
            None => Self::Null,
        }
    }

    /// Returns `true` if this value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the value to its external string representation.
    ///
    /// `Null` renders as the empty string, so an unset column still
    /// produces an entry under its key. Byte strings must decode as
    /// UTF-8; anything else is an error, and the serialization engine
    /// drops the field rather than failing the whole record.
    pub fn render(&self) -> RenderResult<String> {
        match self {
            Self::Null => Ok(String::new()),
            Self::Bool(b) => Ok(b.to_string()),
            Self::Integer(n) => Ok(n.to_string()),
            Self::Text(text) => Ok(text.clone()),
            Self::Bytes(bytes) => Ok(std::str::from_utf8(bytes)?.to_owned()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
