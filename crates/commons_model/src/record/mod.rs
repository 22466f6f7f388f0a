//! Record trait and persistence envelope.

mod id;
mod stored;
mod timestamp;

pub use id::RecordId;
pub use stored::Stored;
pub use timestamp::Timestamp;

use crate::collection::collection_name;
use crate::value::FieldValue;

/// Name of the primary-key field every stored record carries.
///
/// Serialization excludes it unconditionally; it cannot be pulled in
/// through a `limit` list.
pub const ID_FIELD: &str = "id";

/// Name of the update-timestamp field every stored record carries.
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// Trait for types that can be stored and serialized as records.
///
/// Each record type declares its fields as a static list in schema
/// order, replacing runtime reflection over storage metadata with a
/// compile-time roster. The `id` and `updated_at` fields belong to the
/// [`Stored`] envelope and must not appear in [`Record::FIELDS`].
///
/// # Example
///
/// ```rust,ignore
/// use commons_model::{FieldValue, Record};
///
/// struct Note {
///     title: String,
///     body: Option<String>,
/// }
///
/// impl Record for Note {
///     const NAME: &'static str = "Note";
///     const FIELDS: &'static [&'static str] = &["title", "body"];
///
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         match name {
///             "title" => Some(FieldValue::text(&self.title)),
///             "body" => Some(FieldValue::opt_text(&self.body)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// The record type's name, used to derive its collection name.
    const NAME: &'static str;

    /// Declared data fields in schema order, excluding `id` and
    /// `updated_at`.
    const FIELDS: &'static [&'static str];

    /// Returns the current value of the named field.
    ///
    /// Unknown field names return `None`; the serialization engine
    /// omits them from the output rather than erroring.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Returns the storage collection this record type belongs to:
    /// the lowercased, pluralized type name.
    #[must_use]
    fn collection() -> String {
        collection_name(Self::NAME)
    }
}
