//! Generic record-to-mapping serialization.
//!
//! One routine serves every record type: it walks a field list, reads
//! each value through the record's accessor, and renders it to text.
//! Views with narrower output (profile summaries, ballot receipts) are
//! thin wrappers passing a fixed `limit` list, so the copy logic lives
//! in exactly one place.

use crate::record::{Record, Stored, ID_FIELD, UPDATED_AT_FIELD};
use std::collections::BTreeMap;
use tracing::debug;

/// The external representation of a record: field name to rendered text.
pub type JsonMap = BTreeMap<String, String>;

/// Field selection options for [`to_json`].
///
/// `skip` names fields to exclude on top of the always-excluded `id`;
/// `limit` restricts the fields considered, defaulting to the record's
/// full roster (plus `updated_at`) when absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOptions<'a> {
    skip: &'a [&'a str],
    limit: Option<&'a [&'a str]>,
}

impl<'a> JsonOptions<'a> {
    /// Creates options selecting every field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            skip: &[],
            limit: None,
        }
    }

    /// Sets the fields to exclude.
    #[must_use]
    pub fn skip(mut self, fields: &'a [&'a str]) -> Self {
        self.skip = fields;
        self
    }

    /// Restricts output to the named fields.
    #[must_use]
    pub fn limit(mut self, fields: &'a [&'a str]) -> Self {
        self.limit = Some(fields);
        self
    }
}

/// Serializes a stored record to a name → text mapping.
///
/// The effective field set is `limit` (or the full roster) minus `skip`
/// minus the identifier. Fields whose value fails to render are dropped
/// from the output instead of failing the call; existing consumers
/// expect partial-success output, so the only trace is a debug event.
pub fn to_json<T: Record>(record: &Stored<T>, options: &JsonOptions<'_>) -> JsonMap {
    let mut out = JsonMap::new();

    let default_fields;
    let fields: &[&str] = match options.limit {
        Some(limit) => limit,
        None => {
            default_fields = full_field_list::<T>();
            &default_fields
        }
    };

    for &name in fields {
        if name == ID_FIELD || options.skip.contains(&name) {
            continue;
        }
        let Some(value) = record.field_value(name) else {
            continue;
        };
        match value.render() {
            Ok(text) => {
                out.insert(name.to_owned(), text);
            }
            Err(error) => {
                debug!(field = name, %error, "dropping unrenderable field");
            }
        }
    }

    out
}

/// The default field list: `updated_at` plus the record's declared fields.
fn full_field_list<T: Record>() -> Vec<&'static str> {
    let mut fields = Vec::with_capacity(T::FIELDS.len() + 1);
    fields.push(UPDATED_AT_FIELD);
    fields.extend_from_slice(T::FIELDS);
    fields
}

impl<T: Record> Stored<T> {
    /// Serializes this record; see [`to_json`].
    #[must_use]
    pub fn to_json(&self, options: &JsonOptions<'_>) -> JsonMap {
        to_json(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    #[derive(Debug, Clone, Default)]
    struct Widget {
        label: String,
        count: i64,
        blob: Vec<u8>,
    }

    impl Record for Widget {
        const NAME: &'static str = "Widget";
        const FIELDS: &'static [&'static str] = &["label", "count", "blob"];

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "label" => Some(FieldValue::text(&self.label)),
                "count" => Some(self.count.into()),
                "blob" => Some(FieldValue::Bytes(self.blob.clone())),
                _ => None,
            }
        }
    }

    fn widget() -> Stored<Widget> {
        Stored::new(Widget {
            label: "gear".to_owned(),
            count: 3,
            blob: b"ok".to_vec(),
        })
    }

    #[test]
    fn default_includes_all_fields_and_updated_at() {
        let json = widget().to_json(&JsonOptions::new());
        assert_eq!(json.len(), 4);
        assert_eq!(json["label"], "gear");
        assert_eq!(json["count"], "3");
        assert_eq!(json["blob"], "ok");
        assert_eq!(json["updated_at"], "");
    }

    #[test]
    fn id_is_never_emitted() {
        let json = widget().to_json(&JsonOptions::new());
        assert!(!json.contains_key("id"));
    }

    #[test]
    fn id_cannot_be_pulled_in_via_limit() {
        let json = widget().to_json(&JsonOptions::new().limit(&["id", "label"]));
        assert_eq!(json.len(), 1);
        assert_eq!(json["label"], "gear");
    }

    #[test]
    fn skip_excludes_fields() {
        let json = widget().to_json(&JsonOptions::new().skip(&["count", "blob"]));
        assert!(!json.contains_key("count"));
        assert!(!json.contains_key("blob"));
        assert!(json.contains_key("label"));
    }

    #[test]
    fn limit_restricts_fields() {
        let json = widget().to_json(&JsonOptions::new().limit(&["count"]));
        assert_eq!(json.len(), 1);
        assert_eq!(json["count"], "3");
    }

    #[test]
    fn skip_wins_over_limit() {
        let json = widget().to_json(&JsonOptions::new().limit(&["label", "count"]).skip(&["count"]));
        assert_eq!(json.len(), 1);
        assert!(json.contains_key("label"));
    }

    #[test]
    fn unknown_field_in_limit_is_omitted() {
        let json = widget().to_json(&JsonOptions::new().limit(&["label", "no_such_field"]));
        assert_eq!(json.len(), 1);
    }

    #[test]
    fn unrenderable_field_is_dropped_silently() {
        let mut record = widget();
        record.update(|w| w.blob = vec![0xff, 0xfe]);

        let json = record.to_json(&JsonOptions::new());
        assert!(!json.contains_key("blob"));
        assert_eq!(json["label"], "gear");
        assert_eq!(json["count"], "3");
        assert!(!json["updated_at"].is_empty());
    }

    #[test]
    fn updated_at_renders_as_millis() {
        let mut record = widget();
        record.update(|w| w.count = 4);

        let json = record.to_json(&JsonOptions::new());
        let millis: u64 = json["updated_at"].parse().unwrap();
        assert!(millis > 0);
    }

    #[test]
    fn serialization_is_idempotent() {
        let record = widget();
        let first = record.to_json(&JsonOptions::new());
        let second = record.to_json(&JsonOptions::new());
        assert_eq!(first, second);
    }
}
