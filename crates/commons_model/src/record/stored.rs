//! Persistence envelope for records.

use super::{Record, RecordId, Timestamp, ID_FIELD, UPDATED_AT_FIELD};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A record together with its identity and update timestamp.
///
/// `Stored<T>` owns the two columns every record type shares:
///
/// - `id`: assigned at construction, immutable afterwards;
/// - `updated_at`: absent at construction, stamped on every mutation.
///
/// Reads go through `Deref`; writes must go through [`Stored::update`],
/// which is the only way to reach `&mut T`. That makes the timestamp
/// bump a side effect of any field write rather than something callers
/// remember to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T: Record> {
    id: RecordId,
    updated_at: Option<Timestamp>,
    #[serde(flatten)]
    data: T,
}

impl<T: Record> Stored<T> {
    /// Wraps a freshly created record, assigning it a new random ID.
    ///
    /// The update timestamp starts out unset, distinguishing "never
    /// updated" from "updated".
    #[must_use]
    pub fn new(data: T) -> Self {
        Self {
            id: RecordId::new(),
            updated_at: None,
            data,
        }
    }

    /// Rehydrates a record fetched from storage.
    #[must_use]
    pub fn with_parts(id: RecordId, updated_at: Option<Timestamp>, data: T) -> Self {
        Self {
            id,
            updated_at,
            data,
        }
    }

    /// Returns the record's identifier.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns when the record was last updated, if ever.
    #[must_use]
    pub const fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    /// Mutates the record and stamps the update timestamp.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.data);
        self.updated_at = Some(Timestamp::now());
        result
    }

    /// Consumes the envelope, returning the inner record.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Resolves a field by name, covering the envelope's own columns.
    ///
    /// `updated_at` renders as integer milliseconds (or `Null` when
    /// unset). The `id` field is never exposed through this accessor.
    #[must_use]
    pub fn field_value(&self, name: &str) -> Option<FieldValue> {
        match name {
            ID_FIELD => None,
            UPDATED_AT_FIELD => Some(match self.updated_at {
                Some(ts) => FieldValue::Integer(ts.as_millis() as i64),
                None => FieldValue::Null,
            }),
            _ => self.data.field(name),
        }
    }
}

impl<T: Record> Deref for Stored<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
