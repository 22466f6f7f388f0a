//! Election-partition user account record.

use crate::record::Record;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// A user account within the election partition.
///
/// Same shape as the general user record, stored in a separate
/// namespace so ballots never reference general-partition rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// External unique identifier for the person.
    pub wwuid: String,
    /// Login name. Required.
    pub username: String,
    /// Display name.
    pub full_name: Option<String>,
    /// Account status.
    pub status: Option<String>,
    /// Delimited role list.
    pub roles: Option<String>,
}

impl Record for User {
    const NAME: &'static str = "User";
    const FIELDS: &'static [&'static str] =
        &["wwuid", "username", "full_name", "status", "roles"];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "wwuid" => Some(FieldValue::text(&self.wwuid)),
            "username" => Some(FieldValue::text(&self.username)),
            "full_name" => Some(FieldValue::opt_text(&self.full_name)),
            "status" => Some(FieldValue::opt_text(&self.status)),
            "roles" => Some(FieldValue::opt_text(&self.roles)),
            _ => None,
        }
    }
}
