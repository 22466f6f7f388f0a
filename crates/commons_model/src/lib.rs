//! # commons_model
//!
//! Persistent record models for the commons association app: user
//! accounts, profiles, the volunteering interest survey, and the
//! election ballots, together with the shared machinery they sit on:
//!
//! - [`Record`]: per-type static field rosters and a value accessor
//! - [`Stored`]: identity and automatic update-timestamp tracking
//! - [`to_json`]: one generic record-to-mapping serialization routine
//! - [`collection_name`]: lowercase-and-pluralize collection naming
//!
//! Storage and HTTP layers are external collaborators; this crate only
//! defines the in-memory records and their external representation.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod json;
mod record;
mod value;

pub mod elections;
pub mod models;

pub use collection::{collection_name, pluralize};
pub use json::{to_json, JsonMap, JsonOptions};
pub use record::{Record, RecordId, Stored, Timestamp, ID_FIELD, UPDATED_AT_FIELD};
pub use value::{FieldValue, RenderError, RenderResult};
