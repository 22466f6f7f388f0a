//! General-partition record types.
//!
//! These records share one storage namespace; the election subsystem
//! keeps its own independent partition under [`crate::elections`].
//! `wwuid` is the join key between [`User`] and its dependent records;
//! referential integrity is the storage layer's concern, not ours, and
//! orphaned dependents are possible.

mod profile;
mod user;
mod volunteer;

pub use profile::Profile;
pub use user::User;
pub use volunteer::{Interest, Volunteer, SURVEY_FIELDS};
