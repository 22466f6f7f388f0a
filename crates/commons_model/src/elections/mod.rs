//! Election-partition record types.
//!
//! The election subsystem keeps its own [`User`] record and its own
//! storage namespace. The type is structurally identical to
//! [`crate::models::User`] but deliberately declared apart: the two
//! partitions must never be merged or cross-referenced, so sharing the
//! type would invite exactly the coupling the split exists to prevent.

mod election;
mod user;

pub use election::Election;
pub use user::User;
