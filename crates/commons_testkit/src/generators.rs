//! Proptest strategies for records and field selections.

use commons_model::models::User;
use commons_model::{Record, Stored};
use proptest::prelude::*;
use proptest::sample::subsequence;

/// A strategy producing arbitrary subsets of a record type's declared
/// fields, for driving skip/limit properties.
pub fn field_subset<T: Record>() -> impl Strategy<Value = Vec<&'static str>> {
    subsequence(T::FIELDS.to_vec(), 0..=T::FIELDS.len())
}

/// A strategy producing arbitrary user accounts.
pub fn arb_user() -> impl Strategy<Value = User> {
    (
        "[0-9]{7}",
        "[a-z]{3,12}",
        proptest::option::of("[A-Za-z][A-Za-z ]{0,24}"),
        proptest::option::of("(Student|Staff|Faculty)"),
        proptest::option::of("[a-z,]{0,20}"),
    )
        .prop_map(|(wwuid, username, full_name, status, roles)| User {
            wwuid,
            username,
            full_name,
            status,
            roles,
        })
}

/// A strategy producing stored user records, some freshly created and
/// some mutated (so `updated_at` is exercised both ways).
pub fn arb_stored_user() -> impl Strategy<Value = Stored<User>> {
    (arb_user(), any::<bool>()).prop_map(|(user, mutated)| {
        let mut stored = Stored::new(user);
        if mutated {
            stored.update(|u| u.status = Some("Updated".to_owned()));
        }
        stored
    })
}
