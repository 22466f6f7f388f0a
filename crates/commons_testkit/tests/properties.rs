//! Property tests for the serialization engine's contract.

use commons_model::models::{Profile, User};
use commons_model::{JsonOptions, Record, Stored, Timestamp};
use commons_testkit::fixtures::{sample_profile, sample_user};
use commons_testkit::generators::{arb_stored_user, field_subset};
use proptest::prelude::*;

proptest! {
    #[test]
    fn id_never_appears(stored in arb_stored_user(), skip in field_subset::<User>()) {
        let json = stored.to_json(&JsonOptions::new().skip(&skip));
        prop_assert!(!json.contains_key("id"));

        let json = stored.to_json(&JsonOptions::new().limit(&skip));
        prop_assert!(!json.contains_key("id"));
    }

    #[test]
    fn skip_fields_never_appear(stored in arb_stored_user(), skip in field_subset::<User>()) {
        let json = stored.to_json(&JsonOptions::new().skip(&skip));
        for name in &skip {
            prop_assert!(!json.contains_key(*name));
        }
    }

    #[test]
    fn limit_bounds_the_output(stored in arb_stored_user(), limit in field_subset::<User>()) {
        let json = stored.to_json(&JsonOptions::new().limit(&limit));
        for key in json.keys() {
            prop_assert!(limit.contains(&key.as_str()));
        }
    }

    #[test]
    fn limit_and_skip_compose(
        stored in arb_stored_user(),
        limit in field_subset::<User>(),
        skip in field_subset::<User>(),
    ) {
        let json = stored.to_json(&JsonOptions::new().limit(&limit).skip(&skip));
        for key in json.keys() {
            prop_assert!(limit.contains(&key.as_str()));
            prop_assert!(!skip.contains(&key.as_str()));
        }
    }

    #[test]
    fn serialization_is_idempotent(stored in arb_stored_user()) {
        let first = stored.to_json(&JsonOptions::new());
        let second = stored.to_json(&JsonOptions::new());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn update_stamps_a_recent_timestamp(user in commons_testkit::generators::arb_user()) {
        let before = Timestamp::now();
        let mut stored = Stored::new(user);
        prop_assert!(stored.updated_at().is_none());

        stored.update(|u| u.full_name = Some("Changed".to_owned()));
        let stamped = stored.updated_at().expect("update must stamp");
        prop_assert!(stamped >= before);
    }
}

proptest! {
    #[test]
    fn profile_limits_hold_on_a_wide_record(limit in field_subset::<Profile>()) {
        let json = sample_profile().to_json(&JsonOptions::new().limit(&limit));
        prop_assert!(json.len() <= limit.len());
        for key in json.keys() {
            prop_assert!(limit.contains(&key.as_str()));
        }
    }
}

#[test]
fn default_output_has_one_entry_per_field_plus_updated_at() {
    let json = sample_user().to_json(&JsonOptions::new());
    assert_eq!(json.len(), User::FIELDS.len() + 1);
}
