//! End-to-end serialization scenarios over the real record types.

use commons_model::elections;
use commons_model::models::{Interest, Profile, User, Volunteer};
use commons_model::{collection_name, JsonOptions, Record, Stored};

#[test]
fn collection_names_for_all_model_types() {
    assert_eq!(collection_name("User"), "users");
    assert_eq!(collection_name("Profile"), "profiles");
    assert_eq!(collection_name("Volunteer"), "volunteers");
    assert_eq!(collection_name("Election"), "elections");

    assert_eq!(User::collection(), "users");
    assert_eq!(Profile::collection(), "profiles");
    assert_eq!(Volunteer::collection(), "volunteers");
    assert_eq!(elections::Election::collection(), "elections");
}

#[test]
fn user_serialization_skips_id_and_honors_skip_list() {
    let user = Stored::new(User {
        wwuid: "9150123".to_owned(),
        username: "jdoe".to_owned(),
        full_name: Some("Jane Doe".to_owned()),
        status: Some("Student".to_owned()),
        roles: Some("volunteer".to_owned()),
    });

    let json = user.to_json(&JsonOptions::new().skip(&["roles", "status"]));
    assert!(!json.contains_key("id"));
    assert!(!json.contains_key("roles"));
    assert!(!json.contains_key("status"));
    assert_eq!(json["username"], "jdoe");
}

#[test]
fn updated_at_lifecycle_shows_through_serialization() {
    let mut profile = Stored::new(Profile {
        wwuid: "9150123".to_owned(),
        ..Profile::default()
    });

    // never updated: key present, value empty
    let fresh = profile.to_json(&JsonOptions::new());
    assert_eq!(fresh["updated_at"], "");

    profile.update(|p| p.views = Some(1));
    let bumped = profile.to_json(&JsonOptions::new());
    let millis: u64 = bumped["updated_at"].parse().unwrap();
    assert!(millis > 0);
}

#[test]
fn profile_base_info_matches_the_published_shape() {
    let profile = Stored::new(Profile {
        wwuid: "9150123".to_owned(),
        username: Some("jdoe".to_owned()),
        full_name: Some("Jane Doe".to_owned()),
        photo: Some("profiles/1617-jdoe.jpg".to_owned()),
        email: Some("jane.doe@example.edu".to_owned()),
        quote: Some("Look busy.".to_owned()),
        views: Some(5),
        privacy: Some(1),
        ..Profile::default()
    });

    let info = profile.base_info();
    let keys: Vec<&str> = info.keys().map(String::as_str).collect();
    let mut expected = vec!["email", "full_name", "photo", "username", "views"];
    expected.sort_unstable();
    assert_eq!(keys, expected);
    assert_eq!(info["views"], "5");
}

#[test]
fn volunteer_scenario_from_the_survey() {
    let volunteer = Volunteer {
        wwuid: "9150123".to_owned(),
        bible_study: true,
        music: Some("guitar".to_owned()),
        ..Volunteer::default()
    };

    assert_eq!(
        volunteer.active_interests(),
        vec![
            Interest::Flag("bible_study"),
            Interest::Note {
                field: "music",
                value: "guitar".to_owned(),
            },
        ]
    );
}

#[test]
fn election_partition_is_independent_of_the_general_one() {
    // Same field names, same collection name, distinct types: the
    // compiler keeps the partitions from being cross-referenced.
    assert_eq!(User::FIELDS, elections::User::FIELDS);
    assert_eq!(User::collection(), elections::User::collection());

    let ballot = Stored::new(elections::Election {
        wwuid: "9150123".to_owned(),
        candidate_one: Some("A. Candidate".to_owned()),
        ..elections::Election::default()
    });

    let info = ballot.info();
    assert_eq!(info["wwuid"], "9150123");
    assert_eq!(info["candidate_one"], "A. Candidate");
    assert!(!info.contains_key("district"));
}

#[test]
fn rehydrated_record_serializes_like_the_original() {
    let mut user = Stored::new(User {
        wwuid: "9150123".to_owned(),
        username: "jdoe".to_owned(),
        ..User::default()
    });
    user.update(|u| u.status = Some("Student".to_owned()));

    let copy = Stored::with_parts(user.id(), user.updated_at(), (*user).clone());
    assert_eq!(
        user.to_json(&JsonOptions::new()),
        copy.to_json(&JsonOptions::new())
    );
}
