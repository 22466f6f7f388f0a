//! Ready-made populated records for tests.

use commons_model::elections;
use commons_model::models::{Profile, User, Volunteer};
use commons_model::Stored;

/// The wwuid shared by all fixtures, so joined records line up.
pub const FIXTURE_WWUID: &str = "9150123";

/// A plausible user account.
#[must_use]
pub fn sample_user() -> Stored<User> {
    Stored::new(User {
        wwuid: FIXTURE_WWUID.to_owned(),
        username: "jdoe".to_owned(),
        full_name: Some("Jane Doe".to_owned()),
        status: Some("Student".to_owned()),
        roles: Some("volunteer,editor".to_owned()),
    })
}

/// A mostly-filled profile for the fixture user.
#[must_use]
pub fn sample_profile() -> Stored<Profile> {
    Stored::new(Profile {
        wwuid: FIXTURE_WWUID.to_owned(),
        username: Some("jdoe".to_owned()),
        full_name: Some("Jane Doe".to_owned()),
        photo: Some("profiles/1617-jdoe.jpg".to_owned()),
        gender: Some("Female".to_owned()),
        email: Some("jane.doe@example.edu".to_owned()),
        phone: Some("509-555-0100".to_owned()),
        majors: Some("Computer Science".to_owned()),
        class_standing: Some("Junior".to_owned()),
        class_of: Some("2027".to_owned()),
        quote: Some("Look busy.".to_owned()),
        quote_author: Some("Anonymous".to_owned()),
        hobbies: Some("climbing, chess".to_owned()),
        views: Some(5),
        privacy: Some(1),
        ..Profile::default()
    })
}

/// A survey with a couple of flags checked and one free-text answer.
#[must_use]
pub fn sample_volunteer() -> Stored<Volunteer> {
    Stored::new(Volunteer {
        wwuid: FIXTURE_WWUID.to_owned(),
        bible_study: true,
        graphic_design: true,
        music: Some("guitar".to_owned()),
        ..Volunteer::default()
    })
}

/// A completed ballot for the fixture user.
#[must_use]
pub fn sample_ballot() -> Stored<elections::Election> {
    Stored::new(elections::Election {
        wwuid: FIXTURE_WWUID.to_owned(),
        candidate_one: Some("A. Candidate".to_owned()),
        candidate_two: Some("B. Candidate".to_owned()),
        sm_one: Some("C. Officer".to_owned()),
        sm_two: Some("D. Officer".to_owned()),
        new_department: Some("Department of Cycling".to_owned()),
        district: Some("Sittner".to_owned()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_share_the_join_key() {
        assert_eq!(sample_user().wwuid, FIXTURE_WWUID);
        assert_eq!(sample_profile().wwuid, FIXTURE_WWUID);
        assert_eq!(sample_volunteer().wwuid, FIXTURE_WWUID);
        assert_eq!(sample_ballot().wwuid, FIXTURE_WWUID);
    }

    #[test]
    fn fixtures_start_unmodified() {
        assert!(sample_user().updated_at().is_none());
        assert!(sample_ballot().updated_at().is_none());
    }
}
