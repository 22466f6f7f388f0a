//! User profile record.

use crate::json::{JsonMap, JsonOptions};
use crate::record::{Record, Stored};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// Fields exposed by [`Stored::<Profile>::base_info`].
const BASE_INFO_FIELDS: &[&str] = &["username", "full_name", "photo", "email", "views"];

/// A user's public profile.
///
/// One-to-one with [`crate::models::User`] via `wwuid` (by convention;
/// the schema does not enforce uniqueness). Everything except the join
/// key is optional descriptive data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)] // field names are the documentation here
pub struct Profile {
    /// External identifier of the user this profile belongs to.
    pub wwuid: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub photo: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub majors: Option<String>,
    pub minors: Option<String>,
    pub graduate: Option<String>,
    pub preprofessional: Option<String>,
    pub class_standing: Option<String>,
    pub high_school: Option<String>,
    pub class_of: Option<String>,
    pub relationship_status: Option<String>,
    pub attached_to: Option<String>,
    pub quote: Option<String>,
    pub quote_author: Option<String>,
    pub hobbies: Option<String>,
    pub career_goals: Option<String>,
    pub favorite_books: Option<String>,
    pub favorite_food: Option<String>,
    pub favorite_movies: Option<String>,
    pub favorite_music: Option<String>,
    pub pet_peeves: Option<String>,
    pub personality: Option<String>,
    /// Profile page view counter.
    pub views: Option<i64>,
    /// Privacy level.
    pub privacy: Option<i64>,
    pub department: Option<String>,
    pub office: Option<String>,
    pub office_hours: Option<String>,
}

impl Record for Profile {
    const NAME: &'static str = "Profile";
    const FIELDS: &'static [&'static str] = &[
        "wwuid",
        "username",
        "full_name",
        "photo",
        "gender",
        "birthday",
        "email",
        "phone",
        "website",
        "majors",
        "minors",
        "graduate",
        "preprofessional",
        "class_standing",
        "high_school",
        "class_of",
        "relationship_status",
        "attached_to",
        "quote",
        "quote_author",
        "hobbies",
        "career_goals",
        "favorite_books",
        "favorite_food",
        "favorite_movies",
        "favorite_music",
        "pet_peeves",
        "personality",
        "views",
        "privacy",
        "department",
        "office",
        "office_hours",
    ];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "wwuid" => Some(FieldValue::text(&self.wwuid)),
            "username" => Some(FieldValue::opt_text(&self.username)),
            "full_name" => Some(FieldValue::opt_text(&self.full_name)),
            "photo" => Some(FieldValue::opt_text(&self.photo)),
            "gender" => Some(FieldValue::opt_text(&self.gender)),
            "birthday" => Some(FieldValue::opt_text(&self.birthday)),
            "email" => Some(FieldValue::opt_text(&self.email)),
            "phone" => Some(FieldValue::opt_text(&self.phone)),
            "website" => Some(FieldValue::opt_text(&self.website)),
            "majors" => Some(FieldValue::opt_text(&self.majors)),
            "minors" => Some(FieldValue::opt_text(&self.minors)),
            "graduate" => Some(FieldValue::opt_text(&self.graduate)),
            "preprofessional" => Some(FieldValue::opt_text(&self.preprofessional)),
            "class_standing" => Some(FieldValue::opt_text(&self.class_standing)),
            "high_school" => Some(FieldValue::opt_text(&self.high_school)),
            "class_of" => Some(FieldValue::opt_text(&self.class_of)),
            "relationship_status" => Some(FieldValue::opt_text(&self.relationship_status)),
            "attached_to" => Some(FieldValue::opt_text(&self.attached_to)),
            "quote" => Some(FieldValue::opt_text(&self.quote)),
            "quote_author" => Some(FieldValue::opt_text(&self.quote_author)),
            "hobbies" => Some(FieldValue::opt_text(&self.hobbies)),
            "career_goals" => Some(FieldValue::opt_text(&self.career_goals)),
            "favorite_books" => Some(FieldValue::opt_text(&self.favorite_books)),
            "favorite_food" => Some(FieldValue::opt_text(&self.favorite_food)),
            "favorite_movies" => Some(FieldValue::opt_text(&self.favorite_movies)),
            "favorite_music" => Some(FieldValue::opt_text(&self.favorite_music)),
            "pet_peeves" => Some(FieldValue::opt_text(&self.pet_peeves)),
            "personality" => Some(FieldValue::opt_text(&self.personality)),
            "views" => Some(FieldValue::opt_int(self.views)),
            "privacy" => Some(FieldValue::opt_int(self.privacy)),
            "department" => Some(FieldValue::opt_text(&self.department)),
            "office" => Some(FieldValue::opt_text(&self.office)),
            "office_hours" => Some(FieldValue::opt_text(&self.office_hours)),
            _ => None,
        }
    }
}

impl Stored<Profile> {
    /// A condensed view for listings and search caches: username, full
    /// name, photo, email, and the view counter.
    #[must_use]
    pub fn base_info(&self) -> JsonMap {
        self.to_json(&JsonOptions::new().limit(BASE_INFO_FIELDS))
    }
}
