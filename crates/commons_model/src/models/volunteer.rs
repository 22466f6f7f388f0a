//! Volunteering interest survey record.

use crate::record::Record;
use crate::value::FieldValue;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// The survey questions scanned by [`Volunteer::active_interests`], in
/// questionnaire order.
///
/// This is an explicit roster, not "all boolean fields": it never
/// included `buddy_program`, and that omission is part of the contract
/// with existing admin tooling.
pub const SURVEY_FIELDS: &[&str] = &[
    "campus_ministries",
    "student_missions",
    "aswwu",
    "circle_church",
    "university_church",
    "assist",
    "lead",
    "audio_slash_visual",
    "health_promotion",
    "construction_experience",
    "outdoor_slash_camping",
    "concert_assistance",
    "event_set_up",
    "children_ministries",
    "children_story",
    "art_poetry_slash_painting_slash_sculpting",
    "organizing_events",
    "organizing_worship_opportunities",
    "organizing_community_outreach",
    "bible_study",
    "wycliffe_bible_translator_representative",
    "food_preparation",
    "graphic_design",
    "poems_slash_spoken_word",
    "prayer_team_slash_prayer_house",
    "dorm_encouragement_and_assisting_chaplains",
    "scripture_reading",
    "speaking",
    "videography",
    "drama",
    "public_school_outreach",
    "retirement_slash_nursing_home_outreach",
    "helping_the_homeless_slash_disadvantaged",
    "working_with_youth",
    "working_with_children",
    "greeting",
    "shofar_for_vespers",
    "music",
    "join_small_groups",
    "lead_small_groups",
    "can_transport_things",
    "languages",
    "wants_to_be_involved",
];

/// One entry in the active-interests view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interest {
    /// A checked interest flag, identified by its field name.
    Flag(&'static str),
    /// A free-text answer (`music` or `languages`).
    Note {
        /// The survey field the answer belongs to.
        field: &'static str,
        /// The answer text.
        value: String,
    },
}

// Flags serialize as bare strings, notes as single-entry maps, matching
// the mixed-shape list the admin frontend consumes.
impl Serialize for Interest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag(name) => serializer.serialize_str(name),
            Self::Note { field, value } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(field, value)?;
                map.end()
            }
        }
    }
}

/// A user's volunteering interest survey.
///
/// One row per user (joined on `wwuid`), one boolean per survey
/// question, plus two free-text answers. The schema this replaces
/// declared `music` and `languages` as boolean columns while storing
/// text in them; here they are typed as the text they actually hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Volunteer {
    /// External identifier of the user this survey belongs to.
    pub wwuid: String,
    pub campus_ministries: bool,
    pub student_missions: bool,
    pub aswwu: bool,
    pub circle_church: bool,
    pub university_church: bool,
    pub buddy_program: bool,
    pub assist: bool,
    pub lead: bool,
    pub audio_slash_visual: bool,
    pub health_promotion: bool,
    pub construction_experience: bool,
    pub outdoor_slash_camping: bool,
    pub concert_assistance: bool,
    pub event_set_up: bool,
    pub children_ministries: bool,
    pub children_story: bool,
    pub art_poetry_slash_painting_slash_sculpting: bool,
    pub organizing_events: bool,
    pub organizing_worship_opportunities: bool,
    pub organizing_community_outreach: bool,
    pub bible_study: bool,
    pub wycliffe_bible_translator_representative: bool,
    pub food_preparation: bool,
    pub graphic_design: bool,
    pub poems_slash_spoken_word: bool,
    pub prayer_team_slash_prayer_house: bool,
    pub dorm_encouragement_and_assisting_chaplains: bool,
    pub scripture_reading: bool,
    pub speaking: bool,
    pub videography: bool,
    pub drama: bool,
    pub public_school_outreach: bool,
    pub retirement_slash_nursing_home_outreach: bool,
    pub helping_the_homeless_slash_disadvantaged: bool,
    pub working_with_youth: bool,
    pub working_with_children: bool,
    pub greeting: bool,
    pub shofar_for_vespers: bool,
    /// Free text: instruments played, styles, and so on.
    pub music: Option<String>,
    pub join_small_groups: bool,
    pub lead_small_groups: bool,
    pub can_transport_things: bool,
    /// Free text: languages spoken.
    pub languages: Option<String>,
    pub wants_to_be_involved: bool,
}

impl Volunteer {
    /// Returns the survey answers worth showing: each checked flag by
    /// name, and each non-empty free-text answer as a one-entry map,
    /// in questionnaire order.
    #[must_use]
    pub fn active_interests(&self) -> Vec<Interest> {
        let mut interests = Vec::new();
        for &name in SURVEY_FIELDS {
            match name {
                "music" => push_note(&mut interests, name, self.music.as_deref()),
                "languages" => push_note(&mut interests, name, self.languages.as_deref()),
                _ => {
                    if matches!(self.field(name), Some(FieldValue::Bool(true))) {
                        interests.push(Interest::Flag(name));
                    }
                }
            }
        }
        interests
    }
}

fn push_note(interests: &mut Vec<Interest>, field: &'static str, value: Option<&str>) {
    if let Some(text) = value {
        if !text.is_empty() {
            interests.push(Interest::Note {
                field,
                value: text.to_owned(),
            });
        }
    }
}

impl Record for Volunteer {
    const NAME: &'static str = "Volunteer";
    const FIELDS: &'static [&'static str] = &[
        "wwuid",
        "campus_ministries",
        "student_missions",
        "aswwu",
        "circle_church",
        "university_church",
        "buddy_program",
        "assist",
        "lead",
        "audio_slash_visual",
        "health_promotion",
        "construction_experience",
        "outdoor_slash_camping",
        "concert_assistance",
        "event_set_up",
        "children_ministries",
        "children_story",
        "art_poetry_slash_painting_slash_sculpting",
        "organizing_events",
        "organizing_worship_opportunities",
        "organizing_community_outreach",
        "bible_study",
        "wycliffe_bible_translator_representative",
        "food_preparation",
        "graphic_design",
        "poems_slash_spoken_word",
        "prayer_team_slash_prayer_house",
        "dorm_encouragement_and_assisting_chaplains",
        "scripture_reading",
        "speaking",
        "videography",
        "drama",
        "public_school_outreach",
        "retirement_slash_nursing_home_outreach",
        "helping_the_homeless_slash_disadvantaged",
        "working_with_youth",
        "working_with_children",
        "greeting",
        "shofar_for_vespers",
        "music",
        "join_small_groups",
        "lead_small_groups",
        "can_transport_things",
        "languages",
        "wants_to_be_involved",
    ];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "wwuid" => Some(FieldValue::text(&self.wwuid)),
            "campus_ministries" => Some(self.campus_ministries.into()),
            "student_missions" => Some(self.student_missions.into()),
            "aswwu" => Some(self.aswwu.into()),
            "circle_church" => Some(self.circle_church.into()),
            "university_church" => Some(self.university_church.into()),
            "buddy_program" => Some(self.buddy_program.into()),
            "assist" => Some(self.assist.into()),
            "lead" => Some(self.lead.into()),
            "audio_slash_visual" => Some(self.audio_slash_visual.into()),
            "health_promotion" => Some(self.health_promotion.into()),
            "construction_experience" => Some(self.construction_experience.into()),
            "outdoor_slash_camping" => Some(self.outdoor_slash_camping.into()),
            "concert_assistance" => Some(self.concert_assistance.into()),
            "event_set_up" => Some(self.event_set_up.into()),
            "children_ministries" => Some(self.children_ministries.into()),
            "children_story" => Some(self.children_story.into()),
            "art_poetry_slash_painting_slash_sculpting" => {
                Some(self.art_poetry_slash_painting_slash_sculpting.into())
            }
            "organizing_events" => Some(self.organizing_events.into()),
            "organizing_worship_opportunities" => {
                Some(self.organizing_worship_opportunities.into())
            }
            "organizing_community_outreach" => Some(self.organizing_community_outreach.into()),
            "bible_study" => Some(self.bible_study.into()),
            "wycliffe_bible_translator_representative" => {
                Some(self.wycliffe_bible_translator_representative.into())
            }
            "food_preparation" => Some(self.food_preparation.into()),
            "graphic_design" => Some(self.graphic_design.into()),
            "poems_slash_spoken_word" => Some(self.poems_slash_spoken_word.into()),
            "prayer_team_slash_prayer_house" => Some(self.prayer_team_slash_prayer_house.into()),
            "dorm_encouragement_and_assisting_chaplains" => {
                Some(self.dorm_encouragement_and_assisting_chaplains.into())
            }
            "scripture_reading" => Some(self.scripture_reading.into()),
            "speaking" => Some(self.speaking.into()),
            "videography" => Some(self.videography.into()),
            "drama" => Some(self.drama.into()),
            "public_school_outreach" => Some(self.public_school_outreach.into()),
            "retirement_slash_nursing_home_outreach" => {
                Some(self.retirement_slash_nursing_home_outreach.into())
            }
            "helping_the_homeless_slash_disadvantaged" => {
                Some(self.helping_the_homeless_slash_disadvantaged.into())
            }
            "working_with_youth" => Some(self.working_with_youth.into()),
            "working_with_children" => Some(self.working_with_children.into()),
            "greeting" => Some(self.greeting.into()),
            "shofar_for_vespers" => Some(self.shofar_for_vespers.into()),
            "music" => Some(FieldValue::opt_text(&self.music)),
            "join_small_groups" => Some(self.join_small_groups.into()),
            "lead_small_groups" => Some(self.lead_small_groups.into()),
            "can_transport_things" => Some(self.can_transport_things.into()),
            "languages" => Some(FieldValue::opt_text(&self.languages)),
            "wants_to_be_involved" => Some(self.wants_to_be_involved.into()),
            _ => None,
        }
    }
}
