//! Election ballot record.

use crate::json::{JsonMap, JsonOptions};
use crate::record::{Record, Stored};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

const VOTERS_FIELDS: &[&str] = &["wwuid"];
const BASE_INFO_FIELDS: &[&str] = &["wwuid", "updated_at"];
// `district` is deliberately absent from the ballot-contents view.
const INFO_FIELDS: &[&str] = &[
    "wwuid",
    "candidate_one",
    "candidate_two",
    "sm_one",
    "sm_two",
    "new_department",
    "updated_at",
];

/// One voter's ballot for an election cycle.
///
/// Joined on `wwuid` to the election-partition user. Records two
/// candidate choices, two student-missions choices, a proposed new
/// department, and the voter's district.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    /// External identifier of the voter.
    pub wwuid: String,
    /// First candidate choice.
    pub candidate_one: Option<String>,
    /// Second candidate choice.
    pub candidate_two: Option<String>,
    /// First student-missions choice.
    pub sm_one: Option<String>,
    /// Second student-missions choice.
    pub sm_two: Option<String>,
    /// Proposed new department.
    pub new_department: Option<String>,
    /// Voter's district.
    pub district: Option<String>,
}

impl Record for Election {
    const NAME: &'static str = "Election";
    const FIELDS: &'static [&'static str] = &[
        "wwuid",
        "candidate_one",
        "candidate_two",
        "sm_one",
        "sm_two",
        "new_department",
        "district",
    ];

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "wwuid" => Some(FieldValue::text(&self.wwuid)),
            "candidate_one" => Some(FieldValue::opt_text(&self.candidate_one)),
            "candidate_two" => Some(FieldValue::opt_text(&self.candidate_two)),
            "sm_one" => Some(FieldValue::opt_text(&self.sm_one)),
            "sm_two" => Some(FieldValue::opt_text(&self.sm_two)),
            "new_department" => Some(FieldValue::opt_text(&self.new_department)),
            "district" => Some(FieldValue::opt_text(&self.district)),
            _ => None,
        }
    }
}

impl Stored<Election> {
    /// Who has voted: just the voter's `wwuid`.
    #[must_use]
    pub fn voters(&self) -> JsonMap {
        self.to_json(&JsonOptions::new().limit(VOTERS_FIELDS))
    }

    /// Voter identity plus when the ballot was last touched.
    #[must_use]
    pub fn base_info(&self) -> JsonMap {
        self.to_json(&JsonOptions::new().limit(BASE_INFO_FIELDS))
    }

    /// Ballot contents, minus the voter's district.
    #[must_use]
    pub fn info(&self) -> JsonMap {
        self.to_json(&JsonOptions::new().limit(INFO_FIELDS))
    }
}
