use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

/// Sex as recorded for a child. `Neutral` covers children recorded without
/// one of the two reference categories.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Sex {
    Male,
    Female,
    Neutral
}

/// The two sexes WHO publishes reference tables for.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceSex {
    Male,
    Female
}

impl Sex {
    /// Reference table used for this sex. Children without a reference
    /// category are measured against the male tables.
    pub fn reference_sex(&self) -> ReferenceSex {
        match self {
            Sex::Male => ReferenceSex::Male,
            Sex::Female => ReferenceSex::Female,
            Sex::Neutral => {
                log::trace!("no reference sex recorded, using male tables");
                ReferenceSex::Male
            }
        }
    }

    /// Never fails: anything other than `male` or `female` is `Neutral`.
    pub fn parse(s: &str) -> Sex {
        if s.eq_ignore_ascii_case("male") {
            Sex::Male
        } else if s.eq_ignore_ascii_case("female") {
            Sex::Female
        } else {
            Sex::Neutral
        }
    }
}

impl From<&str> for Sex {
    fn from(s: &str) -> Self {
        Sex::parse(s)
    }
}

impl From<String> for Sex {
    fn from(s: String) -> Self {
        Sex::parse(&s)
    }
}

impl From<ReferenceSex> for Sex {
    fn from(sex: ReferenceSex) -> Self {
        match sex {
            ReferenceSex::Male => Sex::Male,
            ReferenceSex::Female => Sex::Female
        }
    }
}

impl fmt::Display for ReferenceSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSex::Male => write!(f, "male"),
            ReferenceSex::Female => write!(f, "female")
        }
    }
}
