use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIRST_NAME_COLUMN: &str = "First name";
pub const LAST_NAME_COLUMN: &str = "Last name";
pub const SEX_COLUMN: &str = "Sex";
/// Free-text club membership question from the sign-up form
pub const CLUB_COLUMN: &str = "Which SSV are you member of?";
/// Derived column written by the sport name normalizer
pub const SPORT_COLUMN: &str = "sport";

/// Header of a player sheet, in [`PlayerRecord`] field order
pub const PLAYER_COLUMNS: [&str; 4] = [
    FIRST_NAME_COLUMN,
    LAST_NAME_COLUMN,
    SEX_COLUMN,
    CLUB_COLUMN,
];

/// Student sports clubs used for synthetic players, in generation order
pub const CLUB_NAMES: [&str; 5] = [
    "UST Traiectum",
    "USKV Hebbes",
    "USBF",
    "SB Helios",
    "USFV Jungle Speed",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }

    /// Single-letter code, used as the synthetic last name
    pub fn code(&self) -> &'static str {
        &self.as_str()[..1]
    }

    pub fn first_name(&self) -> &'static str {
        match self {
            Sex::Female => "Alice",
            Sex::Male => "Bob",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a player sign-up sheet
///
/// Field order matches the CSV header written for test cases:
/// `First name,Last name,Sex,Which SSV are you member of?`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "First name")]
    pub first_name: String,
    #[serde(rename = "Last name")]
    pub last_name: String,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Which SSV are you member of?")]
    pub club: String,
}

impl PlayerRecord {
    /// Create a synthetic player whose names are derived from `sex`
    pub fn new(sex: Sex, club: impl Into<String>) -> Self {
        Self {
            first_name: sex.first_name().to_string(),
            last_name: sex.code().to_string(),
            sex,
            club: club.into(),
        }
    }
}
