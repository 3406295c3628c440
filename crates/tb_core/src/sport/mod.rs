//! Sport taxonomy and free-text classification
//!
//! Sign-up sheets ask players which SSV they are a member of. Answers are free
//! text ("USBF", "jungle speed", "Tafeltennis", ...), so they are mapped onto the
//! canonical sports with an ordered list of case-insensitive regex patterns.
//! The first sport (in taxonomy order) with a matching pattern wins.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Badminton,
    Basketball,
    Floorball,
    Korfball,
    Squash,
    TableTennis,
    Volleyball,
}

impl Sport {
    /// All sports in taxonomy order
    pub const ALL: [Sport; 7] = [
        Sport::Badminton,
        Sport::Basketball,
        Sport::Floorball,
        Sport::Korfball,
        Sport::Squash,
        Sport::TableTennis,
        Sport::Volleyball,
    ];

    /// Canonical label written to the `sport` column
    pub fn label(&self) -> &'static str {
        match self {
            Sport::Badminton => "Badminton",
            Sport::Basketball => "Basketball",
            Sport::Floorball => "Floorball",
            Sport::Korfball => "Korfball",
            Sport::Squash => "Squash",
            Sport::TableTennis => "Table tennis",
            Sport::Volleyball => "Volleyball",
        }
    }

    /// Position in [`Sport::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Patterns per sport. Iteration order is the match priority.
pub const SPORT_PATTERNS: &[(Sport, &[&str])] = &[
    (Sport::Badminton, &[r"badminton", r"(sb\s)?helios"]),
    (Sport::Basketball, &[r"basket\s?ball?", r"usbf"]),
    (Sport::Floorball, &[r"floor\s?ball?", r"(usfv\s)?jungle\s?speed"]),
    (Sport::Korfball, &[r"korf\s?ball?", r"(uskv\s)?hebbes"]),
    (Sport::Squash, &[r"squash", r"(us\s)?beat\s?it"]),
    (
        Sport::TableTennis,
        &[r"table\s?tennis", r"tafel\s?tennis", r"(ust\s)?traiectum"],
    ),
    (Sport::Volleyball, &[r"volley\s?ball?", r"van slag"]),
];

static STANDARD: Lazy<SportClassifier> = Lazy::new(|| {
    SportClassifier::from_patterns(SPORT_PATTERNS).expect("built-in sport patterns compile")
});

/// Compiled sport rules, evaluated in insertion order
#[derive(Debug, Clone)]
pub struct SportClassifier {
    rules: Vec<(Sport, Vec<Regex>)>,
}

impl SportClassifier {
    /// Compile `patterns` case-insensitively, keeping their order
    pub fn from_patterns(patterns: &[(Sport, &[&str])]) -> Result<Self, regex::Error> {
        let mut rules = Vec::with_capacity(patterns.len());
        for (sport, sources) in patterns {
            let compiled = sources
                .iter()
                .map(|src| RegexBuilder::new(src).case_insensitive(true).build())
                .collect::<Result<Vec<_>, _>>()?;
            rules.push((*sport, compiled));
        }
        Ok(Self { rules })
    }

    /// Classifier built from [`SPORT_PATTERNS`], compiled once per process
    pub fn standard() -> &'static SportClassifier {
        &STANDARD
    }

    /// First sport with a pattern found anywhere in `text`, or `None` if unmatched
    pub fn classify(&self, text: &str) -> Option<Sport> {
        self.rules
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(text)))
            .map(|(sport, _)| *sport)
    }
}

/// Classify `text` with the standard taxonomy
pub fn parse_sport(text: &str) -> Option<Sport> {
    SportClassifier::standard().classify(text)
}
