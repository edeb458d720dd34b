//! FILENAME: core/dataset/src/record.rs
//! PURPOSE: Defines the fundamental data structures for a single event participation.
//! CONTEXT: One `EventRecord` exists per athlete per event per games. Team medals
//! therefore appear once per team member; `NaturalKey` collapses them back to
//! one placement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::selector::SelectorError;

// ============================================================================
// MEDALS
// ============================================================================

/// A placement medal. Participation without placement is `Option::<Medal>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medal {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Gold" => Ok(Medal::Gold),
            "Silver" => Ok(Medal::Silver),
            "Bronze" => Ok(Medal::Bronze),
            other => Err(SelectorError::UnknownValue {
                kind: "medal",
                value: other.to_string(),
            }),
        }
    }
}

/// Medal category used by query outputs, where non-medallists must be a
/// category of their own rather than a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedalLabel {
    Gold,
    Silver,
    Bronze,
    #[serde(rename = "No Medal")]
    NoMedal,
}

impl MedalLabel {
    pub const NO_MEDAL: &'static str = "No Medal";
}

impl From<Option<Medal>> for MedalLabel {
    fn from(medal: Option<Medal>) -> Self {
        match medal {
            Some(Medal::Gold) => MedalLabel::Gold,
            Some(Medal::Silver) => MedalLabel::Silver,
            Some(Medal::Bronze) => MedalLabel::Bronze,
            None => MedalLabel::NoMedal,
        }
    }
}

impl fmt::Display for MedalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedalLabel::Gold => f.write_str("Gold"),
            MedalLabel::Silver => f.write_str("Silver"),
            MedalLabel::Bronze => f.write_str("Bronze"),
            MedalLabel::NoMedal => f.write_str(Self::NO_MEDAL),
        }
    }
}

// ============================================================================
// SEX / SEASON
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl FromStr for Sex {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Sex::Male),
            "F" => Ok(Sex::Female),
            other => Err(SelectorError::UnknownValue {
                kind: "sex",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("M"),
            Sex::Female => f.write_str("F"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl FromStr for Season {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Summer" => Ok(Season::Summer),
            "Winter" => Ok(Season::Winter),
            other => Err(SelectorError::UnknownValue {
                kind: "season",
                value: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// EVENT RECORD
// ============================================================================

/// One athlete's participation in one event of one games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Athlete id from the source file. Not unique per row.
    pub id: u32,
    pub name: String,
    pub sex: Sex,
    pub age: Option<f64>,
    /// Centimetres.
    pub height: Option<f64>,
    /// Kilograms.
    pub weight: Option<f64>,
    pub team: String,
    /// National Olympic Committee code.
    pub noc: String,
    /// Country resolved from the NOC lookup. `None` when the NOC is unmapped.
    pub region: Option<String>,
    pub notes: Option<String>,
    /// Games label, e.g. "1992 Summer".
    pub games: String,
    pub year: i32,
    pub season: Season,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
}

impl EventRecord {
    /// The key identifying one medal-awarding placement.
    pub fn natural_key(&self) -> NaturalKey<'_> {
        NaturalKey {
            team: &self.team,
            noc: &self.noc,
            games: &self.games,
            year: self.year,
            city: &self.city,
            sport: &self.sport,
            event: &self.event,
            medal: self.medal,
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn in_region(&self, region: &str) -> bool {
        self.region.as_deref() == Some(region)
    }

    pub fn has_medal(&self) -> bool {
        self.medal.is_some()
    }
}

/// (team, NOC, games, year, city, sport, event, medal), borrowed from a record.
/// Team members sharing a medal share this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalKey<'a> {
    pub team: &'a str,
    pub noc: &'a str,
    pub games: &'a str,
    pub year: i32,
    pub city: &'a str,
    pub sport: &'a str,
    pub event: &'a str,
    pub medal: Option<Medal>,
}
