//! FILENAME: core/query-engine/src/test_support.rs
//! Record builders shared by the unit tests.

use dataset::{EventRecord, Medal, Season, Sex};

/// A non-medal participation. Team is the region, event is "<sport> Event".
pub fn participant(name: &str, region: &str, year: i32, sport: &str) -> EventRecord {
    EventRecord {
        id: 0,
        name: name.to_string(),
        sex: Sex::Male,
        age: Some(25.0),
        height: None,
        weight: None,
        team: region.to_string(),
        noc: region.to_string(),
        region: Some(region.to_string()),
        notes: None,
        games: format!("{} Summer", year),
        year,
        season: Season::Summer,
        city: "Host City".to_string(),
        sport: sport.to_string(),
        event: format!("{} Event", sport),
        medal: None,
    }
}

pub fn medal(name: &str, region: &str, year: i32, sport: &str, medal: Medal) -> EventRecord {
    EventRecord {
        medal: Some(medal),
        ..participant(name, region, year, sport)
    }
}
