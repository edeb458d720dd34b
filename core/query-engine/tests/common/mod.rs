//! FILENAME: tests/common/mod.rs
//! Fixture builder for query-engine integration tests.

#![allow(dead_code)]

use dataset::{EventRecord, Events, Medal, Season, Sex};

/// Builds a small `Events` table one row at a time.
pub struct EventsFixture {
    rows: Vec<EventRecord>,
}

impl EventsFixture {
    pub fn new() -> Self {
        EventsFixture { rows: Vec::new() }
    }

    /// A games fixture with team medals, multi-sport athletes, an unmapped
    /// NOC, and a region with participation but no medals.
    pub fn games() -> Events {
        let mut f = EventsFixture::new();

        // USA 4x100 relay gold in 2008: four rows, one team medal
        for swimmer in ["Phelps", "Weber-Gale", "Jones", "Lezak"] {
            f.push(row(swimmer, "USA", 2008, "Swimming", "4x100 Freestyle Relay", Some(Medal::Gold)));
        }
        f.push(row("Phelps", "USA", 2008, "Swimming", "200 Butterfly", Some(Medal::Gold)));
        f.push(row("Phelps", "USA", 2012, "Swimming", "100 Butterfly", Some(Medal::Gold)));
        f.push(row("Phelps", "USA", 2012, "Swimming", "200 Individual Medley", Some(Medal::Silver)));
        f.push(row("Felix", "USA", 2012, "Athletics", "200 metres", Some(Medal::Silver)));
        f.push(row("Felix", "USA", 2012, "Athletics", "4x400 Relay", Some(Medal::Bronze)));

        f.push(row("Bolt", "Jamaica", 2008, "Athletics", "100 metres", Some(Medal::Gold)));
        f.push(row("Bolt", "Jamaica", 2012, "Athletics", "100 metres", Some(Medal::Gold)));
        f.push(row("Fraser", "Jamaica", 2012, "Athletics", "100 metres women", Some(Medal::Silver)));

        // France takes part but never medals
        f.push(row("Dupont", "France", 2008, "Judo", "Judo Lightweight", None));
        f.push(row("Martin", "France", 2012, "Judo", "Judo Lightweight", None));

        // Women only appear from 2012 onwards in this fixture
        f.push_with(row("Ennis", "UK", 2012, "Athletics", "Heptathlon", Some(Medal::Gold)), |r| {
            r.sex = Sex::Female;
            r.height = Some(165.0);
            r.weight = Some(57.0);
        });

        // Unmapped NOC
        f.push_with(row("Unknown", "ZZZ", 2012, "Boxing", "Flyweight", None), |r| {
            r.region = None;
        });

        f.build()
    }

    pub fn push(&mut self, record: EventRecord) -> &mut Self {
        self.rows.push(record);
        self
    }

    pub fn push_with<F: FnOnce(&mut EventRecord)>(&mut self, mut record: EventRecord, edit: F) -> &mut Self {
        edit(&mut record);
        self.rows.push(record);
        self
    }

    pub fn build(&mut self) -> Events {
        Events::new(std::mem::take(&mut self.rows))
    }
}

/// A male Summer row; team and NOC are the region name.
pub fn row(
    name: &str,
    region: &str,
    year: i32,
    sport: &str,
    event: &str,
    medal: Option<Medal>,
) -> EventRecord {
    EventRecord {
        id: 0,
        name: name.to_string(),
        sex: Sex::Male,
        age: Some(24.0),
        height: None,
        weight: None,
        team: region.to_string(),
        noc: region.to_string(),
        region: Some(region.to_string()),
        notes: None,
        games: format!("{} Summer", year),
        year,
        season: Season::Summer,
        city: if year == 2008 { "Beijing" } else { "London" }.to_string(),
        sport: sport.to_string(),
        event: format!("{} {}", sport, event),
        medal,
    }
}
