//! FILENAME: core/dataset/src/events.rs
//! PURPOSE: The immutable data context every query reads from.
//! CONTEXT: Built once after loading and preprocessing, then handed to queries
//! by shared reference. Nothing in the workspace mutates it after construction.

use std::collections::BTreeSet;

use crate::record::EventRecord;

/// The normalized, region-joined event table.
#[derive(Debug, Clone, Default)]
pub struct Events {
    records: Vec<EventRecord>,
}

impl Events {
    pub fn new(records: Vec<EventRecord>) -> Self {
        Events { records }
    }

    /// All records in load order. Load order is the tie-break for
    /// "first seen" attributions.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    /// Records that won a medal.
    pub fn medal_rows(&self) -> impl Iterator<Item = &EventRecord> + '_ {
        self.records.iter().filter(|r| r.has_medal())
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct non-null regions, ascending.
    pub fn regions(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| r.region())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct sports, ascending.
    pub fn sports(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.sport.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Vec<EventRecord>> for Events {
    fn from(records: Vec<EventRecord>) -> Self {
        Events::new(records)
    }
}

impl<'a> IntoIterator for &'a Events {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Medal, Season, Sex};

    fn record(name: &str, region: Option<&str>, year: i32, sport: &str, medal: Option<Medal>) -> EventRecord {
        EventRecord {
            id: 0,
            name: name.to_string(),
            sex: Sex::Female,
            age: None,
            height: None,
            weight: None,
            team: region.unwrap_or("Unknown").to_string(),
            noc: "XXX".to_string(),
            region: region.map(str::to_string),
            notes: None,
            games: format!("{} Summer", year),
            year,
            season: Season::Summer,
            city: "City".to_string(),
            sport: sport.to_string(),
            event: format!("{} Event", sport),
            medal,
        }
    }

    #[test]
    fn distinct_axes_are_sorted() {
        let events = Events::new(vec![
            record("A", Some("Norway"), 2000, "Rowing", None),
            record("B", Some("Chile"), 1996, "Judo", Some(Medal::Gold)),
            record("C", None, 2000, "Archery", None),
            record("D", Some("Chile"), 1996, "Judo", None),
        ]);

        assert_eq!(events.years(), vec![1996, 2000]);
        assert_eq!(events.regions(), vec!["Chile", "Norway"]);
        assert_eq!(events.sports(), vec!["Archery", "Judo", "Rowing"]);
        assert_eq!(events.medal_rows().count(), 1);
    }

    #[test]
    fn empty_table() {
        let events = Events::default();
        assert!(events.is_empty());
        assert!(events.years().is_empty());
    }
}
