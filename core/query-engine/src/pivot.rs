//! FILENAME: core/query-engine/src/pivot.rs
//! Cross-tabulation: label x year count matrices for the heatmap views.
//!
//! Algorithm:
//! 1. Collect the unique row labels and years present in the input
//! 2. Sort both axes ascending
//! 3. Count each (label, year) intersection
//! 4. Emit a dense matrix, filling absent intersections with 0

use std::collections::BTreeSet;

use dataset::Events;
use log::debug;
use rustc_hash::FxHashMap;

use crate::dedup::{dedup_by, dedup_natural_key};
use crate::view::CrossTab;

/// Builds a count matrix from (row label, year) pairs.
/// An empty input produces an empty `CrossTab`.
pub fn cross_tabulate<'a, I>(pairs: I) -> CrossTab
where
    I: IntoIterator<Item = (&'a str, i32)>,
{
    let mut counts: FxHashMap<(&'a str, i32), u32> = FxHashMap::default();
    let mut labels: BTreeSet<&'a str> = BTreeSet::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();

    for (label, year) in pairs {
        *counts.entry((label, year)).or_insert(0) += 1;
        labels.insert(label);
        years.insert(year);
    }

    let years: Vec<i32> = years.into_iter().collect();
    let cells: Vec<Vec<u32>> = labels
        .iter()
        .map(|label| {
            years
                .iter()
                .map(|year| counts.get(&(*label, *year)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    CrossTab {
        row_labels: labels.into_iter().map(str::to_string).collect(),
        years,
        cells,
    }
}

/// Medals a region won per sport and year, team medals counted once.
///
/// Empty when the region never won a medal (including regions that are not
/// in the data at all).
pub fn country_event_heatmap(events: &Events, region: &str) -> CrossTab {
    let medals = dedup_natural_key(events.medal_rows().filter(|r| r.in_region(region)));
    let table = cross_tabulate(medals.iter().map(|r| (r.sport.as_str(), r.year)));
    debug!(
        "heatmap for {}: {} sports x {} years",
        region,
        table.row_labels.len(),
        table.years.len()
    );
    table
}

/// Number of distinct events held per sport and year.
pub fn events_heatmap(events: &Events) -> CrossTab {
    let distinct = dedup_by(events, |r| (r.year, r.sport.as_str(), r.event.as_str()));
    cross_tabulate(distinct.iter().map(|r| (r.sport.as_str(), r.year)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{medal, participant};
    use dataset::Medal;
    use pretty_assertions::assert_eq;

    fn sample() -> Events {
        Events::new(vec![
            medal("A", "India", 1980, "Hockey", Medal::Gold),
            medal("B", "India", 1980, "Hockey", Medal::Gold),
            medal("C", "India", 2008, "Shooting", Medal::Gold),
            medal("D", "India", 2012, "Shooting", Medal::Silver),
            medal("E", "India", 2012, "Wrestling", Medal::Bronze),
            participant("F", "India", 2012, "Archery"),
            medal("G", "Pakistan", 1984, "Hockey", Medal::Gold),
        ])
    }

    #[test]
    fn fills_missing_intersections_with_zero() {
        let table = country_event_heatmap(&sample(), "India");
        assert_eq!(table.row_labels, vec!["Hockey", "Shooting", "Wrestling"]);
        assert_eq!(table.years, vec![1980, 2008, 2012]);
        assert_eq!(
            table.cells,
            vec![vec![1, 0, 0], vec![0, 1, 1], vec![0, 0, 1]]
        );
        assert_eq!(table.get("Hockey", 2012), Some(0));
        assert_eq!(table.grand_total(), 4);
    }

    #[test]
    fn unknown_region_is_empty() {
        let table = country_event_heatmap(&sample(), "Atlantis");
        assert!(table.is_empty());
        assert!(table.years.is_empty());
        assert!(table.cells.is_empty());
    }

    #[test]
    fn participation_only_region_is_empty() {
        let events = Events::new(vec![participant("F", "Fiji", 2000, "Judo")]);
        assert!(country_event_heatmap(&events, "Fiji").is_empty());
    }

    #[test]
    fn events_heatmap_counts_distinct_events() {
        let mut relay = participant("H", "USA", 2000, "Swimming");
        relay.event = "Relay".to_string();
        let mut relay_mate = participant("I", "USA", 2000, "Swimming");
        relay_mate.event = "Relay".to_string();
        let events = Events::new(vec![
            participant("G", "USA", 2000, "Swimming"),
            relay,
            relay_mate,
            participant("J", "UK", 2004, "Swimming"),
        ]);
        let table = events_heatmap(&events);
        assert_eq!(table.get("Swimming", 2000), Some(2));
        assert_eq!(table.get("Swimming", 2004), Some(1));
    }
}
