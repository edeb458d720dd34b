//! FILENAME: core/query-engine/src/stats.rs
//! Headline statistics and per-year "data over time" series.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use dataset::{EventRecord, Events, SelectorError};
use rustc_hash::FxHashSet;

use crate::view::{OverallStats, YearCount};

/// Subtracted from the distinct-year count when reporting editions.
///
/// Specific to the athlete_events dataset: its Summer rows contain one year
/// (the 1906 Intercalated Games) that is not counted as an official edition.
/// Not a general rule for other datasets.
pub const UNOFFICIAL_EDITIONS: usize = 1;

fn distinct<'a, T, F>(events: &'a Events, f: F) -> usize
where
    T: Eq + std::hash::Hash + 'a,
    F: Fn(&'a EventRecord) -> Option<T>,
{
    events.iter().filter_map(f).collect::<FxHashSet<T>>().len()
}

/// The six headline numbers of the overall analysis page.
pub fn overall_stats(events: &Events) -> OverallStats {
    OverallStats {
        editions: distinct(events, |r| Some(r.year)).saturating_sub(UNOFFICIAL_EDITIONS),
        host_cities: distinct(events, |r| Some(r.city.as_str())),
        sports: distinct(events, |r| Some(r.sport.as_str())),
        events: distinct(events, |r| Some(r.event.as_str())),
        athletes: distinct(events, |r| Some(r.name.as_str())),
        nations: distinct(events, |r| r.region()),
    }
}

// ============================================================================
// DATA OVER TIME
// ============================================================================

/// Column whose distinct values are counted per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendDimension {
    /// Participating nations.
    Region,
    Event,
    /// Athlete names.
    Athlete,
    Sport,
}

impl TrendDimension {
    pub fn value<'a>(&self, record: &'a EventRecord) -> Option<&'a str> {
        match self {
            TrendDimension::Region => record.region(),
            TrendDimension::Event => Some(record.event.as_str()),
            TrendDimension::Athlete => Some(record.name.as_str()),
            TrendDimension::Sport => Some(record.sport.as_str()),
        }
    }

    pub fn column_name(&self) -> &'static str {
        match self {
            TrendDimension::Region => "region",
            TrendDimension::Event => "Event",
            TrendDimension::Athlete => "Name",
            TrendDimension::Sport => "Sport",
        }
    }
}

impl fmt::Display for TrendDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for TrendDimension {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" | "nation" | "nations" => Ok(TrendDimension::Region),
            "event" | "events" => Ok(TrendDimension::Event),
            "name" | "athlete" | "athletes" => Ok(TrendDimension::Athlete),
            "sport" | "sports" => Ok(TrendDimension::Sport),
            _ => Err(SelectorError::UnknownValue {
                kind: "trend column",
                value: s.to_string(),
            }),
        }
    }
}

/// Distinct values of `dimension` per year, ascending by year.
///
/// Each (year, value) pair counts once. Rows with a null value (e.g. an
/// unmapped region) do not count; the source dashboard counted the missing
/// region as one extra nation per year.
pub fn data_over_time(events: &Events, dimension: TrendDimension) -> Vec<YearCount> {
    let pairs: FxHashSet<(i32, &str)> = events
        .iter()
        .filter_map(|r| dimension.value(r).map(|v| (r.year, v)))
        .collect();

    let mut per_year: BTreeMap<i32, u32> = BTreeMap::new();
    for (year, _) in pairs {
        *per_year.entry(year).or_insert(0) += 1;
    }
    per_year
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{medal, participant};
    use dataset::Medal;

    fn sample() -> Events {
        let mut unmapped = participant("X", "Nowhere", 1906, "Athletics");
        unmapped.region = None;
        Events::new(vec![
            participant("A", "Greece", 1896, "Athletics"),
            participant("A", "Greece", 1896, "Athletics"),
            participant("B", "USA", 1896, "Swimming"),
            medal("C", "USA", 1900, "Swimming", Medal::Gold),
            unmapped,
        ])
    }

    #[test]
    fn editions_exclude_the_unofficial_year() {
        let stats = overall_stats(&sample());
        assert_eq!(stats.editions, 2);
        assert_eq!(stats.sports, 2);
        assert_eq!(stats.athletes, 4);
        assert_eq!(stats.nations, 2);
        assert_eq!(stats.host_cities, 1);
    }

    #[test]
    fn empty_table_has_zero_editions() {
        assert_eq!(overall_stats(&Events::default()).editions, 0);
    }

    #[test]
    fn nations_over_time_counts_each_nation_once_per_year() {
        let series = data_over_time(&sample(), TrendDimension::Region);
        assert_eq!(
            series,
            vec![YearCount { year: 1896, count: 2 }, YearCount { year: 1900, count: 1 }]
        );
    }

    #[test]
    fn unmapped_region_is_not_a_nation() {
        let events = sample();
        let nations = data_over_time(&events, TrendDimension::Region);
        assert!(nations.iter().all(|p| p.year != 1906));

        let athletes = data_over_time(&events, TrendDimension::Athlete);
        assert_eq!(athletes.last(), Some(&YearCount { year: 1906, count: 1 }));
    }

    #[test]
    fn per_year_count_never_exceeds_distinct_values() {
        let events = sample();
        for dimension in [
            TrendDimension::Region,
            TrendDimension::Event,
            TrendDimension::Athlete,
            TrendDimension::Sport,
        ] {
            let distinct_total = events
                .iter()
                .filter_map(|r| dimension.value(r))
                .collect::<FxHashSet<_>>()
                .len() as u32;
            for point in data_over_time(&events, dimension) {
                assert!(point.count <= distinct_total, "{} in {}", dimension, point.year);
            }
        }
    }

    #[test]
    fn parses_column_names() {
        assert_eq!("region".parse::<TrendDimension>().unwrap(), TrendDimension::Region);
        assert_eq!("Name".parse::<TrendDimension>().unwrap(), TrendDimension::Athlete);
        assert!("Medal".parse::<TrendDimension>().is_err());
    }
}
