//! FILENAME: core/query-engine/src/tally.rs
//! Medal tallies.
//!
//! Team medals are collapsed on the natural key before counting, so a relay
//! gold counts once for the team rather than once per swimmer.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use dataset::{EventRecord, Events, Selector};
use log::debug;
use rustc_hash::FxHashMap;

use crate::dedup::dedup_natural_key;
use crate::view::{MedalCounts, MedalTally, TallyGrouping, TallyKey, TallyRow, YearCount};

fn region_admits(country: &Selector<String>, record: &EventRecord) -> bool {
    match country {
        Selector::Overall => true,
        Selector::Only(region) => record.in_region(region),
    }
}

/// Deduplicated medal rows matching both selectors.
///
/// The natural key contains year and NOC (and so region), which makes
/// filtering before deduplicating equivalent to the reverse order.
fn team_collapsed_medals<'a>(
    events: &'a Events,
    year: &Selector<i32>,
    country: &Selector<String>,
) -> Vec<&'a EventRecord> {
    dedup_natural_key(
        events
            .medal_rows()
            .filter(|r| year.admits(&r.year) && region_admits(country, r)),
    )
}

/// Orders region rows: Gold, Silver, Bronze (all descending), then name.
fn compare_region_rows(a: &TallyRow, b: &TallyRow) -> Ordering {
    b.gold
        .cmp(&a.gold)
        .then(b.silver.cmp(&a.silver))
        .then(b.bronze.cmp(&a.bronze))
        .then_with(|| match (&a.key, &b.key) {
            (TallyKey::Region(x), TallyKey::Region(y)) => x.cmp(y),
            _ => Ordering::Equal,
        })
}

/// Medal tally for a year/country selector pair.
///
/// - both `Overall`: one row per region
/// - country only: that country's trend, one row per year, ascending
/// - year only: one row per region for that year
/// - both: the single region row for that year (or nothing)
///
/// Only medal rows are counted, so a group without any medal never appears.
pub fn fetch_medal_tally(
    events: &Events,
    year: &Selector<i32>,
    country: &Selector<String>,
) -> MedalTally {
    let medals = team_collapsed_medals(events, year, country);

    let tally = if year.is_overall() && !country.is_overall() {
        let mut by_year: BTreeMap<i32, MedalCounts> = BTreeMap::new();
        for record in &medals {
            if let Some(medal) = record.medal {
                by_year.entry(record.year).or_default().add(medal);
            }
        }
        MedalTally {
            grouping: TallyGrouping::Year,
            rows: by_year
                .into_iter()
                .map(|(y, counts)| TallyRow::new(TallyKey::Year(y), counts))
                .collect(),
        }
    } else {
        let mut by_region: FxHashMap<&str, MedalCounts> = FxHashMap::default();
        for record in &medals {
            if let (Some(region), Some(medal)) = (record.region(), record.medal) {
                by_region.entry(region).or_default().add(medal);
            }
        }
        let mut rows: Vec<TallyRow> = by_region
            .into_iter()
            .map(|(region, counts)| TallyRow::new(TallyKey::Region(region.to_string()), counts))
            .collect();
        rows.sort_by(compare_region_rows);
        MedalTally {
            grouping: TallyGrouping::Region,
            rows,
        }
    };

    debug!(
        "medal tally year={} country={}: {} medals -> {} rows",
        year,
        country,
        medals.len(),
        tally.rows.len()
    );
    tally
}

/// All-time tally per region.
pub fn overall_medal_tally(events: &Events) -> MedalTally {
    fetch_medal_tally(events, &Selector::Overall, &Selector::Overall)
}

/// Number of (team-collapsed) medals a region won in each year, ascending.
pub fn yearwise_medal_tally(events: &Events, region: &str) -> Vec<YearCount> {
    let country = Selector::Only(region.to_string());
    let mut by_year: BTreeMap<i32, u32> = BTreeMap::new();
    for record in team_collapsed_medals(events, &Selector::Overall, &country) {
        *by_year.entry(record.year).or_insert(0) += 1;
    }
    by_year
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}
