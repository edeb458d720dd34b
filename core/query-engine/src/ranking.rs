//! FILENAME: core/query-engine/src/ranking.rs
//! Most successful athletes, overall (per sport) and per country.
//!
//! Medal rows are counted per athlete name without collapsing team medals:
//! a relay gold is one medal for each swimmer.

use dataset::{EventRecord, Events, Selector};
use log::debug;
use rustc_hash::FxHashMap;

use crate::view::{AthleteRanking, CountryAthleteRanking};

/// Rows returned by `most_successful`.
pub const TOP_ATHLETES: usize = 15;

/// Rows returned by `most_successful_countrywise`.
pub const TOP_COUNTRY_ATHLETES: usize = 10;

/// Counts medal rows per name and returns the top `limit`, ordered by count
/// descending then name ascending.
fn rank_by_medals<'a, I>(rows: I, limit: usize) -> Vec<(&'a str, u32)>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut counts: FxHashMap<&'a str, u32> = FxHashMap::default();
    for record in rows.into_iter().filter(|r| r.has_medal()) {
        *counts.entry(record.name.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(limit);
    ranked
}

/// First record of each ranked name, in table order. Used to attach sport
/// and region context to a ranking.
fn first_records<'a>(events: &'a Events, ranked: &[(&str, u32)]) -> FxHashMap<&'a str, &'a EventRecord> {
    let mut first: FxHashMap<&'a str, &'a EventRecord> = FxHashMap::default();
    for record in events {
        let name = record.name.as_str();
        if ranked.iter().any(|(n, _)| *n == name) {
            first.entry(name).or_insert(record);
        }
        if first.len() == ranked.len() {
            break;
        }
    }
    first
}

/// Top athletes by medal count, optionally limited to one sport.
///
/// Sport and region come from the athlete's first record in the table, which
/// for multi-sport athletes may not be the sport of the counted medals.
pub fn most_successful(events: &Events, sport: &Selector<String>) -> Vec<AthleteRanking> {
    let ranked = rank_by_medals(
        events.iter().filter(|r| sport.admits(r.sport.as_str())),
        TOP_ATHLETES,
    );
    let first = first_records(events, &ranked);

    let rows: Vec<AthleteRanking> = ranked
        .into_iter()
        .filter_map(|(name, medals)| {
            first.get(name).map(|r| AthleteRanking {
                name: name.to_string(),
                medals,
                sport: r.sport.clone(),
                region: r.region.clone(),
            })
        })
        .collect();

    debug!("most successful (sport={}): {} athletes", sport, rows.len());
    rows
}

/// Top athletes of one region by medal count.
pub fn most_successful_countrywise(events: &Events, region: &str) -> Vec<CountryAthleteRanking> {
    let ranked = rank_by_medals(
        events.iter().filter(|r| r.in_region(region)),
        TOP_COUNTRY_ATHLETES,
    );
    let first = first_records(events, &ranked);

    ranked
        .into_iter()
        .filter_map(|(name, medals)| {
            first.get(name).map(|r| CountryAthleteRanking {
                name: name.to_string(),
                medals,
                sport: r.sport.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{medal, participant};
    use dataset::Medal;
    use rustc_hash::FxHashSet;

    #[test]
    fn orders_by_count_then_name() {
        let events = Events::new(vec![
            medal("Zed", "USA", 2000, "Swimming", Medal::Gold),
            medal("Zed", "USA", 2004, "Swimming", Medal::Gold),
            medal("Amy", "USA", 2000, "Swimming", Medal::Silver),
            medal("Bob", "UK", 2000, "Rowing", Medal::Bronze),
            participant("Cat", "UK", 2000, "Rowing"),
        ]);
        let top = most_successful(&events, &Selector::Overall);
        let names: Vec<&str> = top.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Bob"]);
        assert_eq!(top[0].medals, 2);
        assert_eq!(top[2].region.as_deref(), Some("UK"));
    }

    #[test]
    fn caps_at_fifteen_without_duplicates() {
        let mut rows = Vec::new();
        for i in 0..20 {
            let name = format!("Athlete {:02}", i);
            rows.push(medal(&name, "Kenya", 2000, "Athletics", Medal::Gold));
            rows.push(medal(&name, "Kenya", 2004, "Athletics", Medal::Gold));
        }
        let events = Events::new(rows);
        let top = most_successful(&events, &Selector::Overall);

        assert_eq!(top.len(), TOP_ATHLETES);
        let unique: FxHashSet<&str> = top.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(unique.len(), top.len());
        // Equal counts: alphabetical cut-off
        assert_eq!(top[0].name, "Athlete 00");
        assert_eq!(top[14].name, "Athlete 14");
    }

    #[test]
    fn sport_filter_keeps_first_seen_sport() {
        let events = Events::new(vec![
            participant("Multi", "Norway", 1996, "Cycling"),
            medal("Multi", "Norway", 2000, "Rowing", Medal::Gold),
            medal("Solo", "Norway", 2000, "Rowing", Medal::Silver),
        ]);
        let top = most_successful(&events, &Selector::Only("Rowing".to_string()));
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Multi");
        assert_eq!(top[0].sport, "Cycling");
    }

    #[test]
    fn countrywise_limits_to_region() {
        let mut rows = vec![medal("Other", "Chile", 2000, "Tennis", Medal::Gold)];
        for i in 0..12 {
            rows.push(medal(&format!("P{:02}", i), "Peru", 2000, "Volleyball", Medal::Silver));
        }
        let events = Events::new(rows);

        let top = most_successful_countrywise(&events, "Peru");
        assert_eq!(top.len(), TOP_COUNTRY_ATHLETES);
        assert!(top.iter().all(|a| a.name.starts_with('P')));
        assert!(most_successful_countrywise(&events, "Atlantis").is_empty());
    }
}
