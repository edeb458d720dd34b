//! FILENAME: core/query-engine/src/demographics.rs
//! Athlete-level queries: age distributions, weight vs height, sex ratio.
//!
//! All of these work on unique athletes (one row per name + region, first
//! record wins), so an athlete with ten starts is counted once.

use std::collections::BTreeMap;

use dataset::{Events, Medal, MedalLabel, Selector, Sex};

use crate::dedup::unique_athletes;
use crate::view::{AgeDistribution, AthletePhysique, SexParticipation, SportAges};

/// Sports shown in the "gold medallist age by sport" plot.
pub const FAMOUS_SPORTS: [&str; 21] = [
    "Basketball",
    "Judo",
    "Football",
    "Athletics",
    "Swimming",
    "Badminton",
    "Sailing",
    "Gymnastics",
    "Handball",
    "Weightlifting",
    "Wrestling",
    "Hockey",
    "Rowing",
    "Fencing",
    "Shooting",
    "Boxing",
    "Cycling",
    "Tennis",
    "Volleyball",
    "Table Tennis",
    "Baseball",
];

/// Unique athletes for the weight/height scatter, optionally for one sport.
///
/// The returned rows are owned copies; the medal column is filled with the
/// `No Medal` label for non-medallists. The shared table is not touched.
pub fn weight_v_height(events: &Events, sport: &Selector<String>) -> Vec<AthletePhysique> {
    unique_athletes(events)
        .into_iter()
        .filter(|r| sport.admits(r.sport.as_str()))
        .map(|r| AthletePhysique {
            name: r.name.clone(),
            sex: r.sex,
            height: r.height,
            weight: r.weight,
            sport: r.sport.clone(),
            region: r.region.clone(),
            medal: MedalLabel::from(r.medal),
        })
        .collect()
}

/// Unique male and female athletes per year, ascending.
/// A year with only one sex present reports 0 for the other.
pub fn men_vs_women(events: &Events) -> Vec<SexParticipation> {
    let mut per_year: BTreeMap<i32, SexParticipation> = BTreeMap::new();
    for athlete in unique_athletes(events) {
        let entry = per_year.entry(athlete.year).or_insert(SexParticipation {
            year: athlete.year,
            male: 0,
            female: 0,
        });
        match athlete.sex {
            Sex::Male => entry.male += 1,
            Sex::Female => entry.female += 1,
        }
    }
    per_year.into_values().collect()
}

/// Age samples of unique athletes: everyone, and per medal colour.
pub fn age_distribution(events: &Events) -> AgeDistribution {
    let mut dist = AgeDistribution::default();
    for athlete in unique_athletes(events) {
        let Some(age) = athlete.age else { continue };
        dist.overall.push(age);
        match athlete.medal {
            Some(Medal::Gold) => dist.gold.push(age),
            Some(Medal::Silver) => dist.silver.push(age),
            Some(Medal::Bronze) => dist.bronze.push(age),
            None => {}
        }
    }
    dist
}

/// Ages of unique gold medallists for each requested sport, in request order.
/// Sports with no gold medallist yield an empty sample.
pub fn gold_medal_ages_by_sport(events: &Events, sports: &[&str]) -> Vec<SportAges> {
    let athletes = unique_athletes(events);
    sports
        .iter()
        .map(|sport| SportAges {
            sport: sport.to_string(),
            ages: athletes
                .iter()
                .filter(|r| r.sport == *sport && r.medal == Some(Medal::Gold))
                .filter_map(|r| r.age)
                .collect(),
        })
        .collect()
}
