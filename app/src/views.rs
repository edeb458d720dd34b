//! FILENAME: app/src/views.rs
// PURPOSE: Page assembly. Each dashboard page is a bundle of query results
// built from the shared, read-only `Events` table.

use dataset::{Events, Selector};
use query_engine::{
    age_distribution, country_event_heatmap, country_year_list, data_over_time, events_heatmap,
    fetch_medal_tally, gold_medal_ages_by_sport, men_vs_women, most_successful,
    most_successful_countrywise, overall_stats, sport_list, weight_v_height,
    yearwise_medal_tally, AgeDistribution, AthletePhysique, AthleteRanking,
    CountryAthleteRanking, CrossTab, MedalTally, OverallStats, SexParticipation, SportAges,
    TrendDimension, YearCount, FAMOUS_SPORTS,
};
use serde::Serialize;

use crate::cli::ViewCommand;
use crate::logging::{log_debug, log_warn};

// ============================================================================
// PAGES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedalTallyPage {
    pub title: String,
    pub year: Selector<i32>,
    pub country: Selector<String>,
    pub tally: MedalTally,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewPage {
    pub stats: OverallStats,
    pub nations_over_time: Vec<YearCount>,
    pub events_over_time: Vec<YearCount>,
    pub athletes_over_time: Vec<YearCount>,
    pub events_heatmap: CrossTab,
    pub sport: Selector<String>,
    pub top_athletes: Vec<AthleteRanking>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryPage {
    pub region: String,
    pub medals_over_time: Vec<YearCount>,
    /// `None` when the region has no medals to plot.
    pub heatmap: Option<CrossTab>,
    pub top_athletes: Vec<CountryAthleteRanking>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthletesPage {
    pub ages: AgeDistribution,
    pub gold_ages_by_sport: Vec<SportAges>,
    pub sport: Selector<String>,
    pub physique: Vec<AthletePhysique>,
    pub sex_participation: Vec<SexParticipation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionsPage {
    pub years: Vec<Selector<i32>>,
    pub countries: Vec<Selector<String>>,
    pub sports: Vec<Selector<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Tally(MedalTallyPage),
    Overview(OverviewPage),
    Country(CountryPage),
    Athletes(AthletesPage),
    Options(OptionsPage),
}

// ============================================================================
// ASSEMBLY
// ============================================================================

/// Heading of the medal tally page for a year/country selection.
pub fn tally_title(year: &Selector<i32>, country: &Selector<String>) -> String {
    match (year, country) {
        (Selector::Overall, Selector::Overall) => "Overall Medal Tally".to_string(),
        (Selector::Only(y), Selector::Overall) => format!("Medal Tally in {} Olympics", y),
        (Selector::Overall, Selector::Only(c)) => format!("{} - Overall Performance", c),
        (Selector::Only(y), Selector::Only(c)) => {
            format!("{} Performance in {} Olympics", c, y)
        }
    }
}

/// Warns when a selector names a value the dataset never mentions.
/// The queries still run and simply come back empty.
fn check_known(kind: &str, selector: &Selector<String>, known: &[&str]) {
    if let Selector::Only(value) = selector {
        if !known.contains(&value.as_str()) {
            log_warn!("VIEW", "Unknown {} '{}': results will be empty", kind, value);
        }
    }
}

pub fn build_tally_page(events: &Events, year: &Selector<i32>, country: &Selector<String>) -> MedalTallyPage {
    if let Selector::Only(y) = year {
        if !events.years().contains(y) {
            log_warn!("VIEW", "No games held in {}: results will be empty", y);
        }
    }
    check_known("country", country, &events.regions());

    MedalTallyPage {
        title: tally_title(year, country),
        year: year.clone(),
        country: country.clone(),
        tally: fetch_medal_tally(events, year, country),
    }
}

pub fn build_overview_page(events: &Events, sport: &Selector<String>) -> OverviewPage {
    check_known("sport", sport, &events.sports());

    OverviewPage {
        stats: overall_stats(events),
        nations_over_time: data_over_time(events, TrendDimension::Region),
        events_over_time: data_over_time(events, TrendDimension::Event),
        athletes_over_time: data_over_time(events, TrendDimension::Athlete),
        events_heatmap: events_heatmap(events),
        sport: sport.clone(),
        top_athletes: most_successful(events, sport),
    }
}

pub fn build_country_page(events: &Events, region: &str) -> CountryPage {
    check_known("country", &Selector::Only(region.to_string()), &events.regions());

    let heatmap = country_event_heatmap(events, region);
    CountryPage {
        region: region.to_string(),
        medals_over_time: yearwise_medal_tally(events, region),
        heatmap: if heatmap.is_empty() { None } else { Some(heatmap) },
        top_athletes: most_successful_countrywise(events, region),
    }
}

pub fn build_athletes_page(events: &Events, sport: &Selector<String>) -> AthletesPage {
    check_known("sport", sport, &events.sports());

    AthletesPage {
        ages: age_distribution(events),
        gold_ages_by_sport: gold_medal_ages_by_sport(events, &FAMOUS_SPORTS),
        sport: sport.clone(),
        physique: weight_v_height(events, sport),
        sex_participation: men_vs_women(events),
    }
}

pub fn build_options_page(events: &Events) -> OptionsPage {
    let selectors = country_year_list(events);
    OptionsPage {
        years: selectors.years,
        countries: selectors.countries,
        sports: sport_list(events),
    }
}

/// Builds the page a subcommand asks for.
pub fn build_page(events: &Events, view: &ViewCommand) -> Page {
    log_debug!("VIEW", "Building {:?} over {} rows", view, events.len());
    match view {
        ViewCommand::Tally { year, country } => Page::Tally(build_tally_page(events, year, country)),
        ViewCommand::Overview { sport } => Page::Overview(build_overview_page(events, sport)),
        ViewCommand::Country { region } => Page::Country(build_country_page(events, region)),
        ViewCommand::Athletes { sport } => Page::Athletes(build_athletes_page(events, sport)),
        ViewCommand::Options => Page::Options(build_options_page(events)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_selection() {
        let india = Selector::Only("India".to_string());
        assert_eq!(tally_title(&Selector::Overall, &Selector::Overall), "Overall Medal Tally");
        assert_eq!(tally_title(&Selector::Only(2016), &Selector::Overall), "Medal Tally in 2016 Olympics");
        assert_eq!(tally_title(&Selector::Overall, &india), "India - Overall Performance");
        assert_eq!(tally_title(&Selector::Only(2016), &india), "India Performance in 2016 Olympics");
    }

    #[test]
    fn empty_table_builds_empty_pages() {
        let events = Events::default();
        let country = build_country_page(&events, "India");
        assert!(country.heatmap.is_none());
        assert!(country.medals_over_time.is_empty());
        assert!(country.top_athletes.is_empty());

        let options = build_options_page(&events);
        assert_eq!(options.years, vec![Selector::Overall]);
        assert_eq!(options.sports, vec![Selector::Overall]);
    }
}
