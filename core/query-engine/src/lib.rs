//! FILENAME: core/query-engine/src/lib.rs
//! Query layer for the Olympics dashboard.
//!
//! Every query is a pure function of `&Events` plus optional selectors and
//! returns a freshly built, owned derived table. No query mutates the table,
//! caches a result, or depends on another query's output.
//!
//! Layers:
//! - `view`: Derived table types (WHAT we hand to presentation)
//! - `dedup`: Keep-first deduplication on natural key / athlete identity
//! - `tally`, `stats`, `ranking`, `pivot`, `demographics`: the queries
//! - `options`: Dropdown contents for the filter widgets

pub mod dedup;
pub mod demographics;
pub mod options;
pub mod pivot;
pub mod ranking;
pub mod stats;
pub mod tally;
pub mod view;

#[cfg(test)]
mod test_support;

pub use dedup::{dedup_by, dedup_natural_key, unique_athletes};
pub use demographics::{
    age_distribution, gold_medal_ages_by_sport, men_vs_women, weight_v_height, FAMOUS_SPORTS,
};
pub use options::{country_year_list, sport_list};
pub use pivot::{country_event_heatmap, cross_tabulate, events_heatmap};
pub use ranking::{
    most_successful, most_successful_countrywise, TOP_ATHLETES, TOP_COUNTRY_ATHLETES,
};
pub use stats::{data_over_time, overall_stats, TrendDimension, UNOFFICIAL_EDITIONS};
pub use tally::{fetch_medal_tally, overall_medal_tally, yearwise_medal_tally};
pub use view::*;
