//! FILENAME: core/query-engine/src/options.rs
//! Dropdown contents for the filter widgets.

use dataset::{Events, Selector};

use crate::view::SelectorOptions;

/// Years and countries, each sorted ascending with `Overall` first.
pub fn country_year_list(events: &Events) -> SelectorOptions {
    let years = std::iter::once(Selector::Overall)
        .chain(events.years().into_iter().map(Selector::Only))
        .collect();
    let countries = std::iter::once(Selector::Overall)
        .chain(events.regions().into_iter().map(|r| Selector::Only(r.to_string())))
        .collect();
    SelectorOptions { years, countries }
}

/// Sports sorted ascending with `Overall` first.
pub fn sport_list(events: &Events) -> Vec<Selector<String>> {
    std::iter::once(Selector::Overall)
        .chain(events.sports().into_iter().map(|s| Selector::Only(s.to_string())))
        .collect()
}
