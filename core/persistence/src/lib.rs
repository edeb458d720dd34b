//! FILENAME: core/persistence/src/lib.rs
//! Olympics Persistence Module
//!
//! Loads the athlete event file and the NOC region lookup, then runs the
//! preprocessing step that produces the immutable `Events` table. This is the
//! only crate that touches the filesystem.

mod csv_reader;
mod error;
mod preprocess;

pub use csv_reader::{
    load_event_rows, load_region_lookup, read_event_rows, read_region_lookup, RawEventRow,
    RegionEntry, RegionLookup,
};
pub use error::PersistenceError;
pub use preprocess::preprocess;

use dataset::Events;
use log::info;
use std::io::Read;
use std::path::{Path, PathBuf};

// ============================================================================
// SOURCE PATHS
// ============================================================================

/// Default file name of the athlete event dataset.
pub const DEFAULT_EVENTS_FILE: &str = "athlete_events.csv";

/// Default file name of the NOC region lookup.
pub const DEFAULT_REGIONS_FILE: &str = "noc_regions.csv";

/// Locations of the two source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub events: PathBuf,
    pub regions: PathBuf,
}

impl DataSources {
    pub fn new(events: impl Into<PathBuf>, regions: impl Into<PathBuf>) -> Self {
        DataSources {
            events: events.into(),
            regions: regions.into(),
        }
    }

    /// Both files under one directory, using the default file names.
    pub fn in_dir(dir: &Path) -> Self {
        DataSources {
            events: dir.join(DEFAULT_EVENTS_FILE),
            regions: dir.join(DEFAULT_REGIONS_FILE),
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        DataSources::new(DEFAULT_EVENTS_FILE, DEFAULT_REGIONS_FILE)
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Loads and preprocesses both files into an `Events` table.
pub fn load_events(sources: &DataSources) -> Result<Events, PersistenceError> {
    info!(
        "Loading events from {:?} with regions from {:?}",
        sources.events, sources.regions
    );
    let regions = load_region_lookup(&sources.regions)?;
    let rows = load_event_rows(&sources.events)?;
    preprocess(rows, &regions)
}

/// Same as `load_events`, from in-memory readers.
pub fn read_events<E: Read, R: Read>(events: E, regions: R) -> Result<Events, PersistenceError> {
    let regions = read_region_lookup(regions)?;
    let rows = read_event_rows(events)?;
    preprocess(rows, &regions)
}
