//! FILENAME: core/persistence/src/csv_reader.rs
//! Raw CSV readers for the two source files.
//!
//! Rows are kept as text here; typing happens in `preprocess` once duplicates
//! and non-Summer rows are gone.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::PersistenceError;

const EVENTS_FILE: &str = "athlete events";
const REGIONS_FILE: &str = "NOC regions";

const EVENT_COLUMNS: [&str; 15] = [
    "ID", "Name", "Sex", "Age", "Height", "Weight", "Team", "NOC", "Games", "Year", "Season",
    "City", "Sport", "Event", "Medal",
];

const REGION_COLUMNS: [&str; 2] = ["NOC", "region"];

/// One untyped row of the athlete events file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct RawEventRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Height")]
    pub height: String,
    #[serde(rename = "Weight")]
    pub weight: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "NOC")]
    pub noc: String,
    #[serde(rename = "Games")]
    pub games: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Sport")]
    pub sport: String,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Medal")]
    pub medal: String,
}

#[derive(Debug, Deserialize)]
struct RawRegionRow {
    #[serde(rename = "NOC")]
    noc: String,
    region: String,
    #[serde(default)]
    notes: String,
}

/// Region and notes for one NOC code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionEntry {
    pub region: Option<String>,
    pub notes: Option<String>,
}

/// NOC code -> region lookup.
pub type RegionLookup = HashMap<String, RegionEntry>;

/// Returns `None` for the dataset's null markers.
pub(crate) fn non_null(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value == "NA" {
        None
    } else {
        Some(value)
    }
}

fn check_headers<R: Read>(
    reader: &mut csv::Reader<R>,
    file: &'static str,
    required: &[&str],
) -> Result<(), PersistenceError> {
    let headers = reader.headers()?;
    for column in required {
        if !headers.iter().any(|h| h.trim() == *column) {
            return Err(PersistenceError::MissingColumn {
                file,
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Reads athlete event rows from any reader.
pub fn read_event_rows<R: Read>(source: R) -> Result<Vec<RawEventRow>, PersistenceError> {
    let mut reader = csv::Reader::from_reader(source);
    check_headers(&mut reader, EVENTS_FILE, &EVENT_COLUMNS)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawEventRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads the NOC -> region lookup from any reader.
/// Later duplicates of a NOC code overwrite earlier ones.
pub fn read_region_lookup<R: Read>(source: R) -> Result<RegionLookup, PersistenceError> {
    let mut reader = csv::Reader::from_reader(source);
    check_headers(&mut reader, REGIONS_FILE, &REGION_COLUMNS)?;

    let mut lookup = RegionLookup::new();
    for result in reader.deserialize() {
        let row: RawRegionRow = result?;
        lookup.insert(
            row.noc.trim().to_string(),
            RegionEntry {
                region: non_null(&row.region).map(str::to_string),
                notes: non_null(&row.notes).map(str::to_string),
            },
        );
    }
    Ok(lookup)
}

pub fn load_event_rows(path: &Path) -> Result<Vec<RawEventRow>, PersistenceError> {
    let file = File::open(path)?;
    read_event_rows(BufReader::new(file))
}

pub fn load_region_lookup(path: &Path) -> Result<RegionLookup, PersistenceError> {
    let file = File::open(path)?;
    read_region_lookup(BufReader::new(file))
}
