//! FILENAME: core/persistence/src/preprocess.rs
//! Turns raw CSV rows into the normalized `Events` table.
//!
//! Steps, in order:
//! 1. keep Summer games only
//! 2. drop rows that are exact duplicates of an earlier row
//! 3. join NOC -> region
//! 4. type every field (nulls become `None`)

use std::collections::HashSet;
use std::str::FromStr;

use dataset::{EventRecord, Events, Medal, Season, Sex};
use log::{debug, info};

use crate::csv_reader::{non_null, RawEventRow, RegionLookup};
use crate::PersistenceError;

/// Runs the preprocessing pipeline over already-read rows.
pub fn preprocess(rows: Vec<RawEventRow>, regions: &RegionLookup) -> Result<Events, PersistenceError> {
    let total = rows.len();
    let mut seen: HashSet<RawEventRow> = HashSet::with_capacity(total);
    let mut records = Vec::with_capacity(total);
    let mut non_summer = 0usize;
    let mut duplicates = 0usize;

    for (idx, row) in rows.into_iter().enumerate() {
        if row.season.trim() != "Summer" {
            non_summer += 1;
            continue;
        }
        if seen.contains(&row) {
            duplicates += 1;
            continue;
        }
        // Data records are numbered from 1; a quoted field may span lines
        let record = to_record(&row, regions, idx + 1)?;
        seen.insert(row);
        records.push(record);
    }

    debug!(
        "preprocess: {} rows read, {} non-Summer dropped, {} duplicates dropped",
        total, non_summer, duplicates
    );
    info!("Loaded {} event records", records.len());

    Ok(Events::new(records))
}

fn to_record(row: &RawEventRow, regions: &RegionLookup, record: usize) -> Result<EventRecord, PersistenceError> {
    let noc = row.noc.trim().to_string();
    let entry = regions.get(&noc).cloned().unwrap_or_default();

    Ok(EventRecord {
        id: parse_required(&row.id, "ID", record)?,
        name: row.name.trim().to_string(),
        sex: parse_required::<Sex>(&row.sex, "Sex", record)?,
        age: parse_optional(&row.age, "Age", record)?,
        height: parse_optional(&row.height, "Height", record)?,
        weight: parse_optional(&row.weight, "Weight", record)?,
        team: row.team.trim().to_string(),
        noc,
        region: entry.region,
        notes: entry.notes,
        games: row.games.trim().to_string(),
        year: parse_required(&row.year, "Year", record)?,
        season: parse_required::<Season>(&row.season, "Season", record)?,
        city: row.city.trim().to_string(),
        sport: row.sport.trim().to_string(),
        event: row.event.trim().to_string(),
        medal: parse_optional::<Medal>(&row.medal, "Medal", record)?,
    })
}

fn parse_required<T: FromStr>(value: &str, column: &str, record: usize) -> Result<T, PersistenceError> {
    let raw = non_null(value).ok_or_else(|| {
        PersistenceError::InvalidFormat(format!("record {}: column {} is empty", record, column))
    })?;
    raw.parse().map_err(|_| {
        PersistenceError::InvalidFormat(format!(
            "record {}: invalid {} value '{}'",
            record, column, raw
        ))
    })
}

fn parse_optional<T: FromStr>(value: &str, column: &str, record: usize) -> Result<Option<T>, PersistenceError> {
    match non_null(value) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            PersistenceError::InvalidFormat(format!(
                "record {}: invalid {} value '{}'",
                record, column, raw
            ))
        }),
    }
}
