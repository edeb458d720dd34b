//! FILENAME: core/query-engine/src/dedup.rs
//! Keep-first deduplication over borrowed records.
//!
//! Every query that needs "one row per X" goes through `dedup_by`, so the
//! first-seen record (in table order) is always the survivor.

use std::hash::Hash;

use dataset::{EventRecord, Events};
use rustc_hash::FxHashSet;

/// Keeps the first record for each distinct key, preserving input order.
pub fn dedup_by<'a, K, I, F>(rows: I, mut key: F) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
    K: Eq + Hash,
    F: FnMut(&'a EventRecord) -> K,
{
    let mut seen = FxHashSet::default();
    rows.into_iter().filter(|r| seen.insert(key(*r))).collect()
}

/// Collapses team medals: one row per (team, NOC, games, year, city, sport, event, medal).
pub fn dedup_natural_key<'a, I>(rows: I) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    dedup_by(rows, EventRecord::natural_key)
}

/// One row per athlete, identified by (name, region).
pub fn unique_athletes(events: &Events) -> Vec<&EventRecord> {
    dedup_by(events, |r| (r.name.as_str(), r.region()))
}
