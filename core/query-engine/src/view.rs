//! FILENAME: core/query-engine/src/view.rs
//! Derived tables - what each query hands to the presentation layer.
//!
//! Every type here is a fresh, owned value: nothing borrows from `Events`,
//! so a view can outlive the query that built it and be serialized as-is.

use dataset::{Medal, MedalLabel, Selector, Sex};
use serde::{Deserialize, Serialize};

// ============================================================================
// MEDAL TALLY
// ============================================================================

/// Gold/Silver/Bronze counters for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalCounts {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalCounts {
    pub fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// What the rows of a tally are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyGrouping {
    Region,
    Year,
}

/// Row label of a tally row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TallyKey {
    Region(String),
    Year(i32),
}

impl std::fmt::Display for TallyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TallyKey::Region(r) => f.write_str(r),
            TallyKey::Year(y) => write!(f, "{}", y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyRow {
    pub key: TallyKey,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    /// Always `gold + silver + bronze`.
    pub total: u32,
}

impl TallyRow {
    pub fn new(key: TallyKey, counts: MedalCounts) -> Self {
        TallyRow {
            key,
            gold: counts.gold,
            silver: counts.silver,
            bronze: counts.bronze,
            total: counts.total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTally {
    pub grouping: TallyGrouping,
    pub rows: Vec<TallyRow>,
}

impl MedalTally {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Finds the row for a region or year label.
    pub fn row(&self, key: &TallyKey) -> Option<&TallyRow> {
        self.rows.iter().find(|r| &r.key == key)
    }
}

// ============================================================================
// OVERALL STATISTICS / TRENDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallStats {
    pub editions: usize,
    pub host_cities: usize,
    pub sports: usize,
    pub events: usize,
    pub athletes: usize,
    pub nations: usize,
}

/// One point of a per-year series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u32,
}

// ============================================================================
// RANKINGS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteRanking {
    pub name: String,
    pub medals: u32,
    /// Sport of the athlete's first record; not necessarily where the medals came from.
    pub sport: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAthleteRanking {
    pub name: String,
    pub medals: u32,
    pub sport: String,
}

// ============================================================================
// CROSS TABULATION
// ============================================================================

/// Rows x year matrix of counts. Missing combinations hold 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTab {
    pub row_labels: Vec<String>,
    pub years: Vec<i32>,
    /// `cells[row][col]`, aligned with `row_labels` and `years`.
    pub cells: Vec<Vec<u32>>,
}

impl CrossTab {
    /// True when no source row contributed. Callers show an empty-state
    /// message instead of rendering.
    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty()
    }

    pub fn get(&self, row_label: &str, year: i32) -> Option<u32> {
        let row = self.row_labels.iter().position(|l| l == row_label)?;
        let col = self.years.iter().position(|y| *y == year)?;
        Some(self.cells[row][col])
    }

    pub fn row_total(&self, row_label: &str) -> Option<u32> {
        let row = self.row_labels.iter().position(|l| l == row_label)?;
        Some(self.cells[row].iter().sum())
    }

    pub fn grand_total(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }
}

// ============================================================================
// DEMOGRAPHICS
// ============================================================================

/// One unique athlete for the weight/height scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthletePhysique {
    pub name: String,
    pub sex: Sex,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub sport: String,
    pub region: Option<String>,
    /// Never null: non-medallists carry `MedalLabel::NoMedal`.
    pub medal: MedalLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexParticipation {
    pub year: i32,
    pub male: u32,
    pub female: u32,
}

/// Age samples for the overall distribution plot. Missing ages are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeDistribution {
    pub overall: Vec<f64>,
    pub gold: Vec<f64>,
    pub silver: Vec<f64>,
    pub bronze: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportAges {
    pub sport: String,
    pub ages: Vec<f64>,
}

// ============================================================================
// SELECTOR OPTIONS
// ============================================================================

/// Values offered in the year and country dropdowns, `Overall` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOptions {
    pub years: Vec<Selector<i32>>,
    pub countries: Vec<Selector<String>>,
}
