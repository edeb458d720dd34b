//! FILENAME: core/dataset/src/selector.rs
//! PURPOSE: Typed filter selectors for year, country and sport.
//! CONTEXT: The dashboard offers "Overall" alongside concrete values. Parsing
//! happens once, at the edge, so queries compare years as integers and never
//! as text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Literal that the user interface uses for "no filter".
pub const OVERALL: &str = "Overall";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Invalid {kind} selector: '{value}'")]
    Invalid { kind: &'static str, value: String },

    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },
}

/// Either no filter, or a filter on exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Selector<T> {
    Overall,
    Only(T),
}

impl<T> Selector<T> {
    pub fn is_overall(&self) -> bool {
        matches!(self, Selector::Overall)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selector::Overall => None,
            Selector::Only(v) => Some(v),
        }
    }

    /// True when the selector admits `candidate`.
    pub fn admits<U>(&self, candidate: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Selector::Overall => true,
            Selector::Only(v) => v == candidate,
        }
    }
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::Overall
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Selector::Only(v),
            None => Selector::Overall,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Overall => f.write_str(OVERALL),
            Selector::Only(v) => v.fmt(f),
        }
    }
}

fn is_overall_literal(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case(OVERALL)
}

impl FromStr for Selector<i32> {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_overall_literal(s) {
            return Ok(Selector::Overall);
        }
        s.trim()
            .parse::<i32>()
            .map(Selector::Only)
            .map_err(|_| SelectorError::Invalid {
                kind: "year",
                value: s.to_string(),
            })
    }
}

impl FromStr for Selector<String> {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if is_overall_literal(trimmed) {
            return Ok(Selector::Overall);
        }
        if trimmed.is_empty() {
            return Err(SelectorError::Invalid {
                kind: "name",
                value: s.to_string(),
            });
        }
        Ok(Selector::Only(trimmed.to_string()))
    }
}
