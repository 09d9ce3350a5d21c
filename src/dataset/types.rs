// src/dataset/types.rs - Observation rows and time-of-day values

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

/// A wall-clock time with second granularity.
///
/// Only used to interpret a stored value (away duration, lookups). Tallies
/// and the artifact work on the raw cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Self)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self(t)
    }
}

impl FromStr for TimeOfDay {
    type Err = chrono::ParseError;

    /// Accepts `HH:MM:SS` and `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map(Self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

/// One row of the input dataset. Columns outside these three are dropped.
///
/// Cells are kept exactly as read; `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub day_type: String,
    pub leaving_time: Option<String>,
    pub returning_time: Option<String>,
}

/// Tokens treated as a missing cell, compared case-insensitively.
const MISSING_MARKERS: &[&str] = &["na", "n/a", "nan", "null", "none"];

pub fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m))
}
