// src/patterns/map.rs - Ordered day-type -> pattern mapping

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dataset::TimeOfDay;

/// The representative leaving/returning pair for one day type, holding the
/// cell text exactly as it appeared in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub leaving_time: String,
    pub returning_time: String,
    /// Rows in the group the pattern was taken from.
    pub samples: u32,
}

impl PatternRecord {
    pub fn leaving(&self) -> Option<TimeOfDay> {
        self.leaving_time.parse().ok()
    }

    pub fn returning(&self) -> Option<TimeOfDay> {
        self.returning_time.parse().ok()
    }

    /// Time spent away, wrapping past midnight when returning precedes leaving.
    /// `None` when either value is not a clock time.
    pub fn away_duration(&self) -> Option<chrono::Duration> {
        let leave = self.leaving()?.to_naive_time();
        let back = self.returning()?.to_naive_time();
        let secs = (back - leave).num_seconds().rem_euclid(86_400);
        Some(chrono::Duration::seconds(secs))
    }
}

/// Day type -> pattern, iterating in first-seen order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(String, PatternRecord)>", into = "Vec<(String, PatternRecord)>")]
pub struct PatternMap {
    entries: Vec<(String, PatternRecord)>,
    index: HashMap<String, usize>,
}

impl PatternMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, day_type: impl Into<String>, record: PatternRecord) {
        let day_type = day_type.into();
        match self.index.get(&day_type) {
            Some(&pos) => self.entries[pos].1 = record,
            None => {
                self.index.insert(day_type.clone(), self.entries.len());
                self.entries.push((day_type, record));
            }
        }
    }

    pub fn get(&self, day_type: &str) -> Option<&PatternRecord> {
        self.index.get(day_type).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, day_type: &str) -> bool {
        self.index.contains_key(day_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PatternRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn day_types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for PatternMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for PatternMap {}

impl From<Vec<(String, PatternRecord)>> for PatternMap {
    fn from(entries: Vec<(String, PatternRecord)>) -> Self {
        let mut map = Self::new();
        for (day_type, record) in entries {
            map.insert(day_type, record);
        }
        map
    }
}

impl From<PatternMap> for Vec<(String, PatternRecord)> {
    fn from(map: PatternMap) -> Self {
        map.entries
    }
}

/// Keyed view for JSON/YAML output, keeping insertion order.
impl PatternMap {
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        for (day_type, record) in self.iter() {
            obj.insert(
                day_type.to_string(),
                serde_json::json!({
                    "leaving_time": record.leaving_time,
                    "returning_time": record.returning_time,
                    "samples": record.samples,
                }),
            );
        }
        serde_json::Value::Object(obj)
    }
}
