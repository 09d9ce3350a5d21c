// src/patterns/extractor.rs - Per-day-type pattern extraction

use std::collections::HashMap;

use super::map::{PatternMap, PatternRecord};
use super::mode::mode;
use crate::dataset::{Dataset, Observation};
use crate::infra::config::DatasetConfig;
use crate::infra::errors::{PatternError, Result};

/// Groups a loaded dataset by day type and summarizes each group.
pub struct PatternExtractor<'a> {
    dataset: &'a Dataset,
    columns: &'a DatasetConfig,
}

impl<'a> PatternExtractor<'a> {
    /// `columns` only supplies column names for error messages.
    pub fn new(dataset: &'a Dataset, columns: &'a DatasetConfig) -> Self {
        Self { dataset, columns }
    }

    /// Build the pattern map. Fails on the first group with an all-missing
    /// time column.
    pub fn extract(&self) -> Result<PatternMap> {
        let mut patterns = PatternMap::new();
        for (day_type, rows) in group_by_day_type(self.dataset.rows()) {
            let record = self.summarize(day_type, &rows)?;
            tracing::info!(
                "{}: leaving {}, returning {} ({} rows)",
                day_type,
                record.leaving_time,
                record.returning_time,
                record.samples
            );
            patterns.insert(day_type, record);
        }
        Ok(patterns)
    }

    fn summarize(&self, day_type: &str, rows: &[&Observation]) -> Result<PatternRecord> {
        let empty = |column: &str| PatternError::EmptyColumn {
            day_type: day_type.to_string(),
            column: column.to_string(),
        };

        let leaving_time = mode(rows.iter().filter_map(|r| r.leaving_time.as_deref()))
            .ok_or_else(|| empty(&self.columns.leaving_column))?;
        let returning_time = mode(rows.iter().filter_map(|r| r.returning_time.as_deref()))
            .ok_or_else(|| empty(&self.columns.returning_column))?;

        Ok(PatternRecord {
            leaving_time: leaving_time.to_string(),
            returning_time: returning_time.to_string(),
            samples: u32::try_from(rows.len()).unwrap_or(u32::MAX),
        })
    }
}

/// Partition rows by day type, keeping first-seen group order and row order
/// within each group.
fn group_by_day_type(rows: &[Observation]) -> Vec<(&str, Vec<&Observation>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Observation>)> = Vec::new();

    for row in rows {
        let pos = *index.entry(row.day_type.as_str()).or_insert_with(|| {
            groups.push((row.day_type.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[pos].1.push(row);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Option<&str> {
        Some(s)
    }

    fn obs(day_type: &str, leave: Option<&str>, back: Option<&str>) -> Observation {
        Observation {
            day_type: day_type.into(),
            leaving_time: leave.map(String::from),
            returning_time: back.map(String::from),
        }
    }

    fn extract(rows: Vec<Observation>) -> Result<PatternMap> {
        let ds = Dataset::from(rows);
        PatternExtractor::new(&ds, &DatasetConfig::default()).extract()
    }

    #[test]
    fn test_weekday_majority_leaving() {
        let mut rows = Vec::new();
        for _ in 0..5 {
            rows.push(obs("weekday", t("08:00:00"), t("18:00:00")));
        }
        for _ in 0..2 {
            rows.push(obs("weekday", t("09:00:00"), t("18:00:00")));
        }
        let map = extract(rows).unwrap();
        assert_eq!(map.get("weekday").unwrap().leaving_time, "08:00:00");
        assert_eq!(map.get("weekday").unwrap().samples, 7);
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let rows = vec![
            obs("weekend", t("10:00:00"), t("16:00:00")),
            obs("weekday", t("08:00:00"), t("18:00:00")),
            obs("holiday", t("11:00:00"), t("15:00:00")),
            obs("weekday", t("08:00:00"), t("18:00:00")),
        ];
        let map = extract(rows).unwrap();
        let keys: Vec<&str> = map.day_types().collect();
        assert_eq!(keys, vec!["weekend", "weekday", "holiday"]);
    }

    #[test]
    fn test_columns_are_independent() {
        // Leaving mode and returning mode come from different rows.
        let rows = vec![
            obs("weekday", t("07:00:00"), t("19:00:00")),
            obs("weekday", t("07:00:00"), t("17:00:00")),
            obs("weekday", t("08:00:00"), t("17:00:00")),
        ];
        let map = extract(rows).unwrap();
        let rec = map.get("weekday").unwrap();
        assert_eq!(rec.leaving_time, "07:00:00");
        assert_eq!(rec.returning_time, "17:00:00");
    }

    #[test]
    fn test_missing_values_do_not_count() {
        let rows = vec![
            obs("weekday", None, t("18:00:00")),
            obs("weekday", None, t("18:00:00")),
            obs("weekday", t("09:00:00"), None),
        ];
        let map = extract(rows).unwrap();
        let rec = map.get("weekday").unwrap();
        assert_eq!(rec.leaving_time, "09:00:00");
        assert_eq!(rec.returning_time, "18:00:00");
        assert_eq!(rec.samples, 3);
    }

    #[test]
    fn test_tie_resolves_to_first_in_group() {
        let rows = vec![
            obs("weekend", t("11:00:00"), t("16:00:00")),
            obs("weekday", t("08:00:00"), t("18:00:00")),
            obs("weekend", t("10:00:00"), t("15:00:00")),
            obs("weekend", t("10:00:00"), t("16:00:00")),
            obs("weekend", t("11:00:00"), t("15:00:00")),
        ];
        let map = extract(rows).unwrap();
        let rec = map.get("weekend").unwrap();
        assert_eq!(rec.leaving_time, "11:00:00");
        assert_eq!(rec.returning_time, "16:00:00");
    }

    #[test]
    fn test_distinct_spellings_tallied_separately() {
        let mut rows = Vec::new();
        for leave in ["08:00", "08:00", "8:00:00", "08:00:00", "09:00:00", "09:00:00", "09:00:00"] {
            rows.push(obs("weekday", t(leave), t("18:00:00")));
        }
        let map = extract(rows).unwrap();
        assert_eq!(map.get("weekday").unwrap().leaving_time, "09:00:00");
    }

    #[test]
    fn test_day_type_not_trimmed() {
        let rows = vec![
            obs("weekday", t("08:00:00"), t("18:00:00")),
            obs("weekday ", t("07:00:00"), t("17:00:00")),
        ];
        let map = extract(rows).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("weekday ").unwrap().leaving_time, "07:00:00");
    }

    #[test]
    fn test_non_time_values_are_counted() {
        let rows = vec![
            obs("holiday", t("late"), t("16:00:00")),
            obs("holiday", t("late"), t("16:00:00")),
            obs("holiday", t("10:00:00"), t("16:00:00")),
        ];
        let map = extract(rows).unwrap();
        assert_eq!(map.get("holiday").unwrap().leaving_time, "late");
    }

    #[test]
    fn test_all_missing_returning_fails() {
        let rows = vec![
            obs("weekday", t("08:00:00"), t("18:00:00")),
            obs("holiday", t("10:00:00"), None),
            obs("holiday", t("10:00:00"), None),
        ];
        match extract(rows).unwrap_err() {
            PatternError::EmptyColumn { day_type, column } => {
                assert_eq!(day_type, "holiday");
                assert_eq!(column, "returning_time");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_dataset_gives_empty_map() {
        let map = extract(Vec::new()).unwrap();
        assert!(map.is_empty());
    }
}
