// src/cli/predict.rs - `daypattern predict`

use std::path::Path;

use chrono::{Datelike, Local, NaiveDate};

use crate::calendar;
use crate::infra::config::Config;
use crate::patterns::{PatternMap, PatternRecord};
use crate::store;

pub fn run_predict(config: &Config, date: Option<&str>, artifact: Option<&str>) -> anyhow::Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Invalid date '{s}' (expected YYYY-MM-DD): {e}"))?,
        None => Local::now().date_naive(),
    };
    let path = artifact
        .map(Path::new)
        .unwrap_or(config.output.path.as_path());
    let patterns = store::load_patterns(path)?;

    let (day_type, record) = lookup(&patterns, date, &config.calendar.holidays)?;
    println!(
        "{date} is a {day_type} in {}. Expected leaving time: {}, returning time: {}",
        calendar::season(date.month()),
        record.leaving_time,
        record.returning_time
    );
    Ok(())
}

/// Classify `date` and fetch its pattern.
pub fn lookup<'a>(
    patterns: &'a PatternMap,
    date: NaiveDate,
    holidays: &[NaiveDate],
) -> anyhow::Result<(&'static str, &'a PatternRecord)> {
    let day_type = calendar::classify_day(date, holidays);
    match patterns.get(day_type) {
        Some(record) => Ok((day_type, record)),
        None => anyhow::bail!(
            "No pattern found for {day_type}. Known day types: {}",
            patterns.day_types().collect::<Vec<_>>().join(", ")
        ),
    }
}
