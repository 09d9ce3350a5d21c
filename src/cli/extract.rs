// src/cli/extract.rs - `daypattern extract`

use std::path::Path;

use crate::infra::config::Config;
use crate::patterns::PatternMap;
use crate::pipeline;

pub fn run_extract(config: &Config, dataset: &str, output: Option<&str>) -> anyhow::Result<()> {
    let output = output
        .map(Path::new)
        .unwrap_or(config.output.path.as_path());

    let patterns = pipeline::run(Path::new(dataset), output, &config.dataset).inspect_err(|e| {
        tracing::error!(kind = e.kind(), "Extraction failed");
    })?;

    print!("{}", render_listing(&patterns));
    println!("Patterns saved to {}", output.display());
    Ok(())
}

/// Operator-facing listing, one line per day type.
pub fn render_listing(patterns: &PatternMap) -> String {
    let mut out = String::from("Leaving and returning patterns by day type:\n");
    for (day_type, record) in patterns.iter() {
        let away = record
            .away_duration()
            .map(|d| format!("away {}h{:02}m, ", d.num_hours(), d.num_minutes() % 60))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {}: leaving at {}, returning at {} ({}{} samples)\n",
            day_type, record.leaving_time, record.returning_time, away, record.samples
        ));
    }
    out
}
