// src/cli/show.rs - `daypattern show`

use std::path::Path;

use super::extract::render_listing;
use super::ShowFormat;
use crate::infra::config::Config;
use crate::store;

pub fn run_show(config: &Config, artifact: Option<&str>, format: ShowFormat) -> anyhow::Result<()> {
    let path = artifact
        .map(Path::new)
        .unwrap_or(config.output.path.as_path());
    let patterns = store::load_patterns(path)?;

    let output = match format {
        ShowFormat::Text => render_listing(&patterns),
        ShowFormat::Json => serde_json::to_string_pretty(&patterns.to_json())? + "\n",
        ShowFormat::Yaml => serde_yml::to_string(&patterns.to_json())?,
    };
    print!("{output}");
    Ok(())
}
