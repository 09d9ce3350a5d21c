// src/main.rs - daypattern entry point

use clap::Parser;

use daypattern::cli::{Cli, Commands};
use daypattern::infra::config::Config;
use daypattern::infra::logger;

fn main() {
    let cli = Cli::parse();

    // Respects RUST_LOG; -v/-vv raise the default level
    logger::init_logging(logger::level_for_verbosity(cli.verbose));

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Falls back to defaults if no config.toml
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match &cli.command {
        Commands::Extract { dataset, output } => {
            daypattern::cli::extract::run_extract(&config, dataset, output.as_deref())
        }
        Commands::Show { artifact, format } => {
            daypattern::cli::show::run_show(&config, artifact.as_deref(), *format)
        }
        Commands::Predict { date, artifact } => {
            daypattern::cli::predict::run_predict(&config, date.as_deref(), artifact.as_deref())
        }
    }
}
