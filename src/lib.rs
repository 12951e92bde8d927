pub mod cli;
pub mod core;

use crate::cli::analyze::AnalyzeOptions;
use crate::core::config::AppConfig;
use crate::core::dataset;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Analyze(AnalyzeOptions),
    Profiles,
    Sample,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("kpiboard starting...");

    match command {
        AppCommand::Analyze(options) => {
            let config = match config_path {
                Some(path) => AppConfig::load_from_path(path)?,
                None => AppConfig::load()?,
            };
            debug!("Loaded config: {config:#?}");
            cli::analyze::run(&config, &options)
        }
        AppCommand::Profiles => {
            cli::profiles::run();
            Ok(())
        }
        AppCommand::Sample => {
            print!("{}", dataset::SAMPLE_CSV);
            Ok(())
        }
    }
}
