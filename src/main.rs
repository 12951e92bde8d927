use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use kpiboard::cli::analyze::{AnalyzeOptions, OutputFormat};
use kpiboard::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Analysis type: startup, ecommerce or financial_health
    #[arg(short, long)]
    profile: Option<String>,

    /// CSV file with a Metric column and current/previous period columns
    #[arg(short, long)]
    data: PathBuf,

    /// Operational input as key=value, e.g. newCustomers=50 (repeatable)
    #[arg(short, long = "input", value_name = "KEY=VALUE")]
    inputs: Vec<String>,

    /// YAML file mapping input keys to numbers
    #[arg(long)]
    inputs_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl From<AnalyzeArgs> for AnalyzeOptions {
    fn from(args: AnalyzeArgs) -> AnalyzeOptions {
        AnalyzeOptions {
            profile: args.profile,
            data_path: args.data,
            inputs: args.inputs,
            inputs_file: args.inputs_file,
            format: args.format,
        }
    }
}

impl From<Commands> for kpiboard::AppCommand {
    fn from(cmd: Commands) -> kpiboard::AppCommand {
        match cmd {
            Commands::Analyze(args) => kpiboard::AppCommand::Analyze(args.into()),
            Commands::Profiles => kpiboard::AppCommand::Profiles,
            Commands::Sample => kpiboard::AppCommand::Sample,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Derive KPIs from a financial dataset
    Analyze(AnalyzeArgs),
    /// List analysis types and the inputs they use
    Profiles,
    /// Print a sample dataset in the expected CSV format
    Sample,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => kpiboard::cli::setup::setup_at_path(path),
            None => kpiboard::cli::setup::setup(),
        },
        Some(cmd) => kpiboard::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
