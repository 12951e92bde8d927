use super::ui;
use crate::core::config::AppConfig;
use crate::core::inputs::AuxiliaryInputs;
use crate::core::kpi::KpiRecord;
use crate::core::profiles::Profile;
use crate::core::{dataset, profiles};
use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use comfy_table::{Cell, Color};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Everything `analyze` needs besides the app config.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub profile: Option<String>,
    pub data_path: PathBuf,
    pub inputs: Vec<String>,
    pub inputs_file: Option<PathBuf>,
    pub format: OutputFormat,
}

/// A computed dashboard for one profile.
#[derive(Debug, Serialize)]
pub struct KpiReport {
    pub profile: Profile,
    pub name: &'static str,
    pub kpis: Vec<KpiRecord>,
}

impl KpiReport {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("KPI"),
            ui::header_cell("Value"),
            ui::header_cell("Trend"),
            ui::header_cell("Benchmark"),
            ui::header_cell("About"),
        ]);

        for kpi in &self.kpis {
            table.add_row(vec![
                Cell::new(kpi.title),
                ui::value_cell(kpi.value, kpi.unit),
                ui::trend_cell(kpi.trend, kpi.unit),
                Cell::new(kpi.benchmark),
                Cell::new(kpi.info).fg(Color::DarkGrey),
            ]);
        }

        let title = format!("{} Dashboard", self.name);
        let mut output = format!("{}\n\n", ui::style_text(&title, ui::StyleType::Title));
        output.push_str(&table.to_string());
        output
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.display_as_table()),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize KPI report")
            }
        }
    }
}

fn resolve_profile(config: &AppConfig, requested: Option<&str>) -> Result<Profile> {
    match requested {
        Some(key) => key.parse(),
        None => config.default_profile.ok_or_else(|| {
            anyhow!("Please select an analysis type with --profile or set default_profile in the config")
        }),
    }
}

/// Merges inputs: config defaults, then the inputs file, then command-line
/// assignments.
fn collect_inputs(
    config: &AppConfig,
    profile: Profile,
    options: &AnalyzeOptions,
) -> Result<AuxiliaryInputs> {
    let mut inputs = config.inputs_for(profile);
    if let Some(path) = &options.inputs_file {
        inputs.merge(&AuxiliaryInputs::load_from_path(path)?);
    }
    inputs.merge(&AuxiliaryInputs::from_assignments(&options.inputs)?);

    for field in profile.input_fields() {
        if !inputs.contains_key(field.key) {
            warn!(
                "Input '{}' ({}) not provided, using 0",
                field.key, field.label
            );
        }
    }
    debug!(?inputs, "Collected inputs");
    Ok(inputs)
}

/// Loads the dataset and inputs, then derives the profile's KPIs.
pub fn build_report(config: &AppConfig, options: &AnalyzeOptions) -> Result<KpiReport> {
    let profile = resolve_profile(config, options.profile.as_deref())?;
    let rows = dataset::load_csv(&options.data_path, &config.metric_column)?;
    let inputs = collect_inputs(config, profile, options)?;

    info!(%profile, rows = rows.len(), "Analyzing dataset");
    let kpis = profiles::compute(profile, &rows, &inputs);

    Ok(KpiReport {
        profile,
        name: profile.display_name(),
        kpis,
    })
}

pub fn run(config: &AppConfig, options: &AnalyzeOptions) -> Result<()> {
    let report = build_report(config, options)?;
    println!("{}", report.render(options.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const STARTUP_CSV: &str = "Metric,current,previous\n\
        Total Revenue,\"$120,000\",\"$100,000\"\n\
        Cost of Goods Sold (COGS),30000,\n\
        Net Income,12000,\n\
        Cash,60000,\n";

    fn write_csv(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("data.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_build_report_with_precedence() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let data_path = write_csv(&temp_dir, STARTUP_CSV);
        let inputs_file = temp_dir.path().join("inputs.yaml");
        fs::write(&inputs_file, "newCustomers: 10\ntotalCustomersStart: 500\n")?;

        let config: AppConfig = serde_yaml::from_str(
            "inputs:\n  startup:\n    newCustomers: 1\n    churnedCustomers: 5\n    avgMonthlyBurn: 20000\n",
        )?;
        let options = AnalyzeOptions {
            profile: Some("startup".to_string()),
            data_path,
            inputs: vec!["newCustomers=50".to_string()],
            inputs_file: Some(inputs_file),
            format: OutputFormat::Table,
        };

        let report = build_report(&config, &options)?;
        let value = |id: &str| report.kpis.iter().find(|k| k.id == id).unwrap().value;

        assert_eq!(report.profile, Profile::Startup);
        assert_eq!(value("arr"), 120000.0);
        assert!((value("churn") - 1.0).abs() < 1e-9);
        assert!((value("runway") - 3.0).abs() < 1e-9);
        assert_eq!(value("cac"), 0.0);
        Ok(())
    }

    #[test]
    fn test_default_profile_from_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let options = AnalyzeOptions {
            data_path: write_csv(&temp_dir, STARTUP_CSV),
            ..Default::default()
        };

        assert!(build_report(&AppConfig::default(), &options).is_err());

        let config = AppConfig {
            default_profile: Some(Profile::FinancialHealth),
            ..Default::default()
        };
        let report = build_report(&config, &options)?;
        assert_eq!(report.kpis.len(), 5);
        Ok(())
    }

    #[test]
    fn test_unknown_profile_is_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let options = AnalyzeOptions {
            profile: Some("retail".to_string()),
            data_path: write_csv(&temp_dir, STARTUP_CSV),
            ..Default::default()
        };

        let err = build_report(&AppConfig::default(), &options).unwrap_err();
        assert!(err.to_string().contains("Invalid analysis type selected"));
        Ok(())
    }

    #[test]
    fn test_render_formats() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let options = AnalyzeOptions {
            profile: Some("financial_health".to_string()),
            data_path: write_csv(&temp_dir, dataset::SAMPLE_CSV),
            ..Default::default()
        };
        let report = build_report(&AppConfig::default(), &options)?;

        let table = report.render(OutputFormat::Table)?;
        assert!(table.contains("Core Financial Health Dashboard"));
        assert!(table.contains("Working Capital"));
        assert!(table.contains("$800,000"));

        let json: serde_json::Value = serde_json::from_str(&report.render(OutputFormat::Json)?)?;
        assert_eq!(json["profile"], "financial_health");
        assert_eq!(json["kpis"][0]["id"], "current_ratio");
        assert_eq!(json["kpis"][3]["unit"], "$");
        Ok(())
    }
}
