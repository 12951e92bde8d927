//! CSV ingest for the financial dataset.
use crate::core::metrics::RawMetricRow;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_METRIC_COLUMN: &str = "Metric";

pub const SAMPLE_CSV: &str = include_str!("../../docs/sample_financial_data.csv");

/// Reads a headed CSV file into metric rows.
pub fn load_csv<P: AsRef<Path>>(path: P, metric_column: &str) -> Result<Vec<RawMetricRow>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open data file: {}", path.display()))?;
    from_reader(file, metric_column)
        .with_context(|| format!("Failed to load data file: {}", path.display()))
}

/// Parses CSV from `reader`. Every header other than `metric_column` becomes a
/// period column.
pub fn from_reader<R: Read>(reader: R, metric_column: &str) -> Result<Vec<RawMetricRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let metric_idx = headers.iter().position(|h| h == metric_column);

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed CSV at record {}", i + 1))?;

        let mut row = RawMetricRow::new(
            metric_idx
                .and_then(|idx| record.get(idx))
                .unwrap_or_default(),
        );
        for (idx, header) in headers.iter().enumerate() {
            if Some(idx) == metric_idx {
                continue;
            }
            if let Some(value) = record.get(idx) {
                row.values.insert(header.to_string(), value.to_string());
            }
        }
        rows.push(row);
    }

    validate(&rows, metric_column)?;
    debug!("Loaded {} metric rows", rows.len());
    Ok(rows)
}

fn validate(rows: &[RawMetricRow], metric_column: &str) -> Result<()> {
    match rows.first() {
        Some(first) if !first.metric.is_empty() => Ok(()),
        _ => bail!(
            "Invalid CSV format. Please ensure it has a \"{metric_column}\" column. Run `kpiboard sample` for the correct format."
        ),
    }
}
