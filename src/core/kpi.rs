//! The KPI record shared by every industry profile.
use serde::Serialize;

/// Display unit attached to a KPI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KpiUnit {
    #[serde(rename = "$")]
    Currency,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = ":1")]
    Ratio,
    #[serde(rename = " months")]
    Months,
}

impl KpiUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            KpiUnit::Currency => "$",
            KpiUnit::Percent => "%",
            KpiUnit::Ratio => ":1",
            KpiUnit::Months => " months",
        }
    }
}

/// A single derived metric with its presentation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub value: f64,
    pub unit: KpiUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
    pub info: &'static str,
    pub benchmark: &'static str,
}

impl KpiRecord {
    pub fn new(id: &'static str, title: &'static str, value: f64, unit: KpiUnit) -> Self {
        Self {
            id,
            title,
            value,
            unit,
            trend: None,
            info: "",
            benchmark: "",
        }
    }

    pub fn with_trend(mut self, trend: f64) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn with_info(mut self, info: &'static str) -> Self {
        self.info = info;
        self
    }

    pub fn with_benchmark(mut self, benchmark: &'static str) -> Self {
        self.benchmark = benchmark;
        self
    }
}

/// Divides `numerator` by `denominator`, yielding 0 when the denominator is
/// not strictly positive (NaN included).
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
