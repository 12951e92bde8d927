//! Industry profiles and the dispatch that derives their KPIs.
pub mod ecommerce;
pub mod financial_health;
pub mod startup;

use crate::core::inputs::AuxiliaryInputs;
use crate::core::kpi::KpiRecord;
use crate::core::metrics::RawMetricRow;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// An operational counter a profile reads from [`AuxiliaryInputs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputField {
    pub key: &'static str,
    pub label: &'static str,
    pub example: f64,
}

impl InputField {
    pub const fn new(key: &'static str, label: &'static str, example: f64) -> Self {
        Self {
            key,
            label,
            example,
        }
    }
}

/// The supported analysis types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Startup,
    Ecommerce,
    FinancialHealth,
}

impl Profile {
    pub const ALL: [Profile; 3] = [
        Profile::FinancialHealth,
        Profile::Startup,
        Profile::Ecommerce,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Profile::Startup => "startup",
            Profile::Ecommerce => "ecommerce",
            Profile::FinancialHealth => "financial_health",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Profile::Startup => "Venture-Backed Startup (SaaS)",
            Profile::Ecommerce => "E-commerce",
            Profile::FinancialHealth => "Core Financial Health",
        }
    }

    /// Auxiliary inputs this profile reads; empty when it needs only the dataset.
    pub fn input_fields(&self) -> &'static [InputField] {
        match self {
            Profile::Startup => startup::INPUTS,
            Profile::Ecommerce => ecommerce::INPUTS,
            Profile::FinancialHealth => &[],
        }
    }

    pub fn compute(&self, rows: &[RawMetricRow], inputs: &AuxiliaryInputs) -> Vec<KpiRecord> {
        compute(*self, rows, inputs)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Profile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "startup" => Ok(Profile::Startup),
            "ecommerce" => Ok(Profile::Ecommerce),
            "financial_health" => Ok(Profile::FinancialHealth),
            other => bail!(
                "Invalid analysis type selected: '{other}'. Expected one of: startup, ecommerce, financial_health"
            ),
        }
    }
}

/// Derives the ordered KPI list for `profile`. Never fails: missing data and
/// invalid divisors resolve to 0.
pub fn compute(
    profile: Profile,
    rows: &[RawMetricRow],
    inputs: &AuxiliaryInputs,
) -> Vec<KpiRecord> {
    debug!(%profile, rows = rows.len(), "Computing KPIs");
    match profile {
        Profile::Startup => startup::compute(rows, inputs),
        Profile::Ecommerce => ecommerce::compute(rows, inputs),
        Profile::FinancialHealth => financial_health::compute(rows),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn value_of(kpis: &[KpiRecord], id: &str) -> f64 {
        kpis.iter()
            .find(|k| k.id == id)
            .unwrap_or_else(|| panic!("KPI '{id}' missing"))
            .value
    }

    pub(crate) fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn messy_rows() -> Vec<RawMetricRow> {
        vec![
            RawMetricRow::new("Total Revenue")
                .with("current", "$1,000")
                .with("previous", "abc"),
            RawMetricRow::new("Total Liabilities").with("current", "-10"),
            RawMetricRow::new("Shareholder Equity").with("current", ""),
        ]
    }

    #[test]
    fn test_profile_keys_round_trip() {
        for profile in Profile::ALL {
            assert_eq!(profile.key().parse::<Profile>().unwrap(), profile);
        }
    }

    #[test]
    fn test_unknown_profile_key() {
        let err = "retail".parse::<Profile>().unwrap_err();
        assert!(err.to_string().contains("Invalid analysis type selected"));
        assert!("Startup".parse::<Profile>().is_err());
    }

    #[test]
    fn test_fixed_ids_per_profile() {
        let expected: [(Profile, &[&str]); 3] = [
            (
                Profile::Startup,
                &["arr", "gpm", "ltv_cac", "churn", "rule_40", "runway", "cac"],
            ),
            (
                Profile::Ecommerce,
                &["aov", "conversion", "cart_abandon", "gpm", "roas"],
            ),
            (
                Profile::FinancialHealth,
                &[
                    "current_ratio",
                    "quick_ratio",
                    "debt_equity",
                    "working_capital",
                    "net_profit_margin",
                ],
            ),
        ];

        for (profile, ids) in expected {
            for rows in [Vec::new(), messy_rows()] {
                let kpis = compute(profile, &rows, &AuxiliaryInputs::new());
                let actual: Vec<&str> = kpis.iter().map(|k| k.id).collect();
                assert_eq!(actual, ids, "unexpected ids for {profile}");
            }
        }
    }

    #[test]
    fn test_values_always_finite() {
        let inputs = AuxiliaryInputs::new()
            .with(startup::TOTAL_CUSTOMERS_START, -3.0)
            .with(ecommerce::TOTAL_CARTS, -1.0);
        for profile in Profile::ALL {
            let kpis = compute(profile, &messy_rows(), &inputs);
            for kpi in kpis {
                assert!(kpi.value.is_finite(), "{} is not finite", kpi.id);
                assert!(kpi.trend.is_none_or(f64::is_finite));
            }
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let rows = messy_rows();
        let inputs = AuxiliaryInputs::new()
            .with(startup::NEW_CUSTOMERS, 7.0)
            .with(ecommerce::TOTAL_ORDERS, 3.0);
        for profile in Profile::ALL {
            let first = compute(profile, &rows, &inputs);
            let second = profile.compute(&rows, &inputs);
            assert_eq!(first.len(), second.len());
            for (a, b) in first.iter().zip(&second) {
                assert_eq!(a.value.to_bits(), b.value.to_bits());
                assert_eq!(a.trend.map(f64::to_bits), b.trend.map(f64::to_bits));
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_input_fields() {
        assert_eq!(Profile::Startup.input_fields().len(), 4);
        assert_eq!(Profile::Ecommerce.input_fields().len(), 5);
        assert!(Profile::FinancialHealth.input_fields().is_empty());
    }
}
