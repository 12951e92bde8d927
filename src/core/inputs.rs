//! Operational counters supplied alongside the financial dataset.
use crate::core::metrics::leading_number;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Named numeric inputs; absent keys read as 0 and every stored value is
/// finite.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct AuxiliaryInputs(BTreeMap<String, f64>);

impl From<BTreeMap<String, f64>> for AuxiliaryInputs {
    fn from(values: BTreeMap<String, f64>) -> Self {
        let mut inputs = Self::new();
        for (key, value) in values {
            inputs.set(key, value);
        }
        inputs
    }
}

impl From<AuxiliaryInputs> for BTreeMap<String, f64> {
    fn from(inputs: AuxiliaryInputs) -> Self {
        inputs.0
    }
}

impl AuxiliaryInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    /// Stores `value` under `key`. NaN and infinities are stored as 0.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        let value = if value.is_finite() {
            value
        } else {
            warn!("Input '{key}' is not a finite number ({value}), using 0");
            0.0
        };
        self.0.insert(key, value);
    }

    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Overlays `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: &AuxiliaryInputs) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), *value);
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read inputs file: {}", path.as_ref().display()))?;
        let inputs: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse inputs file: {}", path.as_ref().display()))?;
        debug!("Loaded {} inputs from file", inputs.0.len());
        Ok(inputs)
    }

    /// Parses `key=value` assignments. The leading number of each value is
    /// read (`50abc` is 50); a value without one reads as 0.
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self> {
        let mut inputs = Self::new();
        for assignment in assignments {
            let assignment = assignment.as_ref();
            let (key, raw) = assignment
                .split_once('=')
                .ok_or_else(|| anyhow!("Invalid input '{assignment}', expected key=value"))?;
            let key = key.trim();
            if key.is_empty() {
                anyhow::bail!("Invalid input '{assignment}', missing key");
            }
            let value = leading_number(raw.trim()).unwrap_or_else(|| {
                warn!("Input '{key}' has non-numeric value '{raw}', using 0");
                0.0
            });
            inputs.set(key, value);
        }
        Ok(inputs)
    }
}
