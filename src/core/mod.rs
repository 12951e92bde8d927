//! Core business logic: the KPI engine and the inputs that feed it

pub mod config;
pub mod dataset;
pub mod inputs;
pub mod kpi;
pub mod log;
pub mod metrics;
pub mod profiles;

// Re-export main types for cleaner imports
pub use inputs::AuxiliaryInputs;
pub use kpi::{KpiRecord, KpiUnit};
pub use metrics::{Period, RawMetricRow, lookup};
pub use profiles::{Profile, compute};
