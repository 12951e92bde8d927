//! Raw financial line items and the lookup that turns them into numbers.
use std::collections::HashMap;
use tracing::debug;

pub const TOTAL_REVENUE: &str = "Total Revenue";
pub const COGS: &str = "Cost of Goods Sold (COGS)";
pub const MARKETING_EXPENSES: &str = "Marketing Expenses";
pub const SALES_EXPENSES: &str = "Sales Expenses";
pub const NET_INCOME: &str = "Net Income";
pub const CASH: &str = "Cash";
pub const ACCOUNTS_RECEIVABLE: &str = "Accounts Receivable";
pub const TOTAL_ASSETS: &str = "Total Assets";
pub const TOTAL_LIABILITIES: &str = "Total Liabilities";
pub const SHAREHOLDER_EQUITY: &str = "Shareholder Equity";

/// Column selector for a metric lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Current,
    Previous,
}

impl Period {
    pub fn column(&self) -> &'static str {
        match self {
            Period::Current => "current",
            Period::Previous => "previous",
        }
    }
}

/// One line item of the dataset: a metric name and its raw cell text per
/// period column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMetricRow {
    pub metric: String,
    pub values: HashMap<String, String>,
}

impl RawMetricRow {
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    fn matches(&self, metric: &str) -> bool {
        self.metric.trim().to_lowercase() == metric.trim().to_lowercase()
    }
}

/// Resolves `metric` for `period`, returning 0 when the metric or cell is
/// missing or holds no number.
pub fn lookup(rows: &[RawMetricRow], metric: &str, period: Period) -> f64 {
    lookup_column(rows, metric, period.column())
}

/// Same as [`lookup`] but for an arbitrary period column.
pub fn lookup_column(rows: &[RawMetricRow], metric: &str, column: &str) -> f64 {
    let Some(row) = rows.iter().find(|r| r.matches(metric)) else {
        debug!("Metric '{metric}' not found, using 0");
        return 0.0;
    };

    let value = row.values.get(column).map_or(0.0, |raw| parse_amount(raw));
    debug!("Resolved '{metric}' [{column}] = {value}");
    value
}

/// Parses a formatted amount such as `"$12,345.67"`.
///
/// Every character other than a digit, `-` or `.` is dropped and the longest
/// leading decimal number of the remainder is read. `"(500)"` reads as 500.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    leading_number(&cleaned).unwrap_or(0.0)
}

/// Reads the longest leading decimal number of `s`, with optional sign and
/// exponent. `None` when there are no digits or the result overflows.
pub fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
