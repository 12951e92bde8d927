//! Liquidity, leverage and profitability KPIs for any business.
use crate::core::kpi::{KpiRecord, KpiUnit, safe_div};
use crate::core::metrics::{self, Period, RawMetricRow, lookup};

pub fn compute(rows: &[RawMetricRow]) -> Vec<KpiRecord> {
    // Balance sheets rarely split out current items, so totals stand in.
    let current_assets = lookup(rows, metrics::TOTAL_ASSETS, Period::Current);
    let current_liabilities = lookup(rows, metrics::TOTAL_LIABILITIES, Period::Current);
    let cash = lookup(rows, metrics::CASH, Period::Current);
    let receivables = lookup(rows, metrics::ACCOUNTS_RECEIVABLE, Period::Current);
    let total_liabilities = current_liabilities;
    let equity = lookup(rows, metrics::SHAREHOLDER_EQUITY, Period::Current);
    let revenue = lookup(rows, metrics::TOTAL_REVENUE, Period::Current);
    let net_income = lookup(rows, metrics::NET_INCOME, Period::Current);

    let current_ratio = safe_div(current_assets, current_liabilities);
    let quick_ratio = safe_div(cash + receivables, current_liabilities);
    let debt_to_equity = safe_div(total_liabilities, equity);
    let working_capital = current_assets - current_liabilities;
    let net_profit_margin = safe_div(net_income, revenue) * 100.0;

    vec![
        KpiRecord::new("current_ratio", "Current Ratio", current_ratio, KpiUnit::Ratio)
            .with_info("Measures ability to pay short-term obligations.")
            .with_benchmark("A ratio between 1.5 and 2 is generally considered healthy."),
        KpiRecord::new(
            "quick_ratio",
            "Quick Ratio (Acid Test)",
            quick_ratio,
            KpiUnit::Ratio,
        )
        .with_info("A stricter liquidity test, excluding inventory.")
        .with_benchmark("A ratio of 1:1 or higher is desirable."),
        KpiRecord::new(
            "debt_equity",
            "Debt-to-Equity Ratio",
            debt_to_equity,
            KpiUnit::Ratio,
        )
        .with_info("Indicates how much debt a company is using to finance its assets.")
        .with_benchmark("Varies by industry, but lower is often less risky."),
        KpiRecord::new(
            "working_capital",
            "Working Capital",
            working_capital,
            KpiUnit::Currency,
        )
        .with_info("The capital available for day-to-day operations.")
        .with_benchmark("Positive working capital is essential for operational liquidity."),
        KpiRecord::new(
            "net_profit_margin",
            "Net Profit Margin",
            net_profit_margin,
            KpiUnit::Percent,
        )
        .with_info("The ultimate measure of profitability after all expenses.")
        .with_benchmark("A margin >10% is generally considered good."),
    ]
}
