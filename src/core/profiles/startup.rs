//! KPIs for venture-backed SaaS startups.
use crate::core::inputs::AuxiliaryInputs;
use crate::core::kpi::{KpiRecord, KpiUnit, safe_div};
use crate::core::metrics::{self, Period, RawMetricRow, lookup};
use crate::core::profiles::InputField;
use tracing::debug;

pub const NEW_CUSTOMERS: &str = "newCustomers";
pub const CHURNED_CUSTOMERS: &str = "churnedCustomers";
pub const TOTAL_CUSTOMERS_START: &str = "totalCustomersStart";
pub const AVG_MONTHLY_BURN: &str = "avgMonthlyBurn";

pub const INPUTS: &[InputField] = &[
    InputField::new(NEW_CUSTOMERS, "New Customers", 50.0),
    InputField::new(CHURNED_CUSTOMERS, "Churned Customers", 5.0),
    InputField::new(
        TOTAL_CUSTOMERS_START,
        "Total Customers (Start of Period)",
        500.0,
    ),
    InputField::new(AVG_MONTHLY_BURN, "Average Monthly Burn", 50000.0),
];

pub fn compute(rows: &[RawMetricRow], inputs: &AuxiliaryInputs) -> Vec<KpiRecord> {
    let revenue = lookup(rows, metrics::TOTAL_REVENUE, Period::Current);
    let prev_revenue = lookup(rows, metrics::TOTAL_REVENUE, Period::Previous);
    let cogs = lookup(rows, metrics::COGS, Period::Current);
    let marketing_cost = lookup(rows, metrics::MARKETING_EXPENSES, Period::Current);
    let sales_cost = lookup(rows, metrics::SALES_EXPENSES, Period::Current);
    let net_income = lookup(rows, metrics::NET_INCOME, Period::Current);
    let cash = lookup(rows, metrics::CASH, Period::Current);

    let new_customers = inputs.get(NEW_CUSTOMERS);
    let churned_customers = inputs.get(CHURNED_CUSTOMERS);
    let customers_start = inputs.get(TOTAL_CUSTOMERS_START);
    let monthly_burn = inputs.get(AVG_MONTHLY_BURN);

    let mrr = revenue / 12.0;
    let arr = revenue;

    let gross_profit_margin = safe_div(revenue - cogs, revenue) * 100.0;
    let net_profit_margin = safe_div(net_income, revenue) * 100.0;

    let customers_end = customers_start + new_customers - churned_customers;
    let churn_rate = safe_div(churned_customers, customers_start) * 100.0;
    let cac = safe_div(marketing_cost + sales_cost, new_customers);
    let avg_customers = (customers_start + customers_end) / 2.0;
    let revenue_per_customer = safe_div(mrr, avg_customers);
    // Churn is a percentage, so LTV divides by its fractional form.
    let ltv = safe_div(revenue_per_customer, churn_rate / 100.0);
    let ltv_to_cac = safe_div(ltv, cac);

    let growth_rate = safe_div(revenue - prev_revenue, prev_revenue) * 100.0;
    let rule_of_40 = growth_rate + net_profit_margin;
    let cash_runway = safe_div(cash, monthly_burn);

    debug!(mrr, ltv, growth_rate, net_profit_margin, "Derived startup metrics");

    vec![
        KpiRecord::new("arr", "Annual Recurring Revenue", arr, KpiUnit::Currency)
            .with_trend(arr - prev_revenue)
            .with_info("The predictable revenue a company can expect to receive every year.")
            .with_benchmark("Directly reflects annual growth."),
        KpiRecord::new(
            "gpm",
            "Gross Profit Margin",
            gross_profit_margin,
            KpiUnit::Percent,
        )
        .with_info("Profitability after the cost of services. High margin is crucial for SaaS.")
        .with_benchmark("Aim for >75%."),
        KpiRecord::new("ltv_cac", "LTV to CAC Ratio", ltv_to_cac, KpiUnit::Ratio)
            .with_info("Measures the ROI of customer acquisition efforts.")
            .with_benchmark("A healthy ratio is 3:1 or higher."),
        KpiRecord::new("churn", "Customer Churn Rate", churn_rate, KpiUnit::Percent)
            .with_trend(-churn_rate)
            .with_info("The percentage of customers who cancel their subscriptions.")
            .with_benchmark("Aim for < 5-7% annually."),
        KpiRecord::new("rule_40", "Rule of 40", rule_of_40, KpiUnit::Percent)
            .with_info("A key SaaS health metric. (Growth Rate + Profit Margin).")
            .with_benchmark("Healthy SaaS companies should exceed 40%."),
        KpiRecord::new("runway", "Cash Runway", cash_runway, KpiUnit::Months)
            .with_info("How many months the company can operate before running out of money.")
            .with_benchmark("Typically aim for 12-18 months post-funding."),
        KpiRecord::new("cac", "Customer Acquisition Cost", cac, KpiUnit::Currency)
            .with_info("The cost of winning a new customer. Lower is better.")
            .with_benchmark("Varies by industry, but should be recovered quickly."),
    ]
}
