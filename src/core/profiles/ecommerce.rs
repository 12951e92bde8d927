//! KPIs for online retail.
use crate::core::inputs::AuxiliaryInputs;
use crate::core::kpi::{KpiRecord, KpiUnit, safe_div};
use crate::core::metrics::{self, Period, RawMetricRow, lookup};
use crate::core::profiles::InputField;

pub const TOTAL_ORDERS: &str = "totalOrders";
pub const WEBSITE_VISITORS: &str = "websiteVisitors";
pub const TOTAL_CARTS: &str = "totalCarts";
pub const ABANDONED_CARTS: &str = "abandonedCarts";
pub const PREV_TOTAL_ORDERS: &str = "prevTotalOrders";

pub const INPUTS: &[InputField] = &[
    InputField::new(TOTAL_ORDERS, "Total Orders", 1200.0),
    InputField::new(WEBSITE_VISITORS, "Website Visitors", 40000.0),
    InputField::new(TOTAL_CARTS, "Total Carts Created", 4000.0),
    InputField::new(ABANDONED_CARTS, "Abandoned Carts", 2800.0),
    InputField::new(PREV_TOTAL_ORDERS, "Total Orders (Previous Period)", 1000.0),
];

pub fn compute(rows: &[RawMetricRow], inputs: &AuxiliaryInputs) -> Vec<KpiRecord> {
    let revenue = lookup(rows, metrics::TOTAL_REVENUE, Period::Current);
    let prev_revenue = lookup(rows, metrics::TOTAL_REVENUE, Period::Previous);
    let cogs = lookup(rows, metrics::COGS, Period::Current);
    let marketing_cost = lookup(rows, metrics::MARKETING_EXPENSES, Period::Current);

    let total_orders = inputs.get(TOTAL_ORDERS);

    let aov = safe_div(revenue, total_orders);
    let prev_aov = safe_div(prev_revenue, inputs.get(PREV_TOTAL_ORDERS));
    let conversion_rate = safe_div(total_orders, inputs.get(WEBSITE_VISITORS)) * 100.0;
    let cart_abandonment_rate =
        safe_div(inputs.get(ABANDONED_CARTS), inputs.get(TOTAL_CARTS)) * 100.0;
    let gross_profit_margin = safe_div(revenue - cogs, revenue) * 100.0;
    let roas = safe_div(revenue, marketing_cost);

    vec![
        KpiRecord::new("aov", "Average Order Value", aov, KpiUnit::Currency)
            .with_trend(aov - prev_aov)
            .with_info("The average amount spent each time a customer places an order.")
            .with_benchmark("Increasing AOV boosts revenue without new traffic."),
        KpiRecord::new(
            "conversion",
            "Conversion Rate",
            conversion_rate,
            KpiUnit::Percent,
        )
        .with_info("The percentage of website visitors who make a purchase.")
        .with_benchmark("A good rate is typically 2-3%."),
        KpiRecord::new(
            "cart_abandon",
            "Cart Abandonment Rate",
            cart_abandonment_rate,
            KpiUnit::Percent,
        )
        .with_info(
            "The percentage of shoppers who add items to a cart but leave without completing the purchase.",
        )
        .with_benchmark("Average is ~70%. Aim lower."),
        KpiRecord::new(
            "gpm",
            "Gross Profit Margin",
            gross_profit_margin,
            KpiUnit::Percent,
        )
        .with_info("The percentage of revenue left after subtracting the cost of goods sold.")
        .with_benchmark("Varies by product type, but higher is better."),
        KpiRecord::new("roas", "Return on Ad Spend", roas, KpiUnit::Ratio)
            .with_info(
                "Measures the gross revenue generated for every dollar spent on advertising.",
            )
            .with_benchmark("A common target is 4:1."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profiles::tests::{assert_close, value_of};

    #[test]
    fn test_scenario() {
        let rows = vec![RawMetricRow::new("Total Revenue").with("current", "50000")];
        let inputs = AuxiliaryInputs::new()
            .with(TOTAL_ORDERS, 1000.0)
            .with(WEBSITE_VISITORS, 40000.0)
            .with(TOTAL_CARTS, 4000.0)
            .with(ABANDONED_CARTS, 2800.0);

        let kpis = compute(&rows, &inputs);

        assert_close(value_of(&kpis, "aov"), 50.0);
        assert_close(value_of(&kpis, "conversion"), 2.5);
        assert_close(value_of(&kpis, "cart_abandon"), 70.0);
        assert_eq!(value_of(&kpis, "roas"), 0.0);
    }

    #[test]
    fn test_aov_trend_and_roas() {
        let rows = vec![
            RawMetricRow::new("Total Revenue")
                .with("current", "$60,000")
                .with("previous", "$40,000"),
            RawMetricRow::new("Cost of Goods Sold (COGS)").with("current", "$36,000"),
            RawMetricRow::new("Marketing Expenses").with("current", "$15,000"),
        ];
        let inputs = AuxiliaryInputs::new()
            .with(TOTAL_ORDERS, 1200.0)
            .with(PREV_TOTAL_ORDERS, 1000.0);

        let kpis = compute(&rows, &inputs);
        let aov = kpis.iter().find(|k| k.id == "aov").unwrap();

        assert_close(aov.value, 50.0);
        assert_close(aov.trend.unwrap(), 10.0);
        assert_close(value_of(&kpis, "gpm"), 40.0);
        assert_close(value_of(&kpis, "roas"), 4.0);
    }

    #[test]
    fn test_missing_previous_orders_trend_is_full_aov() {
        let rows = vec![
            RawMetricRow::new("Total Revenue")
                .with("current", "1000")
                .with("previous", "800"),
        ];
        let inputs = AuxiliaryInputs::new().with(TOTAL_ORDERS, 10.0);

        let kpis = compute(&rows, &inputs);
        let aov = kpis.iter().find(|k| k.id == "aov").unwrap();

        assert_eq!(aov.trend, Some(100.0));
    }

    #[test]
    fn test_zero_inputs_degrade_to_zero() {
        let rows = vec![RawMetricRow::new("Total Revenue").with("current", "50000")];
        let kpis = compute(&rows, &AuxiliaryInputs::new());

        assert_eq!(value_of(&kpis, "aov"), 0.0);
        assert_eq!(value_of(&kpis, "conversion"), 0.0);
        assert_eq!(value_of(&kpis, "cart_abandon"), 0.0);
        assert!(kpis.iter().all(|k| k.value.is_finite()));
    }
}
