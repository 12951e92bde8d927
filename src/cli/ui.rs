use crate::core::kpi::KpiUnit;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats a number with grouped thousands and at most two decimals.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    if value < 0.0 && grouped.chars().any(|c| c != '0' && c != '.' && c != ',') {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Renders a KPI value with its unit; `None` when the value is not finite.
pub fn format_value(value: f64, unit: KpiUnit) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let number = format_number(value);
    Some(match unit {
        KpiUnit::Currency => match number.strip_prefix('-') {
            Some(abs) => format!("-${abs}"),
            None => format!("${number}"),
        },
        _ => format!("{number}{}", unit.as_str()),
    })
}

/// Creates a bold, right-aligned cell for a KPI value. Non-finite values show "N/A".
pub fn value_cell(value: f64, unit: KpiUnit) -> Cell {
    format_value(value, unit).map_or_else(na_cell, |text| {
        Cell::new(text)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right)
    })
}

/// Creates a cell for a trend against the previous period, with color coding.
pub fn trend_cell(trend: Option<f64>, unit: KpiUnit) -> Cell {
    let Some(trend) = trend.filter(|t| t.is_finite()) else {
        return Cell::new("");
    };
    let text = format!(
        "{} {} vs prev. period",
        if trend >= 0.0 { "▲" } else { "▼" },
        format_value(trend.abs(), unit).unwrap_or_default()
    );
    let color = if trend >= 0.0 { Color::Green } else { Color::Red };
    Cell::new(text).fg(color)
}

/// Creates a dimmed cell for "N/A" values.
pub fn na_cell() -> Cell {
    Cell::new("N/A")
        .fg(Color::DarkGrey)
        .set_alignment(CellAlignment::Right)
}
