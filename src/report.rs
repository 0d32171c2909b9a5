//! Text rendering of computed totals
//!
//! The only place rounding happens: currency at 2 decimals, percent at 1.
//! Baseline delta cells render as a dash, never as 0, so "is the baseline"
//! stays visually distinct from "tied with baseline".

use crate::calc::marketing::{MarketingMetric, MarketingRow};
use crate::calc::{StopLossTable, TotalsTable};
use crate::model::ColumnSet;

const CELL_WIDTH: usize = 16;

/// Format a monetary amount for display (2 decimal places)
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a percentage for display (1 decimal place)
pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

fn row(label: &str, cells: &[String]) -> String {
    let mut line = format!("{:<28}", label);
    for cell in cells {
        line.push_str(&format!("{:>width$}", cell, width = CELL_WIDTH));
    }
    line.push('\n');
    line
}

fn header(columns: &ColumnSet) -> String {
    let labels: Vec<String> = columns.columns().iter().map(|c| c.label.clone()).collect();
    let mut out = row("", &labels);
    out.push_str(&"-".repeat(28 + CELL_WIDTH * columns.len()));
    out.push('\n');
    out
}

/// Render the medical totals table under its column headers
pub fn render_medical(columns: &ColumnSet, totals: &TotalsTable) -> String {
    let mut out = header(columns);

    let cells = |f: &dyn Fn(&str) -> String| -> Vec<String> {
        columns.ids().map(f).collect()
    };

    out.push_str(&row(
        "Monthly Total",
        &cells(&|id| format_currency(totals.get(id).map_or(0.0, |t| t.monthly_total))),
    ));
    out.push_str(&row(
        "Annual Premium",
        &cells(&|id| format_currency(totals.get(id).map_or(0.0, |t| t.annual_premium))),
    ));
    out.push_str(&row(
        "$ Difference",
        &cells(&|id| {
            totals
                .get(id)
                .and_then(|t| t.dollar_difference)
                .map_or("—".to_string(), format_currency)
        }),
    ));
    out.push_str(&row(
        "% Difference",
        &cells(&|id| {
            totals
                .get(id)
                .and_then(|t| t.percent_difference)
                .map_or("—".to_string(), format_percent)
        }),
    ));
    out
}

/// Render the self-funded cost stack under its column headers
pub fn render_stop_loss(columns: &ColumnSet, totals: &StopLossTable) -> String {
    let mut out = header(columns);

    let money_row = |label: &str, get: &dyn Fn(&crate::calc::StopLossTotals) -> f64| -> String {
        let cells: Vec<String> = columns
            .ids()
            .map(|id| format_currency(totals.get(id).map_or(0.0, get)))
            .collect();
        row(label, &cells)
    };

    out.push_str(&money_row("Annual Specific Premium", &|t| t.annual_specific_premium));
    out.push_str(&money_row("Annual Aggregate Premium", &|t| t.annual_aggregate_premium));
    out.push_str(&money_row("Total Annual Premium", &|t| t.total_annual_premium));
    out.push_str(&money_row("Annual Admin Costs", &|t| t.annual_admin_costs));
    out.push_str(&money_row("Annual Fixed Cost", &|t| t.annual_fixed_cost));
    out.push_str(&money_row("Max Claim Liability", &|t| t.annual_max_claim_liability));
    out.push_str(&money_row("Expected Claim Liability", &|t| t.expected_claim_liability));
    out.push_str(&money_row("Annual Expected Cost", &|t| t.annual_expected_cost));
    out.push_str(&money_row("Annual Maximum Cost", &|t| t.annual_max_cost));

    let increase_dollar: Vec<String> = columns
        .ids()
        .map(|id| {
            totals
                .get(id)
                .and_then(|t| t.expected_increase_dollar)
                .map_or("-".to_string(), format_currency)
        })
        .collect();
    out.push_str(&row("Expected Increase ($)", &increase_dollar));

    let increase_pct: Vec<String> = columns
        .ids()
        .map(|id| {
            totals
                .get(id)
                .and_then(|t| t.expected_increase_percent)
                .map_or("-".to_string(), format_percent)
        })
        .collect();
    out.push_str(&row("Expected Increase (%)", &increase_pct));
    out
}

/// Render the marketing overlay rows with their computed metrics
pub fn render_marketing(rows: &[MarketingRow], metrics: &[Option<MarketingMetric>]) -> String {
    let mut out = format!(
        "{:<28}{:>w$}{:>w$}{:>w$}\n",
        "Carrier / Option",
        "Annual Cost",
        "$ Difference",
        "% Difference",
        w = CELL_WIDTH
    );
    out.push_str(&"-".repeat(28 + CELL_WIDTH * 3));
    out.push('\n');

    for (row_data, metric) in rows.iter().zip(metrics) {
        let (cost, dollar, pct) = match metric {
            Some(m) => (
                format_currency(m.annual_cost),
                format_currency(m.dollar_difference),
                format_percent(m.percent_difference),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };
        out.push_str(&format!(
            "{:<28}{:>w$}{:>w$}{:>w$}\n",
            row_data.label,
            cost,
            dollar,
            pct,
            w = CELL_WIDTH
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc;
    use crate::model::{EnrollmentTier, HeadcountTable, RateTable};

    #[test]
    fn test_format_rounding_at_display_only() {
        assert_eq!(format_currency(123_670.444444), "$123670.44");
        assert_eq!(format_currency(0.005), "$0.01");
        assert_eq!(format_percent(19.96), "20.0%");
    }

    #[test]
    fn test_baseline_renders_dash_not_zero() {
        let mut headcounts = HeadcountTable::new();
        headcounts.set(EnrollmentTier::Employee, 10.0);
        let mut rates = RateTable::new();
        rates.set(EnrollmentTier::Employee, "current", 100.0);
        rates.set(EnrollmentTier::Employee, "renewal", 100.0);
        let columns = ColumnSet::medical();

        let totals = calc::compute_totals(&headcounts, &rates, &columns);
        let text = render_medical(&columns, &totals);

        // Baseline shows the dash; the tied renewal column shows 0
        let diff_line = text
            .lines()
            .find(|l| l.starts_with("$ Difference"))
            .unwrap();
        assert!(diff_line.contains('—'));
        assert!(diff_line.contains("$0.00"));
    }
}
