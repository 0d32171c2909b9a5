//! Tier premium calculator for the medical plan comparison
//!
//! Pure function of its inputs: per-tier headcounts times per-column monthly
//! rates, summed to a monthly total, annualized by 12, with signed
//! dollar/percent deltas against the baseline column. Safe to call on every
//! keystroke; accumulation stays in full precision.

use crate::calc::delta;
use crate::model::{ColumnSet, EnrollmentTier, HeadcountTable, RateTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Derived figures for one comparison column.
///
/// The baseline column carries `None` for both deltas. That is "not
/// applicable", rendered as an em dash, and is distinct from a computed 0
/// ("tied with baseline").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnTotals {
    pub monthly_total: f64,
    pub annual_premium: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dollar_difference: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_difference: Option<f64>,
}

/// Totals keyed by column id, fully recomputed on every input change
pub type TotalsTable = BTreeMap<String, ColumnTotals>;

/// Monthly premium for a single column: Σ headcount(t) × rate(t, c)
fn monthly_total(headcounts: &HeadcountTable, rates: &RateTable, column_id: &str) -> f64 {
    EnrollmentTier::ALL
        .iter()
        .map(|&tier| headcounts.get(tier) * rates.get(tier, column_id))
        .sum()
}

/// Compute the totals table for a medical plan comparison.
pub fn compute_totals(
    headcounts: &HeadcountTable,
    rates: &RateTable,
    columns: &ColumnSet,
) -> TotalsTable {
    let baseline_id = columns.baseline().id.clone();
    let baseline_annual = monthly_total(headcounts, rates, &baseline_id) * 12.0;

    let mut totals = TotalsTable::new();
    for column in columns.columns() {
        let monthly = monthly_total(headcounts, rates, &column.id);
        let annual = monthly * 12.0;

        let (dollar, percent) = if column.id == baseline_id {
            (None, None)
        } else {
            (
                Some(delta::dollar_delta(annual, baseline_annual)),
                Some(delta::percent_delta(annual, baseline_annual)),
            )
        };

        totals.insert(
            column.id.clone(),
            ColumnTotals {
                monthly_total: monthly,
                annual_premium: annual,
                dollar_difference: dollar,
                percent_difference: percent,
            },
        );
    }
    totals
}
