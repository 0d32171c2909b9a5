//! Marketing comparison overlay
//!
//! A thin read-only consumer of the stop-loss output: freeform rows, each
//! carrying either a manually entered annual cost or a reference to one of
//! the stop-loss columns, compared against the baseline column's cost
//! figures. Rows with neither a manual cost nor a resolvable reference
//! contribute no computed metric.

use crate::calc::delta;
use crate::calc::stop_loss::StopLossTable;
use serde::{Deserialize, Serialize};

/// Which baseline figure the overlay compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostBasis {
    /// Compare against the baseline's annual maximum plan cost
    AnnualMaxCost,
    /// Compare against the baseline's total annual stop-loss premium
    TotalAnnualPremium,
}

/// Source of a comparison row's annual cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostSource {
    /// Manually entered annual cost
    Manual(f64),
    /// Reference to a stop-loss column by id
    ColumnRef(String),
}

/// One freeform comparison row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingRow {
    /// Carrier or option name, display only
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<CostSource>,
}

/// Computed metric for a row that resolved to a cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingMetric {
    pub annual_cost: f64,
    pub dollar_difference: f64,
    pub percent_difference: f64,
}

/// Resolve a row's annual cost against the stop-loss table
fn resolve_cost(row: &MarketingRow, totals: &StopLossTable, basis: CostBasis) -> Option<f64> {
    match row.source.as_ref()? {
        CostSource::Manual(cost) => Some(*cost),
        CostSource::ColumnRef(id) => totals.get(id).map(|t| match basis {
            CostBasis::AnnualMaxCost => t.annual_max_cost,
            CostBasis::TotalAnnualPremium => t.total_annual_premium,
        }),
    }
}

/// Compute overlay metrics for each row against the baseline column's cost.
///
/// The returned vector is positional: `None` for rows that could not be
/// resolved (rendered "-"). A baseline id absent from the totals table
/// makes every row unresolvable; "no baseline" must not read as a
/// zero-cost baseline. Never mutates the stop-loss state it reads.
pub fn compute_overlay(
    rows: &[MarketingRow],
    totals: &StopLossTable,
    baseline_id: &str,
    basis: CostBasis,
) -> Vec<Option<MarketingMetric>> {
    let base = match totals.get(baseline_id) {
        Some(t) => match basis {
            CostBasis::AnnualMaxCost => t.annual_max_cost,
            CostBasis::TotalAnnualPremium => t.total_annual_premium,
        },
        None => return vec![None; rows.len()],
    };

    rows.iter()
        .map(|row| {
            resolve_cost(row, totals, basis).map(|cost| MarketingMetric {
                annual_cost: cost,
                dollar_difference: delta::dollar_delta(cost, base),
                percent_difference: delta::percent_delta(cost, base),
            })
        })
        .collect()
}
