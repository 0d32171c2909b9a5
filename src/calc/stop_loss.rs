//! Self-funded stop-loss and annual plan-cost calculator
//!
//! Layers specific stop-loss premium, aggregate stop-loss premium, fixed
//! administrative costs, and expected/maximum claim liability into an
//! expected-vs-maximum annual plan cost per column, with increase deltas
//! against the baseline column.

use crate::calc::delta;
use crate::model::{AdminCosts, ColumnRates, ColumnSet, EnrollmentTier, HeadcountTable, RateTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expected claim liability as a fraction of the contractual maximum.
/// Fixed in the source product; the single point of change if it ever
/// becomes a quoted parameter.
pub const EXPECTED_CLAIM_FACTOR: f64 = 0.8;

/// Full cost stack for one self-funded comparison column.
///
/// As in the medical variant, the baseline column carries `None` for the
/// increase fields; it is rendered as a dash, not as 0%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLossTotals {
    pub annual_specific_premium: f64,
    pub annual_aggregate_premium: f64,
    pub total_annual_premium: f64,
    pub annual_admin_costs: f64,
    pub annual_fixed_cost: f64,
    pub annual_max_claim_liability: f64,
    pub expected_claim_liability: f64,
    pub annual_expected_cost: f64,
    pub annual_max_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_increase_dollar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_increase_percent: Option<f64>,
}

/// Stop-loss totals keyed by column id
pub type StopLossTable = BTreeMap<String, StopLossTotals>;

/// Inputs to the stop-loss calculator beyond the shared headcounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StopLossInputs {
    /// Per-tier, per-column specific stop-loss rates (monthly)
    pub specific_rates: RateTable,

    /// Per-column aggregate accommodation rate (per composite member,
    /// monthly)
    pub aggregate_rates: ColumnRates,

    /// Global per-member-per-month fixed fees
    pub admin_costs: AdminCosts,

    /// Per-tier, per-column maximum monthly claim liability
    pub claim_liability: RateTable,

    /// When present, replaces the summed tier headcount for aggregate
    /// premium and admin cost purposes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_override: Option<f64>,
}

impl StopLossInputs {
    /// Composite member count: the override when present, else the sum of
    /// all tier headcounts.
    pub fn composite_members(&self, headcounts: &HeadcountTable) -> f64 {
        self.composite_override.unwrap_or_else(|| headcounts.total())
    }
}

fn annual_tier_sum(headcounts: &HeadcountTable, rates: &RateTable, column_id: &str) -> f64 {
    let monthly: f64 = EnrollmentTier::ALL
        .iter()
        .map(|&tier| headcounts.get(tier) * rates.get(tier, column_id))
        .sum();
    monthly * 12.0
}

fn column_totals(
    headcounts: &HeadcountTable,
    inputs: &StopLossInputs,
    column_id: &str,
    composite: f64,
) -> StopLossTotals {
    let annual_specific_premium = annual_tier_sum(headcounts, &inputs.specific_rates, column_id);
    let annual_aggregate_premium = inputs.aggregate_rates.get(column_id) * composite * 12.0;
    let total_annual_premium = annual_specific_premium + annual_aggregate_premium;

    // Fee values are global; the annual figure is still reported per column
    let annual_admin_costs = inputs.admin_costs.per_member_monthly() * composite * 12.0;
    let annual_fixed_cost = total_annual_premium + annual_admin_costs;

    let annual_max_claim_liability = annual_tier_sum(headcounts, &inputs.claim_liability, column_id);
    let expected_claim_liability = annual_max_claim_liability * EXPECTED_CLAIM_FACTOR;

    StopLossTotals {
        annual_specific_premium,
        annual_aggregate_premium,
        total_annual_premium,
        annual_admin_costs,
        annual_fixed_cost,
        annual_max_claim_liability,
        expected_claim_liability,
        annual_expected_cost: annual_fixed_cost + expected_claim_liability,
        annual_max_cost: annual_fixed_cost + annual_max_claim_liability,
        expected_increase_dollar: None,
        expected_increase_percent: None,
    }
}

/// Compute the stop-loss cost stack for every column.
pub fn compute_stop_loss_totals(
    headcounts: &HeadcountTable,
    inputs: &StopLossInputs,
    columns: &ColumnSet,
) -> StopLossTable {
    let composite = inputs.composite_members(headcounts);
    let baseline_id = columns.baseline().id.clone();
    let baseline_expected =
        column_totals(headcounts, inputs, &baseline_id, composite).annual_expected_cost;

    let mut table = StopLossTable::new();
    for column in columns.columns() {
        let mut totals = column_totals(headcounts, inputs, &column.id, composite);
        if column.id != baseline_id {
            totals.expected_increase_dollar =
                Some(delta::dollar_delta(totals.annual_expected_cost, baseline_expected));
            totals.expected_increase_percent =
                Some(delta::percent_delta(totals.annual_expected_cost, baseline_expected));
        }
        table.insert(column.id.clone(), totals);
    }
    table
}
