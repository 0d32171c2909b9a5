//! Self-funded plan comparison view
//!
//! Owns the base headcounts plus the stop-loss input tables (specific
//! rates, aggregate rate, admin fees, claim liability, composite override)
//! and the marketing overlay rows. Totals recompute synchronously on every
//! mutation, same as the medical view.

use crate::booklet::{BenefitFields, SelfFundedPlanData};
use crate::calc::marketing::{CostBasis, MarketingMetric, MarketingRow};
use crate::calc::{self, StopLossInputs, StopLossTable};
use crate::model::{coerce_number, ColumnError, ColumnSet, EnrollmentTier, HeadcountTable};

#[derive(Debug, Clone)]
pub struct SelfFundedPlanView {
    headcounts: HeadcountTable,
    inputs: StopLossInputs,
    columns: ColumnSet,
    benefits: BenefitFields,
    marketing_rows: Vec<MarketingRow>,
    cost_basis: CostBasis,
    totals: StopLossTable,
}

impl SelfFundedPlanView {
    /// Fresh view with the Option 1 / Option 2 base pair
    pub fn new() -> Self {
        let mut view = Self {
            headcounts: HeadcountTable::new(),
            inputs: StopLossInputs::default(),
            columns: ColumnSet::self_funded(),
            benefits: BenefitFields::default(),
            marketing_rows: Vec::new(),
            cost_basis: CostBasis::AnnualMaxCost,
            totals: StopLossTable::new(),
        };
        view.recompute();
        view
    }

    /// Rebuild a view from persisted tab data, recomputing totals
    pub fn from_data(data: SelfFundedPlanData) -> Self {
        let mut view = Self {
            headcounts: data.headcounts,
            inputs: data.stop_loss,
            columns: data.columns,
            benefits: data.benefits,
            marketing_rows: data.marketing_rows,
            cost_basis: data.cost_basis,
            totals: StopLossTable::new(),
        };
        view.recompute();
        view
    }

    fn recompute(&mut self) {
        self.totals = calc::compute_stop_loss_totals(&self.headcounts, &self.inputs, &self.columns);
    }

    pub fn totals(&self) -> &StopLossTable {
        &self.totals
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn inputs(&self) -> &StopLossInputs {
        &self.inputs
    }

    pub fn marketing_rows(&self) -> &[MarketingRow] {
        &self.marketing_rows
    }

    pub fn headcounts(&self) -> &HeadcountTable {
        &self.headcounts
    }

    pub fn benefits(&self) -> &BenefitFields {
        &self.benefits
    }

    /// Cosmetic per-column benefit text fields; edits never touch the
    /// arithmetic, so no recompute happens here
    pub fn benefits_mut(&mut self) -> &mut BenefitFields {
        &mut self.benefits
    }

    pub fn set_headcount(&mut self, tier: EnrollmentTier, raw: &str) {
        self.headcounts.set_raw(tier, raw);
        self.recompute();
    }

    /// Set the composite override from raw form input. Blank or
    /// unparseable input clears the override, falling back to the summed
    /// tier headcount.
    pub fn set_composite_override(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.inputs.composite_override = if trimmed.is_empty() {
            None
        } else {
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => None,
            }
        };
        self.recompute();
    }

    pub fn set_specific_rate(&mut self, tier: EnrollmentTier, column_id: &str, raw: &str) {
        self.inputs.specific_rates.set_raw(tier, column_id, raw);
        self.recompute();
    }

    pub fn set_aggregate_rate(&mut self, column_id: &str, raw: &str) {
        self.inputs.aggregate_rates.set_raw(column_id, raw);
        self.recompute();
    }

    pub fn set_claim_liability(&mut self, tier: EnrollmentTier, column_id: &str, raw: &str) {
        self.inputs.claim_liability.set_raw(tier, column_id, raw);
        self.recompute();
    }

    /// Set the global admin/network/broker fees from raw form input
    pub fn set_admin_fees(&mut self, admin: &str, network: &str, broker: &str) {
        self.inputs.admin_costs.admin_fee = coerce_number(admin);
        self.inputs.admin_costs.network_fee = coerce_number(network);
        self.inputs.admin_costs.broker_fee = coerce_number(broker);
        self.recompute();
    }

    /// Append a fresh Option column; returns its id
    pub fn add_column(&mut self) -> Result<String, ColumnError> {
        let id = self.columns.append()?;
        self.recompute();
        Ok(id)
    }

    /// Remove a column and purge its entries from every keyed table
    pub fn remove_column(&mut self, column_id: &str) -> Result<(), ColumnError> {
        self.columns.remove(column_id)?;
        self.inputs.specific_rates.remove_column(column_id);
        self.inputs.aggregate_rates.remove_column(column_id);
        self.inputs.claim_liability.remove_column(column_id);
        self.benefits.remove_column(column_id);
        self.recompute();
        Ok(())
    }

    pub fn set_cost_basis(&mut self, basis: CostBasis) {
        self.cost_basis = basis;
    }

    pub fn push_marketing_row(&mut self, row: MarketingRow) {
        self.marketing_rows.push(row);
    }

    pub fn remove_marketing_row(&mut self, index: usize) {
        if index < self.marketing_rows.len() {
            self.marketing_rows.remove(index);
        }
    }

    /// Overlay metrics for the current marketing rows against the baseline
    /// column's cost figure. Read-only over the computed totals.
    pub fn marketing_metrics(&self) -> Vec<Option<MarketingMetric>> {
        calc::compute_overlay(
            &self.marketing_rows,
            &self.totals,
            &self.columns.baseline().id,
            self.cost_basis,
        )
    }

    pub fn snapshot(&self) -> SelfFundedPlanData {
        SelfFundedPlanData {
            benefits: self.benefits.clone(),
            headcounts: self.headcounts.clone(),
            stop_loss: self.inputs.clone(),
            marketing_rows: self.marketing_rows.clone(),
            cost_basis: self.cost_basis,
            calculated_totals: self.totals.clone(),
            columns: self.columns.clone(),
        }
    }
}

impl Default for SelfFundedPlanView {
    fn default() -> Self {
        Self::new()
    }
}
