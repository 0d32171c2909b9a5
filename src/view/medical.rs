//! Medical plan comparison view
//!
//! Owns the headcount, rate, and column tables for one comparison tab.
//! Every mutation recomputes the totals table synchronously; the math is
//! O(columns × tiers) and safe on every keystroke. The parent aggregator
//! pulls the current state on demand via `snapshot()`.

use crate::booklet::{BenefitFields, MedicalPlanData};
use crate::calc::{self, TotalsTable};
use crate::model::{ColumnError, ColumnSet, EnrollmentTier, HeadcountTable, RateTable};

#[derive(Debug, Clone)]
pub struct MedicalPlanView {
    headcounts: HeadcountTable,
    rates: RateTable,
    columns: ColumnSet,
    benefits: BenefitFields,
    totals: TotalsTable,
}

impl MedicalPlanView {
    /// Fresh view with the fixed Current/Renewal base pair
    pub fn new() -> Self {
        let mut view = Self {
            headcounts: HeadcountTable::new(),
            rates: RateTable::new(),
            columns: ColumnSet::medical(),
            benefits: BenefitFields::default(),
            totals: TotalsTable::new(),
        };
        view.recompute();
        view
    }

    /// Rebuild a view from persisted tab data, recomputing totals
    pub fn from_data(data: MedicalPlanData) -> Self {
        let mut view = Self {
            headcounts: data.financial_summary.headcounts,
            rates: data.financial_summary.rates,
            columns: data.columns,
            benefits: data.benefits,
            totals: TotalsTable::new(),
        };
        view.recompute();
        view
    }

    fn recompute(&mut self) {
        self.totals = calc::compute_totals(&self.headcounts, &self.rates, &self.columns);
    }

    pub fn totals(&self) -> &TotalsTable {
        &self.totals
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn headcounts(&self) -> &HeadcountTable {
        &self.headcounts
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn benefits(&self) -> &BenefitFields {
        &self.benefits
    }

    /// Set a tier's headcount from raw form input (blank reads as 0)
    pub fn set_headcount(&mut self, tier: EnrollmentTier, raw: &str) {
        self.headcounts.set_raw(tier, raw);
        self.recompute();
    }

    /// Set a monthly rate from raw form input
    pub fn set_rate(&mut self, tier: EnrollmentTier, column_id: &str, raw: &str) {
        self.rates.set_raw(tier, column_id, raw);
        self.recompute();
    }

    /// Cosmetic per-column benefit text fields; edits never touch the
    /// arithmetic, so no recompute happens here
    pub fn benefits_mut(&mut self) -> &mut BenefitFields {
        &mut self.benefits
    }

    pub fn set_column_label(&mut self, column_id: &str, label: &str) -> Result<(), ColumnError> {
        self.columns.set_label(column_id, label)
    }

    /// Append a fresh Alternate column; returns its id
    pub fn add_column(&mut self) -> Result<String, ColumnError> {
        let id = self.columns.append()?;
        self.recompute();
        Ok(id)
    }

    /// Remove a comparison column and purge its entries from every table
    /// keyed by column id. Totals are rebuilt, so no orphaned entries can
    /// survive.
    pub fn remove_column(&mut self, column_id: &str) -> Result<(), ColumnError> {
        self.columns.remove(column_id)?;
        self.rates.remove_column(column_id);
        self.benefits.remove_column(column_id);
        self.recompute();
        Ok(())
    }

    /// Current state in the persisted tab shape, pulled by the parent at
    /// save/export time
    pub fn snapshot(&self) -> MedicalPlanData {
        MedicalPlanData {
            benefits: self.benefits.clone(),
            financial_summary: crate::booklet::FinancialSummary {
                headcounts: self.headcounts.clone(),
                rates: self.rates.clone(),
            },
            calculated_totals: self.totals.clone(),
            columns: self.columns.clone(),
        }
    }
}

impl Default for MedicalPlanView {
    fn default() -> Self {
        Self::new()
    }
}
