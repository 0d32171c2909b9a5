//! Booklet document shapes matching the persisted JSON format
//!
//! Only the financial summary and the column set feed the calculators; the
//! benefit text fields are cosmetic and carried through unchanged. Totals
//! are persisted for downstream consumers (PDF export) but are always
//! recomputed from the raw inputs on load, never trusted from disk.

use crate::calc::marketing::{CostBasis, MarketingRow};
use crate::calc::{self, StopLossInputs, StopLossTable, TotalsTable};
use crate::model::{ColumnSet, HeadcountTable, RateTable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-column free text, keyed by column id
pub type ColumnText = BTreeMap<String, String>;

/// Cosmetic per-column benefit description fields. Never enter the
/// arithmetic; purged on column removal like every other keyed table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenefitFields {
    pub plan_details: ColumnText,
    pub deductibles: ColumnText,
    pub out_of_pocket: ColumnText,
    pub coinsurance_values: ColumnText,
    pub primary_care: ColumnText,
    pub specialist: ColumnText,
    pub inpatient_hospitalization: ColumnText,
    pub outpatient_surgery: ColumnText,
    pub emergency_room: ColumnText,
    pub urgent_care: ColumnText,
    pub retail_prescription: ColumnText,
}

impl BenefitFields {
    fn maps_mut(&mut self) -> [&mut ColumnText; 11] {
        [
            &mut self.plan_details,
            &mut self.deductibles,
            &mut self.out_of_pocket,
            &mut self.coinsurance_values,
            &mut self.primary_care,
            &mut self.specialist,
            &mut self.inpatient_hospitalization,
            &mut self.outpatient_surgery,
            &mut self.emergency_room,
            &mut self.urgent_care,
            &mut self.retail_prescription,
        ]
    }

    fn maps(&self) -> [&ColumnText; 11] {
        [
            &self.plan_details,
            &self.deductibles,
            &self.out_of_pocket,
            &self.coinsurance_values,
            &self.primary_care,
            &self.specialist,
            &self.inpatient_hospitalization,
            &self.outpatient_surgery,
            &self.emergency_room,
            &self.urgent_care,
            &self.retail_prescription,
        ]
    }

    /// Purge every field entry keyed by a removed column id
    pub fn remove_column(&mut self, column_id: &str) {
        for map in self.maps_mut() {
            map.remove(column_id);
        }
    }

    /// True if any field still holds an entry for this column id
    pub fn has_column(&self, column_id: &str) -> bool {
        self.maps().iter().any(|m| m.contains_key(column_id))
    }
}

/// Headcounts and rates for a medical plan tab
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialSummary {
    pub headcounts: HeadcountTable,
    pub rates: RateTable,
}

/// Persisted payload of one medical plan comparison tab
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalPlanData {
    #[serde(flatten)]
    pub benefits: BenefitFields,
    pub financial_summary: FinancialSummary,
    #[serde(default)]
    pub calculated_totals: TotalsTable,
    pub columns: ColumnSet,
}

impl Default for MedicalPlanData {
    fn default() -> Self {
        Self {
            benefits: BenefitFields::default(),
            financial_summary: FinancialSummary::default(),
            calculated_totals: TotalsTable::new(),
            columns: ColumnSet::medical(),
        }
    }
}

impl MedicalPlanData {
    /// Rebuild the totals table from the raw inputs
    pub fn recompute(&mut self) {
        self.calculated_totals = calc::compute_totals(
            &self.financial_summary.headcounts,
            &self.financial_summary.rates,
            &self.columns,
        );
    }
}

/// Persisted payload of one self-funded comparison tab
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfFundedPlanData {
    #[serde(flatten)]
    pub benefits: BenefitFields,
    pub headcounts: HeadcountTable,
    pub stop_loss: StopLossInputs,
    #[serde(default)]
    pub marketing_rows: Vec<MarketingRow>,
    pub cost_basis: CostBasis,
    #[serde(default)]
    pub calculated_totals: StopLossTable,
    pub columns: ColumnSet,
}

impl Default for SelfFundedPlanData {
    fn default() -> Self {
        Self {
            benefits: BenefitFields::default(),
            headcounts: HeadcountTable::default(),
            stop_loss: StopLossInputs::default(),
            marketing_rows: Vec::new(),
            cost_basis: CostBasis::AnnualMaxCost,
            calculated_totals: StopLossTable::new(),
            columns: ColumnSet::self_funded(),
        }
    }
}

impl SelfFundedPlanData {
    pub fn recompute(&mut self) {
        self.calculated_totals =
            calc::compute_stop_loss_totals(&self.headcounts, &self.stop_loss, &self.columns);
    }
}

/// One plan comparison tab within a booklet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TabData {
    Medical(MedicalPlanData),
    SelfFunded(SelfFundedPlanData),
}

impl TabData {
    /// Rebuild the tab's totals from its raw inputs
    pub fn recompute(&mut self) {
        match self {
            TabData::Medical(data) => data.recompute(),
            TabData::SelfFunded(data) => data.recompute(),
        }
    }
}

/// A complete booklet document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booklet {
    pub id: String,

    pub organization_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,

    /// Tab payloads keyed by tab id
    #[serde(default)]
    pub tabs: BTreeMap<String, TabData>,
}

impl Booklet {
    pub fn new(id: impl Into<String>, organization_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            organization_name: organization_name.into(),
            effective_date: None,
            tabs: BTreeMap::new(),
        }
    }

    /// Rebuild every tab's totals from raw inputs (called after load and
    /// after any tab replacement).
    pub fn recompute_all(&mut self) {
        for tab in self.tabs.values_mut() {
            tab.recompute();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnrollmentTier;

    #[test]
    fn test_benefit_fields_cleanup() {
        let mut fields = BenefitFields::default();
        fields.deductibles.insert("alternate1".to_string(), "$500".to_string());
        fields.urgent_care.insert("alternate1".to_string(), "$75 copay".to_string());
        fields.deductibles.insert("current".to_string(), "$1000".to_string());

        fields.remove_column("alternate1");
        assert!(!fields.has_column("alternate1"));
        assert!(fields.has_column("current"));
    }

    #[test]
    fn test_totals_recomputed_not_trusted() {
        let mut data = MedicalPlanData::default();
        data.financial_summary.headcounts.set(EnrollmentTier::Employee, 10.0);
        data.financial_summary.rates.set(EnrollmentTier::Employee, "current", 100.0);

        // Stale totals from a prior session
        data.calculated_totals.insert(
            "current".to_string(),
            crate::calc::ColumnTotals {
                monthly_total: 999.0,
                annual_premium: 999.0,
                dollar_difference: None,
                percent_difference: None,
            },
        );

        data.recompute();
        assert_eq!(data.calculated_totals["current"].monthly_total, 1_000.0);
        assert_eq!(data.calculated_totals["current"].annual_premium, 12_000.0);
    }

    #[test]
    fn test_booklet_json_round_trip() {
        let mut booklet = Booklet::new("bk-1", "Acme Manufacturing");
        booklet.effective_date = NaiveDate::from_ymd_opt(2026, 1, 1);

        let mut tab = MedicalPlanData::default();
        tab.financial_summary.headcounts.set(EnrollmentTier::Employee, 12.0);
        tab.recompute();
        booklet.tabs.insert("medical-uhc".to_string(), TabData::Medical(tab));

        let json = serde_json::to_string(&booklet).unwrap();
        let back: Booklet = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "bk-1");
        assert_eq!(back.organization_name, "Acme Manufacturing");
        assert!(matches!(back.tabs["medical-uhc"], TabData::Medical(_)));
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let mut data = MedicalPlanData::default();
        data.financial_summary.headcounts.set(EnrollmentTier::Employee, 10.0);
        data.financial_summary.rates.set(EnrollmentTier::Employee, "renewal", 120.0);
        data.recompute();

        let json = serde_json::to_value(&data).unwrap();
        let renewal = &json["calculatedTotals"]["renewal"];
        assert!(renewal["monthlyTotal"].is_number());
        assert!(renewal["annualPremium"].is_number());
        assert!(renewal["dollarDifference"].is_number());
        // Baseline omits the delta fields entirely
        assert!(json["calculatedTotals"]["current"].get("dollarDifference").is_none());
    }
}
