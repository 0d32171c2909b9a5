//! Headcount, rate, and fee tables
//!
//! All monetary math stays in f64 at full precision; rounding happens only
//! at the display layer. Raw form input is coerced permissively: blank or
//! non-numeric entries read as zero, never as an error, so the calculators
//! can run on every keystroke without a validation pass.

use super::tier::EnrollmentTier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coerce a raw form field to a number. Blank and non-numeric input both
/// map to 0.0; this mirrors "treat blank as zero" and must not be tightened.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(|v| if v.is_finite() { v } else { 0.0 }).unwrap_or(0.0)
}

/// Per-tier subscriber counts, entered once per booklet and shared across
/// all comparison columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadcountTable {
    counts: BTreeMap<EnrollmentTier, f64>,
}

impl HeadcountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tier's count from raw form input
    pub fn set_raw(&mut self, tier: EnrollmentTier, raw: &str) {
        self.set(tier, coerce_number(raw));
    }

    /// Counts are non-negative; negative input clamps to 0, the same
    /// policy applied to every monetary rate.
    pub fn set(&mut self, tier: EnrollmentTier, count: f64) {
        self.counts.insert(tier, count.max(0.0));
    }

    /// Count for a tier; missing reads as 0
    pub fn get(&self, tier: EnrollmentTier) -> f64 {
        self.counts.get(&tier).copied().unwrap_or(0.0)
    }

    /// Sum across all tiers
    pub fn total(&self) -> f64 {
        EnrollmentTier::ALL.iter().map(|&t| self.get(t)).sum()
    }
}

/// Per-tier, per-column monthly monetary rates. Missing entries read as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<EnrollmentTier, BTreeMap<String, f64>>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a rate from raw form input
    pub fn set_raw(&mut self, tier: EnrollmentTier, column_id: &str, raw: &str) {
        self.set(tier, column_id, coerce_number(raw));
    }

    /// Rates are non-negative; negative input clamps to 0, matching the
    /// headcount policy.
    pub fn set(&mut self, tier: EnrollmentTier, column_id: &str, rate: f64) {
        self.rates
            .entry(tier)
            .or_default()
            .insert(column_id.to_string(), rate.max(0.0));
    }

    /// Rate for a tier/column; missing reads as 0
    pub fn get(&self, tier: EnrollmentTier, column_id: &str) -> f64 {
        self.rates
            .get(&tier)
            .and_then(|m| m.get(column_id))
            .copied()
            .unwrap_or(0.0)
    }

    /// Purge every entry keyed by a removed column id
    pub fn remove_column(&mut self, column_id: &str) {
        for per_column in self.rates.values_mut() {
            per_column.remove(column_id);
        }
    }

    /// True if any tier still holds an entry for this column id
    pub fn has_column(&self, column_id: &str) -> bool {
        self.rates.values().any(|m| m.contains_key(column_id))
    }
}

/// Per-column single rates (e.g., the aggregate stop-loss accommodation
/// rate, quoted per composite member per month).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnRates {
    rates: BTreeMap<String, f64>,
}

impl ColumnRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, column_id: &str, raw: &str) {
        self.set(column_id, coerce_number(raw));
    }

    /// Rates are non-negative; negative input clamps to 0
    pub fn set(&mut self, column_id: &str, rate: f64) {
        self.rates.insert(column_id.to_string(), rate.max(0.0));
    }

    pub fn get(&self, column_id: &str) -> f64 {
        self.rates.get(column_id).copied().unwrap_or(0.0)
    }

    pub fn remove_column(&mut self, column_id: &str) {
        self.rates.remove(column_id);
    }

    pub fn has_column(&self, column_id: &str) -> bool {
        self.rates.contains_key(column_id)
    }
}

/// Fixed per-member-per-month administrative fees for the self-funded plan.
///
/// The fees are global across all comparison columns: a single negotiated
/// admin/network/broker fee applies regardless of which stop-loss option is
/// chosen.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCosts {
    pub admin_fee: f64,
    pub network_fee: f64,
    pub broker_fee: f64,
}

impl AdminCosts {
    pub fn new(admin_fee: f64, network_fee: f64, broker_fee: f64) -> Self {
        Self {
            admin_fee,
            network_fee,
            broker_fee,
        }
    }

    /// Combined per-member-per-month fee
    pub fn per_member_monthly(&self) -> f64 {
        self.admin_fee + self.network_fee + self.broker_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_permissive() {
        assert_eq!(coerce_number("12.5"), 12.5);
        assert_eq!(coerce_number("  42 "), 42.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert_eq!(coerce_number("n/a"), 0.0);
        assert_eq!(coerce_number("12,000"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
    }

    #[test]
    fn test_missing_entries_read_as_zero() {
        let heads = HeadcountTable::new();
        assert_eq!(heads.get(EnrollmentTier::Family), 0.0);
        assert_eq!(heads.total(), 0.0);

        let rates = RateTable::new();
        assert_eq!(rates.get(EnrollmentTier::Employee, "current"), 0.0);
    }

    #[test]
    fn test_headcount_total() {
        let mut heads = HeadcountTable::new();
        heads.set_raw(EnrollmentTier::Employee, "74");
        heads.set_raw(EnrollmentTier::EmployeeSpouse, "8");
        heads.set_raw(EnrollmentTier::EmployeeChildren, "10");
        heads.set_raw(EnrollmentTier::Family, "15");
        assert_eq!(heads.total(), 107.0);
    }

    #[test]
    fn test_rate_table_column_cleanup() {
        let mut rates = RateTable::new();
        rates.set(EnrollmentTier::Employee, "current", 100.0);
        rates.set(EnrollmentTier::Family, "alternate1", 250.0);
        assert!(rates.has_column("alternate1"));

        rates.remove_column("alternate1");
        assert!(!rates.has_column("alternate1"));
        assert_eq!(rates.get(EnrollmentTier::Family, "alternate1"), 0.0);
        assert_eq!(rates.get(EnrollmentTier::Employee, "current"), 100.0);
    }

    #[test]
    fn test_negative_input_clamps_to_zero_everywhere() {
        let mut heads = HeadcountTable::new();
        heads.set_raw(EnrollmentTier::Employee, "-5");
        assert_eq!(heads.get(EnrollmentTier::Employee), 0.0);

        let mut rates = RateTable::new();
        rates.set_raw(EnrollmentTier::Employee, "current", "-100");
        assert_eq!(rates.get(EnrollmentTier::Employee, "current"), 0.0);

        let mut aggregate = ColumnRates::new();
        aggregate.set_raw("option1", "-12.25");
        assert_eq!(aggregate.get("option1"), 0.0);
    }

    #[test]
    fn test_admin_costs_pmpm() {
        let costs = AdminCosts::new(45.81, 15.5, 35.0);
        assert!((costs.per_member_monthly() - 96.31).abs() < 1e-10);
    }
}
