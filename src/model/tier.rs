//! Enrollment tier definitions

use serde::{Deserialize, Serialize};

/// An enrollment category used as the unit of headcount and rate.
///
/// The set is fixed and ordered; every headcount, rate, and claim liability
/// table is keyed by these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnrollmentTier {
    /// Employee only
    Employee,
    /// Employee + spouse
    EmployeeSpouse,
    /// Employee + child(ren)
    EmployeeChildren,
    /// Employee + family
    Family,
}

impl EnrollmentTier {
    /// All tiers in display order
    pub const ALL: [EnrollmentTier; 4] = [
        EnrollmentTier::Employee,
        EnrollmentTier::EmployeeSpouse,
        EnrollmentTier::EmployeeChildren,
        EnrollmentTier::Family,
    ];

    /// Display label matching the booklet form rows
    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentTier::Employee => "Employee",
            EnrollmentTier::EmployeeSpouse => "Employee + Spouse",
            EnrollmentTier::EmployeeChildren => "Employee + Child(ren)",
            EnrollmentTier::Family => "Family",
        }
    }

    /// Key used in persisted booklet JSON
    pub fn key(&self) -> &'static str {
        match self {
            EnrollmentTier::Employee => "employee",
            EnrollmentTier::EmployeeSpouse => "employeeSpouse",
            EnrollmentTier::EmployeeChildren => "employeeChildren",
            EnrollmentTier::Family => "family",
        }
    }

    /// Parse a persisted key back to a tier
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order_is_stable() {
        assert_eq!(EnrollmentTier::ALL[0], EnrollmentTier::Employee);
        assert_eq!(EnrollmentTier::ALL[3], EnrollmentTier::Family);
    }

    #[test]
    fn test_key_round_trip() {
        for tier in EnrollmentTier::ALL {
            assert_eq!(EnrollmentTier::from_key(tier.key()), Some(tier));
        }
        assert_eq!(EnrollmentTier::from_key("spouseOnly"), None);
    }

    #[test]
    fn test_serde_key_matches_json_shape() {
        let json = serde_json::to_string(&EnrollmentTier::EmployeeSpouse).unwrap();
        assert_eq!(json, "\"employeeSpouse\"");
    }
}
