//! Data model for plan comparisons: tiers, columns, and rate tables

mod columns;
mod tables;
mod tier;

pub use columns::{Column, ColumnError, ColumnRole, ColumnSet, MAX_EXTRA_COLUMNS};
pub use tables::{coerce_number, AdminCosts, ColumnRates, HeadcountTable, RateTable};
pub use tier::EnrollmentTier;
