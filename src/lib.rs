//! Booklet Engine - Premium comparison calculators for benefit booklets
//!
//! This library provides:
//! - Tier premium calculators for multi-plan medical comparisons
//! - Self-funded stop-loss and annual plan-cost calculations
//! - Marketing comparison overlays against a baseline column
//! - Column lifecycle management with guaranteed cleanup
//! - Booklet document CRUD, JSON persistence, and rate sheet import

pub mod booklet;
pub mod calc;
pub mod config;
pub mod dispatch;
pub mod model;
pub mod report;
pub mod view;

// Re-export commonly used types
pub use booklet::{Booklet, BookletError, BookletStore, TabData};
pub use calc::{compute_stop_loss_totals, compute_totals, StopLossTable, TotalsTable};
pub use config::{BookletConfig, SharedConfig};
pub use model::{Column, ColumnSet, EnrollmentTier, HeadcountTable, RateTable};
pub use view::{MedicalPlanView, SelfFundedPlanView};
