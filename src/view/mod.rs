//! Plan comparison views: owned tables, coercing setters, synchronous
//! recompute, and pull-based snapshots

mod medical;
mod self_funded;

pub use medical::MedicalPlanView;
pub use self_funded::SelfFundedPlanView;
