//! Booklet documents, the in-memory CRUD store, and persistence

mod data;
pub mod loader;
mod store;

pub use data::{
    BenefitFields, Booklet, ColumnText, FinancialSummary, MedicalPlanData, SelfFundedPlanData,
    TabData,
};
pub use store::{BookletError, BookletStore, BookletUpdate};
