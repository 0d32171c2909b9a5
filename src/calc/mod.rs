//! Premium calculators
//!
//! Every calculator here is a pure, synchronous function of its inputs:
//! no I/O, no shared state, never panics for finite or blank input.

pub mod delta;
pub mod marketing;
pub mod medical;
pub mod stop_loss;

pub use marketing::{compute_overlay, CostBasis, CostSource, MarketingMetric, MarketingRow};
pub use medical::{compute_totals, ColumnTotals, TotalsTable};
pub use stop_loss::{
    compute_stop_loss_totals, StopLossInputs, StopLossTable, StopLossTotals, EXPECTED_CLAIM_FACTOR,
};
