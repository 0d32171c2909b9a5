//! Booklet Engine CLI
//!
//! Demo run: builds a medical comparison and a self-funded comparison,
//! prints the rendered tables, and writes the booklet JSON.

use anyhow::Result;
use booklet_engine::booklet::{loader, BookletUpdate, TabData};
use booklet_engine::calc::marketing::{CostSource, MarketingRow};
use booklet_engine::{report, BookletStore, EnrollmentTier, MedicalPlanView, SelfFundedPlanView};
use chrono::NaiveDate;

fn main() -> Result<()> {
    env_logger::init();

    println!("Booklet Engine v0.1.0");
    println!("=====================\n");

    // Medical comparison: 10 employee-only subscribers, current vs renewal
    let mut medical = MedicalPlanView::new();
    medical.set_headcount(EnrollmentTier::Employee, "10");
    medical.set_rate(EnrollmentTier::Employee, "current", "100");
    medical.set_rate(EnrollmentTier::Employee, "renewal", "120");

    println!("Medical Plan Comparison");
    println!("{}", report::render_medical(medical.columns(), medical.totals()));

    // Self-funded comparison: the 107-member census
    let mut self_funded = SelfFundedPlanView::new();
    self_funded.set_headcount(EnrollmentTier::Employee, "74");
    self_funded.set_headcount(EnrollmentTier::EmployeeSpouse, "8");
    self_funded.set_headcount(EnrollmentTier::EmployeeChildren, "10");
    self_funded.set_headcount(EnrollmentTier::Family, "15");
    self_funded.set_admin_fees("45.81", "15.5", "35");
    self_funded.set_specific_rate(EnrollmentTier::Employee, "option1", "55");
    self_funded.set_specific_rate(EnrollmentTier::Family, "option1", "140");
    self_funded.set_specific_rate(EnrollmentTier::Employee, "option2", "61");
    self_funded.set_specific_rate(EnrollmentTier::Family, "option2", "152");
    self_funded.set_aggregate_rate("option1", "12.25");
    self_funded.set_aggregate_rate("option2", "13.10");
    self_funded.set_claim_liability(EnrollmentTier::Employee, "option1", "900");
    self_funded.set_claim_liability(EnrollmentTier::Employee, "option2", "940");

    println!("Self-Funded Plan Cost Comparison");
    println!(
        "{}",
        report::render_stop_loss(self_funded.columns(), self_funded.totals())
    );

    // Marketing overlay against the Option 1 maximum cost
    self_funded.push_marketing_row(MarketingRow {
        label: "Option 2 (referenced)".to_string(),
        source: Some(CostSource::ColumnRef("option2".to_string())),
    });
    self_funded.push_marketing_row(MarketingRow {
        label: "Fully insured quote".to_string(),
        source: Some(CostSource::Manual(1_450_000.0)),
    });
    self_funded.push_marketing_row(MarketingRow {
        label: "Pending carrier".to_string(),
        source: None,
    });

    println!("Marketing Comparison");
    println!(
        "{}",
        report::render_marketing(self_funded.marketing_rows(), &self_funded.marketing_metrics())
    );

    // Assemble a booklet and persist it
    let mut store = BookletStore::new();
    let id = store.create_booklet("Acme Manufacturing");
    store.update_booklet(
        &id,
        BookletUpdate {
            organization_name: None,
            effective_date: Some(NaiveDate::from_ymd_opt(2026, 1, 1)),
        },
    )?;
    store.update_tab_data(&id, "medical-uhc", TabData::Medical(medical.snapshot()))?;
    store.update_tab_data(&id, "self-funded", TabData::SelfFunded(self_funded.snapshot()))?;

    let json_path = "booklet_output.json";
    loader::save_booklet(store.get_booklet(&id)?, json_path)?;
    println!("Booklet written to: {}", json_path);

    Ok(())
}
