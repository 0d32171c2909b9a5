//! Summarize a booklet JSON file
//!
//! Loads a booklet, recomputes every tab's totals from the raw inputs,
//! prints the comparison tables, and optionally writes the totals to CSV.
//! A carrier rate sheet can be applied to one medical tab before
//! recomputation.

use anyhow::{bail, Context, Result};
use booklet_engine::booklet::{loader, TabData};
use booklet_engine::view::{MedicalPlanView, SelfFundedPlanView};
use booklet_engine::report;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "summarize_booklet", about = "Recompute and print booklet totals")]
struct Args {
    /// Path to the booklet JSON file
    booklet: PathBuf,

    /// Apply this CSV rate sheet (Tier,Column,Rate) before recomputing
    #[arg(long)]
    rate_sheet: Option<PathBuf>,

    /// Tab id the rate sheet applies to (must be a medical tab)
    #[arg(long, requires = "rate_sheet")]
    rate_tab: Option<String>,

    /// Write all columns' totals to this CSV file
    #[arg(long)]
    csv_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut booklet = loader::load_booklet(&args.booklet)
        .with_context(|| format!("loading {}", args.booklet.display()))?;

    if let Some(sheet_path) = &args.rate_sheet {
        let tab_id = args.rate_tab.as_deref().unwrap_or("medical");
        let rates = loader::load_rate_sheet(sheet_path)
            .with_context(|| format!("loading rate sheet {}", sheet_path.display()))?;
        match booklet.tabs.get_mut(tab_id) {
            Some(TabData::Medical(data)) => {
                log::info!("applying rate sheet to tab {}", tab_id);
                data.financial_summary.rates = rates;
                data.recompute();
            }
            Some(TabData::SelfFunded(_)) => {
                bail!("tab {} is self-funded; rate sheets apply to medical tabs", tab_id)
            }
            None => bail!("booklet has no tab {}", tab_id),
        }
    }

    println!("Booklet: {} ({})", booklet.organization_name, booklet.id);
    if let Some(date) = booklet.effective_date {
        println!("Effective: {}", date);
    }
    println!();

    for (tab_id, tab) in &booklet.tabs {
        println!("[{}]", tab_id);
        match tab {
            TabData::Medical(data) => {
                let view = MedicalPlanView::from_data(data.clone());
                println!("{}", report::render_medical(view.columns(), view.totals()));
            }
            TabData::SelfFunded(data) => {
                let view = SelfFundedPlanView::from_data(data.clone());
                println!("{}", report::render_stop_loss(view.columns(), view.totals()));
                if !view.marketing_rows().is_empty() {
                    println!(
                        "{}",
                        report::render_marketing(view.marketing_rows(), &view.marketing_metrics())
                    );
                }
            }
        }
    }

    if let Some(csv_path) = &args.csv_out {
        write_totals_csv(&booklet, csv_path)?;
        println!("Totals written to: {}", csv_path.display());
    }

    Ok(())
}

/// Flatten every tab's totals to one CSV row per column
fn write_totals_csv(booklet: &booklet_engine::Booklet, path: &PathBuf) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record([
        "Tab",
        "Column",
        "MonthlyTotal",
        "AnnualPremium",
        "AnnualExpectedCost",
        "AnnualMaxCost",
        "DollarDifference",
        "PercentDifference",
    ])?;

    for (tab_id, tab) in &booklet.tabs {
        match tab {
            TabData::Medical(data) => {
                for (column_id, t) in &data.calculated_totals {
                    let record = [
                        tab_id.clone(),
                        column_id.clone(),
                        format!("{:.2}", t.monthly_total),
                        format!("{:.2}", t.annual_premium),
                        String::new(),
                        String::new(),
                        t.dollar_difference.map_or(String::new(), |v| format!("{:.2}", v)),
                        t.percent_difference.map_or(String::new(), |v| format!("{:.1}", v)),
                    ];
                    writer.write_record(&record)?;
                }
            }
            TabData::SelfFunded(data) => {
                for (column_id, t) in &data.calculated_totals {
                    let record = [
                        tab_id.clone(),
                        column_id.clone(),
                        String::new(),
                        format!("{:.2}", t.total_annual_premium),
                        format!("{:.2}", t.annual_expected_cost),
                        format!("{:.2}", t.annual_max_cost),
                        t.expected_increase_dollar
                            .map_or(String::new(), |v| format!("{:.2}", v)),
                        t.expected_increase_percent
                            .map_or(String::new(), |v| format!("{:.1}", v)),
                    ];
                    writer.write_record(&record)?;
                }
            }
        }
    }

    writer.flush()?;
    Ok(())
}
