//! Load and save booklet documents, and import carrier rate sheets

use super::data::Booklet;
use super::store::BookletError;
use crate::model::{EnrollmentTier, RateTable};
use csv::Reader;
use std::fs;
use std::path::Path;

/// Raw CSV row of a carrier rate sheet
#[derive(Debug, serde::Deserialize)]
struct RateSheetRow {
    #[serde(rename = "Tier")]
    tier: String,
    #[serde(rename = "Column")]
    column: String,
    #[serde(rename = "Rate")]
    rate: f64,
}

/// Load a booklet from a JSON file. Totals are rebuilt from the raw inputs;
/// whatever `calculatedTotals` the file carried is discarded.
pub fn load_booklet<P: AsRef<Path>>(path: P) -> Result<Booklet, BookletError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| BookletError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut booklet: Booklet = serde_json::from_str(&text)?;
    booklet.recompute_all();
    log::info!(
        "loaded booklet {} ({} tabs) from {}",
        booklet.id,
        booklet.tabs.len(),
        path.display()
    );
    Ok(booklet)
}

/// Write a booklet to a JSON file
pub fn save_booklet<P: AsRef<Path>>(booklet: &Booklet, path: P) -> Result<(), BookletError> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(booklet)?;
    fs::write(path, text).map_err(|source| BookletError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("saved booklet {} to {}", booklet.id, path.display());
    Ok(())
}

/// Load a carrier rate sheet (Tier,Column,Rate rows) into a rate table.
/// Column ids are taken as-is; unknown tiers are an error.
pub fn load_rate_sheet<P: AsRef<Path>>(path: P) -> Result<RateTable, BookletError> {
    let mut reader = Reader::from_path(path)?;
    let mut rates = RateTable::new();

    for result in reader.deserialize() {
        let row: RateSheetRow = result?;
        let tier = EnrollmentTier::from_key(&row.tier)
            .ok_or_else(|| BookletError::UnknownTier(row.tier.clone()))?;
        rates.set(tier, &row.column, row.rate);
    }

    Ok(rates)
}

/// Load a rate sheet from any reader (e.g., a string buffer)
pub fn load_rate_sheet_from_reader<R: std::io::Read>(reader: R) -> Result<RateTable, BookletError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut rates = RateTable::new();

    for result in csv_reader.deserialize() {
        let row: RateSheetRow = result?;
        let tier = EnrollmentTier::from_key(&row.tier)
            .ok_or_else(|| BookletError::UnknownTier(row.tier.clone()))?;
        rates.set(tier, &row.column, row.rate);
    }

    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booklet::data::{MedicalPlanData, TabData};

    #[test]
    fn test_rate_sheet_from_reader() {
        let sheet = "\
Tier,Column,Rate
employee,current,100.50
employee,renewal,120.00
family,renewal,410.25
";
        let rates = load_rate_sheet_from_reader(sheet.as_bytes()).unwrap();
        assert_eq!(rates.get(EnrollmentTier::Employee, "current"), 100.5);
        assert_eq!(rates.get(EnrollmentTier::Family, "renewal"), 410.25);
        assert_eq!(rates.get(EnrollmentTier::EmployeeSpouse, "current"), 0.0);
    }

    #[test]
    fn test_rate_sheet_unknown_tier() {
        let sheet = "\
Tier,Column,Rate
retiree,current,100.50
";
        let err = load_rate_sheet_from_reader(sheet.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "unknown enrollment tier: retiree");
    }

    #[test]
    fn test_malformed_column_set_is_an_error_not_a_panic() {
        let dir = std::env::temp_dir().join("booklet_engine_loader_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("malformed.json");

        // An empty column set would break every calculator's baseline
        // lookup; loading must surface a message, never panic.
        let json = r#"{
            "id": "bk-bad",
            "organizationName": "Acme",
            "tabs": {
                "medical": {
                    "type": "medical",
                    "financialSummary": {"headcounts": {}, "rates": {}},
                    "columns": {
                        "columns": [],
                        "baseCount": 0,
                        "extraPrefix": "alternate",
                        "nextExtraIndex": 1
                    }
                }
            }
        }"#;
        fs::write(&path, json).unwrap();

        let err = load_booklet(&path).unwrap_err();
        assert!(err.to_string().contains("at least one column"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_and_reload_recomputes() {
        let dir = std::env::temp_dir().join("booklet_engine_loader_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("booklet.json");

        let mut booklet = Booklet::new("bk-7", "Acme");
        let mut tab = MedicalPlanData::default();
        tab.financial_summary.headcounts.set(EnrollmentTier::Employee, 10.0);
        tab.financial_summary.rates.set(EnrollmentTier::Employee, "current", 100.0);
        // Deliberately stale totals
        booklet.tabs.insert("medical".to_string(), TabData::Medical(tab));

        save_booklet(&booklet, &path).unwrap();
        let loaded = load_booklet(&path).unwrap();

        match &loaded.tabs["medical"] {
            TabData::Medical(data) => {
                assert_eq!(data.calculated_totals["current"].annual_premium, 12_000.0);
            }
            _ => panic!("expected medical tab"),
        }

        fs::remove_file(&path).ok();
    }
}
