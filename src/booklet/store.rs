//! In-memory booklet store implementing the CRUD collaborator contract
//!
//! Mirrors the persistence API surface the editor talks to:
//! create / get / update / delete / duplicate / update_tab_data. Errors
//! carry a human-readable message; callers surface them inline and do not
//! retry automatically.

use super::data::{Booklet, TabData};
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;

/// Errors from booklet store and persistence operations
#[derive(Debug, Error)]
pub enum BookletError {
    #[error("booklet not found: {0}")]
    NotFound(String),

    #[error("booklet {booklet_id} has no tab {tab_id}")]
    UnknownTab { booklet_id: String, tab_id: String },

    #[error("unknown enrollment tier: {0}")]
    UnknownTier(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid booklet JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid rate sheet: {0}")]
    Csv(#[from] csv::Error),
}

/// Field updates applied by `update_booklet`; `None` leaves a field as-is
#[derive(Debug, Clone, Default)]
pub struct BookletUpdate {
    pub organization_name: Option<String>,
    pub effective_date: Option<Option<NaiveDate>>,
}

/// In-memory booklet store with monotonic id assignment
#[derive(Debug, Default)]
pub struct BookletStore {
    booklets: HashMap<String, Booklet>,
    next_id: u64,
}

impl BookletStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> String {
        self.next_id += 1;
        format!("bk-{}", self.next_id)
    }

    pub fn len(&self) -> usize {
        self.booklets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booklets.is_empty()
    }

    /// Create a booklet; returns the assigned id
    pub fn create_booklet(&mut self, organization_name: impl Into<String>) -> String {
        let id = self.fresh_id();
        let booklet = Booklet::new(id.clone(), organization_name);
        log::info!("created booklet {}", id);
        self.booklets.insert(id.clone(), booklet);
        id
    }

    pub fn get_booklet(&self, id: &str) -> Result<&Booklet, BookletError> {
        self.booklets
            .get(id)
            .ok_or_else(|| BookletError::NotFound(id.to_string()))
    }

    pub fn get_booklet_mut(&mut self, id: &str) -> Result<&mut Booklet, BookletError> {
        self.booklets
            .get_mut(id)
            .ok_or_else(|| BookletError::NotFound(id.to_string()))
    }

    /// Apply field updates to a booklet's header
    pub fn update_booklet(&mut self, id: &str, updates: BookletUpdate) -> Result<(), BookletError> {
        let booklet = self.get_booklet_mut(id)?;
        if let Some(name) = updates.organization_name {
            booklet.organization_name = name;
        }
        if let Some(date) = updates.effective_date {
            booklet.effective_date = date;
        }
        log::debug!("updated booklet {}", id);
        Ok(())
    }

    pub fn delete_booklet(&mut self, id: &str) -> Result<(), BookletError> {
        self.booklets
            .remove(id)
            .map(|_| log::info!("deleted booklet {}", id))
            .ok_or_else(|| BookletError::NotFound(id.to_string()))
    }

    /// Clone an existing booklet under a fresh id; returns the new id
    pub fn duplicate_booklet(&mut self, id: &str) -> Result<String, BookletError> {
        let mut copy = self.get_booklet(id)?.clone();
        let new_id = self.fresh_id();
        copy.id = new_id.clone();
        copy.organization_name = format!("{} (copy)", copy.organization_name);
        log::info!("duplicated booklet {} as {}", id, new_id);
        self.booklets.insert(new_id.clone(), copy);
        Ok(new_id)
    }

    /// Replace one tab's payload, recomputing its totals from the raw
    /// inputs. Inserts the tab if it does not exist yet.
    pub fn update_tab_data(
        &mut self,
        booklet_id: &str,
        tab_id: &str,
        mut data: TabData,
    ) -> Result<(), BookletError> {
        let booklet = self.get_booklet_mut(booklet_id)?;
        data.recompute();
        booklet.tabs.insert(tab_id.to_string(), data);
        log::debug!("updated tab {} on booklet {}", tab_id, booklet_id);
        Ok(())
    }

    pub fn get_tab_data(&self, booklet_id: &str, tab_id: &str) -> Result<&TabData, BookletError> {
        let booklet = self.get_booklet(booklet_id)?;
        booklet.tabs.get(tab_id).ok_or_else(|| BookletError::UnknownTab {
            booklet_id: booklet_id.to_string(),
            tab_id: tab_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booklet::data::MedicalPlanData;
    use crate::model::EnrollmentTier;

    #[test]
    fn test_create_and_get() {
        let mut store = BookletStore::new();
        let id = store.create_booklet("Acme");
        assert_eq!(id, "bk-1");
        assert_eq!(store.get_booklet(&id).unwrap().organization_name, "Acme");
    }

    #[test]
    fn test_missing_booklet_message() {
        let store = BookletStore::new();
        let err = store.get_booklet("bk-99").unwrap_err();
        assert_eq!(err.to_string(), "booklet not found: bk-99");
    }

    #[test]
    fn test_update_booklet_fields() {
        let mut store = BookletStore::new();
        let id = store.create_booklet("Acme");
        store
            .update_booklet(
                &id,
                BookletUpdate {
                    organization_name: Some("Acme Manufacturing".to_string()),
                    effective_date: Some(NaiveDate::from_ymd_opt(2026, 1, 1)),
                },
            )
            .unwrap();

        let booklet = store.get_booklet(&id).unwrap();
        assert_eq!(booklet.organization_name, "Acme Manufacturing");
        assert!(booklet.effective_date.is_some());
    }

    #[test]
    fn test_duplicate_gets_fresh_id() {
        let mut store = BookletStore::new();
        let id = store.create_booklet("Acme");
        let copy_id = store.duplicate_booklet(&id).unwrap();
        assert_ne!(id, copy_id);
        assert_eq!(
            store.get_booklet(&copy_id).unwrap().organization_name,
            "Acme (copy)"
        );

        // Deleting the original leaves the copy intact
        store.delete_booklet(&id).unwrap();
        assert!(store.get_booklet(&copy_id).is_ok());
    }

    #[test]
    fn test_update_tab_recomputes_totals() {
        let mut store = BookletStore::new();
        let id = store.create_booklet("Acme");

        let mut tab = MedicalPlanData::default();
        tab.financial_summary.headcounts.set(EnrollmentTier::Employee, 10.0);
        tab.financial_summary.rates.set(EnrollmentTier::Employee, "current", 100.0);
        store
            .update_tab_data(&id, "medical", TabData::Medical(tab))
            .unwrap();

        match store.get_tab_data(&id, "medical").unwrap() {
            TabData::Medical(data) => {
                assert_eq!(data.calculated_totals["current"].monthly_total, 1_000.0);
            }
            _ => panic!("expected medical tab"),
        }

        let err = store.get_tab_data(&id, "dental").unwrap_err();
        assert!(err.to_string().contains("no tab dental"));
    }
}
