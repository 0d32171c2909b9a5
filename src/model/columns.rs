//! Comparison column definitions and lifecycle management
//!
//! A `ColumnSet` owns the ordered list of plan options being compared
//! side-by-side. Exactly one column is tagged as the baseline; every other
//! column's dollar/percent deltas are computed against it. New column ids
//! come from a monotonic per-set counter, never from the current array
//! contents, so ids stay unique across arbitrary add/remove sequences.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of extra comparison columns a user may append
/// beyond the fixed base pair.
pub const MAX_EXTRA_COLUMNS: u32 = 4;

/// Role of a column within a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnRole {
    /// The column all deltas are computed against
    Baseline,
    /// A column compared to the baseline
    Comparison,
}

/// One plan option in a side-by-side comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Stable unique key (`current`, `renewal`, `alternateN`, `optionN`)
    pub id: String,

    /// User-editable display name
    pub label: String,

    /// Baseline vs. comparison
    pub role: ColumnRole,

    /// Marketing flag; cosmetic only, never affects arithmetic
    #[serde(default)]
    pub is_marketing: bool,
}

impl Column {
    pub fn new(id: impl Into<String>, label: impl Into<String>, role: ColumnRole) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            role,
            is_marketing: false,
        }
    }

    pub fn is_baseline(&self) -> bool {
        self.role == ColumnRole::Baseline
    }
}

/// Errors from column lifecycle operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColumnError {
    #[error("unknown column id: {0}")]
    UnknownColumn(String),

    #[error("column {0} is the baseline and cannot be removed")]
    BaselineNotRemovable(String),

    #[error("column {0} is part of the fixed base set and cannot be removed")]
    BaseColumnNotRemovable(String),

    #[error("column limit reached ({0} extra columns)")]
    ColumnLimitReached(u32),
}

/// Ordered set of comparison columns with a baseline invariant
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSet {
    columns: Vec<Column>,

    /// Number of fixed base columns at the front of the list; these are
    /// never removable.
    base_count: usize,

    /// Prefix for appended column ids (`alternate` / `option`)
    extra_prefix: String,

    /// Monotonic counter for fresh appended ids; never reset, never derived
    /// from the current column list.
    next_extra_index: u32,
}

/// Raw persisted shape, validated before it becomes a `ColumnSet`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnSetRaw {
    columns: Vec<Column>,
    base_count: usize,
    extra_prefix: String,
    next_extra_index: u32,
}

impl ColumnSetRaw {
    /// Constructors uphold the invariants; persisted data has to prove
    /// them. Every calculator assumes a non-empty set with exactly one
    /// baseline, so a malformed file must fail here, not panic later.
    fn validate(self) -> Result<ColumnSet, String> {
        if self.columns.is_empty() {
            return Err("column set must contain at least one column".to_string());
        }
        let baselines = self.columns.iter().filter(|c| c.is_baseline()).count();
        if baselines != 1 {
            return Err(format!(
                "column set must contain exactly one baseline column (found {})",
                baselines
            ));
        }
        if self.base_count > self.columns.len() {
            return Err(format!(
                "base column count {} exceeds column count {}",
                self.base_count,
                self.columns.len()
            ));
        }
        Ok(ColumnSet {
            columns: self.columns,
            base_count: self.base_count,
            extra_prefix: self.extra_prefix,
            next_extra_index: self.next_extra_index,
        })
    }
}

impl<'de> Deserialize<'de> for ColumnSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = ColumnSetRaw::deserialize(deserializer)?;
        raw.validate().map_err(serde::de::Error::custom)
    }
}

impl ColumnSet {
    /// Base pair for the medical plan comparison: a fixed Current baseline
    /// and a fixed Renewal comparison column.
    pub fn medical() -> Self {
        Self {
            columns: vec![
                Column::new("current", "Current", ColumnRole::Baseline),
                Column::new("renewal", "Renewal", ColumnRole::Comparison),
            ],
            base_count: 2,
            extra_prefix: "alternate".to_string(),
            next_extra_index: 1,
        }
    }

    /// Base pair for the self-funded comparison. Option 1 carries the
    /// explicit baseline tag; the first-column-by-position convention is
    /// deprecated.
    pub fn self_funded() -> Self {
        Self {
            columns: vec![
                Column::new("option1", "Option 1", ColumnRole::Baseline),
                Column::new("option2", "Option 2", ColumnRole::Comparison),
            ],
            base_count: 1,
            extra_prefix: "option".to_string(),
            next_extra_index: 3,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The baseline column. The set always contains exactly one.
    pub fn baseline(&self) -> &Column {
        self.columns
            .iter()
            .find(|c| c.is_baseline())
            .unwrap_or(&self.columns[0])
    }

    /// Append a fresh comparison column; returns its id.
    pub fn append(&mut self) -> Result<String, ColumnError> {
        let extras = self.columns.len().saturating_sub(self.base_count) as u32;
        if extras >= MAX_EXTRA_COLUMNS {
            return Err(ColumnError::ColumnLimitReached(MAX_EXTRA_COLUMNS));
        }

        let index = self.next_extra_index;
        self.next_extra_index += 1;

        let id = format!("{}{}", self.extra_prefix, index);
        let label = match self.extra_prefix.as_str() {
            "option" => format!("Option {}", index),
            _ => format!("Alternate {}", index),
        };
        self.columns.push(Column::new(id.clone(), label, ColumnRole::Comparison));
        Ok(id)
    }

    /// Remove a comparison column. The baseline and the fixed base columns
    /// are never removable, so a baseline always exists for delta math.
    pub fn remove(&mut self, id: &str) -> Result<(), ColumnError> {
        let pos = self
            .columns
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ColumnError::UnknownColumn(id.to_string()))?;

        if self.columns[pos].is_baseline() {
            return Err(ColumnError::BaselineNotRemovable(id.to_string()));
        }
        if pos < self.base_count {
            return Err(ColumnError::BaseColumnNotRemovable(id.to_string()));
        }

        self.columns.remove(pos);
        Ok(())
    }

    /// Rename a column's display label
    pub fn set_label(&mut self, id: &str, label: impl Into<String>) -> Result<(), ColumnError> {
        let col = self
            .columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ColumnError::UnknownColumn(id.to_string()))?;
        col.label = label.into();
        Ok(())
    }

    /// Toggle the cosmetic marketing flag
    pub fn set_marketing(&mut self, id: &str, flag: bool) -> Result<(), ColumnError> {
        let col = self
            .columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ColumnError::UnknownColumn(id.to_string()))?;
        col.is_marketing = flag;
        Ok(())
    }
}
