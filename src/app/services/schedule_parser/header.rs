//! Header row detection and column label hints
//!
//! Row zero of a sheet export is treated as a header row when any of its
//! fields mentions a day or date. The decision is made once for the whole
//! document; headerless sheets parse with an empty hint set and rely on
//! content patterns and column positions instead.

use crate::app::models::SemanticRole;
use crate::constants::{keywords, synthetic_column_label};

/// Column label hints taken from a detected header row
#[derive(Debug, Clone, Default)]
pub struct HeaderHints {
    /// Original header labels in column order
    labels: Vec<String>,

    /// Lowercased labels for keyword matching
    lowered: Vec<String>,
}

impl HeaderHints {
    /// Build hints from row zero when it looks like a header row
    ///
    /// Returns `None` when no field mentions a day or date, in which case
    /// row zero is ordinary data.
    pub fn detect(first_row: &[String]) -> Option<Self> {
        let is_header = first_row.iter().any(|field| {
            let lowered = field.to_lowercase();
            keywords::DAY.iter().any(|keyword| lowered.contains(keyword))
        });

        if !is_header {
            return None;
        }

        Some(Self {
            labels: first_row.to_vec(),
            lowered: first_row.iter().map(|field| field.to_lowercase()).collect(),
        })
    }

    /// Hints for a sheet without a header row
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether any label hints are available
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of labelled columns
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether the label at a column suggests the given role
    ///
    /// A label suggests a role when its lowercased form contains any of the
    /// role's keywords as a substring. Columns beyond the header width never
    /// suggest anything.
    pub fn suggests(&self, column_index: usize, role: SemanticRole) -> bool {
        self.lowered.get(column_index).is_some_and(|label| {
            role.header_keywords()
                .iter()
                .any(|keyword| label.contains(keyword))
        })
    }

    /// Extras label for a column
    ///
    /// Returns the original header label when one exists, or a synthetic
    /// `Column_N` name for unlabelled columns.
    pub fn extras_label(&self, column_index: usize) -> String {
        match self.labels.get(column_index) {
            Some(label) if !label.is_empty() => label.clone(),
            _ => synthetic_column_label(column_index),
        }
    }
}
