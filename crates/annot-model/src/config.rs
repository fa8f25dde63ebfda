//! Persisted configuration types.
//!
//! The document is a flat JSON object: column name to annotation record.
//! Optional fields are skipped when absent so the stored record carries
//! exactly the fields relevant to its type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{ColumnType, Unit};

/// Annotation record for a single table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Semantic type of the column. Always present.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Reference country name; only for time and phone columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Time zone within the selected country; only for time columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Dialing code, seeded from the country but free-form after edit;
    /// only for phone columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_code: Option<String>,
    /// Measurement unit; only for weights and distance columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl ColumnConfig {
    /// Create a record with the given type and no extra fields.
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column_type,
            country: None,
            time_zone: None,
            phone_code: None,
            unit: None,
        }
    }

    /// Drop every region/unit field, leaving only the type.
    pub fn clear_extras(&mut self) {
        self.country = None;
        self.time_zone = None;
        self.phone_code = None;
        self.unit = None;
    }

    /// Returns true if no region/unit field is set.
    pub fn extras_empty(&self) -> bool {
        self.country.is_none()
            && self.time_zone.is_none()
            && self.phone_code.is_none()
            && self.unit.is_none()
    }
}

impl Default for ColumnConfig {
    /// Newly seen columns default to the string type.
    fn default() -> Self {
        Self::new(ColumnType::String)
    }
}

/// The full persisted document: column name to [`ColumnConfig`].
///
/// Serialized transparently as the top-level JSON object. Saved wholesale,
/// never merged; key order is irrelevant to consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    pub columns: BTreeMap<String, ColumnConfig>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, column: &str) -> Option<&ColumnConfig> {
        self.columns.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, config: ColumnConfig) {
        self.columns.insert(column.into(), config);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ColumnConfig)> {
        self.columns.iter()
    }
}

impl FromIterator<(String, ColumnConfig)> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = (String, ColumnConfig)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
