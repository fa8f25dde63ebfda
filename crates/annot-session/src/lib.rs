//! Session state for the column annotation editor.
//!
//! An [`AnnotationSession`] owns one [`ColumnConfig`] per column name for
//! the duration of an interactive editing pass. Every mutator enforces the
//! field-presence invariant: a record carries exactly the extra fields its
//! current type requires, and switching types drops whatever no longer
//! applies. The session is the only mutable state; an abandoned session
//! persists nothing.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use annot_model::{
    AnnotError, ColumnConfig, ColumnType, ConfigDocument, FieldRequirements, Result, Unit,
    country, default_country,
};

/// In-memory editing state for one annotation session.
#[derive(Debug, Clone, Default)]
pub struct AnnotationSession {
    columns: BTreeMap<String, ColumnConfig>,
    /// Columns whose phone code was set explicitly rather than seeded from
    /// the country reference. Seeded codes follow the country selection;
    /// edited codes stick.
    edited_codes: BTreeSet<String>,
}

/// One line of the review summary, in column iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSummary {
    pub column: String,
    pub column_type: ColumnType,
    /// Country name, for time and phone columns.
    pub country: Option<String>,
    /// Time zone (time) or dialing code (phone).
    pub detail: Option<String>,
    /// Unit name, for weights and distance columns.
    pub unit: Option<Unit>,
}

impl AnnotationSession {
    /// Start an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session from a previously stored document, so repeated
    /// editing passes preserve prior selections.
    pub fn from_document(document: ConfigDocument) -> Self {
        // Stored codes were confirmed by an earlier session; treat them as
        // edits so a later country change does not overwrite them.
        let edited_codes = document
            .columns
            .iter()
            .filter(|(_, config)| config.phone_code.is_some())
            .map(|(column, _)| column.clone())
            .collect();
        Self {
            columns: document.columns,
            edited_codes,
        }
    }

    /// Number of columns tracked by the session.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Current record for a column, if it has been seen.
    pub fn get(&self, column: &str) -> Option<&ColumnConfig> {
        self.columns.get(column)
    }

    /// Record for a column, created with the default type on first sight.
    pub fn ensure_column(&mut self, column: &str) -> &ColumnConfig {
        self.columns
            .entry(column.to_string())
            .or_insert_with(ColumnConfig::default)
    }

    /// Set a column's semantic type.
    ///
    /// Clears every extra field the new type does not require. Types that
    /// take a country default it to the reference default when unset, and
    /// phone columns are seeded with that country's dialing code when no
    /// code is present.
    pub fn set_type(&mut self, column: &str, new_type: ColumnType) {
        let config = self
            .columns
            .entry(column.to_string())
            .or_insert_with(ColumnConfig::default);
        config.column_type = new_type;
        match new_type.requirements() {
            FieldRequirements::None => {
                config.clear_extras();
                self.edited_codes.remove(column);
            }
            FieldRequirements::CountryTimeZone => {
                config.phone_code = None;
                config.unit = None;
                self.edited_codes.remove(column);
                if config.country.is_none() {
                    config.country = Some(default_country().name.to_string());
                }
            }
            FieldRequirements::CountryPhoneCode => {
                config.time_zone = None;
                config.unit = None;
                if config.country.is_none() {
                    config.country = Some(default_country().name.to_string());
                }
                if config.phone_code.is_none() {
                    config.phone_code = reference_code(config.country.as_deref());
                }
            }
            FieldRequirements::Unit(kind) => {
                config.country = None;
                config.time_zone = None;
                config.phone_code = None;
                self.edited_codes.remove(column);
                if config.unit.is_some_and(|unit| unit.kind() != kind) {
                    config.unit = None;
                }
            }
        }
        debug!(column, %new_type, "type set");
    }

    /// Select the country for a time or phone column.
    ///
    /// The name must be a key of the country reference. A phone column's
    /// seeded dialing code follows the country; an explicitly edited code
    /// is left alone. An existing time zone is likewise kept, the next
    /// prompt pass offers the new country's zone list.
    pub fn set_country(&mut self, column: &str, name: &str) -> Result<()> {
        if country(name).is_none() {
            return Err(AnnotError::UnknownCountry(name.to_string()));
        }
        let edited = self.edited_codes.contains(column);
        let config = self.require_column(column, ColumnType::takes_country, "a country")?;
        config.country = Some(name.to_string());
        if config.column_type == ColumnType::Phone && !edited {
            config.phone_code = reference_code(Some(name));
        }
        Ok(())
    }

    /// Select the time zone for a time column.
    ///
    /// The choice list is the selected country's zone list; nothing beyond
    /// that list membership is validated here.
    pub fn set_time_zone(&mut self, column: &str, time_zone: &str) -> Result<()> {
        let config = self.require_column(
            column,
            |t| *t == ColumnType::Time,
            "the time type",
        )?;
        config.time_zone = Some(time_zone.to_string());
        Ok(())
    }

    /// Set the dialing code for a phone column.
    ///
    /// Free-form: pre-seeded from the country reference, but user edits
    /// are accepted verbatim and never re-validated.
    pub fn set_phone_code(&mut self, column: &str, code: &str) -> Result<()> {
        let config = self.require_column(
            column,
            |t| *t == ColumnType::Phone,
            "the phone type",
        )?;
        config.phone_code = Some(code.to_string());
        self.edited_codes.insert(column.to_string());
        Ok(())
    }

    /// Select the unit for a weights or distance column.
    ///
    /// The unit's kind must match the column type. Idempotent.
    pub fn set_unit(&mut self, column: &str, unit: Unit) -> Result<()> {
        let config = self.require_column(
            column,
            |t| t.unit_kind().is_some(),
            "a measurement type",
        )?;
        if config.column_type.unit_kind() != Some(unit.kind()) {
            return Err(AnnotError::UnitMismatch {
                unit,
                column_type: config.column_type,
            });
        }
        config.unit = Some(unit);
        Ok(())
    }

    /// Per-column review lines, in column iteration order.
    pub fn summaries(&self) -> Vec<ColumnSummary> {
        self.columns
            .iter()
            .map(|(column, config)| {
                let detail = match config.column_type {
                    ColumnType::Time => config.time_zone.clone(),
                    ColumnType::Phone => config.phone_code.clone(),
                    _ => None,
                };
                ColumnSummary {
                    column: column.clone(),
                    column_type: config.column_type,
                    country: config.country.clone(),
                    detail,
                    unit: config.unit,
                }
            })
            .collect()
    }

    /// Snapshot of the session as a persistable document.
    pub fn document(&self) -> ConfigDocument {
        ConfigDocument {
            columns: self.columns.clone(),
        }
    }

    /// Consume the session into a persistable document.
    pub fn into_document(self) -> ConfigDocument {
        ConfigDocument {
            columns: self.columns,
        }
    }

    fn require_column(
        &mut self,
        column: &str,
        accepts: impl Fn(&ColumnType) -> bool,
        expected: &'static str,
    ) -> Result<&mut ColumnConfig> {
        let config = self
            .columns
            .get_mut(column)
            .ok_or_else(|| AnnotError::Message(format!("unknown column: {column}")))?;
        if !accepts(&config.column_type) {
            return Err(AnnotError::TypeMismatch {
                column: column.to_string(),
                actual: config.column_type,
                expected,
            });
        }
        Ok(config)
    }
}

fn reference_code(name: Option<&str>) -> Option<String> {
    name.and_then(country).map(|c| c.phone_code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sight_defaults_to_string() {
        let mut session = AnnotationSession::new();
        let config = session.ensure_column("name");
        assert_eq!(config.column_type, ColumnType::String);
        assert!(config.extras_empty());
    }

    #[test]
    fn plain_types_carry_no_extras() {
        let mut session = AnnotationSession::new();
        session.set_type("col", ColumnType::Phone);
        session.set_type("col", ColumnType::Date);
        let config = session.get("col").expect("record");
        assert!(config.extras_empty());
    }
}
