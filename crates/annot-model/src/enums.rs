//! Type-safe enumerations for column annotations.
//!
//! These enums give compile-time safety to concepts the persisted
//! configuration represents as plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic data type assigned to a table column.
///
/// Columns default to [`ColumnType::String`] the first time they are seen.
/// Four of the types carry extra fields (see [`FieldRequirements`]); the
/// rest stand alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Primary key / identifier column.
    Primary,
    /// Calendar date.
    Date,
    /// Time of day; carries a country and time zone.
    Time,
    /// Phone number; carries a country and dialing code.
    Phone,
    /// Email address.
    Email,
    /// Free-form text. The default for newly seen columns.
    #[default]
    String,
    /// Whole number.
    Integer,
    /// Categorical / enumerated values.
    Categorical,
    /// Weight measurement; carries a weight unit.
    Weights,
    /// Distance measurement; carries a distance unit.
    Distance,
}

/// All column types in presentation order.
pub const COLUMN_TYPES: [ColumnType; 10] = [
    ColumnType::Primary,
    ColumnType::Date,
    ColumnType::Time,
    ColumnType::Phone,
    ColumnType::Email,
    ColumnType::String,
    ColumnType::Integer,
    ColumnType::Categorical,
    ColumnType::Weights,
    ColumnType::Distance,
];

impl ColumnType {
    /// Returns the canonical lowercase name used in the persisted document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Primary => "primary",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::Phone => "phone",
            ColumnType::Email => "email",
            ColumnType::String => "string",
            ColumnType::Integer => "integer",
            ColumnType::Categorical => "categorical",
            ColumnType::Weights => "weights",
            ColumnType::Distance => "distance",
        }
    }

    /// Declarative lookup from type to the extra fields it carries.
    ///
    /// This is the single source of truth for field presence; the editor
    /// clears everything a type does not require.
    pub fn requirements(&self) -> FieldRequirements {
        match self {
            ColumnType::Time => FieldRequirements::CountryTimeZone,
            ColumnType::Phone => FieldRequirements::CountryPhoneCode,
            ColumnType::Weights => FieldRequirements::Unit(UnitKind::Weight),
            ColumnType::Distance => FieldRequirements::Unit(UnitKind::Distance),
            _ => FieldRequirements::None,
        }
    }

    /// Returns true if this type carries a country selection.
    pub fn takes_country(&self) -> bool {
        matches!(
            self.requirements(),
            FieldRequirements::CountryTimeZone | FieldRequirements::CountryPhoneCode
        )
    }

    /// Returns the unit kind this type measures, if any.
    pub fn unit_kind(&self) -> Option<UnitKind> {
        match self.requirements() {
            FieldRequirements::Unit(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    /// Parse a type name, case-insensitive and trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        COLUMN_TYPES
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| format!("Unknown column type: {s}"))
    }
}

/// Extra fields a column type requires on its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRequirements {
    /// The type stands alone; any region/unit fields are cleared.
    None,
    /// Country plus a time zone chosen from that country's zone list.
    CountryTimeZone,
    /// Country plus a free-form dialing code seeded from the reference.
    CountryPhoneCode,
    /// A unit from the fixed list for the given kind.
    Unit(UnitKind),
}

/// Category of measurement a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Weight,
    Distance,
}

impl UnitKind {
    /// Fixed unit list for this kind, in presentation order.
    pub fn units(&self) -> &'static [Unit] {
        match self {
            UnitKind::Weight => &[Unit::Gram, Unit::Kilogram, Unit::Pound, Unit::Ounce],
            UnitKind::Distance => &[Unit::Meter, Unit::Kilometer, Unit::Mile, Unit::Foot],
        }
    }

    /// Human-readable category label ("weight" / "distance").
    pub fn label(&self) -> &'static str {
        match self {
            UnitKind::Weight => "weight",
            UnitKind::Distance => "distance",
        }
    }
}

/// Measurement unit for weight or distance columns.
///
/// The two kinds share one enum; [`Unit::kind`] recovers the category and
/// the editor rejects a unit whose kind does not match the column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Gram,
    Kilogram,
    Pound,
    Ounce,
    Meter,
    Kilometer,
    Mile,
    Foot,
}

impl Unit {
    /// Returns the canonical lowercase name used in the persisted document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Pound => "pound",
            Unit::Ounce => "ounce",
            Unit::Meter => "meter",
            Unit::Kilometer => "kilometer",
            Unit::Mile => "mile",
            Unit::Foot => "foot",
        }
    }

    /// The measurement category this unit belongs to.
    pub fn kind(&self) -> UnitKind {
        match self {
            Unit::Gram | Unit::Kilogram | Unit::Pound | Unit::Ounce => UnitKind::Weight,
            Unit::Meter | Unit::Kilometer | Unit::Mile | Unit::Foot => UnitKind::Distance,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        UnitKind::Weight
            .units()
            .iter()
            .chain(UnitKind::Distance.units())
            .copied()
            .find(|u| u.as_str() == normalized)
            .ok_or_else(|| format!("Unknown unit: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_type_round_trips_through_str() {
        for column_type in COLUMN_TYPES {
            let parsed: ColumnType = column_type.as_str().parse().expect("parse type");
            assert_eq!(parsed, column_type);
        }
    }

    #[test]
    fn column_type_parse_is_case_insensitive() {
        assert_eq!(" Phone ".parse::<ColumnType>(), Ok(ColumnType::Phone));
        assert!("telegraph".parse::<ColumnType>().is_err());
    }

    #[test]
    fn requirements_cover_the_four_special_types() {
        assert_eq!(
            ColumnType::Time.requirements(),
            FieldRequirements::CountryTimeZone
        );
        assert_eq!(
            ColumnType::Phone.requirements(),
            FieldRequirements::CountryPhoneCode
        );
        assert_eq!(
            ColumnType::Weights.requirements(),
            FieldRequirements::Unit(UnitKind::Weight)
        );
        assert_eq!(
            ColumnType::Distance.requirements(),
            FieldRequirements::Unit(UnitKind::Distance)
        );
        assert_eq!(ColumnType::Email.requirements(), FieldRequirements::None);
    }

    #[test]
    fn unit_kinds_are_disjoint() {
        for unit in UnitKind::Weight.units() {
            assert_eq!(unit.kind(), UnitKind::Weight);
        }
        for unit in UnitKind::Distance.units() {
            assert_eq!(unit.kind(), UnitKind::Distance);
        }
    }
}
