pub mod config;
pub mod enums;
pub mod error;
pub mod reference;

pub use config::{ColumnConfig, ConfigDocument};
pub use enums::{COLUMN_TYPES, ColumnType, FieldRequirements, Unit, UnitKind};
pub use error::{AnnotError, Result};
pub use reference::{Country, countries, country, default_country};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_plain_string() {
        let config = ColumnConfig::default();
        assert_eq!(config.column_type, ColumnType::String);
        assert!(config.extras_empty());
    }

    #[test]
    fn document_round_trips_through_json() {
        let mut doc = ConfigDocument::new();
        doc.insert("signup_date", ColumnConfig::new(ColumnType::Date));
        let mut contact = ColumnConfig::new(ColumnType::Phone);
        contact.country = Some("India".to_string());
        contact.phone_code = Some("+91".to_string());
        doc.insert("contact", contact);

        let json = serde_json::to_string(&doc).expect("serialize document");
        let round: ConfigDocument = serde_json::from_str(&json).expect("deserialize document");
        assert_eq!(round, doc);
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let config = ColumnConfig::new(ColumnType::Date);
        let json = serde_json::to_string(&config).expect("serialize record");
        assert_eq!(json, r#"{"type":"date"}"#);
    }
}
