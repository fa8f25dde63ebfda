use annot_model::{ColumnConfig, ColumnType, ConfigDocument, Unit};

#[test]
fn stored_document_matches_expected_shape() {
    let mut doc = ConfigDocument::new();
    doc.insert("name", ColumnConfig::new(ColumnType::String));
    doc.insert("signup_date", ColumnConfig::new(ColumnType::Date));
    let mut contact = ColumnConfig::new(ColumnType::Phone);
    contact.country = Some("India".to_string());
    contact.phone_code = Some("+91".to_string());
    doc.insert("contact", contact);

    let value = serde_json::to_value(&doc).expect("serialize document");
    let expected = serde_json::json!({
        "name": {"type": "string"},
        "signup_date": {"type": "date"},
        "contact": {"type": "phone", "country": "India", "phone_code": "+91"},
    });
    assert_eq!(value, expected);
}

#[test]
fn unit_names_round_trip() {
    let mut record = ColumnConfig::new(ColumnType::Distance);
    record.unit = Some(Unit::Mile);
    let json = serde_json::to_string(&record).expect("serialize record");
    assert_eq!(json, r#"{"type":"distance","unit":"mile"}"#);

    let round: ColumnConfig = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round.unit, Some(Unit::Mile));
}

#[test]
fn unknown_type_in_document_is_rejected() {
    let json = r#"{"amount": {"type": "telemetry"}}"#;
    assert!(serde_json::from_str::<ConfigDocument>(json).is_err());
}

#[test]
fn extra_fields_deserialize_when_present() {
    let json = r#"{"appointment": {"type": "time", "country": "Japan", "time_zone": "Asia/Tokyo"}}"#;
    let doc: ConfigDocument = serde_json::from_str(json).expect("deserialize document");
    let record = doc.get("appointment").expect("record present");
    assert_eq!(record.column_type, ColumnType::Time);
    assert_eq!(record.country.as_deref(), Some("Japan"));
    assert_eq!(record.time_zone.as_deref(), Some("Asia/Tokyo"));
    assert_eq!(record.phone_code, None);
}
