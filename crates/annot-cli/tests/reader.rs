use annot_cli::summary::render_document;
use annot_model::{ColumnConfig, ColumnType, ConfigDocument, Unit};

#[test]
fn distance_column_prints_unit_and_no_phone_code() {
    let mut doc = ConfigDocument::new();
    let mut amount = ColumnConfig::new(ColumnType::Distance);
    amount.unit = Some(Unit::Mile);
    doc.insert("amount", amount);

    let rendered = render_document(&doc);
    assert!(!rendered.contains("Country code"));
    insta::assert_snapshot!(rendered, @r"
    Processing column: amount
    Type: distance
    Measurement unit: mile
    ");
}

#[test]
fn phone_column_prints_empty_code_when_absent() {
    let mut doc = ConfigDocument::new();
    doc.insert("contact", ColumnConfig::new(ColumnType::Phone));

    // The code line ends in a space before the empty value, which inline
    // snapshots would trim; compare the exact string instead.
    assert_eq!(
        render_document(&doc),
        "Processing column: contact\nType: phone\nCountry code: \n"
    );
}

#[test]
fn mixed_document_renders_per_column_lines() {
    let json = serde_json::json!({
        "name": {"type": "string"},
        "signup_date": {"type": "date"},
        "contact": {"type": "phone", "country": "India", "phone_code": "+91"},
        "weight": {"type": "weights", "unit": "kilogram"},
    });
    let doc: ConfigDocument = serde_json::from_value(json).expect("document");

    insta::assert_snapshot!(render_document(&doc), @r"
    Processing column: contact
    Type: phone
    Country code: +91
    Processing column: name
    Type: string
    Processing column: signup_date
    Type: date
    Processing column: weight
    Type: weights
    Measurement unit: kilogram
    ");
}
