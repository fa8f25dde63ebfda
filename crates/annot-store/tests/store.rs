use std::fs;
use std::path::PathBuf;

use annot_model::{ColumnConfig, ColumnType, ConfigDocument, Unit};
use annot_store::ConfigStore;

fn temp_store_path() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("annot_store_{stamp}"));
    dir.push("shared_config.json");
    dir
}

fn cleanup(path: &PathBuf) {
    if let Some(parent) = path.parent() {
        let _ = fs::remove_dir_all(parent);
    }
}

fn sample_document() -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    doc.insert("name", ColumnConfig::new(ColumnType::String));
    let mut contact = ColumnConfig::new(ColumnType::Phone);
    contact.country = Some("India".to_string());
    contact.phone_code = Some("+91".to_string());
    doc.insert("contact", contact);
    let mut amount = ColumnConfig::new(ColumnType::Distance);
    amount.unit = Some(Unit::Mile);
    doc.insert("amount", amount);
    doc
}

#[test]
fn save_and_load_round_trip() {
    let path = temp_store_path();
    let store = ConfigStore::new(&path);

    let doc = sample_document();
    let saved_path = store.save(&doc).expect("save document");
    assert_eq!(saved_path, path);
    assert!(store.exists());

    let loaded = store
        .load()
        .expect("load document")
        .expect("document should exist");
    assert_eq!(loaded, doc);

    cleanup(&path);
}

#[test]
fn load_missing_file_is_none_not_error() {
    let path = temp_store_path();
    let store = ConfigStore::new(&path);

    let loaded = store.load().expect("load attempt");
    assert!(loaded.is_none());
    assert!(!store.exists());
}

#[test]
fn save_replaces_prior_content_wholesale() {
    let path = temp_store_path();
    let store = ConfigStore::new(&path);

    store.save(&sample_document()).expect("first save");

    let mut smaller = ConfigDocument::new();
    smaller.insert("only", ColumnConfig::new(ColumnType::Integer));
    store.save(&smaller).expect("second save");

    let loaded = store.load().expect("load").expect("document");
    assert_eq!(loaded, smaller);
    assert_eq!(loaded.len(), 1);

    cleanup(&path);
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let path = temp_store_path();
    let store = ConfigStore::new(&path);
    store.save(&sample_document()).expect("save");

    let dir = path.parent().expect("parent dir");
    let leftovers: Vec<_> = fs::read_dir(dir)
        .expect("read store dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path() != path)
        .collect();
    assert!(leftovers.is_empty());

    cleanup(&path);
}

#[test]
fn corrupt_file_is_an_error_naming_the_path() {
    let path = temp_store_path();
    fs::create_dir_all(path.parent().unwrap()).expect("create dir");
    fs::write(&path, "not json").expect("write garbage");

    let store = ConfigStore::new(&path);
    let error = store.load().expect_err("corrupt file");
    assert!(error.to_string().contains("shared_config.json"));

    cleanup(&path);
}
