use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use annot_ingest::read_csv_table;

fn temp_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_headers_rows_and_dimensions() {
    let dir = TempDir::new().expect("create temp dir");
    let path = temp_csv(
        &dir,
        "people.csv",
        "name,signup_date,contact\nada,2024-01-15,555\nbob,2024-02-20,556\n",
    );
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["name", "signup_date", "contact"]);
    assert_eq!(table.dimensions(), (2, 3));
    assert_eq!(table.rows[0], vec!["ada", "2024-01-15", "555"]);
}

#[test]
fn skips_fully_empty_rows_and_pads_short_ones() {
    let dir = TempDir::new().expect("create temp dir");
    let path = temp_csv(&dir, "gaps.csv", "a,b\n,,\n1\n2,x\n");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["1", ""]);
    assert_eq!(table.rows[1], vec!["2", "x"]);
}

#[test]
fn rejects_duplicate_headers() {
    let dir = TempDir::new().expect("create temp dir");
    let path = temp_csv(&dir, "dup.csv", "name,name\n1,2\n");
    let error = read_csv_table(&path).expect_err("duplicate headers");
    assert!(error.to_string().contains("duplicate column 'name'"));
}

#[test]
fn rejects_empty_table() {
    let dir = TempDir::new().expect("create temp dir");
    let path = temp_csv(&dir, "empty.csv", "\n\n");
    assert!(read_csv_table(&path).is_err());
}

#[test]
fn missing_file_is_an_error_with_path_context() {
    let path = Path::new("/nonexistent/annot-ingest-test.csv");
    let error = read_csv_table(path).expect_err("missing file");
    assert!(error.to_string().contains("annot-ingest-test.csv"));
}
