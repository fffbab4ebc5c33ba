//! Tests for the one-shot dataset loader against local files

use std::io::Write;
use std::path::PathBuf;

use globetui::logic::errors::{classify_error, ErrorType};
use globetui::services::loader::{load_dataset, spawn_dataset_load, DatasetSource};
use tempfile::NamedTempFile;

const FIXTURE: &str = r#"[
  {
    "name": {"common": "Chad", "official": "Republic of Chad"},
    "cca3": "TCD",
    "continents": ["Africa"],
    "region": "Africa",
    "subregion": "Middle Africa",
    "population": 16425859,
    "area": 1284000.0,
    "capital": ["N'Djamena"],
    "flag": "🇹🇩"
  },
  {
    "name": {"common": "Antarctica"},
    "continents": ["Antarctica"],
    "population": 1000.5,
    "area": -3,
    "capital": null
  },
  {
    "name": {"common": "Nauru"},
    "continents": ["Oceania"],
    "subregion": "",
    "population": "12511",
    "area": 21
  }
]"#;

fn fixture_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Test: records parse in source order with lenient numerics
#[tokio::test]
async fn test_load_file_parses_records() {
    let file = fixture_file(FIXTURE);
    let source = DatasetSource::File(file.path().to_path_buf());

    let response = load_dataset(&source).await;
    let countries = response.countries.unwrap();

    let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Chad", "Antarctica", "Nauru"]);

    let chad = &countries[0];
    assert_eq!(chad.code.as_deref(), Some("TCD"));
    assert_eq!(chad.population, Some(16_425_859));
    assert_eq!(chad.capital, vec!["N'Djamena".to_string()]);

    // Fractional population and negative area are treated as missing
    let antarctica = &countries[1];
    assert_eq!(antarctica.population, None);
    assert_eq!(antarctica.area, None);
    assert!(antarctica.capital.is_empty());

    // Numbers as strings are missing; empty subregion is no subregion
    let nauru = &countries[2];
    assert_eq!(nauru.population, None);
    assert_eq!(nauru.area, Some(21.0));
    assert_eq!(nauru.subregion, None);
}

/// Test: malformed payload is reported as a parse failure
#[tokio::test]
async fn test_load_malformed_file_fails() {
    let file = fixture_file(r#"{"status": 404, "message": "Not Found"}"#);
    let source = DatasetSource::File(file.path().to_path_buf());

    let response = load_dataset(&source).await;
    let error = response.countries.unwrap_err();
    assert_eq!(classify_error(&error), ErrorType::Parse);
}

/// Test: missing file is reported as a file error
#[tokio::test]
async fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let source = DatasetSource::File(dir.path().join("countries.json"));

    let response = load_dataset(&source).await;
    let error = response.countries.unwrap_err();
    assert_eq!(classify_error(&error), ErrorType::Io);
}

/// Test: the spawned loader sends exactly one response
#[tokio::test]
async fn test_spawned_load_reports_once() {
    let file = fixture_file(FIXTURE);
    let mut rx = spawn_dataset_load(DatasetSource::File(file.path().to_path_buf()));

    let response = rx.recv().await.unwrap();
    assert_eq!(response.countries.unwrap().len(), 3);

    // Sender is dropped after the single response
    assert!(rx.recv().await.is_none());
}

/// Test: file source describes itself by path
#[test]
fn test_file_source_description() {
    let source = DatasetSource::File(PathBuf::from("/data/countries.json"));
    assert_eq!(source.describe(), "/data/countries.json");
}
