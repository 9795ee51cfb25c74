//! Tests for dataset loading and lookup

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use domgen::application::{load_dataset, ApplicationError};

const SAMPLE: &str = r#"{
  "Atlantis": {
    "News (3)": ["news.atl", "daily.atl", "herald.atl"],
    "Shops": ["shop.atl", "market.atl", "mall.atl"]
  },
  "Borduria": {
    "Forums": ["talk.bor", "board.bor", "chat.bor"]
  }
}"#;

fn write_dataset(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("countries.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn given_valid_json_when_loading_then_countries_sorted() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SAMPLE);

    let dataset = load_dataset(&path).unwrap();

    let countries: Vec<&str> = dataset.countries().collect();
    assert_eq!(countries, vec!["Atlantis", "Borduria"]);
    assert_eq!(dataset.len(), 2);
}

#[test]
fn given_valid_json_when_looking_up_blocks_then_pools_present() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, SAMPLE);

    let dataset = load_dataset(&path).unwrap();

    let blocks = dataset.blocks("Atlantis").unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks["News (3)"].len(), 3);
    assert!(dataset.blocks("Syldavia").is_none());
}

#[test]
fn given_missing_file_when_loading_then_read_error() {
    let err = load_dataset(Path::new("/nonexistent/countries.json")).unwrap_err();
    assert!(matches!(err, ApplicationError::DatasetRead { .. }));
}

#[test]
fn given_malformed_json_when_loading_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, "{ not json");

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, ApplicationError::DatasetParse { .. }));
}

#[test]
fn given_wrong_shape_when_loading_then_parse_error() {
    let dir = TempDir::new().unwrap();
    // Countries must map to block maps, not plain lists
    let path = write_dataset(&dir, r#"{"Atlantis": ["news.atl"]}"#);

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, ApplicationError::DatasetParse { .. }));
}

#[test]
fn given_empty_object_when_loading_then_empty_error() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(&dir, "{}");

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, ApplicationError::DatasetEmpty(_)));
}

#[test]
fn given_bundled_sample_dataset_when_loading_then_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/countries.json");

    let dataset = load_dataset(&path).unwrap();

    assert!(dataset.len() >= 3);
    for country in dataset.countries() {
        let blocks = dataset.blocks(country).unwrap();
        assert!(!blocks.is_empty(), "{country} has no blocks");
        for (label, pool) in blocks {
            assert!(!pool.is_empty(), "{country}/{label} has an empty pool");
        }
    }
}
