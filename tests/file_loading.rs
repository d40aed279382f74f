//! Integration tests for startup files and exports
//!
//! Covers everything that touches the filesystem:
//! - Catalog JSON loading and validation
//! - TOML configuration loading
//! - Recorded annotation loading
//! - CSV shopping list export

use aisle_assistant::catalog::Catalog;
use aisle_assistant::core::config::AssistantConfig;
use aisle_assistant::core::error::AssistError;
use aisle_assistant::core::types::ExtractionMode;
use aisle_assistant::nlp::{LexiconAnnotator, RecordedAnnotator};
use aisle_assistant::present::export_csv;
use aisle_assistant::request::Assistant;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "database.json",
        r#"{"Bread": "Aisle 3", "Olive Oil": "Aisle 4", "eggs": "Dairy"}"#,
    );

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get("olive oil"), Some("Aisle 4"));

    let catalog = catalog.with_lemma_aliases();
    assert_eq!(catalog.get("egg"), Some("Dairy"));
}

#[test]
fn test_missing_catalog_file() {
    let result = Catalog::load(Path::new("/nonexistent/database.json"));
    assert!(matches!(result, Err(AssistError::IoError(_))));
}

#[test]
fn test_shipped_catalog_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/database.json");
    let catalog = Catalog::load(&path).unwrap();
    assert!(catalog.contains("bread"));
    assert!(catalog.phrases().any(|p| p == "peanut butter"));
}

#[test]
fn test_shipped_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/assistant.toml");
    let config = AssistantConfig::load(&path).unwrap();
    assert_eq!(config.extraction, ExtractionMode::LemmaAware);
    assert!(config.alias_lemmas);
}

#[test]
fn test_config_file_overrides() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "assistant.toml",
        "extraction = \"surface\"\nalias_lemmas = false\nexport_path = \"out/list.csv\"\n",
    );

    let config = AssistantConfig::load(&path).unwrap();
    assert_eq!(config.extraction, ExtractionMode::Surface);
    assert!(!config.alias_lemmas);
    assert_eq!(config.export_path, Path::new("out/list.csv"));
}

#[test]
fn test_load_recorded_annotations() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "docs.jsonl",
        concat!(
            r#"{"text": "i need eggs", "tokens": [{"text": "i", "lemma": "i", "pos": "PRON", "is_stop": true}, {"text": "need", "lemma": "need", "pos": "VERB"}, {"text": "eggs", "lemma": "egg", "pos": "NOUN"}]}"#,
            "\n",
        ),
    );

    let annotator = RecordedAnnotator::load(&path).unwrap();
    assert_eq!(annotator.len(), 1);

    let catalog = Catalog::from_pairs([("egg", "Dairy")]).unwrap();
    let assistant = Assistant::new(&catalog, &annotator);
    assert_eq!(assistant.process("I need eggs!").products.get("egg"), Some("Dairy"));
}

#[test]
fn test_export_shopping_list() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::from_pairs([("bread", "Aisle 3"), ("rice", "Aisle 5")]).unwrap();
    let annotator = LexiconAnnotator::new();
    let assistant = Assistant::new(&catalog, &annotator);

    let outcome = assistant.process("rice and bread");
    let path = dir.path().join("shopping_list.csv");
    export_csv(&outcome.products, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "Product,Shelf\nRice,Aisle 5\nBread,Aisle 3\n");
}
