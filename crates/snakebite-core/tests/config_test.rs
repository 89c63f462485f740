//! Config and reference-table loading tests.
//!
//! Every test targets a way a deployment can hand the engine bad or partial
//! configuration:
//! - Partial TOML/JSON → defaults for missing fields, not errors
//! - Invalid vectors and weights → typed errors with stable codes
//! - Files dispatched by extension; unknown extensions rejected

use std::io::Write;

use snakebite_core::config::{LogFormat, ReferenceTables, ScoringConfig, SnakebiteConfig};
use snakebite_core::errors::ConfigError;
use snakebite_core::{Category, EvidenceVector, SnakebiteErrorCode};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ═══════════════════════════════════════════════════════════════════════════
// SnakebiteConfig defaults and partial documents
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn empty_toml_gives_defaults() {
    let config = SnakebiteConfig::from_toml("").unwrap();

    assert_eq!(config.scoring.category_weights, vec![0.8, 0.4, 0.4, 0.5, 0.6, 0.8]);
    assert_eq!(config.scoring.overflow_weight, 1.0);
    assert!(config.scoring.reference_tables_path.is_none());
    assert_eq!(config.logging.effective_filter(), "info");
    assert_eq!(config.logging.format, LogFormat::Compact);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let toml = r#"
        [logging]
        filter = "snakebite_scoring=debug"
        format = "json"
    "#;
    let config = SnakebiteConfig::from_toml(toml).unwrap();

    assert_eq!(config.logging.effective_filter(), "snakebite_scoring=debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.scoring.category_weights.len(), 6);
}

#[test]
fn empty_json_object_gives_defaults() {
    let config = SnakebiteConfig::from_json("{}").unwrap();
    assert_eq!(config.scoring.weight_at(6), 1.0);
}

#[test]
fn negative_weight_is_rejected_with_code() {
    let toml = r#"
        [scoring]
        category_weights = [0.8, -0.4]
    "#;
    let err = SnakebiteConfig::from_toml(toml).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidWeight { position: 1, .. }));
    assert_eq!(err.error_code(), "CONFIG_INVALID_WEIGHT");
}

#[test]
fn empty_weight_list_is_rejected() {
    let toml = r#"
        [scoring]
        category_weights = []
    "#;
    let err = SnakebiteConfig::from_toml(toml).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_EMPTY_WEIGHTS");
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let err = SnakebiteConfig::from_toml("[scoring\n").unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_TOML");
}

// ═══════════════════════════════════════════════════════════════════════════
// Reference tables
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn tables_parse_from_toml_with_missing_sections() {
    let toml = r#"
        [district]
        CHENNAI = [5, 1, 0, 0]

        [place]
        "Foot" = [2.0, 2.0, 4.0, 1.0]
    "#;
    let tables = ReferenceTables::from_toml(toml).unwrap();

    assert_eq!(
        tables.lookup(Category::District, "CHENNAI"),
        Some(EvidenceVector::new([5.0, 1.0, 0.0, 0.0]))
    );
    assert_eq!(tables.lookup(Category::District, "Chennai"), None);
    assert!(tables.time.is_empty());
    assert_eq!(tables.len(), 2);
}

#[test]
fn tables_parse_from_json() {
    let json = r#"{
        "local_symptoms": { "Swelling": [3, 3, 4, 0], "No Symptoms": [0, 0, 0, 0] }
    }"#;
    let tables = ReferenceTables::from_json(json).unwrap();
    assert_eq!(tables.local_symptoms.len(), 2);
}

#[test]
fn three_component_vector_is_rejected() {
    let toml = r#"
        [season]
        "Winter" = [1.0, 1.0, 3.0]
    "#;
    assert!(ReferenceTables::from_toml(toml).is_err());
}

#[test]
fn non_finite_component_is_rejected() {
    let toml = r#"
        [time]
        "Night" = [1.0, nan, 3.0, 5.0]
    "#;
    let err = ReferenceTables::from_toml(toml).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_INVALID_VECTOR");
}

// ═══════════════════════════════════════════════════════════════════════════
// File loading
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn config_and_tables_load_from_files() {
    let tables_file = write_temp(
        ".json",
        r#"{ "district": { "VELLORE": [1, 4, 3, 3] } }"#,
    );
    let config_file = write_temp(
        ".toml",
        &format!(
            "[scoring]\nreference_tables_path = {:?}\n",
            tables_file.path().display().to_string()
        ),
    );

    let config = SnakebiteConfig::load(config_file.path()).unwrap();
    let tables = config.scoring.load_reference_tables().unwrap();

    assert_eq!(tables.district.len(), 1);
    assert!(tables.district.contains_key("VELLORE"));
}

#[test]
fn default_scoring_config_loads_bundled_tables() {
    let tables = ScoringConfig::default().load_reference_tables().unwrap();
    assert_eq!(tables, ReferenceTables::builtin().unwrap());
    assert!(tables.district.contains_key("CHENNAI"));
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_temp(".yaml", "scoring: {}");
    let err = SnakebiteConfig::load(file.path()).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_UNSUPPORTED_FORMAT");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ReferenceTables::load("/nonexistent/snakebite/tables.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
