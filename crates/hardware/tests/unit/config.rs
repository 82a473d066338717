//! # Configuration Tests
//!
//! Tests for configuration defaults and JSON deserialization.

use pipesim_core::common::SimError;
use pipesim_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_states);
    assert_eq!(config.general.max_cycles, 1_000_000);
    assert_eq!(config.report.registers, 10);
    assert_eq!(config.report.memory, 10);
}

#[test]
fn test_empty_json_takes_defaults() {
    let config = Config::from_json("{}").expect("parses");
    assert_eq!(config.general.max_cycles, 1_000_000);
    assert_eq!(config.report.memory, 10);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::from_json(r#"{ "general": { "trace_states": true } }"#).expect("parses");
    assert!(config.general.trace_states);
    assert_eq!(config.general.max_cycles, 1_000_000);
    assert_eq!(config.report.registers, 10);
}

#[test]
fn test_full_document() {
    let json = r#"{
        "general": { "trace_states": false, "max_cycles": 0 },
        "report": { "registers": 32, "memory": 4 }
    }"#;
    let config = Config::from_json(json).expect("parses");
    assert_eq!(config.general.max_cycles, 0);
    assert_eq!(config.report.registers, 32);
    assert_eq!(config.report.memory, 4);
}

#[test]
fn test_malformed_json_is_a_config_error() {
    let err = Config::from_json(r#"{ "general": { "max_cycles": "lots" } }"#)
        .expect_err("wrong type");
    assert!(matches!(err, SimError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn test_config_error_keeps_json_source() {
    use std::error::Error as _;

    let err = Config::from_json("{ not json").expect_err("syntax error");
    let source = err.source().expect("parser error is the source");
    let json = source
        .downcast_ref::<serde_json::Error>()
        .expect("source is a serde_json error");
    assert!(json.is_syntax());
    assert_eq!(json.line(), 1);
}
