//! Error handling tests
//!
//! Tests for custom error types, error conversion, and error propagation.

use hypervisor_nics::error::*;
use std::error::Error;

#[test]
fn test_config_error_creation() {
    let error = ConfigError::InvalidValue {
        field: "format".to_string(),
        value: "xml".to_string(),
        reason: "must be 'value', 'json', or 'json-indent'".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Invalid value 'xml' for field 'format': must be 'value', 'json', or 'json-indent'"
    );
}

#[test]
fn test_config_error_file_not_found() {
    let error = ConfigError::FileNotFound("nics.yaml".to_string());
    assert_eq!(error.to_string(), "Configuration file not found: nics.yaml");
}

#[test]
fn test_snapshot_error_messages() {
    let error = SnapshotError::CommandFailed {
        command: "ip -details -json address show".to_string(),
        reason: "No such file or directory".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Failed to run 'ip -details -json address show': No such file or directory"
    );

    let error = SnapshotError::VirtualListFailed {
        path: "/sys/devices/virtual/net".to_string(),
        reason: "Permission denied".to_string(),
    };
    assert!(error.to_string().contains("/sys/devices/virtual/net"));

    let error = SnapshotError::ParseFailed("invalid JSON".to_string());
    assert_eq!(error.to_string(), "Failed to parse interface list: invalid JSON");
}

#[test]
fn test_top_level_error_wraps_message() {
    let error: NicsError = SnapshotError::ParseFailed("bad".to_string()).into();
    assert_eq!(error.to_string(), "Snapshot error: Failed to parse interface list: bad");
    assert!(error.source().is_some());

    let error: NicsError = OutputError::SerializationFailed("boom".to_string()).into();
    assert_eq!(error.to_string(), "Output error: Serialization error: boom");
}

#[test]
fn test_question_mark_propagation() {
    fn inner() -> Result<()> {
        let parsed: std::result::Result<(), ConfigError> =
            Err(ConfigError::ParseError("unexpected key".to_string()));
        parsed?;
        Ok(())
    }

    match inner() {
        Err(NicsError::Config(ConfigError::ParseError(msg))) => assert_eq!(msg, "unexpected key"),
        other => panic!("Expected ConfigError::ParseError, got {:?}", other),
    }
}

#[test]
fn test_map_error_helpers() {
    let failed: std::result::Result<(), &str> = Err("trailing comma");
    let error = failed.map_parse_error("ip output").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Snapshot error: Failed to parse interface list: ip output: trailing comma"
    );

    let failed: std::result::Result<(), &str> = Err("key must be a string");
    assert!(matches!(
        failed.map_output_error(),
        Err(NicsError::Output(OutputError::SerializationFailed(_)))
    ));
}
