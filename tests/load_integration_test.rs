use jobfile::{load, load_with_policy, HexPolicy, InputError, LoadError, OutputError, OutputParams};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_job_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_end_to_end_load() {
    let file = write_job_file(
        r#"{
            "name": "t",
            "input": {"method": "inline-data", "data": "deadbeef"},
            "output": {
                "method": "file-out",
                "directory-path": "/tmp",
                "name-suffix": "_out"
            },
            "events": {}
        }"#,
    );

    let result = load(file.path()).unwrap();

    assert_eq!(result.name.as_deref(), Some("t"));
    assert_eq!(result.raw_data.len(), 4);
    assert_eq!(result.raw_data.as_slice(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(
        result.output,
        OutputParams::FileOut {
            directory_path: "/tmp".to_string(),
            name_suffix: "_out".to_string(),
        }
    );
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load(dir.path().join("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, LoadError::IoError(_)));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let file = write_job_file("{\"name\": \"t\",");
    let err = load(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::ParseError(_)));
}

#[test]
fn test_missing_top_level_section_is_a_schema_error() {
    let file = write_job_file(
        r#"{
            "name": "t",
            "input": {"method": "inline-data", "data": "00"},
            "events": {}
        }"#,
    );
    let err = load(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::SchemaError { .. }));
}

#[test]
fn test_invalid_hex_fails_the_whole_load() {
    let file = write_job_file(
        r#"{
            "name": "t",
            "input": {"method": "inline-data", "data": "xyz"},
            "output": {
                "method": "file-out",
                "directory-path": "/tmp",
                "name-suffix": "_out"
            },
            "events": {}
        }"#,
    );
    let err = load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::InputError(InputError::InvalidHex)
    ));
}

#[test]
fn test_unsupported_output_method_fails_after_input_resolved() {
    // Input resolution succeeds first; the caller still gets a hard failure
    // and no partial result.
    let file = write_job_file(
        r#"{
            "name": "t",
            "input": {"method": "inline-data", "data": "deadbeef"},
            "output": {
                "method": "s3-out",
                "directory-path": "/tmp",
                "name-suffix": "_out"
            },
            "events": {}
        }"#,
    );
    let err = load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::OutputError(OutputError::UnsupportedMethod(ref m)) if m == "s3-out"
    ));
}

#[test]
fn test_strict_hex_policy_rejects_odd_length_document() {
    let file = write_job_file(
        r#"{
            "name": "t",
            "input": {"method": "inline-data", "data": "deadb"},
            "output": {
                "method": "file-out",
                "directory-path": "/tmp",
                "name-suffix": "_out"
            },
            "events": {}
        }"#,
    );

    let err = load_with_policy(file.path(), HexPolicy::Strict).unwrap_err();
    assert!(matches!(
        err,
        LoadError::InputError(InputError::OddLength)
    ));

    // The default policy truncates the trailing nibble instead.
    let result = load(file.path()).unwrap();
    assert_eq!(result.raw_data.as_slice(), &[0xDE, 0xAD]);
}
