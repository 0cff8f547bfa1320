use std::io;
use std::path::PathBuf;

use apigen::error::Error;

#[test]
fn test_io_error_keeps_path() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");

    match Error::io("api.json", io_err) {
        Error::IoError { path, source } => {
            assert_eq!(path, PathBuf::from("api.json"));
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::IndexError("slice bounds out of range [0:6] with length 5".to_string());
    assert_eq!(err.to_string(), "Index error: slice bounds out of range [0:6] with length 5.");

    let err = Error::io("out/api.rs", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert_eq!(err.to_string(), "IO error on 'out/api.rs': denied.");
}

#[test]
fn test_task_error_names_task() {
    let err = Error::TaskError {
        index: 2,
        output: PathBuf::from("web/api.ts"),
        source: Box::new(Error::ConfigError("boom".to_string())),
    };
    assert_eq!(err.to_string(), "Task 2 ('web/api.ts') failed: Configuration error: boom.");
}

#[test]
fn test_format_error_display() {
    let err = Error::FormatError {
        output: PathBuf::from("gen/api.rs"),
        line: 3,
        column: 11,
        message: "expected `:`".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Format error in 'gen/api.rs' at line 3, column 11: expected `:`."
    );
}
