use std::io;

use app_cli::error::Error;
use app_cli::ignore::PathMatcher;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::TemplatePathError { template_dir: "/nope".to_string() };
    assert_eq!(err.to_string(), "Templates directory '/nope' does not exist.");

    let err = Error::TemplateError("non UTF-8 path 'x'".to_string());
    assert_eq!(err.to_string(), "Template error: non UTF-8 path 'x'.");
}

#[test]
fn test_pattern_error_names_the_pattern() {
    let err = PathMatcher::new("(unclosed").unwrap_err();
    assert!(matches!(err, Error::PatternError { .. }));
    assert!(err.to_string().contains("(unclosed"));
}
