//! Unit tests for domain error types

use cfp_domain::Error;

#[test]
fn test_unknown_frontend_message_names_identifier() {
    let error = Error::unknown_frontend("unknown");
    assert_eq!(error.to_string(), "Cache frontend 'unknown' is not recognized");
}

#[test]
fn test_unknown_frontend_error() {
    let error = Error::unknown_frontend("page_cache");
    match error {
        Error::UnknownFrontend { id } => assert_eq!(id, "page_cache"),
        _ => panic!("Expected UnknownFrontend error"),
    }
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Missing backend");
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Missing backend");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert_eq!(error.to_string(), "Configuration error: Missing backend");
}

#[test]
fn test_configuration_error_with_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "cfp.toml");
    let error = Error::configuration_with_source("Failed to read config", io_error);

    let source = std::error::Error::source(&error).expect("source should be kept");
    assert!(source.to_string().contains("cfp.toml"));
}

#[test]
fn test_cache_error() {
    let error = Error::cache("Entry too large");
    match error {
        Error::Cache { message } => assert_eq!(message, "Entry too large"),
        _ => panic!("Expected Cache error"),
    }
}
