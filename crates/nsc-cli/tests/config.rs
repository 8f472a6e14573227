//! Integration tests for configuration loading.

use std::fs;

use nsc_cli::config::{RequestOverrides, apply_overrides, load_config};
use nsc_cli::logging::{REDACTED_VALUE, redact_value};
use nsc_model::{InquiryType, TrailerCountPolicy};
use tempfile::TempDir;

#[test]
fn test_load_config_reads_school_and_request() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nsc.toml");
    fs::write(
        &path,
        r#"
[school]
fice = "001234"
branch = "00"
name = "Example State University"

[request]
inquiry_type = "PA"
search = "2019-08"
trailer_count = "include-header-and-trailer"
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.school.fice, "001234");
    assert_eq!(config.request.inquiry_type, InquiryType::Pa);
    assert_eq!(config.request.search.as_deref(), Some("2019-08"));
    assert_eq!(
        config.request.trailer_count,
        TrailerCountPolicy::IncludeHeaderAndTrailer
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_request_section_is_optional() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nsc.toml");
    fs::write(
        &path,
        "[school]\nfice = \"001234\"\nbranch = \"00\"\nname = \"Example\"\n",
    )
    .unwrap();

    let mut config = load_config(&path).unwrap();
    assert_eq!(config.request.inquiry_type, InquiryType::Pa);
    assert!(!config.request.enrolled_students);

    apply_overrides(
        &mut config,
        &RequestOverrides {
            enrolled_students: Some(true),
            search: Some("2021".to_string()),
            ..RequestOverrides::default()
        },
    );
    assert!(config.request.enrolled_students);
    assert_eq!(config.request.search.as_deref(), Some("2021"));
}

#[test]
fn test_missing_config_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let error = load_config(&path).unwrap_err();
    assert!(format!("{error:#}").contains("absent.toml"));
}

#[test]
fn test_unknown_inquiry_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nsc.toml");
    fs::write(
        &path,
        "[school]\nfice = \"1\"\nbranch = \"00\"\nname = \"X\"\n[request]\ninquiry_type = \"DA\"\n",
    )
    .unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn test_names_are_redacted_by_default() {
    assert_eq!(redact_value("Jane"), REDACTED_VALUE);
}
