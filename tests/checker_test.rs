// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for wcagcheck

use std::path::Path;
use wcagcheck::report::{generate_report, OutputFormat};
use wcagcheck::scanner;
use wcagcheck::{Checker, CheckerConfig, Severity};

fn default_config() -> CheckerConfig {
    CheckerConfig::default()
}

#[test]
fn test_scan_accessible_fixture() {
    let report = scanner::scan_file(
        Path::new("tests/fixtures/accessible.html"),
        &default_config(),
    )
    .expect("scan should succeed");

    assert!(
        report.result.is_empty(),
        "Accessible fixture should be clean, got: {:?}",
        report.result.all().collect::<Vec<_>>()
    );
}

#[test]
fn test_scan_inaccessible_fixture() {
    let report = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &default_config(),
    )
    .expect("scan should succeed");

    assert!(
        report.result.total() >= 10,
        "Inaccessible fixture should have many violations, got {}",
        report.result.total()
    );
    assert!(report.result.has_errors());

    // Every analyzer finds something on this page.
    for category in [
        "images", "forms", "headings", "contrast", "aria", "links", "keyboard", "language",
    ] {
        assert!(
            report.result.get(category).is_some(),
            "expected violations in category {}",
            category
        );
    }

    // Missing page language is the one critical-level finding.
    assert_eq!(report.result.count_by_severity(Severity::Critical), 1);
}

#[test]
fn test_inaccessible_fixture_key_messages() {
    let report = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &default_config(),
    )
    .unwrap();

    let messages: Vec<&str> = report
        .result
        .all()
        .map(|v| v.message.as_str())
        .collect();

    assert!(messages.contains(&"Image without alt text found"));
    assert!(messages.contains(&"Form input without associated label"));
    assert!(messages.contains(&"No h1 heading found on the page"));
    assert!(messages.contains(&"Invalid ARIA role: 'buton'"));
    assert!(messages.contains(&"Non-descriptive link text: 'click here'"));
    assert!(messages.contains(&"Missing language attribute on html element"));
    assert!(messages
        .iter()
        .any(|m| m.starts_with("Insufficient color contrast ratio:")));
    assert!(messages
        .contains(&"Non-interactive element with click handler is not keyboard accessible"));
}

#[test]
fn test_disabled_checks_drop_categories() {
    let mut config = default_config();
    assert!(config.disable("images"));
    assert!(config.disable("contrast"));

    let report = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &config,
    )
    .unwrap();

    assert!(report.result.get("images").is_none());
    assert!(report.result.get("contrast").is_none());
    assert!(report.result.get("forms").is_some());
}

#[test]
fn test_repeated_scans_are_byte_identical() {
    let config = default_config();
    let path = Path::new("tests/fixtures/inaccessible.html");

    let first = serde_json::to_string(&scanner::scan_file(path, &config).unwrap().result).unwrap();
    let second = serde_json::to_string(&scanner::scan_file(path, &config).unwrap().result).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_scan_fixtures_directory() {
    let reports = scanner::scan_directory(Path::new("tests/fixtures"), &default_config())
        .expect("scan should succeed");

    assert_eq!(reports.len(), 2);
    // sort_by_file_name ordering: accessible before inaccessible
    assert!(reports[0].path.ends_with("accessible.html"));
    assert!(reports[1].path.ends_with("inaccessible.html"));
    assert!(reports[0].result.is_empty());
    assert!(reports[1].result.has_errors());
}

#[test]
fn test_text_report_for_fixture() {
    let report = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &default_config(),
    )
    .unwrap();

    let text = generate_report(&report.result, OutputFormat::Text);
    assert!(text.contains("=== wcagcheck Accessibility Report ==="));
    assert!(text.contains("--- images ("));
    assert!(text.contains("RESULT: FAIL"));
}

#[test]
fn test_json_report_for_fixture() {
    let report = scanner::scan_file(
        Path::new("tests/fixtures/inaccessible.html"),
        &default_config(),
    )
    .unwrap();

    let json = generate_report(&report.result, OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.is_object());
    assert_eq!(value["images"][0]["type"], "error");
    assert_eq!(value["images"][0]["src"], "hero.jpg");
}

#[test]
fn test_checker_api_on_fixture_content() {
    let html = std::fs::read_to_string("tests/fixtures/accessible.html").unwrap();
    let mut checker = Checker::with_defaults();
    assert!(checker.is_accessible(&html).unwrap());
}
